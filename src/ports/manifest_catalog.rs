//! Manifest catalog port definition.

use crate::domain::manifest::{IntegrationCategory, Manifest};

/// Read-only access to base templates, integrations, and features.
///
/// Implementations are populated once and never mutated, so a shared reference
/// can serve any number of concurrent generations.
pub trait ManifestCatalog {
    /// Get a base template by id.
    fn template(&self, id: &str) -> Option<&Manifest>;

    /// Get the provider manifest for an integration category.
    fn integration(&self, category: IntegrationCategory, provider: &str) -> Option<&Manifest>;

    /// Get a feature by id.
    fn feature(&self, id: &str) -> Option<&Manifest>;

    /// List base templates sorted by id.
    fn templates(&self) -> Vec<&Manifest>;

    /// List integrations sorted by category, then provider id.
    fn integrations(&self) -> Vec<&Manifest>;

    /// List features sorted by id.
    fn features(&self) -> Vec<&Manifest>;
}
