//! Manifest domain model: declarative descriptions of base templates,
//! integrations, and features.

mod category;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ManifestId;
use crate::domain::version::Version;

pub use category::IntegrationCategory;

/// How a descriptor's template body is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileTransform {
    /// Body is copied verbatim.
    #[default]
    None,
    /// Body carries branding tokens; replaced by the branding pass after merge.
    Tokens,
}

/// One file a manifest contributes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileDescriptor {
    /// Destination path relative to the project root.
    pub path: String,
    /// Reference to a template body inside the manifest's `templates/` tree.
    pub template: String,
    #[serde(default)]
    pub transform: Option<FileTransform>,
    #[serde(default)]
    pub overwrite: Option<bool>,
}

impl FileDescriptor {
    pub fn new(path: &str, template: &str) -> Self {
        Self {
            path: path.to_string(),
            template: template.to_string(),
            transform: None,
            overwrite: None,
        }
    }

    /// Overwrite flag, defaulting to `true` when the manifest leaves it out.
    pub fn overwrite(&self) -> bool {
        self.overwrite.unwrap_or(true)
    }

    pub fn transform(&self) -> FileTransform {
        self.transform.unwrap_or_default()
    }
}

/// Environment variable a manifest needs at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVarSpec {
    /// Variable name.
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Whether the application refuses to start without it.
    #[serde(default)]
    pub required: bool,
    /// Example value for the environment template.
    #[serde(default)]
    pub example: Option<String>,
    /// Whether the value is exposed to browser code.
    #[serde(default)]
    pub public: bool,
}

impl EnvVarSpec {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            required: false,
            example: None,
            public: false,
        }
    }
}

/// Packages, environment, and cross-manifest requirements of a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct DependencyBlock {
    /// Runtime packages (name -> version range).
    #[serde(default)]
    pub packages: BTreeMap<String, String>,
    /// Development-only packages.
    #[serde(default)]
    pub dev_packages: BTreeMap<String, String>,
    #[serde(default)]
    pub env: Vec<EnvVarSpec>,
    /// Integration categories that must also be selected.
    #[serde(default)]
    pub integrations: Vec<IntegrationCategory>,
    /// Feature ids that must also be selected (feature manifests only).
    #[serde(default)]
    pub features: Vec<ManifestId>,
}

/// What a manifest plugs into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestKind {
    /// Base project skeleton.
    Template,
    /// Provider for one integration category.
    Integration(IntegrationCategory),
    /// Optional feature; the group is informational only.
    Feature { group: String },
}

impl ManifestKind {
    pub fn label(&self) -> &str {
        match self {
            ManifestKind::Template => "template",
            ManifestKind::Integration(category) => category.as_str(),
            ManifestKind::Feature { group } => group,
        }
    }
}

/// A catalog entry: files, dependencies, and notes contributed by one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub id: ManifestId,
    pub kind: ManifestKind,
    pub version: Version,
    pub description: String,
    pub files: Vec<FileDescriptor>,
    pub dependencies: DependencyBlock,
    /// Human instructions shown after generation.
    pub post_install: Vec<String>,
    /// Template bodies keyed by the reference used in `FileDescriptor::template`.
    pub bodies: BTreeMap<String, String>,
}

impl Manifest {
    /// Qualified name used in diagnostics (`payments/stripe`, `feature/blog`).
    pub fn qualified_name(&self) -> String {
        match &self.kind {
            ManifestKind::Template => format!("template/{}", self.id),
            ManifestKind::Integration(category) => format!("{}/{}", category, self.id),
            ManifestKind::Feature { .. } => format!("feature/{}", self.id),
        }
    }

    pub fn body(&self, template_ref: &str) -> Option<&str> {
        self.bodies.get(template_ref).map(String::as_str)
    }

    pub fn required_integrations(&self) -> &[IntegrationCategory] {
        &self.dependencies.integrations
    }

    pub fn required_features(&self) -> &[ManifestId] {
        &self.dependencies.features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_overwrite_defaults_to_true() {
        let descriptor: FileDescriptor =
            toml::from_str("path = \"lib/stripe.ts\"\ntemplate = \"stripe.ts\"").unwrap();
        assert!(descriptor.overwrite());
        assert_eq!(descriptor.transform(), FileTransform::None);
    }

    #[test]
    fn descriptor_respects_explicit_flags() {
        let descriptor: FileDescriptor = toml::from_str(
            "path = \"app/page.tsx\"\ntemplate = \"page.tsx\"\ntransform = \"tokens\"\noverwrite = false",
        )
        .unwrap();
        assert!(!descriptor.overwrite());
        assert_eq!(descriptor.transform(), FileTransform::Tokens);
    }

    #[test]
    fn dependency_block_parses_env_and_requirements() {
        let block: DependencyBlock = toml::from_str(
            r#"
integrations = ["auth"]

[packages]
stripe = "^14.0.0"

[[env]]
name = "STRIPE_SECRET_KEY"
description = "Server-side API key"
required = true
example = "sk_test_123"
"#,
        )
        .unwrap();

        assert_eq!(block.packages.get("stripe").map(String::as_str), Some("^14.0.0"));
        assert_eq!(block.integrations, vec![IntegrationCategory::Auth]);
        assert_eq!(block.env.len(), 1);
        assert!(block.env[0].required);
        assert!(!block.env[0].public);
    }
}
