pub mod analysis;
pub mod composition;
pub mod error;
pub mod generators;
pub mod identifiers;
pub mod manifest;
pub mod output;
pub mod project;
pub mod version;

pub use error::AppError;
pub use identifiers::ManifestId;
pub use manifest::{IntegrationCategory, Manifest, ManifestKind};
pub use project::{GeneratedFile, GeneratedProject, ProjectConfig};
