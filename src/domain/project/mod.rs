//! Project request and result records.

mod config;
mod generated;

pub use config::{
    Branding, DEFAULT_TEMPLATE, DuplicateSelection, IntegrationSelection, ProjectConfig,
};
pub use generated::{GeneratedFile, GeneratedProject, PackageManifest};
