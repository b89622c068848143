//! siteforge: compose a web project from a base template, pluggable
//! integrations, optional features, and an analysis of a reference site.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::{EmbeddedManifestCatalog, FilesystemProjectWriter};
use app::AppContext;
use ports::{ManifestCatalog, ProjectWriter};

pub use app::commands::list::{CatalogSection, ManifestDetail, ManifestSummary};
pub use domain::analysis::Analysis;
pub use domain::project::{Branding, GeneratedFile, GeneratedProject, ProjectConfig};
pub use domain::AppError;

/// Generate a project against the embedded catalog.
///
/// Fails only if the embedded catalog cannot be loaded; everything else about
/// the config surfaces as warnings on the result.
pub fn generate(config: &ProjectConfig) -> Result<GeneratedProject, AppError> {
    let catalog = EmbeddedManifestCatalog::shared()?;
    Ok(generate_with(catalog, config))
}

/// Generate a project against any catalog.
pub fn generate_with<C: ManifestCatalog + ?Sized>(
    catalog: &C,
    config: &ProjectConfig,
) -> GeneratedProject {
    let ctx = AppContext::new(catalog);
    app::commands::generate::execute(&ctx, config)
}

/// Read a JSON or YAML project config.
pub fn load_config(path: &Path) -> Result<ProjectConfig, AppError> {
    app::config::load_project_config(path)
}

/// Write a generated project (files, `package.json`, `.env.example`, `README.md`).
///
/// Returns the number of files written.
pub fn write_project(
    project: &GeneratedProject,
    out: &Path,
    force: bool,
) -> Result<usize, AppError> {
    FilesystemProjectWriter::new(out.to_path_buf()).force(force).write(project)
}

// =============================================================================
// Catalog API
// =============================================================================

/// Summaries of one catalog section.
pub fn list(section: CatalogSection) -> Result<Vec<ManifestSummary>, AppError> {
    let catalog = EmbeddedManifestCatalog::shared()?;
    Ok(app::commands::list::execute(catalog, section))
}

/// Details of one entry, addressed as `template/<id>`, `feature/<id>` or `<category>/<id>`.
pub fn manifest_detail(name: &str) -> Result<ManifestDetail, AppError> {
    let catalog = EmbeddedManifestCatalog::shared()?;
    app::commands::list::execute_detail(catalog, name)
}
