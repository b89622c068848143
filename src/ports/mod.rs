mod manifest_catalog;
mod project_writer;

pub use manifest_catalog::ManifestCatalog;
pub use project_writer::ProjectWriter;
