pub mod catalogs;
pub mod project_filesystem;

pub use catalogs::EmbeddedManifestCatalog;
pub use project_filesystem::FilesystemProjectWriter;
