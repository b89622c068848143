mod embedded_manifest_catalog;

pub use embedded_manifest_catalog::EmbeddedManifestCatalog;
