mod memory_catalog;

#[allow(unused_imports)]
pub use memory_catalog::{
    MemoryCatalog, feature_manifest, integration_manifest, template_manifest, with_env, with_file,
    with_package,
};
