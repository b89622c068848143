use std::collections::BTreeMap;

use crate::domain::generators::naming::slugify;
use crate::domain::project::{PackageManifest, ProjectConfig};

/// Version every generated project starts at.
pub const INITIAL_VERSION: &str = "0.1.0";

const FALLBACK_PACKAGE_NAME: &str = "app";

const SCRIPTS: [(&str, &str); 4] =
    [("dev", "next dev"), ("build", "next build"), ("start", "next start"), ("lint", "next lint")];

/// npm package name for a project name.
pub fn package_name(project_name: &str) -> String {
    let slug = slugify(project_name);
    if slug.is_empty() { FALLBACK_PACKAGE_NAME.to_string() } else { slug }
}

pub fn build_package_manifest(
    config: &ProjectConfig,
    dependencies: BTreeMap<String, String>,
    dev_dependencies: BTreeMap<String, String>,
) -> PackageManifest {
    PackageManifest {
        name: package_name(&config.project_name),
        version: INITIAL_VERSION.to_string(),
        private: true,
        description: config.description.clone(),
        scripts: SCRIPTS.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        dependencies,
        dev_dependencies,
    }
}
