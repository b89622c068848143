//! Manifest catalog embedded in the binary at build time.
//!
//! Layout under `src/assets/catalog`:
//!
//! ```text
//! templates/<id>/manifest.toml
//! integrations/<category>/<provider>/manifest.toml
//! features/<id>/manifest.toml
//! ```
//!
//! Each entry directory may carry a `templates/` tree; its files become the
//! bodies referenced by the manifest's file descriptors.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::identifiers::validation::validate_relative_path;
use crate::domain::manifest::{
    DependencyBlock, FileDescriptor, IntegrationCategory, Manifest, ManifestKind,
};
use crate::domain::version::Version;
use crate::domain::{AppError, ManifestId};
use crate::ports::ManifestCatalog;

static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

static SHARED: OnceLock<Result<EmbeddedManifestCatalog, String>> = OnceLock::new();

const MANIFEST_FILE: &str = "manifest.toml";
const BODIES_DIR: &str = "templates";

/// On-disk shape of `manifest.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestDocument {
    /// Defaults to the directory name.
    id: Option<String>,
    version: String,
    #[serde(default)]
    description: String,
    /// Informational grouping for features.
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    files: Vec<FileDescriptor>,
    #[serde(default)]
    dependencies: DependencyBlock,
    #[serde(default)]
    post_install: Vec<String>,
}

enum EntryKind {
    Template,
    Integration(IntegrationCategory),
    Feature,
}

/// Catalog backed by the embedded asset tree.
#[derive(Debug)]
pub struct EmbeddedManifestCatalog {
    templates: BTreeMap<String, Manifest>,
    integrations: BTreeMap<(IntegrationCategory, String), Manifest>,
    features: BTreeMap<String, Manifest>,
}

impl EmbeddedManifestCatalog {
    /// Parse every embedded manifest.
    pub fn load() -> Result<Self, AppError> {
        Self::from_dir(&CATALOG_DIR)
    }

    /// Process-wide catalog, loaded on first use and never mutated.
    pub fn shared() -> Result<&'static Self, AppError> {
        SHARED
            .get_or_init(|| Self::load().map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|reason| AppError::config_error(reason.clone()))
    }

    fn from_dir(root: &Dir<'_>) -> Result<Self, AppError> {
        let mut catalog = Self {
            templates: BTreeMap::new(),
            integrations: BTreeMap::new(),
            features: BTreeMap::new(),
        };

        if let Some(templates) = root.get_dir("templates") {
            for entry in templates.dirs() {
                catalog.insert(load_entry(entry, EntryKind::Template)?);
            }
        }

        if let Some(integrations) = root.get_dir("integrations") {
            for category_dir in integrations.dirs() {
                let name = dir_name(category_dir);
                let category = IntegrationCategory::parse(name).ok_or_else(|| {
                    AppError::InvalidManifest {
                        manifest: format!("integrations/{}", name),
                        reason: format!("unknown integration category '{}'", name),
                    }
                })?;
                for entry in category_dir.dirs() {
                    catalog.insert(load_entry(entry, EntryKind::Integration(category))?);
                }
            }
        }

        if let Some(features) = root.get_dir("features") {
            for entry in features.dirs() {
                catalog.insert(load_entry(entry, EntryKind::Feature)?);
            }
        }

        tracing::debug!(
            templates = catalog.templates.len(),
            integrations = catalog.integrations.len(),
            features = catalog.features.len(),
            "Loaded embedded manifest catalog"
        );
        Ok(catalog)
    }

    fn insert(&mut self, manifest: Manifest) {
        let id = manifest.id.to_string();
        match manifest.kind {
            ManifestKind::Template => {
                self.templates.insert(id, manifest);
            }
            ManifestKind::Integration(category) => {
                self.integrations.insert((category, id), manifest);
            }
            ManifestKind::Feature { .. } => {
                self.features.insert(id, manifest);
            }
        }
    }
}

fn dir_name<'a>(dir: &'a Dir<'_>) -> &'a str {
    dir.path().file_name().and_then(|n| n.to_str()).unwrap_or("")
}

fn load_entry(entry: &Dir<'_>, kind: EntryKind) -> Result<Manifest, AppError> {
    let label = entry.path().display().to_string();
    let invalid = |reason: String| AppError::InvalidManifest { manifest: label.clone(), reason };

    let manifest_file = entry
        .get_file(entry.path().join(MANIFEST_FILE))
        .ok_or_else(|| invalid(format!("missing {}", MANIFEST_FILE)))?;
    let content = manifest_file
        .contents_utf8()
        .ok_or_else(|| invalid(format!("{} is not valid UTF-8", MANIFEST_FILE)))?;
    let document: ManifestDocument =
        toml::from_str(content).map_err(|e| invalid(e.to_string()))?;

    let raw_id = document.id.clone().unwrap_or_else(|| dir_name(entry).to_string());
    let id = ManifestId::new(&raw_id).map_err(|e| invalid(e.to_string()))?;
    let version = Version::parse(&document.version)
        .ok_or_else(|| invalid(format!("invalid version '{}'", document.version)))?;

    for descriptor in &document.files {
        if !validate_relative_path(&descriptor.path) {
            return Err(invalid(format!("unsafe file path '{}'", descriptor.path)));
        }
    }

    let kind = match kind {
        EntryKind::Template => ManifestKind::Template,
        EntryKind::Integration(category) => ManifestKind::Integration(category),
        EntryKind::Feature => ManifestKind::Feature {
            group: document.group.clone().unwrap_or_else(|| "general".to_string()),
        },
    };
    if !matches!(kind, ManifestKind::Feature { .. })
        && !document.dependencies.features.is_empty()
    {
        return Err(invalid("only features may depend on other features".to_string()));
    }

    let mut bodies = BTreeMap::new();
    if let Some(bodies_dir) = entry.get_dir(entry.path().join(BODIES_DIR)) {
        collect_bodies(bodies_dir, bodies_dir, &mut bodies, &label)?;
    }

    Ok(Manifest {
        id,
        kind,
        version,
        description: document.description,
        files: document.files,
        dependencies: document.dependencies,
        post_install: document.post_install,
        bodies,
    })
}

fn collect_bodies(
    root: &Dir<'_>,
    dir: &Dir<'_>,
    bodies: &mut BTreeMap<String, String>,
    label: &str,
) -> Result<(), AppError> {
    for file in dir.files() {
        let relative = file.path().strip_prefix(root.path()).unwrap_or(file.path());
        let key = relative.to_string_lossy().replace('\\', "/");
        let content = file.contents_utf8().ok_or_else(|| AppError::InvalidManifest {
            manifest: label.to_string(),
            reason: format!("template '{}' is not valid UTF-8", key),
        })?;
        bodies.insert(key, content.to_string());
    }
    for child in dir.dirs() {
        collect_bodies(root, child, bodies, label)?;
    }
    Ok(())
}

impl ManifestCatalog for EmbeddedManifestCatalog {
    fn template(&self, id: &str) -> Option<&Manifest> {
        self.templates.get(id)
    }

    fn integration(&self, category: IntegrationCategory, provider: &str) -> Option<&Manifest> {
        self.integrations.get(&(category, provider.to_string()))
    }

    fn feature(&self, id: &str) -> Option<&Manifest> {
        self.features.get(id)
    }

    fn templates(&self) -> Vec<&Manifest> {
        self.templates.values().collect()
    }

    fn integrations(&self) -> Vec<&Manifest> {
        self.integrations.values().collect()
    }

    fn features(&self) -> Vec<&Manifest> {
        self.features.values().collect()
    }
}
