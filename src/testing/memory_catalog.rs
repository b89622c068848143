use std::collections::BTreeMap;

use crate::domain::ManifestId;
use crate::domain::manifest::{
    DependencyBlock, EnvVarSpec, FileDescriptor, IntegrationCategory, Manifest, ManifestKind,
};
use crate::domain::version::Version;
use crate::ports::ManifestCatalog;

/// In-memory catalog for unit tests.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    templates: BTreeMap<String, Manifest>,
    integrations: BTreeMap<(IntegrationCategory, String), Manifest>,
    features: BTreeMap<String, Manifest>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, manifest: Manifest) {
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

    pub fn with(mut self, manifest: Manifest) -> Self {
        self.add(manifest);
        self
    }
}

impl ManifestCatalog for MemoryCatalog {
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

fn manifest(kind: ManifestKind, id: &str) -> Manifest {
    Manifest {
        id: ManifestId::new(id).unwrap(),
        kind,
        version: Version::parse("1.0.0").unwrap(),
        description: format!("{} test manifest", id),
        files: Vec::new(),
        dependencies: DependencyBlock::default(),
        post_install: Vec::new(),
        bodies: BTreeMap::new(),
    }
}

pub fn template_manifest(id: &str) -> Manifest {
    manifest(ManifestKind::Template, id)
}

pub fn integration_manifest(
    category: IntegrationCategory,
    id: &str,
    requires: &[&str],
) -> Manifest {
    let mut m = manifest(ManifestKind::Integration(category), id);
    m.dependencies.integrations =
        requires.iter().map(|r| IntegrationCategory::parse(r).unwrap()).collect();
    m
}

pub fn feature_manifest(id: &str, requires: &[&str]) -> Manifest {
    let mut m = manifest(ManifestKind::Feature { group: "test".to_string() }, id);
    m.dependencies.features = requires.iter().map(|r| ManifestId::new(r).unwrap()).collect();
    m
}

/// Add a descriptor and its body.
pub fn with_file(mut m: Manifest, path: &str, body: &str, overwrite: Option<bool>) -> Manifest {
    let template = format!("tpl/{}", path);
    let mut descriptor = FileDescriptor::new(path, &template);
    descriptor.overwrite = overwrite;
    m.files.push(descriptor);
    m.bodies.insert(template, body.to_string());
    m
}

pub fn with_package(mut m: Manifest, name: &str, version: &str) -> Manifest {
    m.dependencies.packages.insert(name.to_string(), version.to_string());
    m
}

pub fn with_env(mut m: Manifest, name: &str, description: &str) -> Manifest {
    m.dependencies.env.push(EnvVarSpec::new(name, description));
    m
}
