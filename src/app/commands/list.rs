//! List command: browse the manifest catalog.

use std::fmt;

use crate::domain::AppError;
use crate::domain::manifest::{EnvVarSpec, IntegrationCategory, Manifest, ManifestKind};
use crate::ports::ManifestCatalog;

/// Catalog section to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSection {
    Templates,
    Integrations,
    Features,
}

impl CatalogSection {
    pub const ALL: [CatalogSection; 3] =
        [CatalogSection::Templates, CatalogSection::Integrations, CatalogSection::Features];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogSection::Templates => "templates",
            CatalogSection::Integrations => "integrations",
            CatalogSection::Features => "features",
        }
    }
}

impl fmt::Display for CatalogSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSummary {
    /// `template/nextjs`, `payments/stripe`, `feature/blog`.
    pub name: String,
    pub version: String,
    pub description: String,
}

/// Full view of one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDetail {
    pub name: String,
    pub version: String,
    pub description: String,
    pub files: Vec<String>,
    pub packages: Vec<(String, String)>,
    pub dev_packages: Vec<(String, String)>,
    pub env: Vec<EnvVarSpec>,
    pub requires: Vec<String>,
    pub post_install: Vec<String>,
}

fn summarize(manifest: &Manifest) -> ManifestSummary {
    ManifestSummary {
        name: manifest.qualified_name(),
        version: manifest.version.to_string(),
        description: manifest.description.clone(),
    }
}

pub fn execute<C: ManifestCatalog + ?Sized>(
    catalog: &C,
    section: CatalogSection,
) -> Vec<ManifestSummary> {
    let manifests = match section {
        CatalogSection::Templates => catalog.templates(),
        CatalogSection::Integrations => catalog.integrations(),
        CatalogSection::Features => catalog.features(),
    };
    manifests.into_iter().map(summarize).collect()
}

/// Look up `template/<id>`, `feature/<id>`, or `<category>/<provider>`.
pub fn execute_detail<C: ManifestCatalog + ?Sized>(
    catalog: &C,
    qualified: &str,
) -> Result<ManifestDetail, AppError> {
    let (prefix, id) = qualified.split_once('/').unwrap_or(("", qualified));
    let manifest = match prefix {
        "template" => catalog.template(id),
        "feature" => catalog.feature(id),
        other => IntegrationCategory::parse(other)
            .and_then(|category| catalog.integration(category, id)),
    };

    let manifest = manifest.ok_or_else(|| AppError::ManifestNotFound {
        name: qualified.to_string(),
        available: all_names(catalog).join(", "),
    })?;

    let mut requires: Vec<String> =
        manifest.required_integrations().iter().map(|c| c.to_string()).collect();
    if let ManifestKind::Feature { .. } = manifest.kind {
        requires.extend(manifest.required_features().iter().map(|f| format!("feature/{}", f)));
    }

    Ok(ManifestDetail {
        name: manifest.qualified_name(),
        version: manifest.version.to_string(),
        description: manifest.description.clone(),
        files: manifest.files.iter().map(|f| f.path.clone()).collect(),
        packages: pairs(&manifest.dependencies.packages),
        dev_packages: pairs(&manifest.dependencies.dev_packages),
        env: manifest.dependencies.env.clone(),
        requires,
        post_install: manifest.post_install.clone(),
    })
}

fn pairs(map: &std::collections::BTreeMap<String, String>) -> Vec<(String, String)> {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

fn all_names<C: ManifestCatalog + ?Sized>(catalog: &C) -> Vec<String> {
    CatalogSection::ALL
        .iter()
        .flat_map(|section| execute(catalog, *section))
        .map(|summary| summary.name)
        .collect()
}
