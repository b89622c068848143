use std::collections::BTreeMap;

use serde::Serialize;

/// One file of the generated source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Unique key within one generation.
    pub path: String,
    pub content: String,
    /// Only consulted while merging.
    #[serde(skip)]
    pub overwrite: bool,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>, overwrite: bool) -> Self {
        Self { path: path.into(), content: content.into(), overwrite }
    }

    /// File that replaces whatever an earlier source produced.
    pub fn replacing(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, true)
    }

    /// File that only fills a gap left by earlier sources.
    pub fn preserving(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, false)
    }
}

/// Dependency manifest (`package.json`) of the generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub scripts: BTreeMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

/// Terminal output of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProject {
    pub files: Vec<GeneratedFile>,
    pub package_json: PackageManifest,
    pub env_template: String,
    pub readme: String,
    pub setup_instructions: Vec<String>,
    pub warnings: Vec<String>,
}

impl GeneratedProject {
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|file| file.path == path)
    }

    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|file| file.path.as_str()).collect()
    }
}
