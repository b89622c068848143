use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::AppError;
use crate::domain::manifest::{EnvVarSpec, Manifest};
use crate::domain::project::ProjectConfig;

const README_TEMPLATE: &str = include_str!("../../assets/readme.md.j2");

#[derive(Debug, Serialize)]
struct ManifestEntry {
    category: String,
    id: String,
    description: String,
}

impl ManifestEntry {
    fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            category: manifest.kind.label().to_string(),
            id: manifest.id.to_string(),
            description: manifest.description.clone(),
        }
    }
}

/// Inputs of the README render.
pub struct ReadmeInput<'a> {
    pub config: &'a ProjectConfig,
    pub template: &'a str,
    pub integrations: &'a [&'a Manifest],
    pub features: &'a [&'a Manifest],
    pub env: &'a [EnvVarSpec],
    pub setup: &'a [String],
}

pub fn render_readme(input: &ReadmeInput<'_>) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template("readme", README_TEMPLATE)
        .map_err(|e| AppError::TemplateRender(e.to_string()))?;

    let integrations: Vec<ManifestEntry> =
        input.integrations.iter().map(|m| ManifestEntry::from_manifest(m)).collect();
    let features: Vec<ManifestEntry> =
        input.features.iter().map(|m| ManifestEntry::from_manifest(m)).collect();

    let template = env.get_template("readme").map_err(|e| AppError::TemplateRender(e.to_string()))?;
    template
        .render(context! {
            project_name => input.config.project_name,
            description => input.config.description,
            template => input.template,
            integrations => integrations,
            features => features,
            env => input.env,
            setup => input.setup,
        })
        .map_err(|e| AppError::TemplateRender(e.to_string()))
}

/// Render the README, degrading to a title-only document if rendering fails.
pub fn render_readme_or_fallback(input: &ReadmeInput<'_>) -> String {
    render_readme(input).unwrap_or_else(|err| {
        tracing::warn!("README render failed: {}", err);
        format!("# {}\n\n{}\n", input.config.project_name, input.config.description)
    })
}
