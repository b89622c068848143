//! Generate command: runs the full composition pipeline for one config.

use tracing::{debug, warn};

use crate::app::AppContext;
use crate::app::services::{SubstitutionContext, contribution};
use crate::domain::composition::{
    FeatureGraph, ProjectMerger, apply_branding, check_required_integrations,
};
use crate::domain::generators::AnalysisOutput;
use crate::domain::manifest::{IntegrationCategory, Manifest};
use crate::domain::output::{AnalysisSummary, AssemblyInput, assemble};
use crate::domain::project::{DEFAULT_TEMPLATE, GeneratedProject, ProjectConfig};
use crate::ports::ManifestCatalog;

/// Compose a project. Never fails: every problem becomes a warning on the result.
///
/// Stages: base template, integrations (category order), features (resolved
/// order), analysis output; then merge, branding, validation, and assembly.
pub fn execute<C>(ctx: &AppContext<'_, C>, config: &ProjectConfig) -> GeneratedProject
where
    C: ManifestCatalog + ?Sized,
{
    let catalog = ctx.catalog();
    let mut warnings = Vec::new();
    let substitution = SubstitutionContext { project_name: &config.project_name };

    let template = resolve_template(catalog, &config.template, &mut warnings);

    let selection = config.integration_selection();
    for category in &selection.unknown_categories {
        warn!(category = %category, "unknown integration category skipped");
        warnings.push(format!("Unknown integration category '{}' was skipped", category));
    }
    for duplicate in &selection.duplicates {
        warn!(
            category = %duplicate.category,
            provider = %duplicate.dropped,
            "duplicate integration skipped"
        );
        warnings.push(format!(
            "Only one {} provider can be selected; '{}' was skipped in favour of '{}'",
            duplicate.category, duplicate.dropped, duplicate.kept
        ));
    }
    let selected_categories: Vec<IntegrationCategory> =
        selection.selected.iter().map(|(category, _)| *category).collect();

    let mut integrations: Vec<&Manifest> = Vec::new();
    for (category, provider) in &selection.selected {
        match catalog.integration(*category, provider) {
            Some(manifest) => integrations.push(manifest),
            None => {
                warn!(%category, provider = %provider, "unknown integration provider skipped");
                warnings.push(format!(
                    "Unknown {} provider '{}' was skipped",
                    category, provider
                ));
            }
        }
    }

    let features = FeatureGraph::resolve(&config.features, catalog);

    let analysis = config
        .website_analysis
        .as_ref()
        .map(|analysis| AnalysisOutput::generate(analysis, config));
    let summary = analysis.as_ref().map(AnalysisSummary::of);
    let analysis_warnings =
        analysis.as_ref().map(|output| output.warnings.clone()).unwrap_or_default();

    let mut merger = ProjectMerger::new();
    if let Some(template) = template {
        merger.absorb(contribution(template, &substitution));
    }
    for manifest in integrations.iter().chain(features.ordered.iter()) {
        merger.absorb(contribution(manifest, &substitution));
    }
    if let Some(output) = analysis {
        merger.absorb(output.into_contribution());
    }
    let mut merged = merger.finish();
    debug!(files = merged.files.len(), "Merged sources");

    apply_branding(&mut merged.files, config);

    warnings.extend(check_required_integrations(&integrations, &selected_categories));
    warnings.extend(features.warnings.iter().cloned());
    warnings.extend(check_required_integrations(&features.ordered, &selected_categories));
    warnings.extend(analysis_warnings);

    let template_id = template.map(|t| t.id.to_string()).unwrap_or_default();
    assemble(
        merged,
        AssemblyInput {
            config,
            template: &template_id,
            integrations: &integrations,
            features: &features.ordered,
            analysis: summary,
            warnings,
        },
    )
}

fn resolve_template<'a, C>(
    catalog: &'a C,
    requested: &str,
    warnings: &mut Vec<String>,
) -> Option<&'a Manifest>
where
    C: ManifestCatalog + ?Sized,
{
    let requested = requested.trim();
    if let Some(template) = catalog.template(requested) {
        return Some(template);
    }

    if !requested.is_empty() {
        warn!(template = %requested, "unknown base template, using default");
        warnings.push(format!(
            "Unknown base template '{}'; using '{}' instead",
            requested, DEFAULT_TEMPLATE
        ));
    }
    let fallback = catalog.template(DEFAULT_TEMPLATE);
    if fallback.is_none() {
        warnings.push(format!("Default base template '{}' is not available", DEFAULT_TEMPLATE));
    }
    fallback
}
