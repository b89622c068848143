use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::analysis::Analysis;
use crate::domain::manifest::IntegrationCategory;

/// Base template used when a config does not name one.
pub const DEFAULT_TEMPLATE: &str = "nextjs";

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

/// Project colors and typography chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub primary_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl Branding {
    pub fn new(primary_color: &str) -> Self {
        Self {
            primary_color: primary_color.to_string(),
            secondary_color: None,
            background_color: None,
            text_color: None,
            font_family: None,
        }
    }
}

/// One generation request. Immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub project_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_template")]
    pub template: String,
    pub branding: Branding,
    /// Integration category -> provider id. Empty provider ids mean "not selected".
    #[serde(default)]
    pub integrations: BTreeMap<String, String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_analysis: Option<Analysis>,
}

/// Integration selections split into recognised and unrecognised categories.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntegrationSelection<'a> {
    /// Recognised selections in merge order.
    pub selected: Vec<(IntegrationCategory, &'a str)>,
    /// Category keys that do not name a known category.
    pub unknown_categories: Vec<&'a str>,
    /// Further providers for an already selected category (`Auth` next to `auth`).
    pub duplicates: Vec<DuplicateSelection<'a>>,
}

/// A provider dropped because its category already had one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSelection<'a> {
    pub category: IntegrationCategory,
    pub kept: &'a str,
    pub dropped: &'a str,
}

impl ProjectConfig {
    pub fn new(project_name: &str, branding: Branding) -> Self {
        Self {
            project_name: project_name.to_string(),
            description: String::new(),
            template: default_template(),
            branding,
            integrations: BTreeMap::new(),
            features: Vec::new(),
            website_analysis: None,
        }
    }

    pub fn with_integration(mut self, category: &str, provider: &str) -> Self {
        self.integrations.insert(category.to_string(), provider.to_string());
        self
    }

    pub fn with_features(mut self, features: &[&str]) -> Self {
        self.features = features.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_analysis(mut self, analysis: Analysis) -> Self {
        self.website_analysis = Some(analysis);
        self
    }

    /// Resolve the raw integration map into typed selections, ordered by category.
    ///
    /// Category keys match case-insensitively; when several keys name the same
    /// category, the first key in map order wins and the rest are reported as duplicates.
    pub fn integration_selection(&self) -> IntegrationSelection<'_> {
        let mut selection = IntegrationSelection::default();
        for (key, provider) in &self.integrations {
            let provider = provider.trim();
            if provider.is_empty() {
                continue;
            }
            let Some(category) = IntegrationCategory::parse(key) else {
                selection.unknown_categories.push(key.as_str());
                continue;
            };
            let existing = selection
                .selected
                .iter()
                .find(|(selected, _)| *selected == category)
                .map(|(_, kept)| *kept);
            match existing {
                Some(kept) => selection.duplicates.push(DuplicateSelection {
                    category,
                    kept,
                    dropped: provider,
                }),
                None => selection.selected.push((category, provider)),
            }
        }
        selection.selected.sort_by_key(|(category, _)| *category);
        selection
    }

    pub fn has_integration(&self, category: IntegrationCategory) -> bool {
        self.integration_selection().selected.iter().any(|(selected, _)| *selected == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_config() {
        let config: ProjectConfig = serde_json::from_str(
            r##"{
                "projectName": "Acme Store",
                "branding": { "primaryColor": "#F97316", "fontFamily": "Inter" },
                "integrations": { "payments": "stripe", "auth": "" },
                "features": ["blog"]
            }"##,
        )
        .unwrap();

        assert_eq!(config.project_name, "Acme Store");
        assert_eq!(config.template, DEFAULT_TEMPLATE);
        assert_eq!(config.branding.font_family.as_deref(), Some("Inter"));
        assert!(config.branding.secondary_color.is_none());
        assert!(config.website_analysis.is_none());
        assert!(config.has_integration(IntegrationCategory::Payments));
        assert!(!config.has_integration(IntegrationCategory::Auth));
    }

    #[test]
    fn integration_selection_is_ordered_by_category() {
        let config = ProjectConfig::new("x", Branding::new("#000000"))
            .with_integration("email", "resend")
            .with_integration("Auth", "clerk")
            .with_integration("crm", "hubspot");

        let selection = config.integration_selection();
        assert_eq!(
            selection.selected,
            vec![(IntegrationCategory::Auth, "clerk"), (IntegrationCategory::Email, "resend")]
        );
        assert_eq!(selection.unknown_categories, vec!["crm"]);
    }

    #[test]
    fn one_provider_per_category() {
        let config = ProjectConfig::new("x", Branding::new("#000000"))
            .with_integration("auth", "clerk")
            .with_integration("Auth", "supabase-auth")
            .with_integration("AUTH", "clerk");

        let selection = config.integration_selection();

        assert_eq!(selection.selected, vec![(IntegrationCategory::Auth, "clerk")]);
        assert_eq!(selection.duplicates.len(), 2);
        assert!(selection.duplicates.iter().all(|d| d.kept == "clerk"));
        assert!(selection.duplicates.iter().any(|d| d.dropped == "supabase-auth"));
    }
}
