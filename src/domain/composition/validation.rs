//! Advisory cross-manifest checks. Nothing here blocks generation.

use crate::domain::manifest::{IntegrationCategory, Manifest};

/// Warn for every required integration category that is not selected.
///
/// Applies to integration and feature manifests alike.
pub fn check_required_integrations(
    manifests: &[&Manifest],
    selected: &[IntegrationCategory],
) -> Vec<String> {
    let mut warnings = Vec::new();
    for manifest in manifests {
        for required in manifest.required_integrations() {
            if !selected.contains(required) {
                warnings.push(format!(
                    "'{}' requires a '{}' integration, but no {} provider is selected",
                    manifest.qualified_name(),
                    required,
                    required
                ));
            }
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::integration_manifest;

    #[test]
    fn unmet_requirement_names_provider_and_category() {
        let stripe = integration_manifest(IntegrationCategory::Payments, "stripe", &["auth"]);

        let warnings = check_required_integrations(&[&stripe], &[IntegrationCategory::Payments]);

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("payments/stripe"));
        assert!(warnings[0].contains("requires a 'auth' integration"));
    }

    #[test]
    fn satisfied_requirement_is_silent() {
        let stripe = integration_manifest(IntegrationCategory::Payments, "stripe", &["auth"]);
        let clerk = integration_manifest(IntegrationCategory::Auth, "clerk", &[]);

        let warnings = check_required_integrations(
            &[&clerk, &stripe],
            &[IntegrationCategory::Auth, IntegrationCategory::Payments],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn each_missing_category_is_reported() {
        let cms = integration_manifest(IntegrationCategory::Cms, "sanity", &["auth", "storage"]);

        let warnings = check_required_integrations(&[&cms], &[IntegrationCategory::Cms]);

        assert_eq!(warnings.len(), 2);
    }
}
