//! Structural and visual analysis of a reference site.

mod features;
mod structure;
mod tokens;

use serde::{Deserialize, Serialize};

pub use features::{
    AdminFeatures, AuthFeatures, BookingFeatures, CommunicationFeatures, ContentFeatures,
    DashboardFeatures, DetectedFeatures, EcommerceFeatures, IntegrationFeatures,
    LocationFeatures, SocialFeatures, SubscriptionFeatures,
};
pub use structure::{
    FooterColumn, FooterLayout, NavItem, PageStructure, Section, SectionType, SiteStructure,
};
pub use tokens::{
    ButtonShape, CardShape, ColorTokens, ComponentShapes, InputShape, TypographyTokens,
    VisualTokens,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Analysis {
    /// Address of the analysed site, informational only.
    pub url: Option<String>,
    pub detected_features: DetectedFeatures,
    pub visual_tokens: VisualTokens,
    pub structure: SiteStructure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_analysis() {
        let analysis: Analysis = serde_json::from_str(
            r##"{
                "url": "https://example.com",
                "detectedFeatures": { "auth": { "login": true } },
                "visualTokens": {
                    "colors": { "primary": "#2563eb" },
                    "typography": { "headingFont": "Poppins" },
                    "components": { "buttons": "pill" },
                    "darkMode": true
                },
                "structure": {
                    "pages": [
                        { "name": "Home", "path": "/", "sections": [{ "type": "hero", "order": 1 }] }
                    ],
                    "navigation": [{ "label": "Pricing", "href": "/pricing" }]
                }
            }"##,
        )
        .unwrap();

        assert!(analysis.detected_features.auth.login);
        assert_eq!(analysis.visual_tokens.colors.primary.as_deref(), Some("#2563eb"));
        assert_eq!(analysis.visual_tokens.components.buttons, ButtonShape::Pill);
        assert!(analysis.visual_tokens.dark_mode());
        assert_eq!(analysis.structure.pages.len(), 1);
        assert!(analysis.structure.footer.is_none());
    }
}
