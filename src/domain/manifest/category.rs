use std::fmt;

use serde::{Deserialize, Serialize};

/// Integration slot a provider fills. A project selects at most one provider per category.
///
/// Declaration order is the order integrations are merged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationCategory {
    Auth,
    Database,
    Payments,
    Email,
    Analytics,
    Storage,
    Cms,
}

impl IntegrationCategory {
    pub const ALL: [IntegrationCategory; 7] = [
        IntegrationCategory::Auth,
        IntegrationCategory::Database,
        IntegrationCategory::Payments,
        IntegrationCategory::Email,
        IntegrationCategory::Analytics,
        IntegrationCategory::Storage,
        IntegrationCategory::Cms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationCategory::Auth => "auth",
            IntegrationCategory::Database => "database",
            IntegrationCategory::Payments => "payments",
            IntegrationCategory::Email => "email",
            IntegrationCategory::Analytics => "analytics",
            IntegrationCategory::Storage => "storage",
            IntegrationCategory::Cms => "cms",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for IntegrationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
