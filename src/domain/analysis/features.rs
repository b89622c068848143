use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthFeatures {
    pub login: bool,
    pub signup: bool,
    pub oauth: bool,
    pub magic_link: bool,
    pub password_reset: bool,
    pub two_factor: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EcommerceFeatures {
    pub cart: bool,
    pub checkout: bool,
    pub product_catalog: bool,
    pub wishlist: bool,
    pub reviews: bool,
    pub inventory: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialFeatures {
    pub comments: bool,
    pub likes: bool,
    pub sharing: bool,
    pub follow: bool,
    pub user_profiles: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentFeatures {
    pub blog: bool,
    pub cms: bool,
    pub search: bool,
    pub categories: bool,
    pub tags: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommunicationFeatures {
    pub contact_form: bool,
    pub newsletter: bool,
    pub live_chat: bool,
    pub notifications: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingFeatures {
    pub calendar: bool,
    pub appointments: bool,
    pub reservations: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubscriptionFeatures {
    pub plans: bool,
    pub billing: bool,
    pub trial: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardFeatures {
    pub analytics: bool,
    pub charts: bool,
    pub reports: bool,
    pub activity_feed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminFeatures {
    pub user_management: bool,
    pub content_moderation: bool,
    pub settings: bool,
    pub audit_log: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationFeatures {
    pub maps: bool,
    pub store_locator: bool,
    pub geolocation: bool,
}

/// Third-party services the reference site appears to use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntegrationFeatures {
    pub payments: bool,
    pub analytics: bool,
    pub crm: bool,
    pub social_login: bool,
}

/// Product capabilities detected on the reference site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectedFeatures {
    pub auth: AuthFeatures,
    pub ecommerce: EcommerceFeatures,
    pub social: SocialFeatures,
    pub content: ContentFeatures,
    pub communication: CommunicationFeatures,
    pub booking: BookingFeatures,
    pub subscription: SubscriptionFeatures,
    pub dashboard: DashboardFeatures,
    pub admin: AdminFeatures,
    pub location: LocationFeatures,
    pub integrations: IntegrationFeatures,
}
