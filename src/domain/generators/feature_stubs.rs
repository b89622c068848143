//! Best-effort scaffolding for product features detected on the reference site.
//!
//! Every set flag maps to a fixed list of paths. Each path is classified by an
//! ordered list of predicates and receives the matching skeleton. Files never
//! replace existing entries.

use crate::domain::analysis::DetectedFeatures;
use crate::domain::generators::naming::{camel_case, pascal_case};
use crate::domain::project::GeneratedFile;

/// Skeleton families, in dispatch priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubKind {
    Page,
    ApiRoute,
    Hook,
    Library,
    Component,
}

type Predicate = fn(&str) -> bool;

/// Evaluated top to bottom; the first match wins. `Component` matches everything.
const CLASSIFIERS: [(StubKind, Predicate); 5] = [
    (StubKind::Page, is_page),
    (StubKind::ApiRoute, is_api_route),
    (StubKind::Hook, is_hook),
    (StubKind::Library, is_library),
    (StubKind::Component, any_path),
];

fn is_page(path: &str) -> bool {
    path.starts_with("app/") && !path.starts_with("app/api/") && path.ends_with("/page.tsx")
}

fn is_api_route(path: &str) -> bool {
    path.starts_with("app/api/") && path.ends_with("/route.ts")
}

fn is_hook(path: &str) -> bool {
    path.starts_with("hooks/use")
}

fn is_library(path: &str) -> bool {
    path.starts_with("lib/")
}

fn any_path(_: &str) -> bool {
    true
}

pub fn classify(path: &str) -> StubKind {
    CLASSIFIERS
        .iter()
        .find(|(_, matches)| matches(path))
        .map(|(kind, _)| *kind)
        .unwrap_or(StubKind::Component)
}

struct FeatureRule {
    flag: &'static str,
    enabled: fn(&DetectedFeatures) -> bool,
    paths: &'static [&'static str],
}

const FEATURE_RULES: &[FeatureRule] = &[
    FeatureRule {
        flag: "auth.login",
        enabled: |f| f.auth.login,
        paths: &["app/login/page.tsx", "components/auth/login-form.tsx"],
    },
    FeatureRule {
        flag: "auth.signup",
        enabled: |f| f.auth.signup,
        paths: &["app/signup/page.tsx", "components/auth/signup-form.tsx"],
    },
    FeatureRule {
        flag: "auth.oauth",
        enabled: |f| f.auth.oauth,
        paths: &["components/auth/oauth-buttons.tsx"],
    },
    FeatureRule {
        flag: "auth.magicLink",
        enabled: |f| f.auth.magic_link,
        paths: &["components/auth/magic-link-form.tsx", "app/api/auth/magic-link/route.ts"],
    },
    FeatureRule {
        flag: "auth.passwordReset",
        enabled: |f| f.auth.password_reset,
        paths: &["app/reset-password/page.tsx", "components/auth/reset-password-form.tsx"],
    },
    FeatureRule {
        flag: "auth.twoFactor",
        enabled: |f| f.auth.two_factor,
        paths: &["components/auth/two-factor-form.tsx", "lib/two-factor.ts"],
    },
    FeatureRule {
        flag: "ecommerce.cart",
        enabled: |f| f.ecommerce.cart,
        paths: &["components/cart/cart-drawer.tsx", "hooks/use-cart.ts", "lib/cart.ts"],
    },
    FeatureRule {
        flag: "ecommerce.checkout",
        enabled: |f| f.ecommerce.checkout,
        paths: &["app/checkout/page.tsx", "app/api/checkout/route.ts"],
    },
    FeatureRule {
        flag: "ecommerce.productCatalog",
        enabled: |f| f.ecommerce.product_catalog,
        paths: &[
            "app/products/page.tsx",
            "components/products/product-card.tsx",
            "components/products/product-grid.tsx",
            "lib/products.ts",
        ],
    },
    FeatureRule {
        flag: "ecommerce.wishlist",
        enabled: |f| f.ecommerce.wishlist,
        paths: &["components/products/wishlist-button.tsx", "hooks/use-wishlist.ts"],
    },
    FeatureRule {
        flag: "ecommerce.reviews",
        enabled: |f| f.ecommerce.reviews,
        paths: &["components/products/product-reviews.tsx", "app/api/reviews/route.ts"],
    },
    FeatureRule {
        flag: "ecommerce.inventory",
        enabled: |f| f.ecommerce.inventory,
        paths: &["lib/inventory.ts"],
    },
    FeatureRule {
        flag: "social.comments",
        enabled: |f| f.social.comments,
        paths: &["components/social/comment-list.tsx", "app/api/comments/route.ts"],
    },
    FeatureRule {
        flag: "social.likes",
        enabled: |f| f.social.likes,
        paths: &["components/social/like-button.tsx", "hooks/use-likes.ts"],
    },
    FeatureRule {
        flag: "social.sharing",
        enabled: |f| f.social.sharing,
        paths: &["components/social/share-buttons.tsx"],
    },
    FeatureRule {
        flag: "social.follow",
        enabled: |f| f.social.follow,
        paths: &["components/social/follow-button.tsx", "app/api/follow/route.ts"],
    },
    FeatureRule {
        flag: "social.userProfiles",
        enabled: |f| f.social.user_profiles,
        paths: &["app/profile/page.tsx", "components/social/profile-card.tsx"],
    },
    FeatureRule {
        flag: "content.blog",
        enabled: |f| f.content.blog,
        paths: &["app/blog/page.tsx", "components/blog/post-card.tsx", "lib/posts.ts"],
    },
    FeatureRule {
        flag: "content.cms",
        enabled: |f| f.content.cms,
        paths: &["lib/cms.ts"],
    },
    FeatureRule {
        flag: "content.search",
        enabled: |f| f.content.search,
        paths: &[
            "components/search/search-bar.tsx",
            "hooks/use-search.ts",
            "app/api/search/route.ts",
        ],
    },
    FeatureRule {
        flag: "content.categories",
        enabled: |f| f.content.categories,
        paths: &["components/content/category-list.tsx"],
    },
    FeatureRule {
        flag: "content.tags",
        enabled: |f| f.content.tags,
        paths: &["components/content/tag-list.tsx"],
    },
    FeatureRule {
        flag: "communication.contactForm",
        enabled: |f| f.communication.contact_form,
        paths: &["components/forms/contact-form.tsx", "app/api/contact/route.ts"],
    },
    FeatureRule {
        flag: "communication.newsletter",
        enabled: |f| f.communication.newsletter,
        paths: &["components/forms/newsletter-form.tsx", "app/api/newsletter/route.ts"],
    },
    FeatureRule {
        flag: "communication.liveChat",
        enabled: |f| f.communication.live_chat,
        paths: &["components/chat/chat-widget.tsx"],
    },
    FeatureRule {
        flag: "communication.notifications",
        enabled: |f| f.communication.notifications,
        paths: &["components/notifications/notification-bell.tsx", "hooks/use-notifications.ts"],
    },
    FeatureRule {
        flag: "booking.calendar",
        enabled: |f| f.booking.calendar,
        paths: &["components/booking/calendar.tsx"],
    },
    FeatureRule {
        flag: "booking.appointments",
        enabled: |f| f.booking.appointments,
        paths: &[
            "app/book/page.tsx",
            "components/booking/appointment-form.tsx",
            "app/api/appointments/route.ts",
        ],
    },
    FeatureRule {
        flag: "booking.reservations",
        enabled: |f| f.booking.reservations,
        paths: &["components/booking/reservation-form.tsx", "app/api/reservations/route.ts"],
    },
    FeatureRule {
        flag: "subscription.plans",
        enabled: |f| f.subscription.plans,
        paths: &["app/pricing/page.tsx", "components/subscription/plan-card.tsx"],
    },
    FeatureRule {
        flag: "subscription.billing",
        enabled: |f| f.subscription.billing,
        paths: &["app/billing/page.tsx", "lib/billing.ts"],
    },
    FeatureRule {
        flag: "subscription.trial",
        enabled: |f| f.subscription.trial,
        paths: &["components/subscription/trial-banner.tsx"],
    },
    FeatureRule {
        flag: "dashboard.analytics",
        enabled: |f| f.dashboard.analytics,
        paths: &["app/dashboard/page.tsx", "components/dashboard/stats-cards.tsx"],
    },
    FeatureRule {
        flag: "dashboard.charts",
        enabled: |f| f.dashboard.charts,
        paths: &["components/dashboard/chart.tsx"],
    },
    FeatureRule {
        flag: "dashboard.reports",
        enabled: |f| f.dashboard.reports,
        paths: &["app/dashboard/reports/page.tsx", "app/api/reports/route.ts"],
    },
    FeatureRule {
        flag: "dashboard.activityFeed",
        enabled: |f| f.dashboard.activity_feed,
        paths: &["components/dashboard/activity-feed.tsx", "hooks/use-activity.ts"],
    },
    FeatureRule {
        flag: "admin.userManagement",
        enabled: |f| f.admin.user_management,
        paths: &["app/admin/users/page.tsx", "app/api/admin/users/route.ts"],
    },
    FeatureRule {
        flag: "admin.contentModeration",
        enabled: |f| f.admin.content_moderation,
        paths: &["app/admin/moderation/page.tsx"],
    },
    FeatureRule {
        flag: "admin.settings",
        enabled: |f| f.admin.settings,
        paths: &["app/settings/page.tsx", "components/settings/settings-form.tsx"],
    },
    FeatureRule {
        flag: "admin.auditLog",
        enabled: |f| f.admin.audit_log,
        paths: &["app/admin/audit-log/page.tsx", "lib/audit-log.ts"],
    },
    FeatureRule {
        flag: "location.maps",
        enabled: |f| f.location.maps,
        paths: &["components/location/map.tsx"],
    },
    FeatureRule {
        flag: "location.storeLocator",
        enabled: |f| f.location.store_locator,
        paths: &["app/locations/page.tsx", "components/location/store-list.tsx"],
    },
    FeatureRule {
        flag: "location.geolocation",
        enabled: |f| f.location.geolocation,
        paths: &["hooks/use-geolocation.ts"],
    },
    FeatureRule {
        flag: "integrations.payments",
        enabled: |f| f.integrations.payments,
        paths: &["lib/payments.ts", "app/api/webhooks/payments/route.ts"],
    },
    FeatureRule {
        flag: "integrations.analytics",
        enabled: |f| f.integrations.analytics,
        paths: &["lib/analytics.ts"],
    },
    FeatureRule {
        flag: "integrations.crm",
        enabled: |f| f.integrations.crm,
        paths: &["lib/crm.ts"],
    },
    FeatureRule {
        flag: "integrations.socialLogin",
        enabled: |f| f.integrations.social_login,
        paths: &["components/auth/social-login-buttons.tsx"],
    },
];

/// Paths selected by the set flags, deduplicated in rule order.
pub fn feature_paths(features: &DetectedFeatures) -> Vec<&'static str> {
    let mut paths: Vec<&'static str> = Vec::new();
    for rule in FEATURE_RULES.iter().filter(|rule| (rule.enabled)(features)) {
        tracing::debug!(flag = rule.flag, "Detected feature selects {} stub(s)", rule.paths.len());
        for &path in rule.paths {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }
    paths
}

pub fn generate_feature_stubs(features: &DetectedFeatures) -> Vec<GeneratedFile> {
    feature_paths(features)
        .into_iter()
        .map(|path| GeneratedFile::preserving(path, render_skeleton(classify(path), path)))
        .collect()
}

/// File stem without extension (`page` files use their parent directory).
fn stem(path: &str) -> &str {
    let mut segments = path.rsplit('/');
    let file = segments.next().unwrap_or(path);
    let name = file.split('.').next().unwrap_or(file);
    if matches!(name, "page" | "route") { segments.next().unwrap_or(name) } else { name }
}

fn render_skeleton(kind: StubKind, path: &str) -> String {
    let name = stem(path);
    match kind {
        StubKind::Page => {
            let title = pascal_case(name);
            format!(
                "export default function {title}Page() {{\n  return (\n    <main className=\"mx-auto max-w-6xl px-6 py-16\">\n      <h1 className=\"text-3xl font-semibold\">{title}</h1>\n      <p className=\"mt-4 text-muted-foreground\">Content for {name} goes here.</p>\n    </main>\n  );\n}}\n"
            )
        }
        StubKind::ApiRoute => format!(
            "import {{ NextResponse }} from \"next/server\";\n\nexport async function GET() {{\n  return NextResponse.json({{ ok: true, route: \"{name}\" }});\n}}\n\nexport async function POST(request: Request) {{\n  const body = await request.json().catch(() => null);\n  return NextResponse.json({{ ok: true, received: body }});\n}}\n"
        ),
        StubKind::Hook => {
            let hook = camel_case(name);
            format!(
                "\"use client\";\n\nimport {{ useState }} from \"react\";\n\nexport function {hook}() {{\n  const [state, setState] = useState<unknown>(null);\n  return {{ state, setState }};\n}}\n"
            )
        }
        StubKind::Library => format!(
            "// Server-side helpers for {name}.\n\nexport async function get{}() {{\n  return [];\n}}\n",
            pascal_case(name)
        ),
        StubKind::Component => {
            let component = pascal_case(name);
            format!(
                "type {component}Props = {{\n  className?: string;\n}};\n\nexport function {component}({{ className }}: {component}Props) {{\n  return <div className={{className}}>{component}</div>;\n}}\n"
            )
        }
    }
}
