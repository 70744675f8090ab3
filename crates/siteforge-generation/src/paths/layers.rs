//! Static path rule tables
//!
//! Each table maps output paths in the generated project to template ids in
//! the store. Later layers overwrite earlier ones entry by entry, the same
//! way a family overlay replaces individual base files while inheriting the
//! rest.

/// Project family selecting the base overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFamily {
    /// Plain marketing site, the default
    Base,
    /// Online store
    Commerce,
    /// Application shell with auth and dashboard
    WebApp,
    /// Non-profit site
    Ngo,
}

impl ProjectFamily {
    /// Parse a family id, falling back to [`ProjectFamily::Base`]
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "commerce" | "ecommerce" => ProjectFamily::Commerce,
            "webapp" => ProjectFamily::WebApp,
            "ngo" => ProjectFamily::Ngo,
            _ => ProjectFamily::Base,
        }
    }

    /// Canonical family id
    pub fn id(self) -> &'static str {
        match self {
            ProjectFamily::Base => "base",
            ProjectFamily::Commerce => "commerce",
            ProjectFamily::WebApp => "webapp",
            ProjectFamily::Ngo => "ngo",
        }
    }
}

/// Files every generated project starts from
pub const BASE_PATHS: &[(&str, &str)] = &[
    ("next.config.mjs", "base/next.config.mjs.template"),
    ("tailwind.config.js", "base/tailwind.config.js.template"),
    ("postcss.config.cjs", "base/postcss.config.cjs.template"),
    ("jsconfig.json", "base/jsconfig.json.template"),
    ("package.json", "base/package.json.template"),
    ("app/layout.js", "base/app/layout.js.template"),
    ("app/globals.css", "base/app/globals.css.template"),
    ("app/page.js", "base/app/page.js.template"),
    ("components/Header.js", "base/components/Header.js.template"),
    ("components/Footer.js", "base/components/Footer.js.template"),
    ("components/Hero.jsx", "base/components/Hero.jsx.template"),
    ("components/ui/Button.jsx", "base/components/ui/Button.jsx.template"),
    ("components/ui/Card.jsx", "base/components/ui/Card.jsx.template"),
    (".gitignore", "base/.gitignore.template"),
    ("README.md", "base/README.md.template"),
];

const COMMERCE_OVERLAY: &[(&str, &str)] = &[
    ("app/layout.js", "commerce/app/layout.js.template"),
    ("app/page.js", "commerce/app/page.js.template"),
    ("components/Header.js", "commerce/components/Header.js.template"),
    ("lib/cart.js", "commerce/lib/cart.js.template"),
    ("lib/products.js", "commerce/lib/products.js.template"),
    ("components/ProductCard.jsx", "commerce/components/ProductCard.jsx.template"),
    ("components/AddToCartButton.jsx", "commerce/components/AddToCartButton.jsx.template"),
    ("components/ShoppingCart.jsx", "commerce/components/ShoppingCart.jsx.template"),
    ("app/product/[id]/page.js", "commerce/app/product/[id]/page.js.template"),
    ("package.json", "commerce/config/package.json.template"),
    (".env.local.example", "commerce/config/.env.template"),
    ("tailwind.config.js", "commerce/config/tailwind.config.js.template"),
];

const WEBAPP_OVERLAY: &[(&str, &str)] = &[
    ("app/layout.js", "webapp/app/layout.js.template"),
    ("app/page.js", "webapp/app/page.js.template"),
    ("components/Sidebar.jsx", "webapp/components/Sidebar.jsx.template"),
    ("components/Dashboard.jsx", "webapp/components/Dashboard.jsx.template"),
    ("components/AuthForm.jsx", "webapp/components/AuthForm.jsx.template"),
    ("lib/auth.js", "webapp/lib/auth.js.template"),
    ("lib/api.js", "webapp/lib/api.js.template"),
    (".env.local.example", "webapp/config/.env.template"),
];

const NGO_OVERLAY: &[(&str, &str)] = &[
    ("app/page.js", "ngo/app/page.js.template"),
    ("components/Header.js", "ngo/components/Header.js.template"),
    ("components/DonationForm.jsx", "ngo/components/DonationForm.jsx.template"),
    ("components/VolunteerForm.jsx", "ngo/components/VolunteerForm.jsx.template"),
    ("components/EventCard.jsx", "ngo/components/EventCard.jsx.template"),
    ("lib/donations.js", "ngo/lib/donations.js.template"),
    ("lib/events.js", "ngo/lib/events.js.template"),
];

/// Overlay applied on top of [`BASE_PATHS`] for a family
pub fn family_overlay(family: ProjectFamily) -> &'static [(&'static str, &'static str)] {
    match family {
        ProjectFamily::Base => &[],
        ProjectFamily::Commerce => COMMERCE_OVERLAY,
        ProjectFamily::WebApp => WEBAPP_OVERLAY,
        ProjectFamily::Ngo => NGO_OVERLAY,
    }
}

const BASE_PAGES: &[(&str, &str)] = &[
    ("about", "base/app/about/page.js.template"),
    ("services", "base/app/services/page.js.template"),
    ("contact", "base/app/contact/page.js.template"),
];

const COMMERCE_PAGES: &[(&str, &str)] = &[
    ("shop", "commerce/app/shop/page.js.template"),
    ("cart", "commerce/app/cart/page.js.template"),
    ("checkout", "commerce/app/checkout/page.js.template"),
];

const WEBAPP_PAGES: &[(&str, &str)] = &[
    ("dashboard", "webapp/app/dashboard/page.js.template"),
    ("login", "webapp/app/login/page.js.template"),
    ("register", "webapp/app/register/page.js.template"),
];

const NGO_PAGES: &[(&str, &str)] = &[
    ("donate", "ngo/app/donate/page.js.template"),
    ("volunteer", "ngo/app/volunteer/page.js.template"),
    ("events", "ngo/app/events/page.js.template"),
];

/// Template used for pages with no dedicated template
pub const GENERIC_PAGE_TEMPLATE: &str = "base/app/generic/page.js.template";

/// Dedicated page template for a page id, if one exists
///
/// Family pages take precedence over the base pages shared by every family.
pub fn page_template(family: ProjectFamily, page_id: &str) -> Option<&'static str> {
    let family_pages = match family {
        ProjectFamily::Base => &[][..],
        ProjectFamily::Commerce => COMMERCE_PAGES,
        ProjectFamily::WebApp => WEBAPP_PAGES,
        ProjectFamily::Ngo => NGO_PAGES,
    };
    lookup(family_pages, page_id).or_else(|| lookup(BASE_PAGES, page_id))
}

/// Feature rule sets, keyed by feature flag name
pub const FEATURE_PATHS: &[(&str, &[(&str, &str)])] = &[
    (
        "newsletter",
        &[
            ("components/NewsletterSignup.jsx", "features/newsletter/NewsletterSignup.jsx.template"),
            ("lib/newsletter.js", "features/newsletter/newsletter.js.template"),
        ],
    ),
    (
        "analytics",
        &[
            ("lib/analytics.js", "features/analytics/analytics.js.template"),
            ("components/AnalyticsProvider.jsx", "features/analytics/AnalyticsProvider.jsx.template"),
        ],
    ),
    (
        "seo",
        &[
            ("app/sitemap.js", "features/seo/sitemap.js.template"),
            ("app/robots.js", "features/seo/robots.js.template"),
        ],
    ),
    (
        "blog",
        &[
            ("app/blog/page.js", "features/blog/page.js.template"),
            ("app/blog/[slug]/page.js", "features/blog/post.js.template"),
            ("components/BlogCard.jsx", "features/blog/BlogCard.jsx.template"),
            ("lib/posts.js", "features/blog/posts.js.template"),
        ],
    ),
    (
        "gallery",
        &[
            ("app/gallery/page.js", "features/gallery/page.js.template"),
            ("components/GalleryGrid.jsx", "features/gallery/GalleryGrid.jsx.template"),
        ],
    ),
    (
        "testimonials",
        &[("components/Testimonials.jsx", "features/testimonials/Testimonials.jsx.template")],
    ),
    (
        "contact-form",
        &[
            ("components/ContactForm.jsx", "features/contact-form/ContactForm.jsx.template"),
            ("app/api/contact/route.js", "features/contact-form/route.js.template"),
        ],
    ),
];

/// Rule set for a feature flag, if the flag is known
pub fn feature_paths(feature: &str) -> Option<&'static [(&'static str, &'static str)]> {
    FEATURE_PATHS
        .iter()
        .find(|(name, _)| *name == feature)
        .map(|(_, paths)| *paths)
}

/// Whether a feature flag has a rule set
pub fn is_known_feature(feature: &str) -> bool {
    feature_paths(feature).is_some()
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
