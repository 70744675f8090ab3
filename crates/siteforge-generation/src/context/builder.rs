//! Context builder
//!
//! Merges business fields, design presets, and computed defaults into one
//! flat, total variable context. Every key a template may reference is
//! present after `build`; absent wizard input is replaced by documented
//! fallbacks, and unknown preset ids resolve to the default preset.

use chrono::Datelike;
use heck::ToKebabCase;
use serde_json::{json, Value};

use siteforge_config::{MenuItem, ProjectConfig};
use siteforge_design as design;

use crate::context::tree::RenderContext;
use crate::paths::ProjectFamily;

/// Builds the render context for one generation run
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    year: i32,
}

impl ContextBuilder {
    /// Create a builder using the current year for `currentYear`
    pub fn new() -> Self {
        Self {
            year: chrono::Utc::now().year(),
        }
    }

    /// Pin the year, keeping `build` deterministic in tests
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Build the full variable context for a configuration
    pub fn build(&self, config: &ProjectConfig) -> RenderContext {
        let mut ctx = RenderContext::new();

        self.add_business_fields(&mut ctx, config);
        self.add_design_fields(&mut ctx, config);
        self.add_hero_fields(&mut ctx, config);
        self.add_header_fields(&mut ctx, config);
        self.add_footer_fields(&mut ctx, config);
        self.add_computed_fields(&mut ctx, config);

        ctx
    }

    fn add_business_fields(&self, ctx: &mut RenderContext, config: &ProjectConfig) {
        let business_name = non_empty(&config.business_name, "Your Business");
        let industry = non_empty(&config.industry, "business");
        let description = if config.business_description.trim().is_empty() {
            format!("Professional {industry} solutions")
        } else {
            config.business_description.clone()
        };

        ctx.insert("businessName", business_name.clone());
        ctx.insert("industry", industry);
        ctx.insert("businessDescription", description);
        ctx.insert(
            "targetAudience",
            non_empty(&config.target_audience, "customers"),
        );
        ctx.insert("businessNameSlug", business_name.to_kebab_case());
    }

    fn add_design_fields(&self, ctx: &mut RenderContext, config: &ProjectConfig) {
        let theme = design::theme(&config.design.theme);
        let layout = design::layout(&config.design.layout);
        let hero = design::hero_style(&config.design.hero_style);

        ctx.insert(
            "design",
            json!({
                "theme": theme.id,
                "layout": layout.id,
                "heroStyle": hero.id,
            }),
        );

        // Colors, flattened for direct template access
        ctx.insert("primary", theme.colors.primary);
        ctx.insert("secondary", theme.colors.secondary);
        ctx.insert("accent", theme.colors.accent);
        ctx.insert("neutral", theme.colors.neutral);
        ctx.insert("background", theme.colors.background);
        ctx.insert("surface", theme.colors.surface);

        // Typography
        ctx.insert("fontHeading", theme.typography.heading_font);
        ctx.insert("fontBody", theme.typography.body_font);
        ctx.insert("headingWeight", theme.typography.heading_weight);
        ctx.insert("bodyWeight", theme.typography.body_weight);

        // Spacing and surfaces
        ctx.insert("spacingScale", theme.spacing.scale);
        ctx.insert("borderRadius", theme.spacing.border_radius);
        ctx.insert("shadowStyle", theme.spacing.shadow_style);

        // Component and animation class strings
        ctx.insert("buttonPrimary", theme.components.button_primary);
        ctx.insert("buttonSecondary", theme.components.button_secondary);
        ctx.insert("buttonOutline", theme.components.button_outline);
        ctx.insert("cardDefault", theme.components.card_default);
        ctx.insert("cardElevated", theme.components.card_elevated);
        ctx.insert("animationHover", theme.animations.hover);
        ctx.insert("animationFadeIn", theme.animations.fade_in);
        ctx.insert("gradient", theme.gradient);
        ctx.insert("themeClasses", format!("theme-{}", theme.id));

        // Layout
        ctx.insert("containerWidth", layout.container_width);
        ctx.insert("navigationStyle", layout.navigation);
        ctx.insert("sidebarEnabled", layout.sidebar);

        // Hero sizing derived from explicit preset tables, never free text
        ctx.insert("heroBackground", theme.hero_background);
        ctx.insert("heroLayout", hero.layout);
        ctx.insert("heroContainer", hero.container);
        ctx.insert("headlineSize", hero.headline_size);
        ctx.insert("maxWidth", hero.max_width);
        ctx.insert("justifyContent", hero.justify_content);
    }

    fn add_hero_fields(&self, ctx: &mut RenderContext, config: &ProjectConfig) {
        let business_name = non_empty(&config.business_name, "Your Business");
        let industry = non_empty(&config.industry, "business");
        let audience = non_empty(&config.target_audience, "your success");

        ctx.insert("heroHeadline", format!("Welcome to {business_name}"));
        ctx.insert(
            "heroDescription",
            if config.business_description.trim().is_empty() {
                format!("Professional {industry} services for {audience}")
            } else {
                config.business_description.clone()
            },
        );
        ctx.insert("heroCtaPrimary", "Get Started");
        ctx.insert("heroCtaPrimaryLink", "/contact");
        ctx.insert("heroCtaSecondary", "Learn More");
        ctx.insert("heroCtaSecondaryLink", "/about");
    }

    fn add_header_fields(&self, ctx: &mut RenderContext, config: &ProjectConfig) {
        let header = &config.header;
        let business_name = non_empty(&config.business_name, "Your Business");

        ctx.insert("headerStyle", non_empty(&header.style, "solid"));
        ctx.insert("logoText", non_empty(&header.logo_text, &business_name));
        ctx.insert("showHeaderCta", header.show_cta);
        ctx.insert("headerCtaText", non_empty(&header.cta_text, "Get Started"));
        ctx.insert("headerCtaLink", non_empty(&header.cta_link, "/contact"));

        let items: Vec<Value> = header.menu_items.iter().map(menu_item_value).collect();
        ctx.insert("hasNestedMenus", items_have_children(&header.menu_items));
        ctx.insert("navigationItems", Value::Array(items));
    }

    fn add_footer_fields(&self, ctx: &mut RenderContext, config: &ProjectConfig) {
        let footer = &config.footer;
        let business_name = non_empty(&config.business_name, "Your Business");
        let industry = non_empty(&config.industry, "business");

        ctx.insert("footerStyle", non_empty(&footer.style, "multiColumn"));
        ctx.insert("companyName", non_empty(&footer.company_name, &business_name));
        ctx.insert(
            "companyDescription",
            if footer.company_description.trim().is_empty() {
                format!("Professional {industry} services")
            } else {
                footer.company_description.clone()
            },
        );

        let default_email = format!(
            "contact@{}.com",
            business_name.to_lowercase().replace(char::is_whitespace, "")
        );
        ctx.insert("contactEmail", non_empty(&footer.email, &default_email));
        ctx.insert("contactPhone", non_empty(&footer.phone, "(555) 123-4567"));
        ctx.insert(
            "contactAddress",
            non_empty(&footer.address, "123 Business St, City, State 12345"),
        );
        ctx.insert("showNewsletter", footer.show_newsletter);
        ctx.insert(
            "newsletterTitle",
            non_empty(&footer.newsletter_title, "Stay Updated"),
        );

        // Social links: only non-empty URLs survive into the context
        let links: Vec<Value> = footer
            .social_links
            .iter()
            .filter(|(_, url)| !url.trim().is_empty())
            .map(|(platform, url)| {
                json!({
                    "platform": platform,
                    "url": url.trim(),
                    "name": capitalize(platform),
                })
            })
            .collect();
        ctx.insert("socialMediaLinks", Value::Array(links));
    }

    fn add_computed_fields(&self, ctx: &mut RenderContext, config: &ProjectConfig) {
        ctx.insert("currentYear", self.year);

        let pages: Vec<Value> = config
            .pages
            .iter()
            .map(|p| {
                json!({
                    "id": p.id,
                    "name": p.name.clone().unwrap_or_else(|| capitalize(&p.id)),
                    "enabled": p.enabled,
                    "blocks": p.blocks,
                })
            })
            .collect();
        ctx.insert("pages", Value::Array(pages));
        ctx.insert("features", config.features.clone());

        let family = ProjectFamily::from_id(&config.family);
        ctx.insert("projectType", family.id());
        ctx.insert("isBase", family == ProjectFamily::Base);
        ctx.insert("isCommerce", family == ProjectFamily::Commerce);
        ctx.insert("isWebApp", family == ProjectFamily::WebApp);
        ctx.insert("isNgo", family == ProjectFamily::Ngo);
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn menu_item_value(item: &MenuItem) -> Value {
    let children: Vec<Value> = item
        .children
        .iter()
        .map(|child| {
            json!({
                "label": child.label,
                "link": child.link,
                "description": child.description,
            })
        })
        .collect();
    json!({
        "label": item.label,
        "link": item.link,
        "description": item.description,
        "isActive": item.link == "/",
        "hasChildren": !item.children.is_empty(),
        "childCount": item.children.len(),
        "children": children,
    })
}

fn items_have_children(items: &[MenuItem]) -> bool {
    items.iter().any(|item| !item.children.is_empty())
}
