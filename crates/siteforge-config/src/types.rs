//! Configuration data structures
//!
//! These types mirror the JSON shape the wizard UI produces. Every field has
//! a serde default so a partial configuration still deserializes; fallback
//! values for absent content are applied later by the context builder, not
//! here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Full configuration for one generation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfig {
    /// Business display name
    pub business_name: String,
    /// Industry identifier (free text from the wizard)
    pub industry: String,
    /// Short business description
    pub business_description: String,
    /// Target audience description
    pub target_audience: String,
    /// Project family id (`base`, `commerce`, `webapp`, `ngo`)
    ///
    /// Unknown values fall back to `base` during path resolution.
    pub family: String,
    /// Selected design presets
    pub design: DesignConfig,
    /// Pages the wizard configured, in display order
    pub pages: Vec<PageConfig>,
    /// Active feature flag names
    pub features: Vec<String>,
    /// Header customization
    pub header: HeaderConfig,
    /// Footer customization
    pub footer: FooterConfig,
}

/// Selected design preset ids
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesignConfig {
    /// Theme preset id
    pub theme: String,
    /// Layout preset id
    pub layout: String,
    /// Hero style preset id
    pub hero_style: String,
}

/// One page entry from the wizard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    /// Page id, used as the URL segment (`home`, `about`, ...)
    pub id: String,
    /// Display name
    pub name: Option<String>,
    /// Whether the page is generated
    ///
    /// Gating is strictly this flag; a page absent from the wizard output or
    /// carrying `enabled: false` produces no file.
    pub enabled: bool,
    /// Ordered content block ids for the page
    pub blocks: Vec<String>,
}

/// Header customization from the wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderConfig {
    /// Header visual style id
    pub style: String,
    /// Logo text (falls back to the business name)
    pub logo_text: String,
    /// Navigation items in display order
    pub menu_items: Vec<MenuItem>,
    /// Whether the header call-to-action button is shown
    pub show_cta: bool,
    /// Call-to-action label
    pub cta_text: String,
    /// Call-to-action link
    pub cta_link: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            style: String::new(),
            logo_text: String::new(),
            menu_items: Vec::new(),
            show_cta: true,
            cta_text: String::new(),
            cta_link: String::new(),
        }
    }
}

/// One navigation menu item, possibly with nested children
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItem {
    /// Display label
    pub label: String,
    /// Target link
    pub link: String,
    /// Optional description shown in dropdown menus
    pub description: String,
    /// Nested child items (one level deep)
    pub children: Vec<MenuItem>,
}

/// Footer customization from the wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterConfig {
    /// Footer visual style id
    pub style: String,
    /// Company name (falls back to the business name)
    pub company_name: String,
    /// Company description
    pub company_description: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Contact address
    pub address: String,
    /// Whether the newsletter signup block is shown
    pub show_newsletter: bool,
    /// Newsletter block title
    pub newsletter_title: String,
    /// Social platform name to URL; empty URLs are filtered out downstream
    pub social_links: BTreeMap<String, String>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            style: String::new(),
            company_name: String::new(),
            company_description: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            show_newsletter: true,
            newsletter_title: String::new(),
            social_links: BTreeMap::new(),
        }
    }
}
