//! Preset data structures
//!
//! All preset data is static; fields are `&'static str` so tables can live in
//! consts. Class strings target the emitted project's Tailwind setup.

use serde::Serialize;

/// A complete theme preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemePreset {
    /// Preset id (`modern`, `elegant`, ...)
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Color palette
    pub colors: ThemeColors,
    /// Typography settings
    pub typography: Typography,
    /// Spacing and surface treatment
    pub spacing: Spacing,
    /// Pre-built component class strings
    pub components: ComponentClasses,
    /// Animation class strings
    pub animations: AnimationClasses,
    /// Signature gradient class
    pub gradient: &'static str,
    /// Hero section background class for this theme
    pub hero_background: &'static str,
}

/// Theme color palette (hex values)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    /// Primary brand color
    pub primary: &'static str,
    /// Secondary brand color
    pub secondary: &'static str,
    /// Accent color
    pub accent: &'static str,
    /// Neutral color
    pub neutral: &'static str,
    /// Page background color
    pub background: &'static str,
    /// Raised surface color
    pub surface: &'static str,
}

/// Typography settings for a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Typography {
    /// Heading font family
    pub heading_font: &'static str,
    /// Body font family
    pub body_font: &'static str,
    /// Heading font weight
    pub heading_weight: &'static str,
    /// Body font weight
    pub body_weight: &'static str,
}

/// Spacing and surface treatment for a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spacing {
    /// Spacing scale id
    pub scale: &'static str,
    /// Border radius class
    pub border_radius: &'static str,
    /// Shadow style id
    pub shadow_style: &'static str,
}

/// Pre-built component class strings for a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentClasses {
    /// Primary button classes
    pub button_primary: &'static str,
    /// Secondary button classes
    pub button_secondary: &'static str,
    /// Outline button classes
    pub button_outline: &'static str,
    /// Default card classes
    pub card_default: &'static str,
    /// Elevated card classes
    pub card_elevated: &'static str,
}

/// Animation class strings for a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationClasses {
    /// Hover transition classes
    pub hover: &'static str,
    /// Fade-in entrance classes
    pub fade_in: &'static str,
}

/// A page layout preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutPreset {
    /// Preset id (`standard`, `centered`, ...)
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Content container width class
    pub container_width: &'static str,
    /// Navigation placement (`horizontal` or `sidebar`)
    pub navigation: &'static str,
    /// Whether the layout uses a sidebar
    pub sidebar: bool,
}

/// A hero section style preset with derived sizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroPreset {
    /// Preset id (`centered`, `split`, ...)
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Section layout classes
    pub layout: &'static str,
    /// Inner container classes
    pub container: &'static str,
    /// Headline size classes for this style
    pub headline_size: &'static str,
    /// Content max-width classes for this style
    pub max_width: &'static str,
    /// Content justification classes for this style
    pub justify_content: &'static str,
}
