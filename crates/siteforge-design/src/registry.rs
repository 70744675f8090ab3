//! Preset registry with total lookups
//!
//! Unknown ids fall back to the default preset; a fallback is logged at debug
//! level so a misconfigured wizard payload is still visible in traces.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::{
    AnimationClasses, ComponentClasses, HeroPreset, LayoutPreset, Spacing, ThemeColors,
    ThemePreset, Typography,
};

/// Default theme id used when a selection is unknown or absent
pub const DEFAULT_THEME: &str = "modern";
/// Default layout id used when a selection is unknown or absent
pub const DEFAULT_LAYOUT: &str = "standard";
/// Default hero style id used when a selection is unknown or absent
pub const DEFAULT_HERO_STYLE: &str = "centered";

const THEMES: &[ThemePreset] = &[
    ThemePreset {
        id: "modern",
        name: "Modern",
        colors: ThemeColors {
            primary: "#3B82F6",
            secondary: "#8B5CF6",
            accent: "#10B981",
            neutral: "#6B7280",
            background: "#FFFFFF",
            surface: "#F9FAFB",
        },
        typography: Typography {
            heading_font: "Inter",
            body_font: "Inter",
            heading_weight: "700",
            body_weight: "400",
        },
        spacing: Spacing {
            scale: "comfortable",
            border_radius: "rounded-lg",
            shadow_style: "modern",
        },
        components: ComponentClasses {
            button_primary: "bg-blue-600 text-white hover:bg-blue-700 rounded-lg px-6 py-3",
            button_secondary: "bg-purple-600 text-white hover:bg-purple-700 rounded-lg px-6 py-3",
            button_outline:
                "border-2 border-blue-600 text-blue-600 hover:bg-blue-50 rounded-lg px-6 py-3",
            card_default: "bg-white rounded-lg border border-gray-200",
            card_elevated: "bg-white rounded-lg shadow-md hover:shadow-lg",
        },
        animations: AnimationClasses {
            hover: "transition-all duration-200 hover:scale-105",
            fade_in: "animate-fade-in",
        },
        gradient: "bg-gradient-to-r from-blue-600 to-purple-600",
        hero_background: "bg-gradient-to-br from-blue-50 via-white to-purple-50",
    },
    ThemePreset {
        id: "elegant",
        name: "Elegant",
        colors: ThemeColors {
            primary: "#1F2937",
            secondary: "#D97706",
            accent: "#DC2626",
            neutral: "#6B7280",
            background: "#FFFBEB",
            surface: "#FFFFFF",
        },
        typography: Typography {
            heading_font: "Playfair Display",
            body_font: "Source Serif Pro",
            heading_weight: "600",
            body_weight: "400",
        },
        spacing: Spacing {
            scale: "spacious",
            border_radius: "rounded",
            shadow_style: "subtle",
        },
        components: ComponentClasses {
            button_primary: "bg-gray-800 text-white hover:bg-gray-900 rounded px-6 py-3",
            button_secondary: "bg-amber-600 text-white hover:bg-amber-700 rounded px-6 py-3",
            button_outline:
                "border-2 border-gray-800 text-gray-800 hover:bg-gray-50 rounded px-6 py-3",
            card_default: "bg-white rounded border border-amber-100",
            card_elevated: "bg-white rounded shadow-sm hover:shadow",
        },
        animations: AnimationClasses {
            hover: "transition-colors duration-300",
            fade_in: "animate-fade-in",
        },
        gradient: "bg-gradient-to-r from-gray-800 to-amber-600",
        hero_background: "bg-gradient-to-br from-amber-50 via-white to-orange-50",
    },
    ThemePreset {
        id: "creative",
        name: "Creative",
        colors: ThemeColors {
            primary: "#EC4899",
            secondary: "#8B5CF6",
            accent: "#F59E0B",
            neutral: "#6B7280",
            background: "#F9FAFB",
            surface: "#FFFFFF",
        },
        typography: Typography {
            heading_font: "Poppins",
            body_font: "Open Sans",
            heading_weight: "700",
            body_weight: "400",
        },
        spacing: Spacing {
            scale: "comfortable",
            border_radius: "rounded-xl",
            shadow_style: "dramatic",
        },
        components: ComponentClasses {
            button_primary: "bg-pink-600 text-white hover:bg-pink-700 rounded-xl px-6 py-3",
            button_secondary: "bg-purple-600 text-white hover:bg-purple-700 rounded-xl px-6 py-3",
            button_outline:
                "border-2 border-pink-600 text-pink-600 hover:bg-pink-50 rounded-xl px-6 py-3",
            card_default: "bg-white rounded-xl border border-pink-100",
            card_elevated: "bg-white rounded-xl shadow-lg hover:shadow-xl",
        },
        animations: AnimationClasses {
            hover: "transition-all duration-200 hover:-translate-y-1",
            fade_in: "animate-fade-in",
        },
        gradient: "bg-gradient-to-r from-pink-600 to-purple-600",
        hero_background: "bg-gradient-to-br from-pink-50 via-purple-50 to-blue-50",
    },
    ThemePreset {
        id: "tech",
        name: "Tech",
        colors: ThemeColors {
            primary: "#06B6D4",
            secondary: "#8B5CF6",
            accent: "#10B981",
            neutral: "#6B7280",
            background: "#0F172A",
            surface: "#1E293B",
        },
        typography: Typography {
            heading_font: "JetBrains Mono",
            body_font: "Inter",
            heading_weight: "700",
            body_weight: "400",
        },
        spacing: Spacing {
            scale: "compact",
            border_radius: "rounded-lg",
            shadow_style: "none",
        },
        components: ComponentClasses {
            button_primary: "bg-cyan-500 text-slate-900 hover:bg-cyan-400 rounded-lg px-6 py-3",
            button_secondary: "bg-purple-500 text-white hover:bg-purple-400 rounded-lg px-6 py-3",
            button_outline:
                "border-2 border-cyan-500 text-cyan-500 hover:bg-slate-800 rounded-lg px-6 py-3",
            card_default: "bg-slate-800 rounded-lg border border-slate-700",
            card_elevated: "bg-slate-800 rounded-lg shadow-lg shadow-cyan-500/10",
        },
        animations: AnimationClasses {
            hover: "transition-all duration-150 hover:brightness-110",
            fade_in: "animate-fade-in",
        },
        gradient: "bg-gradient-to-r from-cyan-500 to-purple-500",
        hero_background: "bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900",
    },
    ThemePreset {
        id: "minimal",
        name: "Minimal",
        colors: ThemeColors {
            primary: "#000000",
            secondary: "#4B5563",
            accent: "#6B7280",
            neutral: "#9CA3AF",
            background: "#FFFFFF",
            surface: "#F9FAFB",
        },
        typography: Typography {
            heading_font: "Inter",
            body_font: "Inter",
            heading_weight: "600",
            body_weight: "400",
        },
        spacing: Spacing {
            scale: "spacious",
            border_radius: "rounded-none",
            shadow_style: "none",
        },
        components: ComponentClasses {
            button_primary: "bg-black text-white hover:bg-gray-800 px-6 py-3",
            button_secondary: "bg-gray-600 text-white hover:bg-gray-700 px-6 py-3",
            button_outline: "border border-black text-black hover:bg-gray-50 px-6 py-3",
            card_default: "bg-white border border-gray-200",
            card_elevated: "bg-white border border-gray-300",
        },
        animations: AnimationClasses {
            hover: "transition-colors duration-200",
            fade_in: "",
        },
        gradient: "bg-gradient-to-r from-black to-gray-600",
        hero_background: "bg-white",
    },
    ThemePreset {
        id: "corporate",
        name: "Corporate",
        colors: ThemeColors {
            primary: "#1E40AF",
            secondary: "#059669",
            accent: "#DC2626",
            neutral: "#6B7280",
            background: "#F9FAFB",
            surface: "#FFFFFF",
        },
        typography: Typography {
            heading_font: "Inter",
            body_font: "Inter",
            heading_weight: "700",
            body_weight: "400",
        },
        spacing: Spacing {
            scale: "comfortable",
            border_radius: "rounded-md",
            shadow_style: "subtle",
        },
        components: ComponentClasses {
            button_primary: "bg-blue-700 text-white hover:bg-blue-800 rounded-md px-6 py-3",
            button_secondary: "bg-green-600 text-white hover:bg-green-700 rounded-md px-6 py-3",
            button_outline:
                "border-2 border-blue-700 text-blue-700 hover:bg-blue-50 rounded-md px-6 py-3",
            card_default: "bg-white rounded-md border border-gray-200",
            card_elevated: "bg-white rounded-md shadow hover:shadow-md",
        },
        animations: AnimationClasses {
            hover: "transition-shadow duration-200",
            fade_in: "animate-fade-in",
        },
        gradient: "bg-gradient-to-r from-blue-700 to-green-600",
        hero_background: "bg-gradient-to-br from-blue-50 via-white to-gray-50",
    },
];

const LAYOUTS: &[LayoutPreset] = &[
    LayoutPreset {
        id: "standard",
        name: "Standard",
        container_width: "max-w-7xl",
        navigation: "horizontal",
        sidebar: false,
    },
    LayoutPreset {
        id: "centered",
        name: "Centered",
        container_width: "max-w-4xl",
        navigation: "horizontal",
        sidebar: false,
    },
    LayoutPreset {
        id: "sidebar",
        name: "Sidebar",
        container_width: "max-w-full",
        navigation: "sidebar",
        sidebar: true,
    },
    LayoutPreset {
        id: "magazine",
        name: "Magazine",
        container_width: "max-w-6xl",
        navigation: "horizontal",
        sidebar: false,
    },
    LayoutPreset {
        id: "landing",
        name: "Landing",
        container_width: "max-w-5xl",
        navigation: "horizontal",
        sidebar: false,
    },
];

const HERO_STYLES: &[HeroPreset] = &[
    HeroPreset {
        id: "centered",
        name: "Centered",
        layout: "text-center",
        container: "px-4 py-24",
        headline_size: "text-4xl md:text-6xl lg:text-7xl",
        max_width: "max-w-3xl mx-auto",
        justify_content: "justify-center",
    },
    HeroPreset {
        id: "split",
        name: "Split",
        layout: "grid grid-cols-1 lg:grid-cols-2 gap-12 items-center",
        container: "px-4 py-20",
        headline_size: "text-4xl md:text-5xl lg:text-6xl",
        max_width: "max-w-lg",
        justify_content: "justify-start",
    },
    HeroPreset {
        id: "fullscreen",
        name: "Fullscreen",
        layout: "min-h-screen flex items-center justify-center text-center",
        container: "px-4",
        headline_size: "text-5xl md:text-7xl lg:text-8xl",
        max_width: "max-w-5xl mx-auto",
        justify_content: "justify-center",
    },
    HeroPreset {
        id: "minimal",
        name: "Minimal",
        layout: "text-left",
        container: "px-4 py-16",
        headline_size: "text-3xl md:text-4xl lg:text-5xl",
        max_width: "max-w-2xl mx-auto",
        justify_content: "justify-start",
    },
];

static THEME_INDEX: Lazy<HashMap<&'static str, &'static ThemePreset>> =
    Lazy::new(|| THEMES.iter().map(|t| (t.id, t)).collect());

static LAYOUT_INDEX: Lazy<HashMap<&'static str, &'static LayoutPreset>> =
    Lazy::new(|| LAYOUTS.iter().map(|l| (l.id, l)).collect());

static HERO_INDEX: Lazy<HashMap<&'static str, &'static HeroPreset>> =
    Lazy::new(|| HERO_STYLES.iter().map(|h| (h.id, h)).collect());

/// Look up a theme preset, falling back to [`DEFAULT_THEME`]
pub fn theme(id: &str) -> &'static ThemePreset {
    THEME_INDEX.get(id).copied().unwrap_or_else(|| {
        if !id.is_empty() {
            tracing::debug!(theme = id, fallback = DEFAULT_THEME, "unknown theme preset");
        }
        THEME_INDEX[DEFAULT_THEME]
    })
}

/// Look up a layout preset, falling back to [`DEFAULT_LAYOUT`]
pub fn layout(id: &str) -> &'static LayoutPreset {
    LAYOUT_INDEX.get(id).copied().unwrap_or_else(|| {
        if !id.is_empty() {
            tracing::debug!(layout = id, fallback = DEFAULT_LAYOUT, "unknown layout preset");
        }
        LAYOUT_INDEX[DEFAULT_LAYOUT]
    })
}

/// Look up a hero style preset, falling back to [`DEFAULT_HERO_STYLE`]
pub fn hero_style(id: &str) -> &'static HeroPreset {
    HERO_INDEX.get(id).copied().unwrap_or_else(|| {
        if !id.is_empty() {
            tracing::debug!(
                hero_style = id,
                fallback = DEFAULT_HERO_STYLE,
                "unknown hero style preset"
            );
        }
        HERO_INDEX[DEFAULT_HERO_STYLE]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_lookup() {
        assert_eq!(theme("tech").id, "tech");
        assert_eq!(theme("tech").colors.primary, "#06B6D4");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_modern() {
        assert_eq!(theme("vaporwave").id, "modern");
        assert_eq!(theme("").id, "modern");
    }

    #[test]
    fn test_layout_lookup_and_fallback() {
        assert_eq!(layout("sidebar").navigation, "sidebar");
        assert!(layout("sidebar").sidebar);
        assert_eq!(layout("hexagonal").id, "standard");
    }

    #[test]
    fn test_hero_style_lookup_and_fallback() {
        assert_eq!(hero_style("fullscreen").headline_size, "text-5xl md:text-7xl lg:text-8xl");
        assert_eq!(hero_style("unknown").id, "centered");
    }

    #[test]
    fn test_all_theme_ids_unique() {
        assert_eq!(THEME_INDEX.len(), THEMES.len());
    }

    #[test]
    fn test_defaults_exist_in_tables() {
        assert!(THEME_INDEX.contains_key(DEFAULT_THEME));
        assert!(LAYOUT_INDEX.contains_key(DEFAULT_LAYOUT));
        assert!(HERO_INDEX.contains_key(DEFAULT_HERO_STYLE));
    }
}
