#![warn(missing_docs)]

//! Design preset tables for siteforge
//!
//! Fixed lookup tables for theme, layout, and hero-style presets. Lookups are
//! total: an unknown id falls back to the default preset rather than erroring,
//! so the context builder never fails on a design selection.

pub mod registry;
pub mod types;

pub use registry::{
    hero_style, layout, theme, DEFAULT_HERO_STYLE, DEFAULT_LAYOUT, DEFAULT_THEME,
};
pub use types::{
    AnimationClasses, ComponentClasses, HeroPreset, LayoutPreset, ThemeColors, ThemePreset,
    Typography, Spacing,
};
