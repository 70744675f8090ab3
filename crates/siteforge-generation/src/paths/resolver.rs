//! Manifest resolution
//!
//! Layer order is fixed: base rules, family overlay, enabled pages, then
//! feature rule sets. Within the first three layers a later entry for the
//! same output path overwrites the earlier one in place. Two features
//! claiming the same path is a configuration contradiction and fails the
//! run before any rendering starts.

use std::collections::HashMap;

use tracing::debug;

use siteforge_config::ProjectConfig;

use crate::error::ResolveError;
use crate::models::Manifest;
use crate::paths::layers::{
    self, family_overlay, page_template, ProjectFamily, BASE_PATHS, GENERIC_PAGE_TEMPLATE,
};

/// Resolves a configuration into an output manifest
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl PathResolver {
    /// Create a resolver
    pub fn new() -> Self {
        Self
    }

    /// Resolve the manifest for a configuration
    ///
    /// Unknown feature flags are skipped here; the generator reports them
    /// as warnings.
    pub fn resolve(&self, config: &ProjectConfig) -> Result<Manifest, ResolveError> {
        let known: Vec<(&str, &'static [(&'static str, &'static str)])> = config
            .features
            .iter()
            .filter_map(|f| layers::feature_paths(f).map(|paths| (f.as_str(), paths)))
            .collect();
        self.resolve_with_features(config, &known)
    }

    fn resolve_with_features(
        &self,
        config: &ProjectConfig,
        features: &[(&str, &'static [(&'static str, &'static str)])],
    ) -> Result<Manifest, ResolveError> {
        let family = ProjectFamily::from_id(&config.family);
        let mut manifest = Manifest::new();

        for (output, template) in BASE_PATHS {
            manifest.insert(*output, *template);
        }
        for (output, template) in family_overlay(family) {
            manifest.insert(*output, *template);
        }

        for page in config.pages.iter().filter(|p| p.enabled) {
            let output = if page.id == "home" {
                "app/page.js".to_string()
            } else {
                format!("app/{}/page.js", page.id)
            };
            let template = match page_template(family, &page.id) {
                Some(template) => template,
                None => {
                    debug!(page = %page.id, "no dedicated template, using generic page");
                    GENERIC_PAGE_TEMPLATE
                }
            };
            manifest.insert(output, template);
        }

        // First feature to claim a path wins it exclusively
        let mut claimed: HashMap<&str, &str> = HashMap::new();
        for (feature, paths) in features {
            for (output, template) in *paths {
                if let Some(first) = claimed.get(output) {
                    if first != feature {
                        return Err(ResolveError::FeatureCollision {
                            path: (*output).to_string(),
                            first: (*first).to_string(),
                            second: (*feature).to_string(),
                        });
                    }
                    continue;
                }
                claimed.insert(*output, *feature);
                manifest.insert(*output, *template);
            }
        }

        debug!(
            family = family.id(),
            entries = manifest.len(),
            "manifest resolved"
        );
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteforge_config::PageConfig;

    fn page(id: &str, enabled: bool) -> PageConfig {
        PageConfig {
            id: id.to_string(),
            name: None,
            enabled,
            blocks: Vec::new(),
        }
    }

    fn config(family: &str) -> ProjectConfig {
        ProjectConfig {
            business_name: "Acme".to_string(),
            family: family.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_base_manifest_contains_core_files() {
        let manifest = PathResolver::new().resolve(&config("base")).unwrap();
        assert_eq!(manifest.get("app/page.js"), Some("base/app/page.js.template"));
        assert_eq!(
            manifest.get("components/Header.js"),
            Some("base/components/Header.js.template")
        );
        assert!(manifest.contains("package.json"));
    }

    #[test]
    fn test_family_overlay_overwrites_in_place() {
        let base = PathResolver::new().resolve(&config("base")).unwrap();
        let commerce = PathResolver::new().resolve(&config("commerce")).unwrap();

        assert_eq!(
            commerce.get("components/Header.js"),
            Some("commerce/components/Header.js.template")
        );
        // Overwritten entries keep their base-layer position
        let base_pos = base
            .iter()
            .position(|e| e.output_path == "components/Header.js");
        let commerce_pos = commerce
            .iter()
            .position(|e| e.output_path == "components/Header.js");
        assert_eq!(base_pos, commerce_pos);
    }

    #[test]
    fn test_disabled_pages_produce_no_entry() {
        let mut cfg = config("base");
        cfg.pages = vec![page("about", true), page("services", false)];
        let manifest = PathResolver::new().resolve(&cfg).unwrap();
        assert!(manifest.contains("app/about/page.js"));
        assert!(!manifest.contains("app/services/page.js"));
    }

    #[test]
    fn test_home_page_maps_to_app_root() {
        let mut cfg = config("base");
        cfg.pages = vec![page("home", true)];
        let manifest = PathResolver::new().resolve(&cfg).unwrap();
        assert_eq!(manifest.get("app/page.js"), Some("base/app/page.js.template"));
        assert!(!manifest.contains("app/home/page.js"));
    }

    #[test]
    fn test_unknown_page_uses_generic_template() {
        let mut cfg = config("base");
        cfg.pages = vec![page("team", true)];
        let manifest = PathResolver::new().resolve(&cfg).unwrap();
        assert_eq!(manifest.get("app/team/page.js"), Some(GENERIC_PAGE_TEMPLATE));
    }

    #[test]
    fn test_family_page_template_selected() {
        let mut cfg = config("commerce");
        cfg.pages = vec![page("shop", true)];
        let manifest = PathResolver::new().resolve(&cfg).unwrap();
        assert_eq!(
            manifest.get("app/shop/page.js"),
            Some("commerce/app/shop/page.js.template")
        );
    }

    #[test]
    fn test_feature_rules_appended() {
        let mut cfg = config("base");
        cfg.features = vec!["seo".to_string(), "newsletter".to_string()];
        let manifest = PathResolver::new().resolve(&cfg).unwrap();
        assert!(manifest.contains("app/sitemap.js"));
        assert!(manifest.contains("components/NewsletterSignup.jsx"));
    }

    #[test]
    fn test_unknown_features_skipped() {
        let mut cfg = config("base");
        cfg.features = vec!["metaverse".to_string()];
        let before = PathResolver::new().resolve(&config("base")).unwrap().len();
        let manifest = PathResolver::new().resolve(&cfg).unwrap();
        assert_eq!(manifest.len(), before);
    }

    #[test]
    fn test_feature_collision_is_fatal() {
        const A: &[(&str, &str)] = &[("lib/shared.js", "features/a/shared.js.template")];
        const B: &[(&str, &str)] = &[("lib/shared.js", "features/b/shared.js.template")];
        let err = PathResolver::new()
            .resolve_with_features(&config("base"), &[("a", A), ("b", B)])
            .unwrap_err();
        match err {
            ResolveError::FeatureCollision { path, first, second } => {
                assert_eq!(path, "lib/shared.js");
                assert_eq!(first, "a");
                assert_eq!(second, "b");
            }
        }
    }

    #[test]
    fn test_duplicate_feature_flag_is_not_a_collision() {
        let mut cfg = config("base");
        cfg.features = vec!["seo".to_string(), "seo".to_string()];
        assert!(PathResolver::new().resolve(&cfg).is_ok());
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let mut cfg = config("ngo");
        cfg.pages = vec![page("donate", true), page("about", true)];
        cfg.features = vec!["blog".to_string(), "seo".to_string()];
        let a: Vec<_> = PathResolver::new().resolve(&cfg).unwrap().iter().cloned().collect();
        let b: Vec<_> = PathResolver::new().resolve(&cfg).unwrap().iter().cloned().collect();
        assert_eq!(a, b);
    }
}
