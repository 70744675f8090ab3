//! Property tests for the generation pipeline.
//!
//! The pipeline is pure over its inputs: the same configuration and the
//! same template store must always produce the same report, output paths
//! are never duplicated, and templates without markup survive rendering
//! byte for byte.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use siteforge_config::{PageConfig, ProjectConfig};
use siteforge_generation::paths::layers;
use siteforge_generation::{
    ContextBuilder, MemoryTemplateStore, Parser, RenderContext, SiteGenerator, TemplateEngine,
};

fn store_for_everything() -> MemoryTemplateStore {
    let mut store = MemoryTemplateStore::new();
    let families = [
        siteforge_generation::ProjectFamily::Base,
        siteforge_generation::ProjectFamily::Commerce,
        siteforge_generation::ProjectFamily::WebApp,
        siteforge_generation::ProjectFamily::Ngo,
    ];
    for (_, template) in layers::BASE_PATHS {
        store.insert(*template, "{{businessName}}\n");
    }
    for family in families {
        for (_, template) in layers::family_overlay(family) {
            store.insert(*template, "{{businessName}}\n");
        }
        for page in ["about", "services", "contact", "shop", "cart", "checkout",
            "dashboard", "login", "register", "donate", "volunteer", "events"]
        {
            if let Some(template) = layers::page_template(family, page) {
                store.insert(template, "page\n");
            }
        }
    }
    for (_, paths) in layers::FEATURE_PATHS {
        for (_, template) in *paths {
            store.insert(*template, "feature\n");
        }
    }
    store.insert(layers::GENERIC_PAGE_TEMPLATE, "generic {{businessName}}\n");
    store
}

fn arb_config() -> impl Strategy<Value = ProjectConfig> {
    let name = "[A-Za-z][A-Za-z0-9 ]{0,16}";
    let family = prop_oneof![
        Just("base".to_string()),
        Just("commerce".to_string()),
        Just("webapp".to_string()),
        Just("ngo".to_string()),
        Just("mystery".to_string()),
    ];
    let pages = prop::collection::btree_set("[a-z]{1,8}", 0..5).prop_map(|ids| {
        ids.into_iter()
            .enumerate()
            .map(|(i, id)| PageConfig {
                id,
                name: None,
                enabled: i % 2 == 0,
                blocks: Vec::new(),
            })
            .collect::<Vec<_>>()
    });
    let features = prop::collection::btree_set(
        prop_oneof![
            Just("seo".to_string()),
            Just("blog".to_string()),
            Just("newsletter".to_string()),
            Just("gallery".to_string()),
            Just("not-a-feature".to_string()),
        ],
        0..4,
    )
    .prop_map(|set| set.into_iter().collect::<Vec<_>>());

    (name, family, pages, features).prop_map(|(business_name, family, pages, features)| {
        ProjectConfig {
            business_name,
            family,
            pages,
            features,
            ..Default::default()
        }
    })
}

fn run(config: &ProjectConfig) -> siteforge_generation::GenerationReport {
    SiteGenerator::new(Arc::new(store_for_everything()))
        .with_context_builder(ContextBuilder::new().with_year(2026))
        .generate(config)
        .expect("generated configs are valid")
}

proptest! {
    #[test]
    fn generation_is_deterministic(config in arb_config()) {
        let first = run(&config);
        let second = run(&config);

        let a: Vec<(&str, &str)> = first
            .files
            .iter()
            .map(|f| (f.path.as_str(), f.content.as_str()))
            .collect();
        let b: Vec<(&str, &str)> = second
            .files
            .iter()
            .map(|f| (f.path.as_str(), f.content.as_str()))
            .collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn output_paths_are_unique(config in arb_config()) {
        let report = run(&config);
        let mut seen = HashSet::new();
        for file in &report.files {
            prop_assert!(seen.insert(file.path.clone()), "duplicate path {}", file.path);
        }
    }

    #[test]
    fn disabled_pages_never_appear(config in arb_config()) {
        let report = run(&config);
        // Paths a feature rule set may add independently of the page list
        let feature_claimed: HashSet<&str> = config
            .features
            .iter()
            .filter_map(|f| layers::feature_paths(f))
            .flatten()
            .map(|entry| entry.0)
            .collect();
        let family = siteforge_generation::ProjectFamily::from_id(&config.family);
        for page in config.pages.iter().filter(|p| !p.enabled && p.id != "home") {
            let path = format!("app/{}/page.js", page.id);
            if layers::page_template(family, &page.id).is_none()
                && !feature_claimed.contains(path.as_str())
            {
                prop_assert!(report.file(&path).is_none(), "disabled page {} generated", path);
            }
        }
    }

    #[test]
    fn markup_free_text_renders_byte_identical(text in "[ -~\n]{0,200}") {
        prop_assume!(!text.contains("{{"));
        let parsed = Parser::parse(&text).unwrap();
        let result = TemplateEngine::new()
            .render(&parsed, &RenderContext::new())
            .unwrap();
        prop_assert_eq!(result.content, text);
    }

    #[test]
    fn rendering_arbitrary_sources_never_panics(source in "[ -~\n]{0,200}") {
        if let Ok(parsed) = Parser::parse(&source) {
            let _ = TemplateEngine::new().render(&parsed, &RenderContext::new());
        }
    }

    #[test]
    fn single_quoted_values_stay_inside_the_string(value in "[ -~]{0,40}") {
        let mut ctx = RenderContext::new();
        ctx.insert("value", value);
        let parsed = Parser::parse("const v = '{{value}}';").unwrap();
        let result = TemplateEngine::new().render(&parsed, &ctx).unwrap();

        // Between the delimiters every quote and backslash is escaped, so
        // stripping escape pairs must leave no bare quote behind
        let inner = &result.content["const v = '".len()..result.content.len() - "';".len()];
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                chars.next();
                continue;
            }
            prop_assert_ne!(c, '\'');
        }
    }
}
