//! Pre-generation configuration validation
//!
//! A validation failure is fatal: the generation run aborts before any file
//! work. Unknown family, theme, or feature identifiers are deliberately not
//! errors here; they fall back to documented defaults downstream.

use std::collections::HashSet;

use crate::error::{ConfigError, Result};
use crate::types::ProjectConfig;

/// Validates a project configuration before generation
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the structural requirements of a configuration
    ///
    /// # Errors
    /// Returns the first `ConfigError` encountered; the caller treats any
    /// error as run-aborting.
    pub fn validate(config: &ProjectConfig) -> Result<()> {
        if config.business_name.trim().is_empty() {
            return Err(ConfigError::MissingField("businessName"));
        }

        let mut seen = HashSet::new();
        for page in &config.pages {
            if page.id.trim().is_empty() {
                return Err(ConfigError::InvalidPageId {
                    id: page.id.clone(),
                    reason: "page id is empty".to_string(),
                });
            }
            if !Self::is_path_safe(&page.id) {
                return Err(ConfigError::InvalidPageId {
                    id: page.id.clone(),
                    reason: "page id may only contain lowercase letters, digits and hyphens"
                        .to_string(),
                });
            }
            if !seen.insert(page.id.as_str()) {
                return Err(ConfigError::DuplicatePage(page.id.clone()));
            }
        }

        for feature in &config.features {
            if feature.trim().is_empty() {
                return Err(ConfigError::InvalidFeature(feature.clone()));
            }
        }

        for (index, item) in config.header.menu_items.iter().enumerate() {
            if item.label.trim().is_empty() {
                return Err(ConfigError::InvalidMenuItem {
                    index,
                    reason: "menu item has no label".to_string(),
                });
            }
            if item.link.trim().is_empty() && item.children.is_empty() {
                return Err(ConfigError::InvalidMenuItem {
                    index,
                    reason: "menu item has neither a link nor children".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Page ids become URL segments and output directories
    fn is_path_safe(id: &str) -> bool {
        id.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MenuItem, PageConfig};

    fn valid_config() -> ProjectConfig {
        ProjectConfig {
            business_name: "Acme".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_minimal_config() {
        assert!(ConfigValidator::validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_business_name() {
        let config = ProjectConfig::default();
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("businessName")));
    }

    #[test]
    fn test_whitespace_business_name_rejected() {
        let mut config = valid_config();
        config.business_name = "   ".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_duplicate_page_ids_rejected() {
        let mut config = valid_config();
        config.pages = vec![
            PageConfig {
                id: "about".to_string(),
                enabled: true,
                ..Default::default()
            },
            PageConfig {
                id: "about".to_string(),
                enabled: false,
                ..Default::default()
            },
        ];
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePage(id) if id == "about"));
    }

    #[test]
    fn test_unsafe_page_id_rejected() {
        let mut config = valid_config();
        config.pages = vec![PageConfig {
            id: "../etc".to_string(),
            ..Default::default()
        }];
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_empty_feature_rejected() {
        let mut config = valid_config();
        config.features = vec!["".to_string()];
        assert!(matches!(
            ConfigValidator::validate(&config).unwrap_err(),
            ConfigError::InvalidFeature(_)
        ));
    }

    #[test]
    fn test_unknown_family_is_not_an_error() {
        let mut config = valid_config();
        config.family = "spaceship".to_string();
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_menu_item_without_label_rejected() {
        let mut config = valid_config();
        config.header.menu_items = vec![MenuItem {
            label: String::new(),
            link: "/about".to_string(),
            ..Default::default()
        }];
        assert!(matches!(
            ConfigValidator::validate(&config).unwrap_err(),
            ConfigError::InvalidMenuItem { index: 0, .. }
        ));
    }

    #[test]
    fn test_dropdown_container_without_link_is_valid() {
        let mut config = valid_config();
        config.header.menu_items = vec![MenuItem {
            label: "Services".to_string(),
            link: String::new(),
            children: vec![MenuItem {
                label: "Consulting".to_string(),
                link: "/services/consulting".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }];
        assert!(ConfigValidator::validate(&config).is_ok());
    }
}
