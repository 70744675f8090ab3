#![warn(missing_docs)]

//! Project configuration model for siteforge
//!
//! Defines the `ProjectConfig` structure produced by the wizard UI and the
//! pre-generation validator. The configuration is owned by the caller and
//! read-only to the generation pipeline.

pub mod error;
pub mod types;
pub mod validator;

pub use error::{ConfigError, Result};
pub use types::{
    DesignConfig, FooterConfig, HeaderConfig, MenuItem, PageConfig, ProjectConfig,
};
pub use validator::ConfigValidator;
