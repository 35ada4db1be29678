//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! are overridden by an optional `config.toml` in the data directory.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [sections]
//! show_blog = false         # Blog section and nav entry
//! show_projects = true
//! show_experience = true
//! show_education = true
//!
//! [features]
//! contact_form = true       # Contact form (otherwise contact details only)
//! dark_mode = true          # Dark-mode toggle in the navbar
//! animations = true         # Scroll-triggered section animations
//!
//! [blog]
//! posts_per_page = 6
//! recent_posts = 5
//! related_posts = 3
//! popular_tags = 10
//! words_per_minute = 200    # Reading-time estimate
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [sections]
//! show_blog = true
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::blog::{
    DEFAULT_POPULAR_TAGS, DEFAULT_POSTS_PER_PAGE, DEFAULT_RECENT_POSTS, DEFAULT_RELATED_POSTS,
};
use crate::text::DEFAULT_WORDS_PER_MINUTE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults matching the stock site. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Which optional page sections are shown.
    pub sections: SectionsConfig,
    /// Presentation feature switches.
    pub features: FeaturesConfig,
    /// Default sizes for blog queries.
    pub blog: BlogConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.blog.posts_per_page == 0 {
            return Err(ConfigError::Validation(
                "blog.posts_per_page must be at least 1".into(),
            ));
        }
        if self.blog.words_per_minute == 0 {
            return Err(ConfigError::Validation(
                "blog.words_per_minute must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Visibility of the optional page sections.
///
/// Home, About, Skills and Contact are always shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionsConfig {
    pub show_blog: bool,
    pub show_projects: bool,
    pub show_experience: bool,
    pub show_education: bool,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            show_blog: false,
            show_projects: true,
            show_experience: true,
            show_education: true,
        }
    }
}

/// Presentation switches consumed by the page layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeaturesConfig {
    pub contact_form: bool,
    pub dark_mode: bool,
    pub animations: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            contact_form: true,
            dark_mode: true,
            animations: true,
        }
    }
}

/// Default result sizes for blog queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlogConfig {
    pub posts_per_page: usize,
    pub recent_posts: usize,
    pub related_posts: usize,
    pub popular_tags: usize,
    pub words_per_minute: u32,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            posts_per_page: DEFAULT_POSTS_PER_PAGE,
            recent_posts: DEFAULT_RECENT_POSTS,
            related_posts: DEFAULT_RELATED_POSTS,
            popular_tags: DEFAULT_POPULAR_TAGS,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file next to portfolio.json and blog.json in the data directory.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Page sections
# ---------------------------------------------------------------------------
# Home, About, Skills and Contact are always shown.
[sections]
show_blog = false
show_projects = true
show_experience = true
show_education = true

# ---------------------------------------------------------------------------
# Features
# ---------------------------------------------------------------------------
[features]
# Show the contact form (otherwise only contact details are listed).
contact_form = true

# Offer a dark-mode toggle in the navigation bar.
dark_mode = true

# Animate sections as they scroll into view.
animations = true

# ---------------------------------------------------------------------------
# Blog queries
# ---------------------------------------------------------------------------
[blog]
# Posts per page in the paginated post list.
posts_per_page = 6

# Number of posts in the "recent posts" list.
recent_posts = 5

# Maximum number of related posts shown under a post.
related_posts = 3

# Number of tags in the "popular tags" list.
popular_tags = 10

# Reading speed used for reading-time estimates.
words_per_minute = 200
"##
}
