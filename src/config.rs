//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the project root. The
//! file is optional and sparse: stock defaults are serialized to TOML, user
//! values are merged on top, and the result is deserialized and validated.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! base_url = "/animations"   # Prefix for every generated link and asset URL
//! title = "GeomechMotion — Numerical Modelling Animations"
//! tagline = "Select a category to explore animations:"
//! output_dir = "docs"        # Generated pages; also holds the template fragments
//!
//! [[categories]]
//! slug = "constitutive-models"
//! title = "Constitutive Models"
//!
//! [[categories]]
//! slug = "plaxis"
//! title = "PLAXIS"
//!
//! [[categories]]
//! slug = "undergraduate"
//! title = "Undergraduate"
//! ```
//!
//! Setting `categories` replaces the whole list; order is the order of the
//! index page links. Unknown keys are rejected to catch typos early.

use crate::naming;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the optional config file at the project root.
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
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Path prefix prepended to every link, so the site works when served
    /// from a subpath. Empty means the site lives at the domain root.
    pub base_url: String,
    /// Heading of the index page.
    pub title: String,
    /// Intro line shown above the category list on the index page.
    pub tagline: String,
    /// Output directory, relative to the project root.
    pub output_dir: String,
    /// Ordered category list. Each maps to `assets/videos/{slug}/`.
    pub categories: Vec<Category>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "/animations".to_string(),
            title: "GeomechMotion — Numerical Modelling Animations".to_string(),
            tagline: "Select a category to explore animations:".to_string(),
            output_dir: "docs".to_string(),
            categories: vec![
                Category::new("constitutive-models", "Constitutive Models"),
                Category::new("plaxis", "PLAXIS"),
                Category::new("undergraduate", "Undergraduate"),
            ],
        }
    }
}

/// A top-level content grouping with a fixed slug and display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub slug: String,
    pub title: String,
}

impl Category {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable for link and path generation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.is_empty() && !self.base_url.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "base_url must start with '/': {:?}",
                self.base_url
            )));
        }
        if self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "base_url must not end with '/': {:?}",
                self.base_url
            )));
        }
        if self.output_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if !naming::is_slug(&category.slug) {
                return Err(ConfigError::Validation(format!(
                    "category slug {:?} must be lowercase [a-z0-9-_] without repeated or edge hyphens",
                    category.slug
                )));
            }
            if !seen.insert(category.slug.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate category slug {:?}",
                    category.slug
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values, arrays included, replace base values entirely.
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
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load the site config for a project root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# reelsite configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Prefix prepended to every generated link and asset URL, for sites served
# from a subpath (e.g. a GitHub Pages project site). Use "" for the domain root.
base_url = "/animations"

# Index page heading and the line shown above the category list.
title = "GeomechMotion — Numerical Modelling Animations"
tagline = "Select a category to explore animations:"

# Where generated pages are written, relative to the project root.
# The header/footer fragments _template_top.html and _template_bottom.html
# are read from this directory too.
output_dir = "docs"

# ---------------------------------------------------------------------------
# Categories
# ---------------------------------------------------------------------------
# Ordered list. Each category maps to assets/videos/<slug>/, which holds
# either video files directly or one level of subfolders with videos.
# Categories whose directory does not exist are skipped.
# Setting this replaces the whole list.

[[categories]]
slug = "constitutive-models"
title = "Constitutive Models"

[[categories]]
slug = "plaxis"
title = "PLAXIS"

[[categories]]
slug = "undergraduate"
title = "Undergraduate"
"##
}

// =============================================================================
// Tests
// =============================================================================
