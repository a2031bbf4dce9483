//! Gallery configuration module.
//!
//! Handles loading, validating, and merging the optional `gallery.toml`. Stock
//! defaults reproduce the built-in gallery exactly; a config file only needs
//! the values it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Syntax Theme Gallery"
//! themes = ["1337", "base16-eighties-dark", ...]   # order = navigation order
//!
//! [sample]
//! language = "go"           # syntect syntax token (name or extension)
//! code = """..."""          # snippet shown on every page
//!
//! [combined]
//! line_numbers = false      # number the lines on all.html
//!
//! [footer]
//! name = "syntect"          # credited in every page footer
//! url = "https://github.com/trishume/syntect"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::themes::DEFAULT_THEMES;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// File names the generator writes besides the theme pages.
const RESERVED_NAMES: &[&str] = &["index", "all"];

const DEFAULT_SAMPLE: &str = r#"package main

import "fmt"

func main() {
	fmt.Println("Hello, World!")
}
"#;

/// Gallery configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Title of the index and combined pages.
    pub title: String,
    /// Theme names, in gallery order.
    pub themes: Vec<String>,
    /// The snippet every theme is shown with.
    pub sample: SampleConfig,
    /// Combined page (`all.html`) settings.
    pub combined: CombinedConfig,
    /// Attribution in the page footer.
    pub footer: FooterConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Syntax Theme Gallery".to_string(),
            themes: DEFAULT_THEMES.iter().map(|t| t.to_string()).collect(),
            sample: SampleConfig::default(),
            combined: CombinedConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Validate values the generator cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.themes.is_empty() {
            return Err(ConfigError::Validation("themes must not be empty".into()));
        }
        let mut seen = HashSet::new();
        for theme in &self.themes {
            validate_theme_name(theme)?;
            if !seen.insert(theme.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "theme `{theme}` is listed more than once"
                )));
            }
        }
        if self.sample.language.trim().is_empty() {
            return Err(ConfigError::Validation(
                "sample.language must not be empty".into(),
            ));
        }
        if self.sample.code.trim().is_empty() {
            return Err(ConfigError::Validation("sample.code must not be empty".into()));
        }
        Ok(())
    }
}

/// Theme names become file names, so they are held to a safe alphabet.
fn validate_theme_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Validation(
            "theme names must not be empty".into(),
        ));
    }
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if !valid_chars || name.starts_with('.') {
        return Err(ConfigError::Validation(format!(
            "theme `{name}` must use only letters, digits, '-', '_' or '.', and not start with '.'"
        )));
    }
    if RESERVED_NAMES.contains(&name) {
        return Err(ConfigError::Validation(format!(
            "theme `{name}` would overwrite {name}.html"
        )));
    }
    Ok(())
}

/// The code sample shown on every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SampleConfig {
    /// Syntax token understood by the highlighter (`"go"`, `"rs"`, `"Python"`).
    pub language: String,
    /// Source code of the sample.
    pub code: String,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            language: "go".to_string(),
            code: DEFAULT_SAMPLE.to_string(),
        }
    }
}

/// Combined page settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CombinedConfig {
    /// Number the lines of every sample on `all.html`.
    pub line_numbers: bool,
}

/// Footer attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    /// Name credited for the highlighting.
    pub name: String,
    /// Link for the credited name.
    pub url: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            name: "syntect".to_string(),
            url: "https://github.com/trishume/syntect".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an overlay
///   `themes` array replaces the whole default list.
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

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GalleryConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config file at `path`, falling back to stock defaults when it
/// does not exist.
pub fn load_config(path: &Path) -> Result<GalleryConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `gallery.toml` with all keys and
/// explanations.
///
/// Used by the `gen-config` CLI command. The theme list is rendered from
/// [`DEFAULT_THEMES`] so the two cannot drift apart.
pub fn stock_config_toml() -> String {
    let themes: String = DEFAULT_THEMES
        .iter()
        .map(|t| format!("    \"{t}\",\n"))
        .collect();
    let defaults = GalleryConfig::default();

    format!(
        r##"# Theme Gallery Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Title of index.html and all.html.
title = "{title}"

# Themes to render, in gallery order. The order drives the Prev/Next buttons.
# Run `theme-gallery list --available` for every name the highlighter knows.
themes = [
{themes}]

# ---------------------------------------------------------------------------
# Sample code
# ---------------------------------------------------------------------------
[sample]
# Syntax used for highlighting: a language name or file extension.
language = "{language}"

# The snippet shown on every page.
code = '''
{code}'''

# ---------------------------------------------------------------------------
# Combined page (all.html)
# ---------------------------------------------------------------------------
[combined]
# Number the lines of each sample.
line_numbers = false

# ---------------------------------------------------------------------------
# Footer
# ---------------------------------------------------------------------------
[footer]
# Credited as "using <name>" in every footer.
name = "{footer_name}"
url = "{footer_url}"
"##,
        title = defaults.title,
        language = defaults.sample.language,
        code = defaults.sample.code,
        footer_name = defaults.footer.name,
        footer_url = defaults.footer.url,
    )
}
