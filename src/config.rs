//! Generation configuration.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is merged on top, so a
//! config file only needs the keys it wants to change.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml     # Generation settings (optional)
//! └── site.toml       # People, publications, courses, projects
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "assets"     # Stylesheet directory, relative to the output root
//! stylesheets = [
//!     "font-awesome/css/font-awesome.css",
//!     "bootstrap.min.css",
//!     "style.css",
//! ]
//!
//! [music]
//! enabled = true            # Show the music gallery when tracks are listed
//! embed_base = "https://open.spotify.com/embed/track/"
//!
//! [video]
//! embed_base = "https://www.youtube.com/embed/"
//!
//! [footer]
//! credit_text = "Design and source code based on"
//! credit_name = ""          # Footer link text (omit link when empty)
//! credit_url = ""
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
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

/// Settings injected into the page composer for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding the stylesheets, relative to the output root.
    pub assets_dir: String,
    /// Stylesheet files inside `assets_dir`, linked in this order.
    pub stylesheets: Vec<String>,
    pub music: MusicConfig,
    pub video: VideoConfig,
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            stylesheets: vec![
                "font-awesome/css/font-awesome.css".to_string(),
                "bootstrap.min.css".to_string(),
                "style.css".to_string(),
            ],
            music: MusicConfig::default(),
            video: VideoConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stylesheets.is_empty() {
            return Err(ConfigError::Validation(
                "stylesheets must not be empty".into(),
            ));
        }
        if self.stylesheets.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "stylesheets entries must not be blank".into(),
            ));
        }
        if self.assets_dir.starts_with('/') {
            return Err(ConfigError::Validation(
                "assets_dir must be relative to the output root".into(),
            ));
        }
        if self.music.embed_base.is_empty() {
            return Err(ConfigError::Validation(
                "music.embed_base must not be empty".into(),
            ));
        }
        if self.video.embed_base.is_empty() {
            return Err(ConfigError::Validation(
                "video.embed_base must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Stylesheet hrefs for a page `depth` directories below the output root.
    ///
    /// The home page is depth 0; project pages (`project/<id>/`) are depth 2.
    pub fn stylesheet_hrefs(&self, depth: usize) -> Vec<String> {
        let prefix = "../".repeat(depth);
        let dir = self.assets_dir.trim_end_matches('/');
        self.stylesheets
            .iter()
            .map(|sheet| {
                if dir.is_empty() {
                    format!("{prefix}{sheet}")
                } else {
                    format!("{prefix}{dir}/{sheet}")
                }
            })
            .collect()
    }
}

/// Music gallery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MusicConfig {
    /// Render the gallery when the site lists tracks.
    pub enabled: bool,
    /// Embed URL prefix; the track id is appended verbatim.
    pub embed_base: String,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            embed_base: "https://open.spotify.com/embed/track/".to_string(),
        }
    }
}

/// Project-page video embeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VideoConfig {
    /// Embed URL prefix; the video id is appended verbatim.
    pub embed_base: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            embed_base: "https://www.youtube.com/embed/".to_string(),
        }
    }
}

/// Attribution line at the bottom of the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    pub credit_text: String,
    pub credit_name: String,
    pub credit_url: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            credit_text: "Design and source code based on".to_string(),
            credit_name: String::new(),
            credit_url: String::new(),
        }
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
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
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

/// Load config from `config.toml` in the given directory, on top of the
/// stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Scholar Site Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory holding the stylesheets, relative to the output root.
# Project pages live two levels down and get "../../" prepended.
assets_dir = "assets"

# Stylesheets linked from every page, in this order.
stylesheets = [
    "font-awesome/css/font-awesome.css",
    "bootstrap.min.css",
    "style.css",
]

# ---------------------------------------------------------------------------
# Music gallery (home page)
# ---------------------------------------------------------------------------
[music]
# Render the collapsible gallery when site.toml lists music tracks.
enabled = true

# Player URL prefix; each track id is appended as-is.
embed_base = "https://open.spotify.com/embed/track/"

# ---------------------------------------------------------------------------
# Project-page videos
# ---------------------------------------------------------------------------
[video]
# Player URL prefix; each video id is appended as-is.
embed_base = "https://www.youtube.com/embed/"

# ---------------------------------------------------------------------------
# Footer attribution
# ---------------------------------------------------------------------------
[footer]
credit_text = "Design and source code based on"
# Link text and target. The link is omitted while either is empty.
credit_name = ""
credit_url = ""
"##
}
