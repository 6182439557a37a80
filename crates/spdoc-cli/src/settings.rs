//! Settings file - layered under command-line flags.
//!
//! Settings are read from `--config PATH` when given, otherwise from the
//! platform-specific config folder:
//! - macOS: ~/Library/Application Support/com.spdoc.spdoc/
//! - Windows: %APPDATA%/spdoc/spdoc/config/
//! - Linux: ~/.config/spdoc/

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use spdoc_core::{PageOptions, RevealConfig};
use spdoc_model::FilterComposition;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "spdoc";
const APP_NAME: &str = "spdoc";
const CONFIG_FILENAME: &str = "settings.toml";

/// Effective settings (defaults, then the settings file).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub view: ViewSettings,
    pub reveal: RevealSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// How search and the type filter combine.
    pub composition: FilterComposition,
}

/// Scroll reveal tuning, in pixels and milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub threshold: f32,
    pub bottom_margin_px: f32,
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub offset_px: f32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        let config = RevealConfig::default();
        Self {
            threshold: config.threshold,
            bottom_margin_px: config.bottom_margin_px,
            delay_ms: config.delay.as_millis() as u64,
            duration_ms: config.duration.as_millis() as u64,
            offset_px: config.offset_px,
        }
    }
}

impl From<&RevealSettings> for RevealConfig {
    fn from(settings: &RevealSettings) -> Self {
        Self {
            threshold: if settings.threshold.is_finite() {
                settings.threshold.clamp(0.0, 1.0)
            } else {
                RevealConfig::default().threshold
            },
            bottom_margin_px: settings.bottom_margin_px,
            delay: Duration::from_millis(settings.delay_ms),
            duration: Duration::from_millis(settings.duration_ms),
            offset_px: settings.offset_px,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog file used instead of the built-in catalog.
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Resolve a relative `[catalog] path` against the folder holding the
    /// settings file it was read from.
    #[must_use]
    pub fn relative_to(mut self, settings_file: &Path) -> Self {
        if let Some(path) = &self.catalog.path
            && path.is_relative()
            && let Some(dir) = settings_file.parent()
        {
            self.catalog.path = Some(dir.join(path));
        }
        self
    }

    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            composition: self.view.composition,
            reveal: RevealConfig::from(&self.reveal),
        }
    }
}

/// Path of the default settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Parse settings TOML.
pub fn parse_settings(contents: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(contents)
}

/// Load settings.
///
/// An explicit path must exist and parse. The default file is optional:
/// when it is missing, unreadable or malformed, defaults are used and a
/// warning is logged.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        let settings = parse_settings(&content)
            .with_context(|| format!("parse settings {}", path.display()))?
            .relative_to(path);
        tracing::info!("Loaded settings from {:?}", path);
        return Ok(settings);
    }

    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Ok(Settings::default());
    };

    match fs::read_to_string(&path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                Ok(settings.relative_to(&path))
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                Ok(Settings::default())
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No settings file found at {:?}, using defaults", path);
            Ok(Settings::default())
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Ok(Settings::default())
        }
    }
}

/// Render settings as TOML.
pub fn settings_to_toml(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings).context("serialize settings")
}
