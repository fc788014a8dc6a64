//! Configuration loading for Emblem.
//!
//! Configuration is loaded from TOML files with environment variable
//! overrides (`EMBLEM_CANVAS__SIZE=800`, `EMBLEM_HASHING__BACKEND=rolling`).

use crate::hasher::HashBackend;
use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "config.default.toml";

pub const DEFAULT_FOOTER_TEXT: &str = "Bionic Metamaterials";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct EmblemConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub canvas: CanvasConfig,

    #[serde(default)]
    pub hashing: HashingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: String,

    /// File formats written by `generate`, by extension.
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,

    /// Output pixels per SVG unit when rasterising.
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            formats: default_formats(),
            pixel_ratio: default_pixel_ratio(),
        }
    }
}

fn default_directory() -> String {
    "output".to_string()
}

fn default_formats() -> Vec<String> {
    vec!["svg".to_string(), "png".to_string()]
}

fn default_pixel_ratio() -> f32 {
    3.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_size")]
    pub size: f64,

    #[serde(default = "default_gap")]
    pub gap: f64,

    #[serde(default = "default_caption_height")]
    pub caption_height: f64,

    #[serde(default = "default_footer_text")]
    pub footer_text: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            gap: default_gap(),
            caption_height: default_caption_height(),
            footer_text: default_footer_text(),
        }
    }
}

fn default_size() -> f64 {
    600.0
}

fn default_gap() -> f64 {
    12.0
}

fn default_caption_height() -> f64 {
    48.0
}

fn default_footer_text() -> String {
    DEFAULT_FOOTER_TEXT.to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct HashingConfig {
    #[serde(default)]
    pub backend: HashBackend,
}

impl EmblemConfig {
    /// Load `config.default.toml`, then `path`, then `EMBLEM_*` variables.
    ///
    /// Missing files are skipped. A source that parses but does not fit the
    /// schema falls back to the defaults with a warning.
    pub fn load(path: &Path) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("EMBLEM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let emblem_config = config.try_deserialize().unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid configuration, using defaults");
            EmblemConfig::default()
        });
        Ok(emblem_config)
    }
}
