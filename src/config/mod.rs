//! Configuration file support for sketchboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchboard/config.toml`. Settings include the canvas background,
//! pen width, text defaults, selection chrome, and the startup language.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, CompositorConfig, PenConfig, TextConfig, UiConfig};

use crate::draw::{Color, FontDescriptor};
use crate::i18n::Locale;
use crate::util::Point;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// background = [255, 255, 255]
///
/// [pen]
/// width = 2.0
/// red_blue_mix = [128, 0, 128]
///
/// [text]
/// font_family = "Sans"
/// font_size = 18.0
/// font_weight = "bold"
/// color = "black"
///
/// [chrome]
/// selection_color = [255, 69, 0]
/// ghost_alpha = 160
///
/// [ui]
/// locale = "bg"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Canvas background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Stroke width and toggle mix color
    #[serde(default)]
    pub pen: PenConfig,

    /// Text annotation defaults
    #[serde(default)]
    pub text: TextConfig,

    /// Selection outline and ghost preview styling
    #[serde(default)]
    pub chrome: CompositorConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `pen.width`: 0.5 - 50.0
    /// - `text.font_size`: 6.0 - 200.0
    /// - `chrome.selection_width`: 1.0 - 10.0
    pub fn validate_and_clamp(&mut self) {
        if !(0.5..=50.0).contains(&self.pen.width) {
            warn!(
                "Invalid pen width {:.1}, clamping to 0.5-50.0 range",
                self.pen.width
            );
            self.pen.width = if self.pen.width.is_nan() {
                2.0
            } else {
                self.pen.width.clamp(0.5, 50.0)
            };
        }

        if !(6.0..=200.0).contains(&self.text.font_size) {
            warn!(
                "Invalid font_size {:.1}, clamping to 6.0-200.0 range",
                self.text.font_size
            );
            self.text.font_size = if self.text.font_size.is_nan() {
                18.0
            } else {
                self.text.font_size.clamp(6.0, 200.0)
            };
        }

        if !(1.0..=10.0).contains(&self.chrome.selection_width) {
            warn!(
                "Invalid selection_width {:.1}, clamping to 1.0-10.0 range",
                self.chrome.selection_width
            );
            self.chrome.selection_width = if self.chrome.selection_width.is_nan() {
                2.0
            } else {
                self.chrome.selection_width.clamp(1.0, 10.0)
            };
        }

        if self.text.font_family.trim().is_empty() {
            warn!("Empty font_family, falling back to 'Sans'");
            self.text.font_family = "Sans".to_string();
        }

        let valid_weight = matches!(
            self.text.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .text
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            warn!(
                "Invalid font_weight '{}', falling back to 'bold'",
                self.text.font_weight
            );
            self.text.font_weight = "bold".to_string();
        }

        if !matches!(
            self.text.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.text.font_style
            );
            self.text.font_style = "normal".to_string();
        }

        if Locale::from_code(&self.ui.locale).is_none() {
            warn!("Unknown locale '{}', falling back to 'en'", self.ui.locale);
            self.ui.locale = Locale::English.code().to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads and validates configuration from `config_path`.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Serializes the config to TOML and writes it to `config_path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Default font offered for new annotations.
    pub fn text_font(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.text.font_family.clone(),
            self.text.font_size,
            self.text.font_weight.clone(),
            self.text.font_style.clone(),
        )
    }

    /// Default color offered for new annotations.
    pub fn text_color(&self) -> Color {
        self.text.color.to_color()
    }

    /// Initial ghost position while placing text.
    pub fn placement_origin(&self) -> Point {
        let [x, y] = self.text.placement_origin;
        Point::new(x, y)
    }

    pub fn background(&self) -> Color {
        self.canvas.background.to_color()
    }

    pub fn red_blue_mix(&self) -> Color {
        let [r, g, b] = self.pen.red_blue_mix;
        Color::from_rgb8(r, g, b)
    }

    /// Startup locale; unknown codes resolve to English.
    pub fn locale(&self) -> Locale {
        Locale::from_code(&self.ui.locale).unwrap_or_default()
    }
}
