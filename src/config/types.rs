//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Canvas settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Fill used for new, cleared, and resized surfaces
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
        }
    }
}

/// Stroke settings.
///
/// Stroke color is not configured directly: it is derived from the red and
/// blue toggles at commit time, with `red_blue_mix` used when both are on.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PenConfig {
    /// Pen width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_pen_width")]
    pub width: f64,

    /// Color used when both the red and blue toggles are set
    #[serde(default = "default_red_blue_mix")]
    pub red_blue_mix: [u8; 3],
}

impl Default for PenConfig {
    fn default() -> Self {
        Self {
            width: default_pen_width(),
            red_blue_mix: default_red_blue_mix(),
        }
    }
}

/// Defaults offered to the text edit dialog for new annotations.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TextConfig {
    /// Font family name (e.g., "Sans", "Monospace", "DejaVu Serif")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in points (valid range: 6.0 - 200.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Initial text color
    #[serde(default = "default_text_color")]
    pub color: ColorSpec,

    /// Where the ghost sits before the pointer first moves
    #[serde(default = "default_placement_origin")]
    pub placement_origin: [i32; 2],
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            color: default_text_color(),
            placement_origin: default_placement_origin(),
        }
    }
}

/// Display-only chrome drawn by the compositor.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CompositorConfig {
    /// Outline color around the selected annotation
    #[serde(default = "default_selection_color")]
    pub selection_color: ColorSpec,

    /// Outline width in pixels (valid range: 1.0 - 10.0)
    #[serde(default = "default_selection_width")]
    pub selection_width: f64,

    /// Opacity of the ghost text while placing (0 - 255)
    #[serde(default = "default_ghost_alpha")]
    pub ghost_alpha: u8,

    /// Opacity of the dashed ghost outline (0 - 255)
    #[serde(default = "default_ghost_outline_alpha")]
    pub ghost_outline_alpha: u8,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            selection_color: default_selection_color(),
            selection_width: default_selection_width(),
            ghost_alpha: default_ghost_alpha(),
            ghost_outline_alpha: default_ghost_outline_alpha(),
        }
    }
}

/// UI preferences.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    /// Startup language code: "en" or "bg"
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_background() -> ColorSpec {
    ColorSpec::Rgb([255, 255, 255])
}

fn default_pen_width() -> f64 {
    2.0
}

fn default_red_blue_mix() -> [u8; 3] {
    [128, 0, 128]
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_size() -> f64 {
    18.0
}

fn default_font_weight() -> String {
    "bold".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_text_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_placement_origin() -> [i32; 2] {
    [10, 10]
}

fn default_selection_color() -> ColorSpec {
    ColorSpec::Rgb([255, 69, 0])
}

fn default_selection_width() -> f64 {
    2.0
}

fn default_ghost_alpha() -> u8 {
    160
}

fn default_ghost_outline_alpha() -> u8 {
    120
}

fn default_locale() -> String {
    "en".to_string()
}
