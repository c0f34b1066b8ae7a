//! Configuration enum types.

use crate::draw::{Color, color};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "black"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 69, 0]  # Orange-red
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: black, red, blue, purple, white, orangered, gray
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to an opaque [`Color`].
    ///
    /// Named colors are mapped with [`color::name_to_color`]. Unknown names
    /// fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => color::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                color::BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Rgb(color.to_rgb8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_falls_back_to_black() {
        assert_eq!(ColorSpec::Name("nope".into()).to_color(), color::BLACK);
        assert_eq!(ColorSpec::Name("Blue".into()).to_color(), color::BLUE);
        assert_eq!(ColorSpec::Rgb([255, 69, 0]).to_color(), color::ORANGE_RED);
    }
}
