//! RGBA color type and predefined color constants.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchboard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let ghost = red.with_alpha(0.5);
/// assert_eq!(ghost.a, 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Returns the 8-bit RGB channels, ignoring alpha.
    pub fn to_rgb8(self) -> [u8; 3] {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Returns the same color with its alpha replaced.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Installs this color as the source of a Cairo context.
    pub fn apply(self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined black color, the stroke color when no toggle is set
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined purple color (128, 0, 128), used when red and blue are both toggled
pub const PURPLE: Color = Color {
    r: 128.0 / 255.0,
    g: 0.0,
    b: 128.0 / 255.0,
    a: 1.0,
};

/// Predefined white color, the default canvas background
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Orange-red (255, 69, 0), the default selection outline color
pub const ORANGE_RED: Color = Color {
    r: 1.0,
    g: 69.0 / 255.0,
    b: 0.0,
    a: 1.0,
};

/// Gray (128, 128, 128), used for the dashed ghost outline
pub const GRAY: Color = Color {
    r: 128.0 / 255.0,
    g: 128.0 / 255.0,
    b: 128.0 / 255.0,
    a: 1.0,
};

/// Maps a configuration color name to a predefined color.
///
/// Matching is case-insensitive; unknown names return `None`.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "red" => Some(RED),
        "blue" => Some(BLUE),
        "purple" => Some(PURPLE),
        "white" => Some(WHITE),
        "orangered" | "orange-red" => Some(ORANGE_RED),
        "gray" | "grey" => Some(GRAY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_map_case_insensitively() {
        assert_eq!(name_to_color("Red"), Some(RED));
        assert_eq!(name_to_color("orange-red"), Some(ORANGE_RED));
        assert_eq!(name_to_color("grey"), Some(GRAY));
        assert_eq!(name_to_color("chartreuse"), None);
    }

    #[test]
    fn rgb8_conversion_is_lossless_for_byte_values() {
        let color = Color::from_rgb8(255, 69, 0);
        assert_eq!(color, ORANGE_RED);
        assert_eq!(color.to_rgb8(), [255, 69, 0]);
        assert_eq!(PURPLE.to_rgb8(), [128, 0, 128]);
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(RED.with_alpha(2.0).a, 1.0);
        assert_eq!(RED.with_alpha(-1.0).a, 0.0);
        assert_eq!(RED.with_alpha(0.25).r, 1.0);
    }
}
