//! Font descriptor for text rendering.

/// Font configuration for annotation text.
///
/// Describes which font to use, including family name, size, weight, and style.
/// The same descriptor is used for measuring and drawing so the cached bounds of
/// an annotation always match what was painted.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "DejaVu Serif")
    pub family: String,

    /// Font size in points
    pub size: f64,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            size: 18.0,
            weight: "bold".to_string(),
            style: "normal".to_string(),
        }
    }
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: impl Into<String>, size: f64, weight: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            size,
            weight: weight.into(),
            style: style.into(),
        }
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size"
    /// Example: "Sans Bold 18" or "Monospace Italic 24"
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", self.size.round() as i32));

        parts.join(" ")
    }

    /// Builds the Pango description used by layout measurement and rendering.
    pub fn pango_description(&self) -> pango::FontDescription {
        pango::FontDescription::from_string(&self.to_pango_string())
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pango_string_default() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(), "Sans Bold 18");
    }

    #[test]
    fn test_pango_string_italic() {
        let font = FontDescriptor::new("Monospace", 24.0, "normal", "italic");
        assert_eq!(font.to_pango_string(), "Monospace Italic 24");
    }

    #[test]
    fn test_pango_string_custom() {
        let font = FontDescriptor::new("JetBrains Mono", 16.4, "light", "normal");
        assert_eq!(font.to_pango_string(), "JetBrains Mono Light 16");
    }
}
