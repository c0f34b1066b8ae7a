//! Drawing tool selection and stroke color toggles.

use crate::draw::{Color, color};

/// Drawing tool selection.
///
/// The active tool determines what is committed when the user drags the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand drawing - each pointer sample is committed immediately (default)
    #[default]
    Freehand,
    /// Straight line - previewed during the drag, committed on release
    Line,
    /// Lower half of the ellipse inscribed in the drag rectangle
    Arc,
}

/// The two independent stroke color checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorToggles {
    pub red: bool,
    pub blue: bool,
}

impl ColorToggles {
    pub fn new(red: bool, blue: bool) -> Self {
        Self { red, blue }
    }

    /// Stroke color for the current toggles.
    ///
    /// Neither set is black, one set is that color, both set is `mix`.
    pub fn stroke_color(self, mix: Color) -> Color {
        match (self.red, self.blue) {
            (false, false) => color::BLACK,
            (true, false) => color::RED,
            (false, true) => color::BLUE,
            (true, true) => mix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, BLUE, PURPLE, RED};

    #[test]
    fn stroke_color_follows_toggles() {
        assert_eq!(ColorToggles::new(false, false).stroke_color(PURPLE), BLACK);
        assert_eq!(ColorToggles::new(true, false).stroke_color(PURPLE), RED);
        assert_eq!(ColorToggles::new(false, true).stroke_color(PURPLE), BLUE);
        assert_eq!(ColorToggles::new(true, true).stroke_color(PURPLE), PURPLE);
    }
}
