//! Text layout measurement, independent of any drawing target.

use super::font::FontDescriptor;
use crate::util::{Point, Rect};

/// Measures the logical extent of `text` laid out with `font`.
///
/// The returned rectangle is anchored at the origin; callers move it to an
/// annotation's anchor with [`Rect::at`]. Multi-line text is measured as one
/// block. Returns `None` for empty text or when no measuring context can be
/// created.
pub fn measure(text: &str, font: &FontDescriptor) -> Option<Rect> {
    if text.is_empty() {
        return None;
    }

    // Use a tiny image surface for measurement; the layout is all we need.
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 1, 1).ok()?;
    let ctx = cairo::Context::new(&surface).ok()?;

    let layout = pangocairo::functions::create_layout(&ctx);
    layout.set_font_description(Some(&font.pango_description()));
    layout.set_text(text);

    let (width, height) = layout.pixel_size();

    // Whitespace-only lines can report zero width; keep the box clickable.
    Rect::new(0, 0, width.max(1), height.max(1))
}

/// Measures `text` and places the result at `anchor`.
pub fn measure_at(text: &str, font: &FontDescriptor, anchor: Point) -> Option<Rect> {
    measure(text, font).map(|rect| rect.at(anchor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_bounds() {
        assert!(measure("", &FontDescriptor::default()).is_none());
    }

    #[test]
    fn measured_box_starts_at_origin() {
        let rect = measure("Hello", &FontDescriptor::default()).expect("text should have bounds");
        assert_eq!(rect.origin(), Point::new(0, 0));
        assert!(rect.width > 0);
        assert!(rect.height > 0);
    }

    #[test]
    fn larger_font_measures_larger() {
        let small = measure("Hello", &FontDescriptor::new("Sans", 10.0, "normal", "normal")).unwrap();
        let large = measure("Hello", &FontDescriptor::new("Sans", 40.0, "normal", "normal")).unwrap();
        assert!(large.height > small.height);
        assert!(large.width > small.width);
    }

    #[test]
    fn multi_line_text_is_taller() {
        let font = FontDescriptor::default();
        let one = measure("line", &font).unwrap();
        let two = measure("line\nline", &font).unwrap();
        assert!(two.height > one.height);
    }

    #[test]
    fn measure_at_moves_to_anchor() {
        let rect = measure_at("Hi", &FontDescriptor::default(), Point::new(10, 10)).unwrap();
        assert_eq!(rect.origin(), Point::new(10, 10));
        assert!(rect.contains(Point::new(10, 10)));
    }
}
