//! Geometry helpers shared by the surface, annotation, and input modules.
//!
//! This module provides:
//! - [`Point`]: integer position in surface coordinates
//! - [`Rect`]: axis-aligned rectangle used for annotation bounds and hit-testing
//! - Drag-rectangle construction for arc strokes

// ============================================================================
// Points
// ============================================================================

/// Integer position in surface coordinates (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point as Cairo user-space coordinates.
    pub fn to_f64(self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Rectangles
// ============================================================================

/// Axis-aligned rectangle with inclusive min and exclusive max edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x - min_x;
        let height = max_y - min_y;
        Self::new(min_x, min_y, width, height)
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns a copy moved so that its origin sits at `origin`.
    pub fn at(self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }

    /// Returns true when `point` lies inside the rectangle.
    ///
    /// The left/top edges are inside, the right/bottom edges are outside, so
    /// adjacent rectangles never both claim the same pixel.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Builds the rectangle spanned by two drag points.
///
/// Zero-width or zero-height drags are widened to 1 pixel so arc strokes
/// always have a drawable bounding box.
pub fn rect_from_points(a: Point, b: Point) -> Rect {
    Rect {
        x: a.x.min(b.x),
        y: a.y.min(b.y),
        width: (a.x - b.x).abs().max(1),
        height: (a.y - b.y).abs().max(1),
    }
}
