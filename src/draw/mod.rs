//! Rendering primitives and the raster surface (Cairo-based).
//!
//! This module defines the core drawing types of the canvas:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`FontDescriptor`]: font family, size, weight, and style for annotations
//! - [`measure()`]: layout measurement shared by rendering and hit-testing
//! - [`RasterSurface`]: the persistent bitmap strokes are committed into
//! - [`Compositor`]: merges surface and annotations for display or export

pub mod color;
pub mod compose;
pub mod font;
pub mod measure;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use compose::{CompositeError, Compositor, Ghost};
pub use font::FontDescriptor;
pub use measure::{measure, measure_at};
pub use render::PenSpec;
pub use surface::{RasterSurface, SurfaceError};

pub use color::{BLACK, BLUE, GRAY, ORANGE_RED, PURPLE, RED, WHITE};
