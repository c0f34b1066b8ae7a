//! Canvas core for a single-window paint utility.
//!
//! Strokes (freehand, line, arc) are committed into a persistent Cairo raster
//! surface; text annotations live in a separate layer above it so they can be
//! selected, edited, and deleted after placement. The [`draw::Compositor`]
//! merges both for display (with selection and placement chrome) and for
//! export (flattened, chrome-free).
//!
//! The embedding UI owns the window, menus, and dialogs. It forwards pointer
//! events and commands to an [`InteractionController`] and paints the image
//! returned by [`InteractionController::render_display`].

pub mod annotation;
pub mod codec;
pub mod config;
pub mod draw;
pub mod error;
pub mod i18n;
pub mod input;
pub mod util;

pub use config::Config;
pub use error::{CanvasError, CanvasResult};
pub use input::{InteractionController, InteractionState};
