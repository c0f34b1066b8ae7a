//! Input handling and the interaction state machine.
//!
//! This module translates pointer events and menu commands from the embedding UI
//! into canvas operations. It owns the raster surface and annotation store, the
//! current tool and color toggles, and the transient line/arc preview.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::MouseButton;
pub use state::{InteractionController, InteractionState};
pub use tool::{ColorToggles, Tool};
