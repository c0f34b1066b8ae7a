//! Interaction state machine and the controller that owns the canvas.

use crate::annotation::{TextAnnotationStore, TextEdit};
use crate::config::Config;
use crate::draw::{Color, Compositor, FontDescriptor, PenSpec, RasterSurface, SurfaceError};
use crate::i18n::{Catalog, Locale};
use crate::input::tool::{ColorToggles, Tool};
use crate::util::Point;
use cairo::ImageSurface;
use log::debug;

/// Current interaction mode.
///
/// Tracks whether the user is idle, dragging a stroke, or positioning a new
/// text annotation. State transitions occur on pointer events and menu commands.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// A confirmed annotation follows the pointer until the next left click
    PlacingText {
        /// The annotation being placed (not yet in the store)
        pending: TextEdit,
        /// Where the ghost is currently drawn
        ghost: Point,
    },
    /// Left button held down
    Drawing {
        /// Tool captured when the button went down
        tool: Tool,
        /// Pointer-down position (line and arc anchor)
        start: Point,
        /// Last committed freehand sample
        previous: Point,
    },
}

/// Owns everything the canvas needs and applies pointer and menu input to it.
///
/// The embedding UI forwards events, reads [`InteractionController::needs_redraw`],
/// and paints whatever [`InteractionController::render_display`] returns.
#[derive(Debug)]
pub struct InteractionController {
    pub(super) surface: RasterSurface,
    pub(super) annotations: TextAnnotationStore,
    /// Committed surface plus the tentative line/arc while dragging
    pub(super) preview: Option<ImageSurface>,
    pub(super) state: InteractionState,
    /// Active drawing tool
    pub tool: Tool,
    /// Red/blue stroke color checkboxes
    pub toggles: ColorToggles,
    pub(super) pen_width: f64,
    pub(super) red_blue_mix: Color,
    pub(super) compositor: Compositor,
    pub(super) catalog: Catalog,
    pub(super) text_font: FontDescriptor,
    pub(super) text_color: Color,
    pub(super) placement_origin: Point,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl InteractionController {
    /// Creates a controller with an unsized surface.
    ///
    /// Call [`InteractionController::resize_viewport`] once the canvas widget
    /// has a size; until then all drawing is skipped.
    pub fn new(config: &Config) -> Self {
        Self {
            surface: RasterSurface::new(config.background()),
            annotations: TextAnnotationStore::new(),
            preview: None,
            state: InteractionState::Idle,
            tool: Tool::default(),
            toggles: ColorToggles::default(),
            pen_width: config.pen.width,
            red_blue_mix: config.red_blue_mix(),
            compositor: Compositor::from_config(&config.chrome),
            catalog: Catalog::new(config.locale()),
            text_font: config.text_font(),
            text_color: config.text_color(),
            placement_origin: config.placement_origin(),
            needs_redraw: true,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    pub fn annotations(&self) -> &TextAnnotationStore {
        &self.annotations
    }

    /// The transient line/arc preview, present only mid-drag.
    pub fn preview(&self) -> Option<&ImageSurface> {
        self.preview.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn locale(&self) -> Locale {
        self.catalog.locale()
    }

    pub fn pen_width(&self) -> f64 {
        self.pen_width
    }

    /// Sets the pen width, clamped to 0.5 - 50.0 pixels.
    pub fn set_pen_width(&mut self, width: f64) {
        self.pen_width = width.clamp(0.5, 50.0);
    }

    /// Pen used for the next commit: color from the toggles, current width.
    pub fn pen(&self) -> PenSpec {
        PenSpec::new(self.toggles.stroke_color(self.red_blue_mix), self.pen_width)
    }

    /// Defaults handed to the dialog when adding new text.
    pub fn set_text_defaults(&mut self, font: FontDescriptor, color: Color) {
        self.text_font = font;
        self.text_color = color.with_alpha(1.0);
    }

    /// Matches the surface to the canvas widget, keeping the picture.
    ///
    /// On a size change the old pixels are stretched into the new buffer.
    /// Non-positive sizes are ignored.
    ///
    /// # Returns
    /// `true` if the surface was reallocated
    pub fn resize_viewport(&mut self, width: i32, height: i32) -> Result<bool, SurfaceError> {
        if width <= 0 || height <= 0 {
            debug!("Ignoring {width}x{height} viewport");
            return Ok(false);
        }
        if self.surface.width() == width && self.surface.height() == height {
            return Ok(false);
        }

        let prior = self.surface.snapshot()?;
        self.surface.ensure(width, height)?;
        self.surface.restore_after_resize(prior)?;

        // A stale-sized preview would be composited at the wrong scale.
        self.preview = None;
        self.needs_redraw = true;
        Ok(true)
    }
}
