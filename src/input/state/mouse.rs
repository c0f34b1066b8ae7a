use crate::draw::{SurfaceError, render};
use crate::input::{events::MouseButton, tool::Tool};
use crate::util::Point;
use cairo::Context;
use log::debug;

use super::{InteractionController, InteractionState};

impl InteractionController {
    /// Processes a mouse button press event.
    ///
    /// # Behavior
    /// - Left click while placing text: anchors the annotation at the click
    /// - Left click on an annotation: selects it
    /// - Left click elsewhere: clears the selection and starts a stroke with the
    ///   current tool
    /// - Right click: cancels the current drag or placement
    pub fn on_pointer_down(&mut self, button: MouseButton, x: i32, y: i32) {
        let point = Point::new(x, y);
        match button {
            MouseButton::Left if !self.surface.is_available() => {
                debug!("Ignoring press on unsized canvas");
            }
            MouseButton::Left => match &self.state {
                InteractionState::PlacingText { .. } => {
                    let state = std::mem::replace(&mut self.state, InteractionState::Idle);
                    if let InteractionState::PlacingText { pending, .. } = state {
                        self.annotations.place(pending, point);
                    }
                    self.needs_redraw = true;
                }
                InteractionState::Idle => {
                    let had_selection = self.annotations.selected().is_some();
                    if self.annotations.select_at(point) {
                        debug!("Selected annotation {:?}", self.annotations.selected());
                        self.needs_redraw = true;
                        return;
                    }
                    self.needs_redraw |= had_selection;

                    self.state = InteractionState::Drawing {
                        tool: self.tool,
                        start: point,
                        previous: point,
                    };
                    debug!("Started {:?} stroke at ({x}, {y})", self.tool);
                }
                InteractionState::Drawing { .. } => {}
            },
            MouseButton::Right => self.cancel(),
            MouseButton::Middle => {}
        }
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Freehand drag: commits a segment from the previous sample straight into
    ///   the surface
    /// - Line/arc drag: rebuilds the preview; the surface is not touched
    /// - Placing text: moves the ghost
    pub fn on_pointer_move(&mut self, x: i32, y: i32) -> Result<(), SurfaceError> {
        let point = Point::new(x, y);
        match &mut self.state {
            InteractionState::Drawing {
                tool: Tool::Freehand,
                previous,
                ..
            } => {
                let from = std::mem::replace(previous, point);
                let pen = self.pen();
                self.surface.commit_freehand_segment(from, point, &pen)?;
                self.needs_redraw = true;
            }
            InteractionState::Drawing { tool, start, .. } => {
                let (tool, start) = (*tool, *start);
                self.regenerate_preview(tool, start, point)?;
                self.needs_redraw = true;
            }
            InteractionState::PlacingText { ghost, .. } => {
                *ghost = point;
                self.needs_redraw = true;
            }
            InteractionState::Idle => {}
        }
        Ok(())
    }

    /// Processes mouse button release events.
    ///
    /// Releasing the left button after a line or arc drag commits the shape
    /// from the press point to `(x, y)`. Freehand strokes are already
    /// committed and add nothing on release.
    pub fn on_pointer_up(&mut self, button: MouseButton, x: i32, y: i32) -> Result<(), SurfaceError> {
        if button != MouseButton::Left {
            return Ok(());
        }
        if !matches!(self.state, InteractionState::Drawing { .. }) {
            return Ok(());
        }

        let state = std::mem::replace(&mut self.state, InteractionState::Idle);
        self.preview = None;
        self.needs_redraw = true;

        if let InteractionState::Drawing { tool, start, .. } = state
            && tool != Tool::Freehand
        {
            let pen = self.pen();
            self.surface.commit_stroke(tool, start, Point::new(x, y), &pen)?;
            debug!("Committed {tool:?} stroke to ({x}, {y})");
        }
        Ok(())
    }

    /// Aborts the current drag or text placement.
    ///
    /// Freehand segments already committed stay on the surface. A pending
    /// annotation is discarded without entering the store.
    pub fn cancel(&mut self) {
        if matches!(self.state, InteractionState::Idle) {
            return;
        }
        debug!("Cancelled {:?}", self.state);
        self.state = InteractionState::Idle;
        self.preview = None;
        self.needs_redraw = true;
    }

    fn regenerate_preview(&mut self, tool: Tool, start: Point, end: Point) -> Result<(), SurfaceError> {
        let Some(preview) = self.surface.snapshot()? else {
            return Ok(());
        };
        let ctx = Context::new(&preview)?;
        render::render_stroke(&ctx, tool, start, end, &self.pen());
        drop(ctx);
        preview.flush();
        self.preview = Some(preview);
        Ok(())
    }
}
