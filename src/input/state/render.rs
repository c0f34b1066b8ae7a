use crate::draw::{CompositeError, Ghost};
use crate::i18n::Message;
use cairo::ImageSurface;

use super::{InteractionController, InteractionState};

impl InteractionController {
    /// Composites the image to show on screen.
    ///
    /// Uses the preview as the base while a line or arc is being dragged,
    /// then draws annotations, the selection outline, and the placement ghost.
    ///
    /// # Errors
    /// [`CompositeError::Unavailable`] until the viewport has a size.
    pub fn render_display(&self) -> Result<ImageSurface, CompositeError> {
        let base = self
            .preview
            .as_ref()
            .or(self.surface.image())
            .ok_or(CompositeError::Unavailable)?;

        let ghost = match &self.state {
            InteractionState::PlacingText { pending, ghost } => Some(Ghost {
                edit: pending,
                position: *ghost,
            }),
            _ => None,
        };

        self.compositor
            .render_for_display(base, &self.annotations, self.annotations.selected(), ghost)
    }

    /// Composites the flattened image written by export.
    pub fn render_export(&self) -> Result<ImageSurface, CompositeError> {
        let base = self.surface.image().ok_or(CompositeError::Unavailable)?;
        self.compositor.render_for_export(base, &self.annotations)
    }

    /// Localized hint for the status area, if the current state has one.
    pub fn status_hint(&self) -> Option<&'static str> {
        match self.state {
            InteractionState::PlacingText { .. } => Some(self.catalog.message(Message::PlacementHint)),
            _ => None,
        }
    }
}
