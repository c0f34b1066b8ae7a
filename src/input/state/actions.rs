use crate::annotation::{AnnotationError, EditOutcome, EditRequest, TextEditor};
use crate::codec::{self, ExportFormat};
use crate::draw::SurfaceError;
use crate::error::CanvasResult;
use crate::i18n::{DialogCaption, Locale, MenuCaption};
use log::{debug, info};
use std::path::Path;

use super::{InteractionController, InteractionState};

impl InteractionController {
    /// Dialog request for a new annotation, seeded with the text defaults.
    pub fn add_text_request(&self) -> EditRequest {
        EditRequest {
            title: self.catalog.dialog(DialogCaption::AddTextTitle).to_string(),
            initial_text: String::new(),
            initial_font: self.text_font.clone(),
            initial_color: self.text_color,
        }
    }

    /// Enters placement mode with a confirmed annotation.
    ///
    /// The ghost starts at the configured placement origin and follows the
    /// pointer until the next left click. Rejected or cancelled dialogs
    /// change nothing.
    ///
    /// # Returns
    /// `true` if placement started
    pub fn begin_add_text(&mut self, outcome: EditOutcome) -> bool {
        let Some(pending) = outcome.into_edit() else {
            return false;
        };

        self.preview = None;
        self.state = InteractionState::PlacingText {
            pending,
            ghost: self.placement_origin,
        };
        self.needs_redraw = true;
        debug!("Placing new annotation");
        true
    }

    /// Runs `editor` for a new annotation and enters placement mode on confirm.
    pub fn add_text_with(&mut self, editor: &mut impl TextEditor) -> bool {
        let request = self.add_text_request();
        let outcome = editor.edit(&request);
        self.begin_add_text(outcome)
    }

    /// Dialog request pre-filled from the selected annotation.
    ///
    /// # Errors
    /// [`AnnotationError::NoSelection`] when nothing is selected; the UI shows
    /// the localized "no selection" message instead of the dialog.
    pub fn edit_request(&self) -> Result<EditRequest, AnnotationError> {
        let item = self
            .annotations
            .selected_annotation()
            .ok_or(AnnotationError::NoSelection)?;
        Ok(EditRequest {
            title: self.catalog.dialog(DialogCaption::EditTextTitle).to_string(),
            initial_text: item.text().to_string(),
            initial_font: item.font().clone(),
            initial_color: item.color(),
        })
    }

    /// Applies a dialog outcome to the selected annotation.
    ///
    /// # Returns
    /// `true` if the annotation changed
    pub fn edit_selected(&mut self, outcome: EditOutcome) -> Result<bool, AnnotationError> {
        if self.annotations.selected().is_none() {
            return Err(AnnotationError::NoSelection);
        }
        let Some(edit) = outcome.into_edit() else {
            return Ok(false);
        };
        let index = self.annotations.update_selected(edit)?;
        debug!("Edited annotation {index}");
        self.needs_redraw = true;
        Ok(true)
    }

    /// Runs `editor` on the selected annotation and applies the outcome.
    pub fn edit_selected_with(&mut self, editor: &mut impl TextEditor) -> Result<bool, AnnotationError> {
        let request = self.edit_request()?;
        let outcome = editor.edit(&request);
        self.edit_selected(outcome)
    }

    /// Removes the selected annotation.
    pub fn delete_selected(&mut self) -> Result<(), AnnotationError> {
        self.annotations
            .remove_selected()
            .ok_or(AnnotationError::NoSelection)?;
        self.needs_redraw = true;
        Ok(())
    }

    /// Fills the surface with the background. Annotations stay.
    pub fn clear_canvas(&mut self) -> Result<(), SurfaceError> {
        if matches!(self.state, InteractionState::Drawing { .. }) {
            self.state = InteractionState::Idle;
        }
        self.preview = None;
        self.surface.clear()?;
        self.needs_redraw = true;
        Ok(())
    }

    /// Replaces the picture with an image file stretched to the canvas.
    ///
    /// Decoding happens before anything is cleared, so an unreadable file
    /// leaves the canvas unchanged.
    pub fn import_image_file(&mut self, path: &Path) -> CanvasResult<()> {
        let image = codec::load_image(path)?;
        if !self.surface.is_available() {
            debug!("Skipping import into unsized canvas");
            return Ok(());
        }
        self.surface.import_image(&image)?;
        self.needs_redraw = true;
        info!("Imported {} into canvas", path.display());
        Ok(())
    }

    /// Writes the flattened picture (surface and annotations, no chrome) to `path`.
    ///
    /// The format follows the file extension, PNG when unrecognized.
    pub fn export_to_file(&self, path: &Path) -> CanvasResult<ExportFormat> {
        let image = self.render_export()?;
        Ok(codec::save_image(&image, path)?)
    }

    /// Changes the UI language without losing the picture.
    ///
    /// The embedding UI re-applies its own resources after this call; the
    /// resulting relayout may give the canvas a new size, passed as
    /// `viewport`. Pixels are restored, stretched if the size changed.
    ///
    /// # Returns
    /// The re-translated annotation menu captions
    pub fn switch_language(
        &mut self,
        locale: Locale,
        viewport: (i32, i32),
    ) -> CanvasResult<[(MenuCaption, &'static str); 4]> {
        let backup = self.surface.snapshot()?;
        self.catalog.set_locale(locale);

        let (width, height) = viewport;
        if self.surface.ensure(width, height)? {
            self.surface.restore_after_resize(backup)?;
            self.preview = None;
        }

        self.needs_redraw = true;
        info!("Switched UI language to {}", locale.code());
        Ok(self.catalog.annotation_menu())
    }
}
