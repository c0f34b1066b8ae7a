//! Boundary with the external text edit dialog.
//!
//! The dialog itself lives in the embedding UI. It receives an [`EditRequest`]
//! and hands back an [`EditOutcome`]; the core never sees empty text because
//! [`TextEdit::new`] rejects it.

use super::AnnotationError;
use crate::draw::{Color, FontDescriptor};

/// Validated text, font, and color produced by a confirmed edit.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEdit {
    pub(crate) text: String,
    pub(crate) font: FontDescriptor,
    pub(crate) color: Color,
}

impl TextEdit {
    /// Validates dialog input.
    ///
    /// # Errors
    /// [`AnnotationError::EmptyText`] when `text` is empty or whitespace-only.
    pub fn new(
        text: impl Into<String>,
        font: FontDescriptor,
        color: Color,
    ) -> Result<Self, AnnotationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(AnnotationError::EmptyText);
        }
        // Annotations are always drawn opaque.
        Ok(Self {
            text,
            font,
            color: color.with_alpha(1.0),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Result of showing the text edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// User accepted with valid text.
    Confirmed(TextEdit),
    /// User accepted but the text was empty; the dialog already told them so.
    Rejected,
    /// User dismissed the dialog.
    Cancelled,
}

impl EditOutcome {
    /// Builds the outcome from raw dialog results.
    pub fn from_dialog(accepted: bool, text: &str, font: FontDescriptor, color: Color) -> Self {
        if !accepted {
            return Self::Cancelled;
        }
        match TextEdit::new(text, font, color) {
            Ok(edit) => Self::Confirmed(edit),
            Err(_) => Self::Rejected,
        }
    }

    /// Returns the edit when confirmed.
    pub fn into_edit(self) -> Option<TextEdit> {
        match self {
            Self::Confirmed(edit) => Some(edit),
            Self::Rejected | Self::Cancelled => None,
        }
    }
}

/// Initial values and title handed to the dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct EditRequest {
    /// Localized dialog title
    pub title: String,
    pub initial_text: String,
    pub initial_font: FontDescriptor,
    pub initial_color: Color,
}

/// The external text edit dialog.
pub trait TextEditor {
    fn edit(&mut self, request: &EditRequest) -> EditOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};

    #[test]
    fn whitespace_only_text_is_rejected() {
        assert_eq!(
            TextEdit::new("  \n\t", FontDescriptor::default(), RED),
            Err(AnnotationError::EmptyText)
        );
        assert_eq!(
            EditOutcome::from_dialog(true, " ", FontDescriptor::default(), RED),
            EditOutcome::Rejected
        );
    }

    #[test]
    fn dismissed_dialog_is_cancelled_even_with_text() {
        let outcome = EditOutcome::from_dialog(false, "kept?", FontDescriptor::default(), RED);
        assert_eq!(outcome, EditOutcome::Cancelled);
        assert!(outcome.into_edit().is_none());
    }

    #[test]
    fn confirmed_edit_keeps_text_verbatim_and_forces_opaque_color() {
        let outcome =
            EditOutcome::from_dialog(true, " padded ", FontDescriptor::default(), BLUE.with_alpha(0.3));
        let edit = outcome.into_edit().expect("confirmed");
        assert_eq!(edit.text(), " padded ");
        assert_eq!(edit.color(), BLUE);
    }
}
