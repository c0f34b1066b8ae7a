//! Text annotation layer.
//!
//! Annotations are positioned text items kept out of the raster surface so they
//! can be selected, edited, and removed after placement:
//! - [`TextAnnotation`]: text, font, color, and anchor with cached layout bounds
//! - [`TextAnnotationStore`]: ordered collection with selection and hit-testing
//! - [`editor`]: the tagged result consumed from the external text edit dialog

pub mod editor;
pub mod store;

pub use editor::{EditOutcome, EditRequest, TextEdit, TextEditor};
pub use store::TextAnnotationStore;

use crate::draw::{Color, FontDescriptor, measure};
use crate::util::{Point, Rect};
use std::cell::Cell;
use thiserror::Error;

/// Errors reported by annotation operations. None of them are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("Annotation index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Annotation text must not be empty")]
    EmptyText,

    #[error("No annotation is selected")]
    NoSelection,
}

/// A positioned text item drawn above the raster surface.
///
/// The bounding box is a cache: it is cleared whenever text or font change and
/// recomputed from [`measure`] on the next render or hit-test.
#[derive(Debug, Clone)]
pub struct TextAnnotation {
    text: String,
    font: FontDescriptor,
    color: Color,
    anchor: Point,
    bounds: Cell<Option<Rect>>,
}

impl TextAnnotation {
    /// Anchors a validated edit at `anchor` (top-left of the text block).
    pub fn new(edit: TextEdit, anchor: Point) -> Self {
        let TextEdit { text, font, color } = edit;
        Self {
            text,
            font,
            color,
            anchor,
            bounds: Cell::new(None),
        }
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

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Bounds from the most recent render, without measuring.
    pub fn cached_bounds(&self) -> Option<Rect> {
        self.bounds.get()
    }

    /// Current bounds, measuring lazily if the cache was invalidated.
    pub fn bounds(&self) -> Option<Rect> {
        match self.bounds.get() {
            Some(rect) => Some(rect),
            None => self.refresh_bounds(),
        }
    }

    /// Re-measures the layout and stores the result in the cache.
    pub(crate) fn refresh_bounds(&self) -> Option<Rect> {
        let rect = measure::measure_at(&self.text, &self.font, self.anchor);
        self.bounds.set(rect);
        rect
    }

    /// Copy of the editable fields, used to seed the edit dialog.
    pub fn to_edit(&self) -> TextEdit {
        TextEdit {
            text: self.text.clone(),
            font: self.font.clone(),
            color: self.color,
        }
    }

    pub(crate) fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
        self.bounds.set(None);
    }

    pub(crate) fn apply(&mut self, text: String, font: FontDescriptor, color: Color) {
        self.text = text;
        self.font = font;
        self.color = color;
        self.bounds.set(None);
    }
}
