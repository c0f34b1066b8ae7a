//! Ordered annotation collection with selection state.

use super::{AnnotationError, TextAnnotation, TextEdit};
use crate::draw::{Color, FontDescriptor};
use crate::util::Point;
use log::debug;

/// Annotations in z-order (first = bottom, last = top) plus the selected index.
#[derive(Debug, Default, Clone)]
pub struct TextAnnotationStore {
    items: Vec<TextAnnotation>,
    selected: Option<usize>,
}

impl TextAnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TextAnnotation> {
        self.items.get(index)
    }

    /// Iterates bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, TextAnnotation> {
        self.items.iter()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_annotation(&self) -> Option<&TextAnnotation> {
        self.selected.and_then(|index| self.items.get(index))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Anchors `pending` at `position`, appends it on top, and selects it.
    ///
    /// # Returns
    /// Index of the placed annotation
    pub fn place(&mut self, pending: TextEdit, position: Point) -> usize {
        self.items.push(TextAnnotation::new(pending, position));
        let index = self.items.len() - 1;
        self.selected = Some(index);
        debug!("Placed annotation {index} at ({}, {})", position.x, position.y);
        index
    }

    /// Replaces text, font, and color of the annotation at `index` in place.
    ///
    /// # Errors
    /// - [`AnnotationError::IndexOutOfRange`] when `index` is stale
    /// - [`AnnotationError::EmptyText`] when `text` is blank
    pub fn update(
        &mut self,
        index: usize,
        text: String,
        font: FontDescriptor,
        color: Color,
    ) -> Result<(), AnnotationError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(AnnotationError::IndexOutOfRange { index, len })?;
        if text.trim().is_empty() {
            return Err(AnnotationError::EmptyText);
        }
        item.apply(text, font, color);
        Ok(())
    }

    /// Applies a confirmed edit to the selected annotation.
    pub fn update_selected(&mut self, edit: TextEdit) -> Result<usize, AnnotationError> {
        let index = self.selected.ok_or(AnnotationError::NoSelection)?;
        let TextEdit { text, font, color } = edit;
        self.update(index, text, font, color)?;
        Ok(index)
    }

    /// Moves the annotation at `index` to a new anchor.
    pub fn move_to(&mut self, index: usize, anchor: Point) -> Result<(), AnnotationError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(AnnotationError::IndexOutOfRange { index, len })?
            .set_anchor(anchor);
        Ok(())
    }

    /// Removes the annotation at `index`.
    ///
    /// Out-of-range indices are ignored. Removing the selected annotation
    /// clears the selection; a selection above `index` shifts down with it.
    pub fn remove(&mut self, index: usize) -> Option<TextAnnotation> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        debug!("Removed annotation {index}");
        Some(removed)
    }

    /// Removes the selected annotation, if any.
    pub fn remove_selected(&mut self) -> Option<TextAnnotation> {
        self.selected.and_then(|index| self.remove(index))
    }

    /// Returns the topmost annotation whose current bounds contain `point`.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .rev()
            .find(|(_, item)| item.bounds().is_some_and(|rect| rect.contains(point)))
            .map(|(index, _)| index)
    }

    /// Click-to-select: selects the hit annotation or clears the selection.
    ///
    /// # Returns
    /// `true` if an annotation was hit
    pub fn select_at(&mut self, point: Point) -> bool {
        self.selected = self.hit_test(point);
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, BLUE, RED};

    fn edit(text: &str) -> TextEdit {
        TextEdit::new(text, FontDescriptor::default(), BLACK).unwrap()
    }

    #[test]
    fn place_appends_and_selects() {
        let mut store = TextAnnotationStore::new();
        assert_eq!(store.place(edit("one"), Point::new(0, 0)), 0);
        assert_eq!(store.place(edit("two"), Point::new(5, 5)), 1);

        assert_eq!(store.len(), 2);
        assert_eq!(store.selected(), Some(1));
        assert_eq!(store.selected_annotation().unwrap().text(), "two");
        assert_eq!(store.get(1).unwrap().anchor(), Point::new(5, 5));
    }

    #[test]
    fn update_out_of_range_is_signaled_and_changes_nothing() {
        let mut store = TextAnnotationStore::new();
        store.place(edit("keep"), Point::new(0, 0));

        let err = store
            .update(3, "x".to_string(), FontDescriptor::default(), RED)
            .unwrap_err();
        assert_eq!(err, AnnotationError::IndexOutOfRange { index: 3, len: 1 });
        assert_eq!(store.get(0).unwrap().text(), "keep");
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let mut store = TextAnnotationStore::new();
        store.place(edit("old"), Point::new(3, 4));
        store
            .update(0, "new".to_string(), FontDescriptor::default(), BLUE)
            .unwrap();

        let item = store.get(0).unwrap();
        assert_eq!(item.text(), "new");
        assert_eq!(item.color(), BLUE);
        assert_eq!(item.anchor(), Point::new(3, 4));
    }

    #[test]
    fn update_selected_requires_selection() {
        let mut store = TextAnnotationStore::new();
        store.place(edit("a"), Point::new(0, 0));
        store.clear_selection();
        assert_eq!(store.update_selected(edit("b")), Err(AnnotationError::NoSelection));
    }

    #[test]
    fn remove_clears_or_shifts_selection() {
        let mut store = TextAnnotationStore::new();
        store.place(edit("a"), Point::new(0, 0));
        store.place(edit("b"), Point::new(0, 40));
        store.place(edit("c"), Point::new(0, 80));

        // Selected is 2; removing 0 shifts it down.
        store.remove(0);
        assert_eq!(store.selected(), Some(1));
        assert_eq!(store.selected_annotation().unwrap().text(), "c");

        assert!(store.remove_selected().is_some());
        assert_eq!(store.selected(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_out_of_range_is_idempotent() {
        let mut store = TextAnnotationStore::new();
        store.place(edit("a"), Point::new(0, 0));
        assert!(store.remove(7).is_none());
        assert!(store.remove(7).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.selected(), Some(0));
    }

    #[test]
    fn hit_test_prefers_topmost() {
        let mut store = TextAnnotationStore::new();
        store.place(edit("first"), Point::new(10, 10));
        store.place(edit("second"), Point::new(12, 12));

        assert_eq!(store.hit_test(Point::new(14, 14)), Some(1));
        assert_eq!(store.hit_test(Point::new(10, 10)), Some(0));
        assert_eq!(store.hit_test(Point::new(900, 900)), None);
    }

    #[test]
    fn select_at_clears_on_miss() {
        let mut store = TextAnnotationStore::new();
        store.place(edit("text"), Point::new(10, 10));
        store.clear_selection();

        assert!(store.select_at(Point::new(11, 11)));
        assert_eq!(store.selected(), Some(0));
        assert!(!store.select_at(Point::new(500, 500)));
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn move_to_invalidates_bounds() {
        let mut store = TextAnnotationStore::new();
        store.place(edit("text"), Point::new(0, 0));
        let before = store.get(0).unwrap().bounds().unwrap();

        store.move_to(0, Point::new(100, 50)).unwrap();
        let after = store.get(0).unwrap().bounds().unwrap();
        assert_eq!(after.origin(), Point::new(100, 50));
        assert_eq!((after.width, after.height), (before.width, before.height));
        assert!(store.move_to(9, Point::new(0, 0)).is_err());
    }
}
