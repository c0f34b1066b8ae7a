//! Compositing of the raster surface and the annotation layer.
//!
//! Display and export share [`Compositor::paint_annotations`]; export is the
//! display path with the selection outline and ghost preview left out, so the
//! saved image places text exactly where it appeared on screen.

use super::color::Color;
use super::measure;
use super::render;
use super::surface::{self, SurfaceError};
use crate::annotation::{TextAnnotationStore, TextEdit};
use crate::config::CompositorConfig;
use crate::util::Point;
use cairo::{Context, Format, ImageSurface};
use thiserror::Error;

/// Errors that can occur while compositing.
#[derive(Debug, Error)]
pub enum CompositeError {
    #[error("Canvas has no pixels yet (viewport not laid out)")]
    Unavailable,

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// A pending annotation drawn translucently at the pointer before placement.
#[derive(Debug, Clone, Copy)]
pub struct Ghost<'a> {
    pub edit: &'a TextEdit,
    pub position: Point,
}

/// Styling for display-only chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compositor {
    /// Selection outline color
    pub selection_color: Color,
    /// Selection outline width in pixels
    pub selection_width: f64,
    /// Opacity of ghost text (0.0 - 1.0)
    pub ghost_alpha: f64,
    /// Dashed ghost outline color, including its alpha
    pub ghost_outline: Color,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::from_config(&CompositorConfig::default())
    }
}

impl Compositor {
    pub fn from_config(config: &CompositorConfig) -> Self {
        Self {
            selection_color: config.selection_color.to_color(),
            selection_width: config.selection_width,
            ghost_alpha: config.ghost_alpha as f64 / 255.0,
            ghost_outline: super::color::GRAY.with_alpha(config.ghost_outline_alpha as f64 / 255.0),
        }
    }

    /// Builds the on-screen image.
    ///
    /// Layers, bottom to top: `base` (the committed surface, or the stroke
    /// preview during a drag), every annotation, an outline around
    /// `selected`, and the `ghost` of an annotation being placed. Each
    /// annotation's cached bounds are refreshed along the way.
    pub fn render_for_display(
        &self,
        base: &ImageSurface,
        annotations: &TextAnnotationStore,
        selected: Option<usize>,
        ghost: Option<Ghost<'_>>,
    ) -> Result<ImageSurface, CompositeError> {
        let target = copy_base(base)?;
        let ctx = Context::new(&target)?;

        self.paint_annotations(&ctx, annotations);

        if let Some(rect) = selected
            .and_then(|index| annotations.get(index))
            .and_then(|item| item.cached_bounds())
        {
            render::render_outline(&ctx, rect, self.selection_color, self.selection_width);
        }

        if let Some(ghost) = ghost {
            let edit = ghost.edit;
            render::render_text(
                &ctx,
                ghost.position,
                edit.text(),
                edit.font(),
                edit.color().with_alpha(self.ghost_alpha),
            );
            if let Some(rect) = measure::measure_at(edit.text(), edit.font(), ghost.position) {
                render::render_dashed_outline(&ctx, rect, self.ghost_outline);
            }
        }

        drop(ctx);
        target.flush();
        Ok(target)
    }

    /// Builds the flattened image written to disk: surface plus opaque text.
    pub fn render_for_export(
        &self,
        base: &ImageSurface,
        annotations: &TextAnnotationStore,
    ) -> Result<ImageSurface, CompositeError> {
        let target = copy_base(base)?;
        let ctx = Context::new(&target)?;
        self.paint_annotations(&ctx, annotations);
        drop(ctx);
        target.flush();
        Ok(target)
    }

    /// Draws every annotation bottom to top and refreshes its bounds.
    fn paint_annotations(&self, ctx: &Context, annotations: &TextAnnotationStore) {
        for item in annotations.iter() {
            render::render_text(ctx, item.anchor(), item.text(), item.font(), item.color());
            item.refresh_bounds();
        }
    }
}

fn copy_base(base: &ImageSurface) -> Result<ImageSurface, CompositeError> {
    if base.width() <= 0 || base.height() <= 0 {
        return Err(CompositeError::Unavailable);
    }
    debug_assert_eq!(base.format(), Format::ARgb32);
    Ok(surface::duplicate(base)?)
}
