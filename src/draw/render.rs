//! Cairo-based rendering functions for strokes, annotation text, and chrome.

use super::color::Color;
use super::font::FontDescriptor;
use crate::input::Tool;
use crate::util::{self, Point, Rect};
use std::f64::consts::PI;

/// Dash pattern for the outline drawn around a ghost (pending) annotation.
const GHOST_DASH: [f64; 2] = [4.0, 3.0];

/// Stroke parameters, read from the controller each time a stroke is committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenSpec {
    /// Stroke color
    pub color: Color,
    /// Line width in pixels
    pub width: f64,
}

impl PenSpec {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    /// Configures source, width, and round caps/joins on `ctx`.
    fn apply(&self, ctx: &cairo::Context) {
        self.color.apply(ctx);
        ctx.set_line_width(self.width);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);
    }
}

/// Renders the shape for `tool` between two drag points.
///
/// `Tool::Freehand` renders a single segment; a freehand stroke is the
/// accumulation of many such segments.
pub fn render_stroke(ctx: &cairo::Context, tool: Tool, a: Point, b: Point, pen: &PenSpec) {
    match tool {
        Tool::Freehand | Tool::Line => render_line(ctx, a, b, pen),
        Tool::Arc => render_arc(ctx, a, b, pen),
    }
}

/// Render a straight antialiased line with round caps.
pub fn render_line(ctx: &cairo::Context, a: Point, b: Point, pen: &PenSpec) {
    ctx.save().ok();
    ctx.set_antialias(cairo::Antialias::Default);
    pen.apply(ctx);

    let (x1, y1) = a.to_f64();
    let (x2, y2) = b.to_f64();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    let _ = ctx.stroke();

    ctx.restore().ok();
}

/// Render the lower half (0 to 180 degrees, clockwise in screen space) of the
/// ellipse inscribed in the rectangle spanned by `a` and `b`.
pub fn render_arc(ctx: &cairo::Context, a: Point, b: Point, pen: &PenSpec) {
    let rect = util::rect_from_points(a, b);
    let rx = rect.width as f64 / 2.0;
    let ry = rect.height as f64 / 2.0;

    ctx.save().ok();
    ctx.set_antialias(cairo::Antialias::Best);
    pen.apply(ctx);

    // Scale only while building the path so the stroke width stays uniform.
    ctx.save().ok();
    ctx.translate(rect.x as f64 + rx, rect.y as f64 + ry);
    ctx.scale(rx, ry);
    ctx.new_path();
    ctx.arc(0.0, 0.0, 1.0, 0.0, PI);
    ctx.restore().ok();

    let _ = ctx.stroke();
    ctx.restore().ok();
}

/// Renders text with its layout box's top-left corner at `anchor`.
///
/// Uses Pango so multi-line text and font fallback behave the same way as
/// [`super::measure::measure`].
pub fn render_text(
    ctx: &cairo::Context,
    anchor: Point,
    text: &str,
    font: &FontDescriptor,
    color: Color,
) {
    if text.is_empty() {
        return;
    }

    // Save context state to prevent settings from leaking to other drawing operations
    ctx.save().ok();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&font.pango_description()));
    layout.set_text(text);

    color.apply(ctx);
    let (x, y) = anchor.to_f64();
    ctx.move_to(x, y);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

/// Renders a solid rectangular outline, used to mark the selected annotation.
pub fn render_outline(ctx: &cairo::Context, rect: Rect, color: Color, width: f64) {
    ctx.save().ok();
    color.apply(ctx);
    ctx.set_line_width(width);
    ctx.set_line_join(cairo::LineJoin::Miter);
    ctx.rectangle(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    );
    let _ = ctx.stroke();
    ctx.restore().ok();
}

/// Renders a 1px dashed rectangular outline around a ghost annotation.
pub fn render_dashed_outline(ctx: &cairo::Context, rect: Rect, color: Color) {
    ctx.save().ok();
    color.apply(ctx);
    ctx.set_line_width(1.0);
    ctx.set_dash(&GHOST_DASH, 0.0);
    // Half-pixel offset keeps the 1px line on pixel centers.
    ctx.rectangle(
        rect.x as f64 + 0.5,
        rect.y as f64 + 0.5,
        rect.width as f64,
        rect.height as f64,
    );
    let _ = ctx.stroke();
    ctx.restore().ok();
}
