//! Rendering: paints a [`Frame`] onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! the host component decides what to do with a failed frame.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::CAPTION_FONT_FAMILY;
use crate::engine::{Frame, Label, Segment};
use crate::math::Viewport;

/// Wireframe stroke width in CSS pixels.
const LINE_WIDTH_PX: f64 = 1.25;

/// Smallest caption size worth drawing.
const MIN_CAPTION_PX: f64 = 6.0;

/// Clear the canvas and draw every segment, then captions on top.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, frame: &Frame, viewport: Viewport, dpr: f64) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    ctx.set_line_width(LINE_WIDTH_PX);
    ctx.set_line_cap("round");

    for segment in &frame.segments {
        draw_segment(ctx, segment);
    }
    for label in &frame.labels {
        draw_label(ctx, label)?;
    }
    Ok(())
}

fn draw_segment(ctx: &CanvasRenderingContext2d, segment: &Segment) {
    ctx.begin_path();
    ctx.set_stroke_style_str(&segment.color.css(segment.alpha));
    ctx.move_to(segment.from.x, segment.from.y);
    ctx.line_to(segment.to.x, segment.to.y);
    ctx.stroke();
}

fn draw_label(ctx: &CanvasRenderingContext2d, label: &Label) -> Result<(), JsValue> {
    if label.size_px < MIN_CAPTION_PX {
        return Ok(());
    }
    ctx.save();
    ctx.set_font(&format!("700 {:.0}px {CAPTION_FONT_FAMILY}", label.size_px));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(&label.color.css(1.0));
    ctx.fill_text(&label.text, label.at.x, label.at.y)?;
    ctx.restore();
    Ok(())
}
