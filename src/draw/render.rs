//! Cairo-based rendering functions for shape descriptors.

use super::color::Color;
use super::shape::{ShapeDescriptor, ShapeKind, ShapeStyle};

/// Fills the whole target with the canvas background color.
///
/// Should be called before rendering shapes.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint();
}

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
pub fn render_shapes<'a>(ctx: &cairo::Context, shapes: impl IntoIterator<Item = &'a ShapeDescriptor>) {
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single shape descriptor.
///
/// Closed kinds are filled first and then outlined, mirroring how a
/// retained-mode canvas paints them.
pub fn render_shape(ctx: &cairo::Context, shape: &ShapeDescriptor) {
    let _ = ctx.save();
    let traced = match shape.kind {
        ShapeKind::Oval => trace_oval(ctx, &shape.coords),
        ShapeKind::Rectangle => trace_rect(ctx, &shape.coords),
        ShapeKind::Line => trace_path(ctx, shape, false),
        ShapeKind::Polygon => trace_path(ctx, shape, true),
    };

    if traced {
        if shape.kind != ShapeKind::Line {
            if let Some(fill) = shape.style.fill {
                ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
                let _ = ctx.fill_preserve();
            }
        }
        stroke_outline(ctx, shape.kind, &shape.style);
    }

    ctx.new_path();
    let _ = ctx.restore();
}

fn stroke_outline(ctx: &cairo::Context, kind: ShapeKind, style: &ShapeStyle) {
    let Some(outline) = style.outline else {
        return;
    };
    if style.width <= 0.0 {
        return;
    }

    ctx.set_source_rgba(outline.r, outline.g, outline.b, outline.a);
    ctx.set_line_width(style.width);
    ctx.set_dash(&style.dash, 0.0);
    if kind == ShapeKind::Line {
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);
    } else {
        ctx.set_line_join(cairo::LineJoin::Miter);
    }
    let _ = ctx.stroke();
}

/// Normalises `[x1, y1, x2, y2]` into `(x, y, w, h)` with non-negative size.
fn bbox(coords: &[f64]) -> Option<(f64, f64, f64, f64)> {
    let [x1, y1, x2, y2] = coords.get(..4)?.try_into().ok()?;
    Some((x1.min(x2), y1.min(y2), (x2 - x1).abs(), (y2 - y1).abs()))
}

fn trace_rect(ctx: &cairo::Context, coords: &[f64]) -> bool {
    let Some((x, y, w, h)) = bbox(coords) else {
        return false;
    };
    ctx.rectangle(x, y, w, h);
    true
}

/// Ellipse through Cairo's unit arc, scaled to the bounding box.
fn trace_oval(ctx: &cairo::Context, coords: &[f64]) -> bool {
    let Some((x, y, w, h)) = bbox(coords) else {
        return false;
    };
    if w == 0.0 || h == 0.0 {
        // Cairo cannot invert a zero scale; a degenerate oval is a point.
        ctx.move_to(x, y);
        ctx.line_to(x + w, y + h);
        return true;
    }

    let _ = ctx.save();
    ctx.translate(x + w / 2.0, y + h / 2.0);
    ctx.scale(w / 2.0, h / 2.0);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    let _ = ctx.restore();
    true
}

fn trace_path(ctx: &cairo::Context, shape: &ShapeDescriptor, close: bool) -> bool {
    let mut points = shape.points();
    let Some((x0, y0)) = points.next() else {
        return false;
    };
    ctx.move_to(x0, y0);
    for (x, y) in points {
        ctx.line_to(x, y);
    }
    if close {
        ctx.close_path();
    }
    true
}
