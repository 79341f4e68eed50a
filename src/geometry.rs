//! Pure geometry for direct manipulation: translation, eight-direction
//! constrained resize, and fit-to-viewport scaling.
//!
//! Everything here is a total function over plain values: no document
//! access, no I/O, no floating-point surprises beyond explicit rounding.
//! The editor calls these with raw pointer deltas (screen pixels) and the
//! view scale captured at gesture start; results are scene-local pixels.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{MAX_FIT_SCALE, MIN_FIT_SCALE, MIN_WIDGET_HEIGHT, MIN_WIDGET_WIDTH};

/// A point in screen or scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A widget box size in scene pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Which edges of the box a resize handle drags. One of the eight
/// compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSet {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl EdgeSet {
    /// All eight handles, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::Ne,
        Self::E,
        Self::Se,
        Self::S,
        Self::Sw,
        Self::W,
        Self::Nw,
    ];

    #[must_use]
    pub fn has_left(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    #[must_use]
    pub fn has_right(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    #[must_use]
    pub fn has_top(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    #[must_use]
    pub fn has_bottom(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }
}

/// Result of a resize: the new top-left corner and the new size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOutcome {
    pub position: Point,
    pub size: Size,
}

/// Translate a box origin by a raw pointer delta at the given view scale,
/// rounding to the nearest integer scene pixel.
#[must_use]
pub fn translate(origin: Point, pointer_delta: Point, view_scale: f64) -> Point {
    Point {
        x: (origin.x + pointer_delta.x / view_scale).round(),
        y: (origin.y + pointer_delta.y / view_scale).round(),
    }
}

/// Resize a box by dragging the given edge set.
///
/// Edges containing "right"/"bottom" grow or shrink size directly, floored
/// at the widget minimums. Edges containing "left"/"top" clamp the delta
/// *before* applying it, so dragging a handle past the opposite edge sticks
/// the box at the floor instead of inverting it: the opposite edge never
/// moves. Axes not present in the edge set are untouched.
#[must_use]
pub fn resize(
    edges: EdgeSet,
    origin: Point,
    origin_size: Size,
    pointer_delta: Point,
    view_scale: f64,
) -> ResizeOutcome {
    let dx = pointer_delta.x / view_scale;
    let dy = pointer_delta.y / view_scale;

    let mut x = origin.x;
    let mut y = origin.y;
    let mut width = origin_size.width;
    let mut height = origin_size.height;

    if edges.has_right() {
        width = (origin_size.width + dx).round().max(MIN_WIDGET_WIDTH);
    } else if edges.has_left() {
        let clamped_dx = dx.min(origin_size.width - MIN_WIDGET_WIDTH);
        x = (origin.x + clamped_dx).round();
        width = (origin_size.width - clamped_dx).round().max(MIN_WIDGET_WIDTH);
    }

    if edges.has_bottom() {
        height = (origin_size.height + dy).round().max(MIN_WIDGET_HEIGHT);
    } else if edges.has_top() {
        let clamped_dy = dy.min(origin_size.height - MIN_WIDGET_HEIGHT);
        y = (origin.y + clamped_dy).round();
        height = (origin_size.height - clamped_dy).round().max(MIN_WIDGET_HEIGHT);
    }

    ResizeOutcome { position: Point::new(x, y), size: Size::new(width, height) }
}

/// Scale factor that fits `content` inside `container` minus `padding` on
/// each axis, clamped to `[MIN_FIT_SCALE, MAX_FIT_SCALE]` and kept to two
/// decimal places. The two-decimal step rounds *down* so the scaled content
/// never overshoots the padded container.
///
/// Degenerate content dimensions (zero or negative) fit at the maximum.
#[must_use]
pub fn fit_scale(
    container_w: f64,
    container_h: f64,
    content_w: f64,
    content_h: f64,
    padding: f64,
) -> f64 {
    if content_w <= 0.0 || content_h <= 0.0 {
        return MAX_FIT_SCALE;
    }
    let sx = (container_w - padding) / content_w;
    let sy = (container_h - padding) / content_h;
    let scale = sx.min(sy).clamp(MIN_FIT_SCALE, MAX_FIT_SCALE);
    (scale * 100.0).floor() / 100.0
}
