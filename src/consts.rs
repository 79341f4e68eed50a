//! Shared numeric constants for the overlay engine.

use std::time::Duration;

// =============================================================
// Widget geometry
// =============================================================

/// Minimum widget width in scene pixels. Resizes clamp here, never error.
pub const MIN_WIDGET_WIDTH: f64 = 50.0;

/// Minimum widget height in scene pixels.
pub const MIN_WIDGET_HEIGHT: f64 = 30.0;

/// Default position for a newly created widget.
pub const DEFAULT_WIDGET_X: f64 = 50.0;
/// Default position for a newly created widget.
pub const DEFAULT_WIDGET_Y: f64 = 50.0;

// =============================================================
// Viewport auto-fit
// =============================================================

/// Upper bound for the auto-fit scale; scenes are never magnified past 1:1.
pub const MAX_FIT_SCALE: f64 = 1.0;

/// Lower bound for the auto-fit scale.
pub const MIN_FIT_SCALE: f64 = 0.15;

/// Padding reserved around the scene when fitting it to the editor panel.
pub const FIT_PADDING_PX: f64 = 48.0;

// =============================================================
// Sync loop
// =============================================================

/// Interval between polls of the record store for project and hunt data.
pub const POLL_INTERVAL: Duration = Duration::from_secs(3);

// =============================================================
// Renderer metrics
// =============================================================

/// Vertical gap between list rows in scene pixels, pre-scale.
pub const ROW_GAP_PX: f64 = 2.0;

/// Row height as a multiple of the row's font size.
pub const ROW_HEIGHT_FACTOR: f64 = 1.6;

/// Floor for scaled text so extreme shrinks stay legible.
pub const MIN_FONT_PX: f64 = 8.0;
