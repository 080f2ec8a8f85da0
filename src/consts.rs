//! Fixed numeric constants shared by sampling, hit-testing and dragging.

use std::f64::consts::PI;

// ── Sampling ────────────────────────────────────────────────────

/// Number of points the curve is sampled at.
pub const SAMPLE_COUNT: usize = 500;

/// Margin between the canvas border and the plot area, in pixels.
pub const PADDING: f64 = 20.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// A press closer than this to the curve polyline counts as a hit.
pub const HIT_THRESHOLD_PX: f64 = 5.0;

// ── Dragging ────────────────────────────────────────────────────

/// Domain units gained on each side per horizontal pixel dragged.
pub const DRAG_X_SCALE: f64 = 0.05;

/// Amplitude gained per pixel dragged upwards.
pub const DRAG_Y_SCALE: f64 = 0.01;

/// The domain never shrinks below one full period.
pub const MIN_SPAN: f64 = 2.0 * PI;

pub const MIN_AMPLITUDE: f64 = 0.1;
pub const MAX_AMPLITUDE: f64 = 5.0;

// ── Initial state ───────────────────────────────────────────────

pub const INITIAL_WIDTH: u32 = 800;
pub const INITIAL_HEIGHT: u32 = 400;

/// Two full periods.
pub const INITIAL_X_MIN: f64 = 0.0;
pub const INITIAL_X_MAX: f64 = 4.0 * PI;
pub const INITIAL_AMPLITUDE: f64 = 1.0;

// ── Styles ──────────────────────────────────────────────────────

pub const CURVE_STROKE_WIDTH: f64 = 2.0;
pub const AXIS_STROKE_WIDTH: f64 = 1.0;

pub const WINDOW_TITLE: &str = "Scalable sine curve";
