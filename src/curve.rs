//! Curve parameters and the mapping from mathematical space to screen space.
//!
//! Two vertical projections exist. [`sample`] is what gets drawn: it scales
//! `sin(x) * amplitude` by half the plot height minus the padding.
//! [`hit_samples`] is what pointer presses are tested against: it divides the
//! amplitude back out, so the hit geometry always sits where an amplitude of
//! 1.0 would be drawn. The two agree only while the amplitude is exactly 1.0.

use crate::consts::{
    INITIAL_AMPLITUDE, INITIAL_X_MAX, INITIAL_X_MIN, MAX_AMPLITUDE, MIN_AMPLITUDE, MIN_SPAN,
    PADDING, SAMPLE_COUNT,
};
use crate::pos::Pos;
use std::f64::consts::TAU;

/// Shape of the sine curve: the visible domain and the vertical amplitude.
///
/// Invariants: `x_max >= x_min + 2π` and `0.1 <= y_amplitude <= 5.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveParameters {
    pub x_min: f64,
    pub x_max: f64,
    pub y_amplitude: f64,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            x_min: INITIAL_X_MIN,
            x_max: INITIAL_X_MAX,
            y_amplitude: INITIAL_AMPLITUDE,
        }
    }
}

impl CurveParameters {
    pub fn new(x_min: f64, x_max: f64, y_amplitude: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_amplitude,
        }
        .clamped()
    }

    /// Grows `x_max` so the domain covers at least one period. `x_min` is kept.
    pub fn clamp_span(x_min: f64, x_max: f64) -> f64 {
        x_max.max(x_min + MIN_SPAN)
    }

    pub fn clamp_amplitude(y_amplitude: f64) -> f64 {
        y_amplitude.clamp(MIN_AMPLITUDE, MAX_AMPLITUDE)
    }

    /// Same parameters with both invariants enforced.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            x_min: self.x_min,
            x_max: Self::clamp_span(self.x_min, self.x_max),
            y_amplitude: Self::clamp_amplitude(self.y_amplitude),
        }
    }

    pub fn span(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// How many full sine periods fit into the domain.
    pub fn periods(&self) -> f64 {
        self.span() / TAU
    }

    /// Mathematical x of sample `i`.
    pub fn math_x(&self, i: usize) -> f64 {
        self.x_min + self.span() * i as f64 / (SAMPLE_COUNT - 1) as f64
    }
}

/// Pixel size of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * PADDING
    }

    pub fn usable_height(&self) -> f64 {
        self.height - 2.0 * PADDING
    }

    /// Screen y of the x-axis, the vertical centre of the plot area.
    pub fn axis_y(&self) -> f64 {
        PADDING + self.usable_height() / 2.0
    }

    /// Pixels per unit of `sin(x)` in the vertical direction.
    fn vertical_scale(&self) -> f64 {
        self.usable_height() / 2.0 - PADDING
    }

    fn screen_x(&self, params: &CurveParameters, math_x: f64) -> f64 {
        PADDING + (math_x - params.x_min) * self.usable_width() / params.span()
    }
}

/// One sampled point of the curve in both spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub math_x: f64,
    pub screen: Pos,
}

/// The polyline as drawn on screen.
///
/// Yields exactly [`SAMPLE_COUNT`] points; the first has `math_x == x_min`,
/// the last `math_x == x_max`. Nothing is cached; call again after any change.
pub fn sample(
    params: CurveParameters,
    canvas: Canvas,
) -> impl Iterator<Item = SamplePoint> + Clone {
    (0..SAMPLE_COUNT).map(move |i| {
        let math_x = params.math_x(i);
        let math_y = math_x.sin() * params.y_amplitude;
        SamplePoint {
            math_x,
            screen: Pos::new(
                canvas.screen_x(&params, math_x),
                canvas.axis_y() - math_y * canvas.vertical_scale(),
            ),
        }
    })
}

/// The polyline as seen by the hit tester.
///
/// Identical to [`sample`] horizontally, but the vertical position ignores the
/// amplitude.
pub fn hit_samples(
    params: CurveParameters,
    canvas: Canvas,
) -> impl Iterator<Item = SamplePoint> + Clone {
    (0..SAMPLE_COUNT).map(move |i| {
        let math_x = params.math_x(i);
        let math_y = math_x.sin() * params.y_amplitude;
        SamplePoint {
            math_x,
            screen: Pos::new(
                canvas.screen_x(&params, math_x),
                canvas.axis_y() - math_y * canvas.vertical_scale() / params.y_amplitude,
            ),
        }
    })
}
