//! The interactive sine-curve widget.
//!
//! [`CurveWidget`] owns the curve parameters and the drag state. The host
//! shell forwards paint requests and pointer events to it and draws whatever
//! [`CurveWidget::on_paint`] returns. Every handler reports whether the
//! canvas needs to be redrawn. Calls must be serialized by the host; the
//! widget keeps no internal synchronization.

use crate::consts::{AXIS_STROKE_WIDTH, CURVE_STROKE_WIDTH, INITIAL_HEIGHT, INITIAL_WIDTH, PADDING};
use crate::curve::{sample, Canvas, CurveParameters};
use crate::drag::DragState;
use crate::hit::is_on_curve;
use crate::pos::Pos;

/// Colors used by the widget's draw list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Red,
    Gray,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const CURVE: Stroke = Stroke {
        color: Color::Red,
        width: CURVE_STROKE_WIDTH,
    };

    pub const AXIS: Stroke = Stroke {
        color: Color::Gray,
        width: AXIS_STROKE_WIDTH,
    };
}

/// One primitive for the host to draw, in screen space, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    /// Fill the whole canvas.
    Clear(Color),
    Polyline { points: Vec<Pos>, stroke: Stroke },
    Line { start: Pos, end: Pos, stroke: Stroke },
}

/// Pointer button identifier. Only [`PointerButton::Left`] starts or ends a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug)]
pub struct CurveWidget {
    params: CurveParameters,
    canvas: Canvas,
    drag: DragState,
}

impl Default for CurveWidget {
    fn default() -> Self {
        Self::new(Canvas::new(INITIAL_WIDTH as f64, INITIAL_HEIGHT as f64))
    }
}

impl CurveWidget {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            params: CurveParameters::default(),
            canvas,
            drag: DragState::Idle,
        }
    }

    pub fn params(&self) -> CurveParameters {
        self.params
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Adopt a new canvas size. The mapping is recomputed on the next call.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        let canvas = Canvas::new(width, height);
        if canvas == self.canvas {
            return false;
        }
        log::debug!("canvas resized to {}x{}", width, height);
        self.canvas = canvas;
        true
    }

    /// Draw list for the current state: background, curve, x-axis, y-axis.
    pub fn on_paint(&self) -> Vec<DrawCall> {
        let canvas = self.canvas;
        let points = sample(self.params, canvas).map(|p| p.screen).collect();
        let axis_y = canvas.axis_y();

        vec![
            DrawCall::Clear(Color::White),
            DrawCall::Polyline {
                points,
                stroke: Stroke::CURVE,
            },
            DrawCall::Line {
                start: Pos::new(PADDING, axis_y),
                end: Pos::new(PADDING + canvas.usable_width(), axis_y),
                stroke: Stroke::AXIS,
            },
            DrawCall::Line {
                start: Pos::new(PADDING, PADDING),
                end: Pos::new(PADDING, PADDING + canvas.usable_height()),
                stroke: Stroke::AXIS,
            },
        ]
    }

    /// Start a drag session. Never needs a redraw by itself.
    pub fn on_pointer_down(&mut self, pos: Pos, button: PointerButton) -> bool {
        if button != PointerButton::Left {
            return false;
        }
        let hit = is_on_curve(pos, self.params, self.canvas);
        log::debug!(
            "pointer down at ({:.1}, {:.1}): {}",
            pos.x,
            pos.y,
            if hit { "hit" } else { "miss" }
        );
        self.drag = DragState::press(pos, self.params, hit);
        false
    }

    /// Reshape the curve if a drag on it is in progress.
    pub fn on_pointer_move(&mut self, pos: Pos) -> bool {
        let Some(params) = self.drag.drag_to(pos) else {
            return false;
        };
        log::trace!(
            "x range [{:.3}, {:.3}], amplitude {:.3}",
            params.x_min,
            params.x_max,
            params.y_amplitude
        );
        self.params = params;
        true
    }

    /// End the drag session regardless of what it was.
    pub fn on_pointer_up(&mut self, _pos: Pos, button: PointerButton) -> bool {
        if button != PointerButton::Left {
            return false;
        }
        let was_dragging = self.drag.hit_curve();
        if self.drag.is_active() {
            log::debug!("drag ended ({})", self.drag.label());
        }
        self.drag = DragState::Idle;
        was_dragging
    }
}
