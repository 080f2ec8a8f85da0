//! Drag gesture state machine.
//!
//! A press snapshots the pointer position and the curve parameters. While the
//! press hit the curve, every move recomputes the parameters from that
//! snapshot, never from the previous move, so a drag cannot accumulate
//! rounding drift and a fresh press starts a fresh reference frame.

use crate::consts::{DRAG_X_SCALE, DRAG_Y_SCALE};
use crate::curve::CurveParameters;
use crate::pos::Pos;

/// Snapshot taken at pointer-down. Owned copy, never aliases live parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub screen: Pos,
    pub params: CurveParameters,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No button held.
    #[default]
    Idle,
    /// Button held, press missed the curve. Moves are ignored.
    ArmedMiss { anchor: Anchor },
    /// Button held on the curve. Moves reshape it.
    ArmedHit { anchor: Anchor },
}

impl DragState {
    pub fn press(screen: Pos, params: CurveParameters, hit: bool) -> Self {
        let anchor = Anchor { screen, params };
        if hit {
            DragState::ArmedHit { anchor }
        } else {
            DragState::ArmedMiss { anchor }
        }
    }

    /// A button is held, whether or not it hit.
    pub fn is_active(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    pub fn hit_curve(&self) -> bool {
        matches!(self, DragState::ArmedHit { .. })
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        match self {
            DragState::Idle => None,
            DragState::ArmedMiss { anchor } | DragState::ArmedHit { anchor } => Some(anchor),
        }
    }

    /// New parameters for the pointer at `current`, or `None` unless armed on the curve.
    pub fn drag_to(&self, current: Pos) -> Option<CurveParameters> {
        match self {
            DragState::ArmedHit { anchor } => Some(anchor.drag_to(current)),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DragState::Idle => "idle",
            DragState::ArmedMiss { .. } => "pressed (missed curve)",
            DragState::ArmedHit { .. } => "dragging curve",
        }
    }
}

impl Anchor {
    /// Horizontal drag widens (right) or narrows (left) the domain on both
    /// sides; vertical drag raises (up) or lowers (down) the amplitude.
    pub fn drag_to(&self, current: Pos) -> CurveParameters {
        let delta = current - self.screen;

        let x_range_delta = delta.x * DRAG_X_SCALE;
        let x_min = self.params.x_min - x_range_delta;
        let x_max = CurveParameters::clamp_span(x_min, self.params.x_max + x_range_delta);

        // Screen y grows downwards.
        let y_amp_delta = -delta.y * DRAG_Y_SCALE;
        let y_amplitude = CurveParameters::clamp_amplitude(self.params.y_amplitude + y_amp_delta);

        CurveParameters {
            x_min,
            x_max,
            y_amplitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use std::f64::consts::PI;

    fn anchor_at(x: f64, y: f64) -> Anchor {
        Anchor {
            screen: Pos::new(x, y),
            params: CurveParameters::default(),
        }
    }

    #[test]
    fn default_is_idle() {
        let state = DragState::default();
        assert_eq!(state, DragState::Idle);
        assert!(!state.is_active());
        assert!(!state.hit_curve());
        assert!(state.anchor().is_none());
    }

    #[test]
    fn press_picks_armed_variant() {
        let params = CurveParameters::default();
        let hit = DragState::press(Pos::new(1.0, 2.0), params, true);
        let miss = DragState::press(Pos::new(1.0, 2.0), params, false);
        assert!(hit.is_active() && hit.hit_curve());
        assert!(miss.is_active() && !miss.hit_curve());
        assert_eq!(hit.anchor(), miss.anchor());
    }

    #[test]
    fn miss_never_drags() {
        let state = DragState::press(Pos::new(0.0, 0.0), CurveParameters::default(), false);
        assert_eq!(state.drag_to(Pos::new(100.0, -100.0)), None);
        assert_eq!(DragState::Idle.drag_to(Pos::new(5.0, 5.0)), None);
    }

    #[test]
    fn horizontal_drag_widens_domain() {
        let params = anchor_at(100.0, 100.0).drag_to(Pos::new(200.0, 100.0));
        assert_approx_eq!(params.x_min, -5.0);
        assert_approx_eq!(params.x_max, 4.0 * PI + 5.0);
        assert_approx_eq!(params.y_amplitude, 1.0);
    }

    #[test]
    fn narrowing_stops_at_one_period() {
        let params = anchor_at(100.0, 100.0).drag_to(Pos::new(0.0, 100.0));
        assert_approx_eq!(params.x_min, 5.0);
        assert_approx_eq!(params.x_max, 5.0 + 2.0 * PI);
    }

    #[test]
    fn upward_drag_raises_amplitude() {
        let params = anchor_at(100.0, 100.0).drag_to(Pos::new(100.0, 50.0));
        assert_approx_eq!(params.y_amplitude, 1.5);
        assert_eq!(params.x_min, 0.0);
    }

    #[test]
    fn amplitude_is_clamped() {
        let anchor = anchor_at(100.0, 100.0);
        assert_eq!(anchor.drag_to(Pos::new(100.0, -1000.0)).y_amplitude, 5.0);
        assert_eq!(anchor.drag_to(Pos::new(100.0, 1000.0)).y_amplitude, 0.1);
    }

    #[test]
    fn drag_is_relative_to_anchor() {
        let anchor = anchor_at(100.0, 100.0);
        let _ = anchor.drag_to(Pos::new(300.0, 0.0));
        let back = anchor.drag_to(Pos::new(100.0, 100.0));
        assert_eq!(back, CurveParameters::default());
    }

    #[test]
    fn labels() {
        assert_eq!(DragState::Idle.label(), "idle");
        let hit = DragState::press(Pos::default(), CurveParameters::default(), true);
        assert_eq!(hit.label(), "dragging curve");
    }
}
