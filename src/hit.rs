use crate::consts::HIT_THRESHOLD_PX;
use crate::curve::{hit_samples, Canvas, CurveParameters};
use crate::line_segment::LineSegment;
use crate::pos::Pos;

/// Whether `point` lies within [`HIT_THRESHOLD_PX`] of the hit-test polyline.
///
/// Stops at the first qualifying segment.
pub fn is_on_curve(point: Pos, params: CurveParameters, canvas: Canvas) -> bool {
    let points = hit_samples(params, canvas);
    points
        .clone()
        .zip(points.skip(1))
        .any(|(a, b)| LineSegment::new(a.screen, b.screen).distance_to(&point) < HIT_THRESHOLD_PX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PADDING;
    use std::f64::consts::PI;

    fn canvas() -> Canvas {
        Canvas::new(800.0, 400.0)
    }

    #[test]
    fn every_hit_sample_is_on_curve() {
        let params = CurveParameters::new(-1.0, 9.0, 2.5);
        for p in hit_samples(params, canvas()).step_by(37) {
            assert!(is_on_curve(p.screen, params, canvas()), "{:?}", p);
        }
    }

    #[test]
    fn origin_of_default_curve_is_hit() {
        assert!(is_on_curve(
            Pos::new(PADDING, 200.0),
            CurveParameters::default(),
            canvas()
        ));
    }

    #[test]
    fn just_inside_and_outside_threshold() {
        let params = CurveParameters::default();
        // sin(0) = 0 and the slope there is steep, so probe straight left of the first sample.
        assert!(is_on_curve(Pos::new(PADDING - 4.9, 200.0), params, canvas()));
        assert!(!is_on_curve(Pos::new(PADDING - 5.1, 200.0), params, canvas()));
    }

    #[test]
    fn far_point_misses() {
        let params = CurveParameters::default();
        assert!(!is_on_curve(Pos::new(400.0, 395.0), params, canvas()));
        assert!(!is_on_curve(Pos::new(-100.0, -100.0), params, canvas()));
        assert!(!is_on_curve(Pos::new(900.0, 200.0), params, canvas()));
    }

    #[test]
    fn hit_geometry_ignores_drawn_amplitude() {
        // At amplitude 0.1 the drawn peak of the first period is at 200 - 16 = 184,
        // but the hit-test curve still peaks at 200 - 160 = 40.
        let params = CurveParameters::new(0.0, 4.0 * PI, 0.1);
        let peak_x = PADDING + (PI / 2.0) * 760.0 / (4.0 * PI);
        assert!(is_on_curve(Pos::new(peak_x, 40.0), params, canvas()));
        assert!(!is_on_curve(Pos::new(peak_x, 184.0), params, canvas()));
    }
}
