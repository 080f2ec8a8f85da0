use crate::pos::Pos;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub start: Pos,
    pub end: Pos,
}

impl LineSegment {
    pub fn new(start: Pos, end: Pos) -> Self {
        LineSegment { start, end }
    }

    /// Projection parameter of `p` onto the segment, clamped to `[0, 1]`.
    ///
    /// A zero-length segment projects everything onto its start.
    pub fn project(&self, p: &Pos) -> f64 {
        let d = self.end - self.start;
        let len_sq = d.dot(&d);
        let t = if len_sq == 0.0 {
            0.0
        } else {
            (*p - self.start).dot(&d) / len_sq
        };
        t.clamp(0.0, 1.0)
    }

    /// Shortest distance from `p` to any point on the segment.
    pub fn distance_to(&self, p: &Pos) -> f64 {
        let t = self.project(p);
        let closest = self.start + (self.end - self.start) * t;
        p.distance(&closest)
    }
}
