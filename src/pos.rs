use std::ops::{Add, Mul, Sub};

/// A point in screen space (pixels, y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pos {
    pub x: f64,
    pub y: f64,
}

impl Pos {
    pub fn new(x: f64, y: f64) -> Self {
        Pos { x, y }
    }

    pub fn distance(&self, other: &Pos) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn dot(&self, other: &Pos) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl Sub for Pos {
    type Output = Pos;
    fn sub(self, other: Self) -> Self::Output {
        Pos::new(self.x - other.x, self.y - other.y)
    }
}

impl Add for Pos {
    type Output = Pos;
    fn add(self, other: Self) -> Self::Output {
        Pos::new(self.x + other.x, self.y + other.y)
    }
}

impl Mul<f64> for Pos {
    type Output = Pos;
    fn mul(self, other: f64) -> Self::Output {
        Pos::new(self.x * other, self.y * other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn distance_is_euclidean() {
        assert_approx_eq!(Pos::new(0.0, 0.0).distance(&Pos::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Pos::new(-2.5, 7.0);
        let b = Pos::new(11.0, 1.25);
        assert_approx_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn arithmetic() {
        let a = Pos::new(1.0, 2.0);
        let b = Pos::new(4.0, -1.0);
        assert_eq!(b - a, Pos::new(3.0, -3.0));
        assert_eq!(a + b, Pos::new(5.0, 1.0));
        assert_eq!(a * 2.0, Pos::new(2.0, 4.0));
        assert_approx_eq!(a.dot(&b), 2.0);
    }
}
