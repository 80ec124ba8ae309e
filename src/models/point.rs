//! Point type.

use serde::{Deserialize, Serialize};

/// A location on the course with a skip penalty.
///
/// The penalty is the time charged when a route jumps over this point instead
/// of visiting it. Start and terminal points always carry a zero penalty.
///
/// # Examples
///
/// ```
/// use uav_route::models::Point;
///
/// let start = Point::endpoint(0.0, 0.0);
/// assert_eq!(start.penalty(), 0.0);
///
/// let p = Point::new(3.0, 4.0, 25.0);
/// assert_eq!(p.penalty(), 25.0);
/// assert!((start.distance_to(&p) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
    #[serde(default)]
    penalty: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64, penalty: f64) -> Self {
        Self { x, y, penalty }
    }

    /// Creates a start or terminal point (penalty = 0).
    pub fn endpoint(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Time charged if this point is skipped.
    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    ///
    /// Uses [`f64::hypot`], so large coordinates do not overflow.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(10.0, 20.0, 5.0);
        assert_eq!(p.x(), 10.0);
        assert_eq!(p.y(), 20.0);
        assert_eq!(p.penalty(), 5.0);
    }

    #[test]
    fn test_point_endpoint() {
        let p = Point::endpoint(35.0, 35.0);
        assert_eq!(p.penalty(), 0.0);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::endpoint(0.0, 0.0);
        let b = Point::new(3.0, 4.0, 1.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point_distance_symmetric() {
        let a = Point::new(1.0, 2.0, 0.0);
        let b = Point::new(4.0, 6.0, 0.0);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn test_point_distance_large_coordinates() {
        let a = Point::endpoint(-1e300, 0.0);
        let b = Point::endpoint(1e300, 1e300);
        let d = a.distance_to(&b);
        assert!(d.is_finite());
        assert!(d > 2e300);
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::endpoint(1.0, 2.0).is_finite());
        assert!(!Point::endpoint(f64::NAN, 2.0).is_finite());
        assert!(!Point::endpoint(1.0, f64::INFINITY).is_finite());
    }
}
