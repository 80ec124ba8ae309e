//! Random case generation.

use rand::Rng;

use crate::models::{Point, Route};

/// Size and value ranges of a random case.
///
/// # Examples
///
/// ```
/// use uav_route::io::CaseShape;
///
/// let shape = CaseShape::new(20, 100.0, 50.0).unwrap();
/// assert_eq!(shape.waypoints(), 20);
/// assert!(CaseShape::new(5, -1.0, 50.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseShape {
    waypoints: usize,
    extent: f64,
    max_penalty: f64,
}

impl CaseShape {
    /// Creates a case shape.
    ///
    /// Coordinates are drawn from `[0, extent]` and penalties from
    /// `[0, max_penalty]`. Returns `None` if either bound is negative or
    /// non-finite.
    pub fn new(waypoints: usize, extent: f64, max_penalty: f64) -> Option<Self> {
        if !extent.is_finite() || extent < 0.0 || !max_penalty.is_finite() || max_penalty < 0.0 {
            return None;
        }
        Some(Self {
            waypoints,
            extent,
            max_penalty,
        })
    }

    /// Number of intermediate waypoints.
    pub fn waypoints(&self) -> usize {
        self.waypoints
    }

    /// Upper bound of both coordinates.
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Upper bound of skip penalties.
    pub fn max_penalty(&self) -> f64 {
        self.max_penalty
    }
}

impl Default for CaseShape {
    fn default() -> Self {
        Self {
            waypoints: 10,
            extent: 100.0,
            max_penalty: 100.0,
        }
    }
}

/// Generates a route with uniformly random points and penalties.
pub fn random_case<R: Rng + ?Sized>(rng: &mut R, shape: &CaseShape) -> Route {
    let (sx, sy) = coord(rng, shape.extent);
    let mut points = Vec::with_capacity(shape.waypoints + 2);
    points.push(Point::endpoint(sx, sy));
    for _ in 0..shape.waypoints {
        let (x, y) = coord(rng, shape.extent);
        let penalty = rng.random_range(0.0..=shape.max_penalty);
        points.push(Point::new(x, y, penalty));
    }
    let (tx, ty) = coord(rng, shape.extent);
    points.push(Point::endpoint(tx, ty));

    Route::from_valid_points(points)
}

fn coord<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> (f64, f64) {
    (rng.random_range(0.0..=extent), rng.random_range(0.0..=extent))
}
