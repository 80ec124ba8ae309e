//! Route type.

use crate::error::InputError;

use super::Point;

/// An ordered sequence of points from start to terminal.
///
/// Index 0 is the start, index `len() - 1` the terminal, and everything in
/// between is an optional waypoint. Any visited subsequence keeps this order.
///
/// A `Route` is always valid: it has at least two points, finite
/// coordinates, finite non-negative penalties, and zero-penalty endpoints.
///
/// # Examples
///
/// ```
/// use uav_route::models::{Point, Route};
///
/// let route = Route::from_parts(
///     Point::endpoint(0.0, 0.0),
///     vec![Point::new(5.0, 0.0, 100.0)],
///     Point::endpoint(10.0, 0.0),
/// )
/// .unwrap();
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.num_waypoints(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<Point>,
}

impl Route {
    /// Creates a route from the full point sequence (start, waypoints, terminal).
    pub fn new(points: Vec<Point>) -> Result<Self, InputError> {
        validate_points(&points)?;
        Ok(Self { points })
    }

    /// Wraps points already known to satisfy the route preconditions.
    pub(crate) fn from_valid_points(points: Vec<Point>) -> Self {
        debug_assert!(validate_points(&points).is_ok());
        Self { points }
    }

    /// Creates a route from its start, waypoints and terminal.
    pub fn from_parts(
        start: Point,
        waypoints: Vec<Point>,
        terminal: Point,
    ) -> Result<Self, InputError> {
        let mut points = Vec::with_capacity(waypoints.len() + 2);
        points.push(start);
        points.extend(waypoints);
        points.push(terminal);
        Self::new(points)
    }

    /// Creates a route from coordinates and a parallel list of skip penalties.
    ///
    /// `penalties` needs one entry per coordinate, with zeros at both ends.
    pub fn with_penalties(
        coordinates: &[(f64, f64)],
        penalties: &[f64],
    ) -> Result<Self, InputError> {
        if coordinates.len() != penalties.len() {
            return Err(InputError::PenaltyCountMismatch {
                expected: coordinates.len(),
                actual: penalties.len(),
            });
        }
        let points = coordinates
            .iter()
            .zip(penalties)
            .map(|(&(x, y), &p)| Point::new(x, y, p))
            .collect();
        Self::new(points)
    }

    /// All points, start first and terminal last.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points including both endpoints.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a route holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of intermediate waypoints.
    pub fn num_waypoints(&self) -> usize {
        self.points.len() - 2
    }

    /// The start point (index 0).
    pub fn start(&self) -> &Point {
        &self.points[0]
    }

    /// The terminal point (index `len() - 1`).
    pub fn terminal(&self) -> &Point {
        &self.points[self.points.len() - 1]
    }

    /// The intermediate waypoints.
    pub fn waypoints(&self) -> &[Point] {
        &self.points[1..self.points.len() - 1]
    }

    /// Skip penalties, one per point.
    pub fn penalties(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.penalty()).collect()
    }
}

/// Checks the route preconditions on a raw point slice.
pub(crate) fn validate_points(points: &[Point]) -> Result<(), InputError> {
    if points.len() < 2 {
        return Err(InputError::TooFewPoints { len: points.len() });
    }

    let last = points.len() - 1;
    for (index, p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(InputError::NonFiniteCoordinate {
                index,
                x: p.x(),
                y: p.y(),
            });
        }
        let penalty = p.penalty();
        if !penalty.is_finite() || penalty < 0.0 {
            return Err(InputError::InvalidPenalty { index, penalty });
        }
        if (index == 0 || index == last) && penalty != 0.0 {
            return Err(InputError::EndpointPenalty { index, penalty });
        }
    }
    Ok(())
}
