//! Minimum-time route optimizer.
//!
//! # Algorithm
//!
//! Given an ordered route (start, waypoints, terminal), finds the subset of
//! waypoints to visit, in order, that minimizes total time. Every direct hop
//! `j → i` costs its travel time plus the penalties of the waypoints it jumps
//! over, and every arrival (terminal included) costs the dwell time.
//!
//! Models the problem as a shortest path on a DAG where node `i` is route
//! point `i` and edge `(j, i)` exists for every `j < i`:
//!
//! ```text
//! best[0] = 0
//! best[i] = min_{j < i} (best[j] + dist(j, i) / speed + skipped(j, i)) + dwell
//! ```
//!
//! `skipped(j, i)` is read in O(1) from a [`PrefixPenalty`] array.
//!
//! # Complexity
//!
//! O(M²) time and O(M) extra space, M = number of route points.

use tracing::{debug, trace};

use crate::error::{ConfigError, InputError};
use crate::models::{validate_points, Point, Route, Solution};

use super::{PrefixPenalty, UavConfig};

/// Whether to reconstruct the visited path alongside the minimum time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    /// Only compute the minimum time.
    #[default]
    TimeOnly,
    /// Also return the visited indices.
    WithPath,
}

/// Computes minimum-time routes for a UAV with fixed speed and dwell time.
///
/// The optimizer holds no state besides its configuration, so a single
/// instance can serve any number of routes, from any number of threads.
///
/// # Examples
///
/// ```
/// use uav_route::models::{Point, Route};
/// use uav_route::optimizer::RouteOptimizer;
///
/// let optimizer = RouteOptimizer::new(1.0, 1.0).unwrap();
/// let route = Route::from_parts(
///     Point::endpoint(0.0, 0.0),
///     vec![Point::new(5.0, 0.0, 100.0)],
///     Point::endpoint(10.0, 0.0),
/// )
/// .unwrap();
///
/// let solution = optimizer.solve_with_path(&route);
/// // Skipping costs 100, visiting only costs one extra dwell.
/// assert!((solution.min_time() - 12.0).abs() < 1e-10);
/// assert_eq!(solution.path(), Some(&[0, 1, 2][..]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteOptimizer {
    config: UavConfig,
}

impl RouteOptimizer {
    /// Creates an optimizer for the given cruising speed and dwell time.
    ///
    /// Fails if `speed <= 0` or `dwell_time < 0` (or either is not finite).
    pub fn new(speed: f64, dwell_time: f64) -> Result<Self, ConfigError> {
        UavConfig::new(speed, dwell_time).map(|config| Self { config })
    }

    /// Creates an optimizer from an existing configuration.
    pub fn from_config(config: UavConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The optimizer's configuration.
    pub fn config(&self) -> &UavConfig {
        &self.config
    }

    /// Cruising speed.
    pub fn speed(&self) -> f64 {
        self.config.speed()
    }

    /// Dwell time per visited point.
    pub fn dwell_time(&self) -> f64 {
        self.config.dwell_time()
    }

    /// Minimum total time for the route, without path reconstruction.
    pub fn solve(&self, route: &Route) -> Solution {
        self.run(route.points(), PathMode::TimeOnly)
    }

    /// Minimum total time for the route, with the visited indices.
    pub fn solve_with_path(&self, route: &Route) -> Solution {
        self.run(route.points(), PathMode::WithPath)
    }

    /// Computes the minimum time for an unvalidated point sequence.
    ///
    /// Runs the [`Route`] preconditions first and fails with an
    /// [`InputError`] (e.g. fewer than two points) instead of computing.
    pub fn compute_minimum_time(
        &self,
        points: &[Point],
        mode: PathMode,
    ) -> Result<Solution, InputError> {
        validate_points(points)?;
        Ok(self.run(points, mode))
    }

    /// Total time of a given visited sequence under this optimizer's model.
    ///
    /// `path` must start at 0, end at the terminal and be strictly
    /// increasing. Skipped points are charged their penalty.
    pub fn evaluate(&self, route: &Route, path: &[usize]) -> Result<f64, InputError> {
        let len = route.len();
        let invalid = |reason| InputError::InvalidPath {
            path: path.to_vec(),
            len,
            reason,
        };

        if path.first() != Some(&0) {
            return Err(invalid("must start at index 0"));
        }
        if path.last() != Some(&(len - 1)) {
            return Err(invalid("must end at the terminal index"));
        }
        if path.len() < 2 || path.windows(2).any(|w| w[0] >= w[1]) {
            return Err(invalid("indices must be strictly increasing"));
        }

        let points = route.points();
        let prefix = PrefixPenalty::new(points);
        let total = path.windows(2).fold(0.0, |t, w| {
            let (j, i) = (w[0], w[1]);
            self.hop(t, points, &prefix, j, i) + self.dwell_time()
        });
        Ok(total)
    }

    /// Cost of arriving at `i` directly from `j`, before the dwell time.
    fn hop(&self, at_j: f64, points: &[Point], prefix: &PrefixPenalty, j: usize, i: usize) -> f64 {
        let travel = points[j].distance_to(&points[i]) / self.speed();
        at_j + travel + prefix.skipped_between(j, i)
    }

    fn run(&self, points: &[Point], mode: PathMode) -> Solution {
        let m = points.len();
        debug!(
            points = m,
            speed = self.speed(),
            dwell_time = self.dwell_time(),
            "optimizing route"
        );

        let prefix = PrefixPenalty::new(points);

        // best[i] = minimum time to arrive (and dwell) at point i
        // pred[i] = predecessor of i on that optimal path
        let mut best = vec![f64::INFINITY; m];
        let mut pred = vec![0usize; m];
        best[0] = 0.0;

        for i in 1..m {
            let mut min_time = f64::INFINITY;
            let mut min_j = 0;

            for j in 0..i {
                let candidate = self.hop(best[j], points, &prefix, j, i);
                // Strict: ties keep the earliest predecessor.
                if candidate < min_time {
                    min_time = candidate;
                    min_j = j;
                }
            }

            best[i] = min_time + self.dwell_time();
            pred[i] = min_j;
            trace!(index = i, time = best[i], pred = min_j, "settled");
        }

        let min_time = best[m - 1];
        let path = match mode {
            PathMode::TimeOnly => None,
            PathMode::WithPath => Some(backtrack(&pred)),
        };
        debug!(min_time, "route optimized");

        Solution::new(min_time, path)
    }
}

/// Follows predecessor links from the terminal back to the start.
fn backtrack(pred: &[usize]) -> Vec<usize> {
    let mut path = Vec::new();
    let mut i = pred.len() - 1;
    path.push(i);
    while i > 0 {
        i = pred[i];
        path.push(i);
    }
    path.reverse();
    path
}
