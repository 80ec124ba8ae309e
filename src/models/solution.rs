//! Solution type.

use serde::{Deserialize, Serialize};

/// Result of a route optimization.
///
/// Holds the minimum total time and, when path reconstruction was requested,
/// the visited point indices in route order. A path always starts at 0 and
/// ends at the terminal index.
///
/// # Examples
///
/// ```
/// use uav_route::models::Solution;
///
/// let sol = Solution::new(11.0, Some(vec![0, 2, 4]));
/// assert_eq!(sol.min_time(), 11.0);
/// assert_eq!(sol.visited_waypoints(), Some(&[2][..]));
/// assert_eq!(sol.skipped_waypoints(), Some(vec![1, 3]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    min_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<Vec<usize>>,
}

impl Solution {
    /// Creates a solution.
    pub fn new(min_time: f64, path: Option<Vec<usize>>) -> Self {
        Self { min_time, path }
    }

    /// Minimum total time from start to terminal.
    pub fn min_time(&self) -> f64 {
        self.min_time
    }

    /// Visited indices, start and terminal included, if reconstructed.
    pub fn path(&self) -> Option<&[usize]> {
        self.path.as_deref()
    }

    /// Consumes the solution and returns the path.
    pub fn into_path(self) -> Option<Vec<usize>> {
        self.path
    }

    /// Visited intermediate waypoints (path without its endpoints).
    pub fn visited_waypoints(&self) -> Option<&[usize]> {
        self.path().map(|p| {
            if p.len() <= 2 {
                &p[p.len()..]
            } else {
                &p[1..p.len() - 1]
            }
        })
    }

    /// Intermediate waypoints that were skipped.
    pub fn skipped_waypoints(&self) -> Option<Vec<usize>> {
        let path = self.path()?;
        let terminal = *path.last()?;
        let mut visited = path.iter().peekable();
        let mut skipped = Vec::new();
        for idx in 1..terminal {
            while visited.next_if(|&&v| v < idx).is_some() {}
            if visited.peek() != Some(&&idx) {
                skipped.push(idx);
            }
        }
        Some(skipped)
    }
}
