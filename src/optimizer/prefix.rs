//! Prefix sums of skip penalties.

use crate::models::Point;

/// Cumulative skip penalties along a route.
///
/// Entry `i` is the total penalty of points `1..=i`. Endpoints contribute
/// zero, so the array is non-decreasing and starts at 0.
///
/// # Examples
///
/// ```
/// use uav_route::models::Point;
/// use uav_route::optimizer::PrefixPenalty;
///
/// let points = [
///     Point::endpoint(0.0, 0.0),
///     Point::new(1.0, 0.0, 2.0),
///     Point::new(2.0, 0.0, 3.0),
///     Point::endpoint(3.0, 0.0),
/// ];
/// let prefix = PrefixPenalty::new(&points);
/// assert_eq!(prefix.as_slice(), &[0.0, 2.0, 5.0, 5.0]);
/// // Jumping 0 -> 3 skips points 1 and 2.
/// assert_eq!(prefix.skipped_between(0, 3), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixPenalty {
    sums: Vec<f64>,
}

impl PrefixPenalty {
    /// Builds the prefix array for a point sequence.
    pub fn new(points: &[Point]) -> Self {
        let mut sums = Vec::with_capacity(points.len());
        let last = points.len().saturating_sub(1);
        let mut acc = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i != 0 && i != last {
                acc += p.penalty();
            }
            sums.push(acc);
        }
        Self { sums }
    }

    /// Cumulative penalty up to and including index `i`.
    pub fn get(&self, i: usize) -> f64 {
        self.sums[i]
    }

    /// Total penalty of all intermediate points.
    pub fn total(&self) -> f64 {
        self.sums.last().copied().unwrap_or(0.0)
    }

    /// Penalty of the points strictly between `j` and `i` (`j < i`).
    ///
    /// This is what a direct hop from `j` to `i` pays.
    ///
    /// # Panics
    ///
    /// Panics if `j >= i` or `i` is out of bounds.
    pub fn skipped_between(&self, j: usize, i: usize) -> f64 {
        debug_assert!(j < i, "skipped_between requires j < i");
        self.sums[i - 1] - self.sums[j]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.sums.len()
    }

    /// Returns `true` if built from an empty point sequence.
    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    /// The raw prefix sums.
    pub fn as_slice(&self) -> &[f64] {
        &self.sums
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(penalties: &[f64]) -> Vec<Point> {
        let mut pts = vec![Point::endpoint(0.0, 0.0)];
        pts.extend(
            penalties
                .iter()
                .enumerate()
                .map(|(k, &p)| Point::new(k as f64 + 1.0, 0.0, p)),
        );
        pts.push(Point::endpoint(penalties.len() as f64 + 1.0, 0.0));
        pts
    }

    #[test]
    fn test_prefix_no_waypoints() {
        let prefix = PrefixPenalty::new(&points(&[]));
        assert_eq!(prefix.as_slice(), &[0.0, 0.0]);
        assert_eq!(prefix.skipped_between(0, 1), 0.0);
        assert_eq!(prefix.total(), 0.0);
    }

    #[test]
    fn test_prefix_sums() {
        let prefix = PrefixPenalty::new(&points(&[1.0, 2.0, 4.0]));
        assert_eq!(prefix.len(), 5);
        assert_eq!(prefix.as_slice(), &[0.0, 1.0, 3.0, 7.0, 7.0]);
        assert_eq!(prefix.get(2), 3.0);
        assert_eq!(prefix.total(), 7.0);
    }

    #[test]
    fn test_prefix_skipped_between() {
        let prefix = PrefixPenalty::new(&points(&[1.0, 2.0, 4.0]));
        // Adjacent hops skip nothing.
        for j in 0..4 {
            assert_eq!(prefix.skipped_between(j, j + 1), 0.0);
        }
        assert_eq!(prefix.skipped_between(0, 2), 1.0);
        assert_eq!(prefix.skipped_between(0, 4), 7.0);
        assert_eq!(prefix.skipped_between(1, 4), 6.0);
        assert_eq!(prefix.skipped_between(1, 3), 2.0);
    }

    #[test]
    #[should_panic]
    fn test_prefix_skipped_between_requires_forward_hop() {
        let prefix = PrefixPenalty::new(&points(&[1.0]));
        prefix.skipped_between(0, 0);
    }

    #[test]
    fn test_prefix_ignores_endpoint_penalties() {
        // Route validation rejects these, but the prefix builder must still
        // leave endpoints out of the sums.
        let pts = vec![
            Point::new(0.0, 0.0, 9.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(2.0, 0.0, 9.0),
        ];
        let prefix = PrefixPenalty::new(&pts);
        assert_eq!(prefix.as_slice(), &[0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_prefix_non_decreasing() {
        let prefix = PrefixPenalty::new(&points(&[0.0, 3.5, 0.0, 1.25]));
        assert!(prefix.as_slice().windows(2).all(|w| w[0] <= w[1]));
        assert!(!prefix.is_empty());
    }
}
