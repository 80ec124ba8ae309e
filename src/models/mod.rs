//! Domain model types for UAV route optimization.
//!
//! Provides points with skip penalties, validated routes as ordered point
//! sequences from start to terminal, and the solution produced by the
//! optimizer.

mod point;
mod route;
mod solution;

pub use point::Point;
pub use route::Route;
pub(crate) use route::validate_points;
pub use solution::Solution;
