//! Minimum-time route optimization.
//!
//! - [`RouteOptimizer`] — dynamic program over the ordered route
//! - [`UavConfig`] — cruising speed and dwell time
//! - [`PrefixPenalty`] — O(1) lookup of skipped penalty between two indices

mod config;
mod prefix;
mod solver;

pub use config::{UavConfig, DEFAULT_DWELL_TIME, DEFAULT_SPEED};
pub use prefix::PrefixPenalty;
pub use solver::{PathMode, RouteOptimizer};
