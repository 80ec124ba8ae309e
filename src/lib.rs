//! # uav-route
//!
//! Minimum-time routing for a single UAV flying from a start point to a
//! terminal point through an ordered list of optional waypoints. Skipping a
//! waypoint costs its penalty; every visited point, terminal included, costs
//! a fixed dwell time.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Route, Solution)
//! - [`optimizer`] — Dynamic-programming optimizer and its configuration
//! - [`io`] — Case files, random instances, and result formatting
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use uav_route::io::{format_time, parse_case};
//! use uav_route::optimizer::RouteOptimizer;
//!
//! let route = parse_case("1\n0 0\n10 0\n5 0 100\n0\n").unwrap();
//! let optimizer = RouteOptimizer::new(1.0, 1.0).unwrap();
//! let solution = optimizer.solve_with_path(&route);
//! assert_eq!(format_time(solution.min_time()), "12.000");
//! assert_eq!(solution.path(), Some(&[0, 1, 2][..]));
//! ```

pub mod error;
pub mod io;
pub mod models;
pub mod optimizer;

pub use error::{Error, Result};
