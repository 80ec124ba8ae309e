//! Boundary layer around the optimizer.
//!
//! - [`parse_case`] / [`load_case`] / [`write_case`] — plain-text case files
//! - [`random_case`] — seeded random instances
//! - [`Report`] — text and JSON output with three-decimal times

mod case;
mod generate;
mod report;

pub use case::{load_case, parse_case, write_case};
pub use generate::{random_case, CaseShape};
pub use report::{format_path, format_time, Report, TIME_DECIMALS};
