//! Result formatting.
//!
//! Times are printed with exactly three decimals, rounding halves away from
//! zero: `1.0625` becomes `1.063`.

use std::io::Write;

use serde::Serialize;

use crate::models::Solution;

/// Number of decimals in formatted times.
pub const TIME_DECIMALS: usize = 3;

/// Formats a time with three decimals, rounding half away from zero.
///
/// # Examples
///
/// ```
/// use uav_route::io::format_time;
///
/// assert_eq!(format_time(10.0), "10.000");
/// assert_eq!(format_time(1.0625), "1.063");
/// assert_eq!(format_time(1.0624), "1.062");
/// ```
pub fn format_time(value: f64) -> String {
    let scale = 10f64.powi(TIME_DECIMALS as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return format!("{value:.prec$}", prec = TIME_DECIMALS);
    }
    format!("{:.prec$}", scaled.round() / scale, prec = TIME_DECIMALS)
}

/// Formats visited indices as a space-separated list.
pub fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Printable summary of a [`Solution`].
///
/// # Examples
///
/// ```
/// use uav_route::io::Report;
/// use uav_route::models::Solution;
///
/// let report = Report::new(&Solution::new(11.0, Some(vec![0, 2])));
/// let mut out = Vec::new();
/// report.write_text(&mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "11.000\n0 2\n");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Minimum total time.
    pub min_time: f64,
    /// `min_time` with three decimals.
    pub formatted_time: String,
    /// Visited indices, if reconstructed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<usize>>,
    /// Skipped waypoint indices, if the path was reconstructed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<Vec<usize>>,
}

impl Report {
    /// Builds a report from a solution.
    pub fn new(solution: &Solution) -> Self {
        Self {
            min_time: solution.min_time(),
            formatted_time: format_time(solution.min_time()),
            path: solution.path().map(<[usize]>::to_vec),
            skipped: solution.skipped_waypoints(),
        }
    }

    /// Writes the time line, then the path line when present.
    pub fn write_text<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        writeln!(out, "{}", self.formatted_time)?;
        if let Some(path) = &self.path {
            writeln!(out, "{}", format_path(path))?;
        }
        Ok(())
    }

    /// Writes the report as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, mut out: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(&mut out, self)?;
        writeln!(out).map_err(serde_json::Error::io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_pads() {
        assert_eq!(format_time(0.0), "0.000");
        assert_eq!(format_time(11.0), "11.000");
        assert_eq!(format_time(12.5), "12.500");
    }

    #[test]
    fn test_format_time_rounds_half_away_from_zero() {
        // Exactly representable halves.
        assert_eq!(format_time(1.0625), "1.063");
        assert_eq!(format_time(2.0625), "2.063");
        assert_eq!(format_time(3.1875), "3.188");
        assert_eq!(format_time(-1.0625), "-1.063");
    }

    #[test]
    fn test_format_time_rounds_nearest() {
        assert_eq!(format_time(2.0f64.sqrt()), "1.414");
        assert_eq!(format_time(16.142135623730951), "16.142");
        assert_eq!(format_time(0.99951), "1.000");
    }

    #[test]
    fn test_format_time_huge() {
        let s = format_time(1e308);
        assert!(s.ends_with(".000"));
        assert_eq!(format_time(f64::INFINITY), "inf");
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[0, 2, 5]), "0 2 5");
        assert_eq!(format_path(&[0, 1]), "0 1");
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn test_report_text_without_path() {
        let mut out = Vec::new();
        Report::new(&Solution::new(10.0, None))
            .write_text(&mut out)
            .expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "10.000\n");
    }

    #[test]
    fn test_report_json() {
        let report = Report::new(&Solution::new(11.0, Some(vec![0, 2])));
        assert_eq!(report.skipped, Some(vec![1]));
        let mut out = Vec::new();
        report.write_json(&mut out).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
        assert_eq!(value["formatted_time"], "11.000");
        assert_eq!(value["path"], serde_json::json!([0, 2]));
        assert_eq!(value["skipped"], serde_json::json!([1]));
    }
}
