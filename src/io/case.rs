//! Plain-text case files.
//!
//! A case lists the number of waypoints, the start and terminal coordinates,
//! one `x y penalty` line per waypoint, and a closing `0` marker:
//!
//! ```text
//! 2
//! 0 0
//! 10 0
//! 3 1 20
//! 7 -1 5.5
//! 0
//! ```
//!
//! Tokens are whitespace separated; line breaks only matter for error
//! messages.

use std::path::Path;

use tracing::debug;

use crate::error::InputError;
use crate::models::{Point, Route};

/// Parses a case into a route.
///
/// # Examples
///
/// ```
/// use uav_route::io::parse_case;
///
/// let route = parse_case("1\n0 0\n10 0\n5 0 100\n0\n").unwrap();
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.points()[1].penalty(), 100.0);
/// ```
pub fn parse_case(input: &str) -> Result<Route, InputError> {
    let mut cursor = Cursor::new(input);

    let (line, token) = cursor.next_token("waypoint count")?;
    let count: i64 = token.parse().map_err(|_| InputError::Malformed {
        line,
        field: "waypoint count",
        token: token.to_string(),
    })?;
    if count < 0 {
        return Err(InputError::NegativeCount(count));
    }
    let count = count as usize;

    let start = Point::endpoint(cursor.number("start x")?, cursor.number("start y")?);
    let terminal = Point::endpoint(cursor.number("terminal x")?, cursor.number("terminal y")?);

    // Each waypoint needs three tokens; a larger count fails on a missing field.
    let mut waypoints = Vec::with_capacity(count.min(cursor.remaining() / 3));
    for _ in 0..count {
        let x = cursor.number("waypoint x")?;
        let y = cursor.number("waypoint y")?;
        let penalty = cursor.number("waypoint penalty")?;
        waypoints.push(Point::new(x, y, penalty));
    }

    match cursor.next_token("end marker") {
        Ok((_, "0")) => {}
        Ok((_, other)) if other.parse::<i64>() == Ok(0) => {}
        Ok((_, other)) => {
            return Err(InputError::MissingEndMarker {
                found: other.to_string(),
            })
        }
        Err(_) => {
            return Err(InputError::MissingEndMarker {
                found: "end of input".to_string(),
            })
        }
    }
    if cursor.remaining() > 0 {
        debug!(tokens = cursor.remaining(), "ignoring input after end marker");
    }

    debug!(waypoints = count, "parsed case");
    Route::from_parts(start, waypoints, terminal)
}

/// Reads and parses a case file.
pub fn load_case(path: impl AsRef<Path>) -> crate::Result<Route> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading case");
    let content = std::fs::read_to_string(path)?;
    Ok(parse_case(&content)?)
}

/// Renders a route in the case format accepted by [`parse_case`].
pub fn write_case(route: &Route) -> String {
    let mut out = String::new();
    let start = route.start();
    let terminal = route.terminal();
    out.push_str(&format!("{}\n", route.num_waypoints()));
    out.push_str(&format!("{} {}\n", start.x(), start.y()));
    out.push_str(&format!("{} {}\n", terminal.x(), terminal.y()));
    for p in route.waypoints() {
        out.push_str(&format!("{} {} {}\n", p.x(), p.y(), p.penalty()));
    }
    out.push_str("0\n");
    out
}

/// Whitespace tokens tagged with their 1-based line number.
struct Cursor<'a> {
    tokens: Vec<(usize, &'a str)>,
    pos: usize,
    last_line: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        let tokens = input
            .lines()
            .enumerate()
            .flat_map(|(n, l)| l.split_whitespace().map(move |t| (n + 1, t)))
            .collect();
        Self {
            tokens,
            pos: 0,
            last_line: 1,
        }
    }

    fn next_token(&mut self, field: &'static str) -> Result<(usize, &'a str), InputError> {
        match self.tokens.get(self.pos) {
            Some(&(line, token)) => {
                self.pos += 1;
                self.last_line = line;
                Ok((line, token))
            }
            None => Err(InputError::MissingField {
                line: self.last_line,
                field,
            }),
        }
    }

    fn number(&mut self, field: &'static str) -> Result<f64, InputError> {
        let (line, token) = self.next_token(field)?;
        token.parse().map_err(|_| InputError::Malformed {
            line,
            field,
            token: token.to_string(),
        })
    }

    fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "2\n0 0\n10 0\n3 1 20\n7 -1 5.5\n0\n";

    #[test]
    fn test_parse_sample() {
        let route = parse_case(SAMPLE).expect("valid");
        assert_eq!(route.len(), 4);
        assert_eq!(route.start(), &Point::endpoint(0.0, 0.0));
        assert_eq!(route.terminal(), &Point::endpoint(10.0, 0.0));
        assert_eq!(route.points()[1], Point::new(3.0, 1.0, 20.0));
        assert_eq!(route.points()[2], Point::new(7.0, -1.0, 5.5));
    }

    #[test]
    fn test_parse_no_waypoints() {
        let route = parse_case("0\n1 2\n3 4\n0\n").expect("valid");
        assert_eq!(route.len(), 2);
        assert_eq!(route.num_waypoints(), 0);
    }

    #[test]
    fn test_parse_ignores_layout() {
        let route = parse_case("1 0 0 10 0\n  5 0 100   0").expect("valid");
        assert_eq!(route.len(), 3);
    }

    #[test]
    fn test_parse_negative_count() {
        assert_eq!(
            parse_case("-1\n0 0\n1 1\n0\n"),
            Err(InputError::NegativeCount(-1))
        );
    }

    #[test]
    fn test_parse_malformed_count() {
        assert!(matches!(
            parse_case("two\n0 0\n1 1\n0\n"),
            Err(InputError::Malformed { line: 1, field: "waypoint count", .. })
        ));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(
            parse_case(""),
            Err(InputError::MissingField {
                line: 1,
                field: "waypoint count"
            })
        );
    }

    #[test]
    fn test_parse_missing_field() {
        assert_eq!(
            parse_case("2\n0 0\n10 0\n3 1 20\n7 -1\n"),
            Err(InputError::MissingField {
                line: 5,
                field: "waypoint penalty"
            })
        );
        assert!(matches!(
            parse_case("0\n0 0\n10\n"),
            Err(InputError::MissingField { field: "terminal y", .. })
        ));
    }

    #[test]
    fn test_parse_huge_count_with_short_input() {
        assert_eq!(
            parse_case("1000000000000000000\n0 0\n10 0\n0\n"),
            Err(InputError::MissingField {
                line: 4,
                field: "waypoint y"
            })
        );
    }

    #[test]
    fn test_parse_malformed_number() {
        assert_eq!(
            parse_case("1\n0 0\n10 0\n3 abc 20\n0\n"),
            Err(InputError::Malformed {
                line: 4,
                field: "waypoint y",
                token: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_parse_missing_end_marker() {
        assert_eq!(
            parse_case("0\n0 0\n10 0\n"),
            Err(InputError::MissingEndMarker {
                found: "end of input".to_string()
            })
        );
        assert_eq!(
            parse_case("0\n0 0\n10 0\n7\n"),
            Err(InputError::MissingEndMarker {
                found: "7".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_negative_penalty() {
        assert!(matches!(
            parse_case("1\n0 0\n10 0\n5 0 -3\n0\n"),
            Err(InputError::InvalidPenalty { index: 1, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(
            parse_case("0\nNaN 0\n10 0\n0\n"),
            Err(InputError::NonFiniteCoordinate { index: 0, .. })
        ));
    }

    #[test]
    fn test_write_case_reparses() {
        let route = parse_case(SAMPLE).expect("valid");
        let text = write_case(&route);
        assert_eq!(text, "2\n0 0\n10 0\n3 1 20\n7 -1 5.5\n0\n");
        assert_eq!(parse_case(&text), Ok(route));
    }

    #[test]
    fn test_load_case_missing_file() {
        let err = load_case("definitely/not/here.txt").expect_err("missing file");
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
