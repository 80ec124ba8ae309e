//! Error types.
//!
//! [`InputError`] covers malformed routes and case files, [`ConfigError`]
//! covers invalid vehicle parameters. Both are wrapped by the crate-level
//! [`Error`].

use thiserror::Error;

/// Malformed or missing input data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A route needs at least a start and a terminal.
    #[error("a route needs a start and a terminal, got {len} point(s)")]
    TooFewPoints {
        /// Number of points supplied.
        len: usize,
    },
    /// The penalty list does not line up with the coordinate list.
    #[error("expected {expected} skip penalties (one per point), got {actual}")]
    PenaltyCountMismatch {
        /// Number of points.
        expected: usize,
        /// Number of penalties supplied.
        actual: usize,
    },
    /// A coordinate is NaN or infinite.
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        /// Index of the point in the route.
        index: usize,
        /// X-coordinate.
        x: f64,
        /// Y-coordinate.
        y: f64,
    },
    /// A skip penalty is negative, NaN or infinite.
    #[error("point {index} has invalid skip penalty {penalty} (must be finite and >= 0)")]
    InvalidPenalty {
        /// Index of the point in the route.
        index: usize,
        /// Offending penalty.
        penalty: f64,
    },
    /// The start or terminal carries a non-zero skip penalty.
    #[error("endpoint {index} must have a zero skip penalty, got {penalty}")]
    EndpointPenalty {
        /// Index of the endpoint (0 or M-1).
        index: usize,
        /// Offending penalty.
        penalty: f64,
    },
    /// A visited sequence is not a valid forward path through the route.
    #[error("invalid visited path {path:?} for a route of {len} points: {reason}")]
    InvalidPath {
        /// The rejected sequence.
        path: Vec<usize>,
        /// Number of points in the route.
        len: usize,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// The declared waypoint count is negative.
    #[error("number of waypoints ({0}) must be non-negative")]
    NegativeCount(i64),
    /// The input ended before a required field.
    #[error("line {line}: missing {field}")]
    MissingField {
        /// Line where the field was expected (1-based).
        line: usize,
        /// Name of the missing field.
        field: &'static str,
    },
    /// A token could not be parsed as a number.
    #[error("line {line}: cannot parse {token:?} as {field}")]
    Malformed {
        /// Line of the token (1-based).
        line: usize,
        /// Name of the field being parsed.
        field: &'static str,
        /// Raw token.
        token: String,
    },
    /// The case is not closed by a `0` marker.
    #[error("missing terminal 0 marker (found {found})")]
    MissingEndMarker {
        /// What was found instead.
        found: String,
    },
}

/// Invalid optimizer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Speed is zero, negative or not finite.
    #[error("cruising speed must be finite and > 0, got {0}")]
    NonPositiveSpeed(f64),
    /// Dwell time is negative or not finite.
    #[error("dwell time must be finite and >= 0, got {0}")]
    NegativeDwellTime(f64),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or missing input data.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Invalid optimizer configuration.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Failure reading or writing a case file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias using the crate [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
