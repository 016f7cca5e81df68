//! Error taxonomy for map building and query evaluation.
//!
//! Map errors abort the whole build. Query errors abort only the line that
//! produced them; the map is never touched by either.

use thiserror::Error;

/// Shape construction failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Invalid shape: {reason}")]
    InvalidShape { reason: String },

    #[error("Unknown shape: {value}")]
    UnknownShape { value: String },
}

/// Failure of a single map line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("Line `{line}` does not meet the format")]
    MalformedLine { line: String },

    #[error("Unknown zone type: {value}")]
    UnknownZoneType { value: String },

    #[error("Unknown shape: {value}")]
    UnknownShape { value: String },

    #[error("Invalid coordinate format: {token}")]
    InvalidCoordinateFormat { token: String },

    #[error("Invalid radius: {token}")]
    InvalidRadius { token: String },

    #[error("Invalid shape: {reason}")]
    InvalidShape { reason: String },
}

impl From<ShapeError> for LineError {
    fn from(err: ShapeError) -> Self {
        match err {
            ShapeError::InvalidShape { reason } => LineError::InvalidShape { reason },
            ShapeError::UnknownShape { value } => LineError::UnknownShape { value },
        }
    }
}

/// Map build failure: the first bad line and what was wrong with it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("map line {line_no}: {kind}")]
pub struct MapError {
    /// 1-based line number in the source file
    pub line_no: usize,
    #[source]
    pub kind: LineError,
}

impl MapError {
    pub fn new(line_no: usize, kind: LineError) -> Self {
        Self { line_no, kind }
    }
}

/// Query line failures. The message is shown to the operator as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("one of the planes format was incorrect: `{token}`")]
    MalformedPlane { token: String },

    #[error("we cannot act without a plane ID: `{token}`")]
    MissingId { token: String },

    #[error("invalid plane coordinates: `{token}`")]
    InvalidCoordinateFormat { token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_converts_to_line_error() {
        let err: LineError = ShapeError::InvalidShape { reason: "negative radius".into() }.into();
        assert_eq!(err, LineError::InvalidShape { reason: "negative radius".into() });
    }

    #[test]
    fn test_map_error_display_carries_line_number() {
        let err = MapError::new(3, LineError::UnknownZoneType { value: "boom".into() });
        assert_eq!(err.to_string(), "map line 3: Unknown zone type: boom");
    }

    #[test]
    fn test_query_error_messages() {
        let err = QueryError::MissingId { token: "(1,1)".into() };
        assert!(err.to_string().starts_with("we cannot act without a plane ID"));

        let err = QueryError::MalformedPlane { token: "Q1".into() };
        assert!(err.to_string().starts_with("one of the planes format was incorrect"));
    }
}
