//! Error types for polyline encoding.

use std::fmt;

/// Geometry kinds the encoder can reduce to a single coordinate sequence.
pub const ALLOWED_SHAPE_KINDS: &[&str] = &["LineString", "Polygon"];

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;

#[derive(Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// Geometry is neither a path nor a polygon with an exterior ring.
    UnsupportedShapeKind {
        kind: &'static str,
        allowed: &'static [&'static str],
    },
    /// Dump-mode stride was zero.
    InvalidStride,
    /// Geometry text could not be parsed. Carries the parser's message.
    MalformedInput(String),
    /// The extracted coordinate sequence has no points.
    EmptyShape,
    /// Settings outside their valid ranges.
    InvalidSettings(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnsupportedShapeKind { kind, allowed } => write!(
                f,
                "geometry type {} not supported, expected one of: {}",
                kind,
                allowed.join(", ")
            ),
            EncodeError::InvalidStride => write!(f, "dump encoding step must be at least 1"),
            EncodeError::MalformedInput(message) => write!(f, "malformed geometry: {}", message),
            EncodeError::EmptyShape => write!(f, "geometry has no coordinates to encode"),
            EncodeError::InvalidSettings(message) => write!(f, "invalid settings: {}", message),
        }
    }
}

impl std::error::Error for EncodeError {}

impl From<geozero::error::GeozeroError> for EncodeError {
    fn from(err: geozero::error::GeozeroError) -> Self {
        EncodeError::MalformedInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_kind_names_allowed_kinds() {
        let err = EncodeError::UnsupportedShapeKind {
            kind: "Point",
            allowed: ALLOWED_SHAPE_KINDS,
        };
        assert_eq!(
            err.to_string(),
            "geometry type Point not supported, expected one of: LineString, Polygon"
        );
    }

    #[test]
    fn test_malformed_input_keeps_message() {
        let err = EncodeError::MalformedInput("unexpected token".to_string());
        assert!(err.to_string().contains("unexpected token"));
    }
}
