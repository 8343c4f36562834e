//! Encoded polyline output record.
//!
//! A point string and a level string produced together by one encode call.
//! Both are printable ASCII in the range `?`..=`~`.

use serde::{Deserialize, Serialize};

/// Encoded points and zoom levels of one line.
///
/// The level string holds exactly one entry per point encoded in the point
/// string, in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPolyline {
    points: String,
    levels: String,
}

impl EncodedPolyline {
    pub(crate) fn new(points: String, levels: String) -> Self {
        Self { points, levels }
    }

    /// Delta-encoded coordinate pairs.
    pub fn points(&self) -> &str {
        &self.points
    }

    /// One encoded level per retained point.
    pub fn levels(&self) -> &str {
        &self.levels
    }

    /// Consumes the record and returns `(points, levels)`.
    pub fn into_parts(self) -> (String, String) {
        (self.points, self.levels)
    }
}
