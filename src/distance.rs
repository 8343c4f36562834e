//! Point-to-segment distance used to rank points during simplification.
//!
//! The simplifier only needs a distance in the same units as
//! [`Settings::very_small`](crate::settings::Settings::very_small). Callers
//! working in a projected or geodesic frame can plug in their own metric.

use geo::{Coord, EuclideanDistance, Line, Point};

/// Distance from a point to the segment `start`-`end`.
///
/// Implementations must handle degenerate segments (`start == end`) by
/// returning the distance to that single point.
pub trait SegmentDistance {
    fn distance(&self, point: Coord<f64>, start: Coord<f64>, end: Coord<f64>) -> f64;
}

/// Planar euclidean distance in raw coordinate units.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarDistance;

impl SegmentDistance for PlanarDistance {
    fn distance(&self, point: Coord<f64>, start: Coord<f64>, end: Coord<f64>) -> f64 {
        Point::from(point).euclidean_distance(&Line::new(start, end))
    }
}

impl<F> SegmentDistance for F
where
    F: Fn(Coord<f64>, Coord<f64>, Coord<f64>) -> f64,
{
    fn distance(&self, point: Coord<f64>, start: Coord<f64>, end: Coord<f64>) -> f64 {
        self(point, start, end)
    }
}
