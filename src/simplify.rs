//! Douglas-Peucker simplification producing per-point significance.
//!
//! Instead of returning the kept points, the simplifier records for every
//! point the distance at which it was selected. Zero means the point was
//! never selected. The level assigner turns those distances into zoom
//! levels, so one pass serves every level of detail.

use geo::Coord;
use tracing::trace;

use crate::distance::SegmentDistance;

/// Result of simplifying one coordinate sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Significance {
    /// One entry per input point; `0.0` for points not selected.
    pub distances: Vec<f64>,
    /// Largest distance recorded in `distances`.
    pub abs_max: f64,
}

impl Significance {
    /// Whether point `index` is part of the simplified line.
    ///
    /// Endpoints are always retained regardless of their recorded value.
    pub fn is_retained(&self, index: usize) -> bool {
        index == 0 || index + 1 == self.distances.len() || self.distances[index] != 0.0
    }

    /// Number of points retained in the simplified line.
    pub fn retained_count(&self) -> usize {
        (0..self.distances.len())
            .filter(|&index| self.is_retained(index))
            .count()
    }
}

/// Run Douglas-Peucker over `coords` with tolerance `very_small`.
///
/// Spans are processed from an explicit stack, so pathological inputs cannot
/// exhaust the call stack. Distances equal to the tolerance are discarded.
/// Ties within a span go to the first index scanned.
pub fn significance<D>(coords: &[Coord<f64>], very_small: f64, metric: &D) -> Significance
where
    D: SegmentDistance + ?Sized,
{
    let n = coords.len();
    let mut distances = vec![0.0; n];
    let mut abs_max = 0.0_f64;

    if n <= 2 {
        return Significance { distances, abs_max };
    }

    let mut stack: Vec<(usize, usize)> = vec![(0, n - 1)];

    while let Some((lo, hi)) = stack.pop() {
        let mut max_dist = 0.0;
        let mut max_index = lo;

        for i in (lo + 1)..hi {
            let dist = metric.distance(coords[i], coords[lo], coords[hi]);
            if dist > max_dist {
                max_dist = dist;
                max_index = i;
            }
        }

        if max_dist > very_small {
            trace!(lo, hi, split = max_index, distance = max_dist, "split span");
            distances[max_index] = max_dist;
            abs_max = abs_max.max(max_dist);

            if max_index - lo > 1 {
                stack.push((lo, max_index));
            }
            if hi - max_index > 1 {
                stack.push((max_index, hi));
            }
        }
    }

    Significance { distances, abs_max }
}
