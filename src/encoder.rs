//! Polyline encoding entry points.
//!
//! The simplified encoder runs Douglas-Peucker once and derives both the
//! retained point set and each point's zoom level from the recorded
//! significance distances. The dump encoder skips simplification and emits
//! every `step`-th point at one fixed level.

use geo::Coord;
use rayon::prelude::*;
use tracing::debug;

use crate::codec::{DeltaWriter, write_number};
use crate::distance::{PlanarDistance, SegmentDistance};
use crate::error::{EncodeError, Result};
use crate::levels::{endpoint_level_code, level_code};
use crate::polyline::EncodedPolyline;
use crate::settings::Settings;
use crate::shape::Shape;
use crate::simplify::significance;

/// Simplify and encode a shape with planar distances.
pub fn encode(shape: &Shape, settings: &Settings) -> EncodedPolyline {
    encode_with(shape, settings, &PlanarDistance)
}

/// Simplify and encode a shape using a caller-supplied distance metric.
pub fn encode_with<D>(shape: &Shape, settings: &Settings, metric: &D) -> EncodedPolyline
where
    D: SegmentDistance + ?Sized,
{
    let coords = shape.coords();
    let n = coords.len();
    let sig = significance(coords, settings.very_small(), metric);

    let mut points = String::new();
    let mut writer = DeltaWriter::default();
    for (index, coord) in coords.iter().enumerate() {
        if sig.is_retained(index) {
            writer.push(&mut points, coord.x, coord.y);
        }
    }

    let mut levels = String::new();
    if n > 0 {
        let endpoint = endpoint_level_code(settings, sig.abs_max);
        write_number(&mut levels, u64::from(endpoint));

        for &dist in sig.distances.iter().take(n.saturating_sub(1)).skip(1) {
            if dist != 0.0 {
                write_number(&mut levels, u64::from(level_code(settings, dist)));
            }
        }

        if n > 1 {
            write_number(&mut levels, u64::from(endpoint));
        }
    }

    debug!(
        input_points = n,
        retained_points = sig.retained_count(),
        max_significance = sig.abs_max,
        "encoded polyline"
    );

    EncodedPolyline::new(points, levels)
}

/// Encode every `step`-th point without simplification, all at `level`.
///
/// Index 0 is always emitted; the last point is only emitted when it falls
/// on the stride.
pub fn dump_encode(shape: &Shape, level: u32, step: usize) -> Result<EncodedPolyline> {
    if step == 0 {
        return Err(EncodeError::InvalidStride);
    }

    debug!(input_points = shape.coords().len(), step, level, "dump encoding polyline");
    Ok(dump(shape.coords().iter().step_by(step), level))
}

/// Dump-encode every point at the highest default level, so the whole line
/// shows at every zoom.
pub fn dump_encode_default(shape: &Shape) -> EncodedPolyline {
    dump(shape.coords().iter(), Settings::default().max_level())
}

fn dump<'a, I>(coords: I, level: u32) -> EncodedPolyline
where
    I: Iterator<Item = &'a Coord<f64>>,
{
    let mut points = String::new();
    let mut levels = String::new();
    let mut writer = DeltaWriter::default();

    for coord in coords {
        writer.push(&mut points, coord.x, coord.y);
        write_number(&mut levels, u64::from(level));
    }

    EncodedPolyline::new(points, levels)
}

/// Parse WKT and encode it with the given settings.
pub fn encode_wkt(wkt: &str, settings: &Settings) -> Result<EncodedPolyline> {
    let shape = Shape::from_wkt(wkt)?;
    Ok(encode(&shape, settings))
}

/// Parse WKT and dump-encode it.
pub fn dump_encode_wkt(wkt: &str, level: u32, step: usize) -> Result<EncodedPolyline> {
    if step == 0 {
        return Err(EncodeError::InvalidStride);
    }
    let shape = Shape::from_wkt(wkt)?;
    dump_encode(&shape, level, step)
}

/// Encode independent shapes in parallel. Output order matches input order.
pub fn encode_batch(shapes: &[Shape], settings: &Settings) -> Vec<EncodedPolyline> {
    shapes
        .par_iter()
        .map(|shape| encode(shape, settings))
        .collect()
}
