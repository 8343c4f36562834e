//! polyline-encoder core
//!
//! Encodes lines and polygon boundaries into the encoded polyline text
//! format, with per-point zoom levels derived from Douglas-Peucker
//! simplification.

pub mod codec;
pub mod distance;
pub mod encoder;
pub mod error;
pub mod levels;
pub mod polyline;
pub mod settings;
pub mod shape;
pub mod simplify;

pub use encoder::{
    dump_encode, dump_encode_default, dump_encode_wkt, encode, encode_batch, encode_wkt,
    encode_with,
};
pub use error::{EncodeError, Result};
pub use polyline::EncodedPolyline;
pub use settings::Settings;
pub use shape::Shape;
