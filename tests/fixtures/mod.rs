//! Test fixtures for polyline-encoder.
//!
//! Provides:
//! - A reference decoder for the encoded polyline and level strings
//! - Real shoreline and trail geometries around Juneau, Alaska

pub mod decoder;
pub mod juneau_shapes;

pub use decoder::*;
