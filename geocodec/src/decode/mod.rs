//! Decoding geometries from generic trees, JSON text and BSON documents.
//!
//! The free functions use a [`GeometryDecoder`] with the default configuration.

mod bbox;
mod geometry;
mod number;
mod shape;

pub use bbox::decode_bbox;
pub use geometry::GeometryDecoder;
pub use number::coerce_number;
pub use shape::{Shape, decode_path_set, decode_polygon_set, decode_position, decode_position_set};

use crate::{DecodeError, Geometry};
use geocodec_core::TreeValue;

/// Decode a geometry from a generic tree node.
pub fn decode_tree(value: &TreeValue) -> Result<Geometry, DecodeError> {
	GeometryDecoder::default().decode_tree(value)
}

/// Decode a geometry from UTF-8 JSON bytes.
///
/// ```
/// let geometry = geocodec::decode_json(br#"{"type":"Point","coordinates":[1,2]}"#).unwrap();
/// assert!(geometry.is_point());
/// ```
pub fn decode_json(bytes: &[u8]) -> Result<Geometry, DecodeError> {
	GeometryDecoder::default().decode_json(bytes)
}

/// Decode a geometry from a serialized BSON document.
#[cfg(feature = "bson")]
pub fn decode_bson(bytes: &[u8]) -> Result<Geometry, DecodeError> {
	GeometryDecoder::default().decode_bson(bytes)
}
