//! Decoding and encoding of GeoJSON geometries.
//!
//! Geometry documents arrive as generic trees, produced by the JSON parser or the BSON reader of
//! [`geocodec_core`]. The `type` tag of each document decides how deeply nested its `coordinates`
//! must be, so decoding is driven by the tag at runtime while the result is a strongly typed
//! [`Geometry`]. Encoding produces the canonical document again.
//!
//! ```
//! use geocodec::{Geometry, decode_json, encode_json};
//!
//! let line = Geometry::new_line_string(vec![vec![0.0, 0.0], vec![1.0, 1.5]]);
//! let json = encode_json(&line);
//! assert_eq!(json, r#"{"type":"LineString","coordinates":[[0.0,0.0],[1.0,1.5]]}"#);
//! assert_eq!(decode_json(json.as_bytes()).unwrap(), line);
//! ```
//!
//! Numbers may be integers or floats in the source document; both decode to `f64`. Errors carry
//! the location of the offending node, see [`DecodeError`].

mod config;
mod decode;
mod encode;
mod error;
mod feature;
mod geometry;
mod scan;

pub use config::{DEFAULT_MAX_COLLECTION_DEPTH, DecoderConfig};
pub use decode::*;
pub use encode::*;
pub use error::{DecodeError, PathSegment, TreePath};
pub use feature::{GeoFeature, GeoFeatureCollection};
pub use geocodec_core::{TreeArray, TreeObject, TreeValue};
pub use geometry::*;
pub use scan::ScanValue;

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_send_sync<T: Send + Sync>() {}

	#[test]
	fn test_types_are_thread_safe() {
		assert_send_sync::<Geometry>();
		assert_send_sync::<GeometryDecoder>();
		assert_send_sync::<DecodeError>();
		assert_send_sync::<GeoFeatureCollection>();
	}
}
