//! Encoding geometries into generic trees, JSON text and BSON documents.
//!
//! Members are written in a fixed order: `type`, `bbox`, `coordinates` or `geometries`, `crs`.
//! An absent or empty `bbox` or `crs` is omitted. Unknown geometries only carry `type` and the
//! optional members.

use crate::{Geometry, GeometryValue};
use geocodec_core::{TreeArray, TreeObject, TreeValue};

trait EncodeShape {
	fn encode_shape(&self) -> TreeValue;
}

impl EncodeShape for f64 {
	fn encode_shape(&self) -> TreeValue {
		TreeValue::Double(*self)
	}
}

impl<T: EncodeShape> EncodeShape for Vec<T> {
	fn encode_shape(&self) -> TreeValue {
		TreeValue::Array(self.iter().map(T::encode_shape).collect())
	}
}

/// Encode a geometry as a geometry document.
#[must_use]
pub fn encode_tree(geometry: &Geometry) -> TreeObject {
	let mut object = TreeObject::new();
	object.set("type", geometry.type_name());

	if let Some(bbox) = geometry.bbox.as_ref().filter(|bbox| !bbox.is_empty()) {
		object.set("bbox", bbox.encode_shape());
	}

	let coordinates = match &geometry.value {
		GeometryValue::Point(position) => Some(position.encode_shape()),
		GeometryValue::MultiPoint(positions) | GeometryValue::LineString(positions) => Some(positions.encode_shape()),
		GeometryValue::MultiLineString(paths) | GeometryValue::Polygon(paths) => Some(paths.encode_shape()),
		GeometryValue::MultiPolygon(polygons) => Some(polygons.encode_shape()),
		GeometryValue::GeometryCollection(geometries) => {
			let members = geometries
				.iter()
				.map(|member| TreeValue::Object(encode_tree(member)))
				.collect::<TreeArray>();
			object.set("geometries", members);
			None
		}
		GeometryValue::Unknown(_) => None,
	};
	object.set_optional("coordinates", coordinates);

	if let Some(crs) = geometry.crs.as_ref().filter(|crs| !crs.is_empty()) {
		object.set("crs", crs.clone());
	}

	object
}

/// Encode a geometry as compact JSON text.
///
/// ```
/// use geocodec::{Geometry, encode_json};
///
/// let point = Geometry::new_point(vec![1.0, 2.5]);
/// assert_eq!(encode_json(&point), r#"{"type":"Point","coordinates":[1.0,2.5]}"#);
/// ```
#[must_use]
pub fn encode_json(geometry: &Geometry) -> String {
	log::trace!("encoding {} geometry as JSON", geometry.type_name());
	encode_tree(geometry).stringify()
}

/// Encode a geometry as a serialized BSON document.
///
/// # Errors
/// Fails only if the `crs` member holds a value BSON cannot represent.
#[cfg(feature = "bson")]
pub fn encode_bson(geometry: &Geometry) -> anyhow::Result<Vec<u8>> {
	log::trace!("encoding {} geometry as BSON", geometry.type_name());
	geocodec_core::bson_io::to_bson(&encode_tree(geometry))
}
