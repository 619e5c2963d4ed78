use super::{Shape, decode_bbox};
use crate::{DecodeError, DecoderConfig, Geometry, GeometryKind, GeometryValue};
use geocodec_core::{TreeObject, TreeValue, json};

/// Decodes geometry documents from generic trees.
///
/// The `type` tag selects which member is read and at which array depth: `coordinates` for the
/// six simple kinds and `geometries` for collections, whose members are decoded recursively.
/// Unrecognized tags are kept as [`GeometryValue::Unknown`] unless the decoder is strict.
///
/// A decoder holds no state besides its configuration and can be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct GeometryDecoder {
	config: DecoderConfig,
}

impl GeometryDecoder {
	#[must_use]
	pub fn new(config: DecoderConfig) -> Self {
		GeometryDecoder { config }
	}

	#[must_use]
	pub fn config(&self) -> &DecoderConfig {
		&self.config
	}

	/// Decode a geometry from a tree node, which must be an object.
	pub fn decode_tree(&self, value: &TreeValue) -> Result<Geometry, DecodeError> {
		match value {
			TreeValue::Object(object) => self.decode_object(object),
			other => Err(DecodeError::not_an_object(other)),
		}
	}

	/// Decode a geometry from a geometry document.
	pub fn decode_object(&self, object: &TreeObject) -> Result<Geometry, DecodeError> {
		log::trace!("decoding geometry with {} members", object.len());
		self.decode_at_depth(object, 0)
	}

	/// Parse a JSON text and decode its root value as a geometry.
	pub fn decode_json(&self, bytes: &[u8]) -> Result<Geometry, DecodeError> {
		let tree = json::parse_json_bytes(bytes).map_err(DecodeError::Document)?;
		self.decode_tree(&tree)
	}

	/// Read a BSON document and decode it as a geometry.
	#[cfg(feature = "bson")]
	pub fn decode_bson(&self, bytes: &[u8]) -> Result<Geometry, DecodeError> {
		let object = geocodec_core::bson_io::parse_bson(bytes).map_err(DecodeError::Document)?;
		self.decode_object(&object)
	}

	fn decode_at_depth(&self, object: &TreeObject, depth: usize) -> Result<Geometry, DecodeError> {
		let Some(TreeValue::String(type_name)) = object.get("type") else {
			return Err(DecodeError::missing_field("type"));
		};

		let bbox = decode_bbox(object.get("bbox"))?;

		let value = match GeometryKind::from_name(type_name) {
			Some(kind) => self.decode_value(kind, object, depth)?,
			None if self.config.strict_types => return Err(DecodeError::unknown_type(type_name)),
			None => {
				log::debug!("keeping geometry with unknown type '{type_name}' without coordinates");
				GeometryValue::Unknown(type_name.clone())
			}
		};

		Ok(Geometry {
			value,
			bbox,
			crs: decode_crs(object.get("crs")),
		})
	}

	fn decode_value(&self, kind: GeometryKind, object: &TreeObject, depth: usize) -> Result<GeometryValue, DecodeError> {
		Ok(match kind {
			GeometryKind::Point => GeometryValue::Point(decode_coordinates(object)?),
			GeometryKind::MultiPoint => GeometryValue::MultiPoint(decode_coordinates(object)?),
			GeometryKind::LineString => GeometryValue::LineString(decode_coordinates(object)?),
			GeometryKind::MultiLineString => GeometryValue::MultiLineString(decode_coordinates(object)?),
			GeometryKind::Polygon => GeometryValue::Polygon(decode_coordinates(object)?),
			GeometryKind::MultiPolygon => GeometryValue::MultiPolygon(decode_coordinates(object)?),
			GeometryKind::GeometryCollection => GeometryValue::GeometryCollection(self.decode_geometries(object, depth)?),
		})
	}

	fn decode_geometries(&self, object: &TreeObject, depth: usize) -> Result<Vec<Geometry>, DecodeError> {
		if depth >= self.config.max_collection_depth {
			return Err(DecodeError::depth_exceeded(self.config.max_collection_depth));
		}

		let value = object
			.get("geometries")
			.ok_or_else(|| DecodeError::missing_field("geometries"))?;
		let TreeValue::Array(array) = value else {
			return Err(DecodeError::shape_mismatch(1, value).at_key("geometries"));
		};

		array
			.iter()
			.enumerate()
			.map(|(index, child)| {
				match child {
					TreeValue::Object(child) => self.decode_at_depth(child, depth + 1),
					other => Err(DecodeError::not_an_object(other)),
				}
				.map_err(|e| e.at_index(index).at_key("geometries"))
			})
			.collect()
	}
}

fn decode_coordinates<T: Shape>(object: &TreeObject) -> Result<T, DecodeError> {
	let value = object
		.get("coordinates")
		.ok_or_else(|| DecodeError::missing_field("coordinates"))?;
	T::decode_shape(value).map_err(|e| e.at_key("coordinates"))
}

/// `crs` is opaque and carried through as is. Empty objects count as absent, and non-object
/// values are dropped.
fn decode_crs(value: Option<&TreeValue>) -> Option<TreeObject> {
	match value {
		Some(TreeValue::Object(crs)) if !crs.is_empty() => Some(crs.clone()),
		None | Some(TreeValue::Null | TreeValue::Object(_)) => None,
		Some(other) => {
			log::debug!("ignoring crs of type {}", other.type_as_str());
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn decode(json: &str) -> Result<Geometry, DecodeError> {
		GeometryDecoder::default().decode_json(json.as_bytes())
	}

	fn strict() -> GeometryDecoder {
		GeometryDecoder::new(DecoderConfig::default().with_strict_types(true))
	}

	#[test]
	fn test_point() {
		let geometry = decode(r#"{"type":"Point","coordinates":[102,0.5]}"#).unwrap();
		assert_eq!(geometry, Geometry::new_point(vec![102.0, 0.5]));
	}

	#[rstest]
	#[case(r#"{"type":"MultiPoint","coordinates":[[1,2],[3,4]]}"#, Geometry::new_multi_point(vec![vec![1.0, 2.0], vec![3.0, 4.0]]))]
	#[case(r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#, Geometry::new_line_string(vec![vec![0.0, 0.0], vec![1.0, 1.0]]))]
	#[case(r#"{"type":"MultiLineString","coordinates":[[[0,0],[1,1]],[]]}"#, Geometry::new_multi_line_string(vec![vec![vec![0.0, 0.0], vec![1.0, 1.0]], vec![]]))]
	#[case(r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[0,1],[0,0]]]}"#, Geometry::new_polygon(vec![vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]]]))]
	#[case(r#"{"type":"MultiPolygon","coordinates":[[[[1,2]]]]}"#, Geometry::new_multi_polygon(vec![vec![vec![vec![1.0, 2.0]]]]))]
	#[case(r#"{"type":"GeometryCollection","geometries":[]}"#, Geometry::new_collection(vec![]))]
	fn test_kinds(#[case] json: &str, #[case] expected: Geometry) {
		assert_eq!(decode(json).unwrap(), expected);
	}

	#[test]
	fn test_member_order_does_not_matter() {
		let geometry = decode(r#"{"coordinates":[[1,2]],"bbox":[1,2,1,2],"type":"LineString"}"#).unwrap();
		assert_eq!(
			geometry,
			Geometry::new_line_string(vec![vec![1.0, 2.0]]).with_bbox(vec![1.0, 2.0, 1.0, 2.0])
		);
	}

	#[test]
	fn test_collection_keeps_order() {
		let geometry = decode(
			r#"{"type":"GeometryCollection","geometries":[
				{"type":"Point","coordinates":[1,2]},
				{"type":"LineString","coordinates":[[0,0],[1,1]]}
			]}"#,
		)
		.unwrap();
		let children = geometry.geometries().unwrap();
		assert_eq!(children.len(), 2);
		assert!(children[0].is_point());
		assert!(children[1].is_line_string());
	}

	#[rstest]
	#[case(r#"{"coordinates":[1,2]}"#, "type")]
	#[case(r#"{"type":5,"coordinates":[1,2]}"#, "type")]
	#[case(r#"{"type":"Point"}"#, "coordinates")]
	#[case(r#"{"type":"GeometryCollection"}"#, "geometries")]
	fn test_missing_fields(#[case] json: &str, #[case] expected: &str) {
		let error = decode(json).unwrap_err();
		assert!(matches!(error, DecodeError::MissingField { ref field, .. } if field == expected));
	}

	#[test]
	fn test_error_paths() {
		let error = decode(r#"{"type":"Point","coordinates":[1,"2"]}"#).unwrap_err();
		assert_eq!(error.to_string(), r#"expected a number at coordinates[1], got string "2""#);

		let error = decode(r#"{"type":"Polygon","coordinates":[[1,2]]}"#).unwrap_err();
		assert!(matches!(error, DecodeError::ShapeMismatch { expected_depth: 1, .. }));
		assert_eq!(error.path().unwrap().to_string(), "coordinates[0][0]");

		let error = decode(
			r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[0,0]},{"type":"LineString","coordinates":[[0,0],[1,[2]]]}]}"#,
		)
		.unwrap_err();
		assert_eq!(
			error.to_string(),
			"expected a number at geometries[1].coordinates[1][1], got array [2]"
		);

		let error = decode(r#"{"type":"GeometryCollection","geometries":[{"coordinates":[0,0]}]}"#).unwrap_err();
		assert_eq!(error.to_string(), "missing required field 'type' at geometries[0]");
	}

	#[test]
	fn test_collection_members_must_be_objects() {
		let error = decode(r#"{"type":"GeometryCollection","geometries":[1]}"#).unwrap_err();
		assert_eq!(error.to_string(), "expected an object at geometries[0], got uint 1");

		let error = decode(r#"{"type":"GeometryCollection","geometries":{}}"#).unwrap_err();
		assert_eq!(error.to_string(), "expected an array at geometries, got object {}");
	}

	#[test]
	fn test_root_must_be_an_object() {
		let error = decode("[1,2]").unwrap_err();
		assert!(matches!(error, DecodeError::NotAnObject { .. }));
	}

	#[test]
	fn test_invalid_json() {
		let error = decode(r#"{"type":"Point""#).unwrap_err();
		assert!(matches!(error, DecodeError::Document(_)));
		assert!(error.to_string().starts_with("invalid document: while parsing JSON: unexpected end"));
	}

	#[test]
	fn test_unknown_type_is_kept() {
		let geometry = decode(r#"{"type":"Circle","coordinates":[0,0],"bbox":[0,0,1,1]}"#).unwrap();
		assert_eq!(geometry.type_name(), "Circle");
		assert_eq!(geometry.kind(), None);
		assert_eq!(geometry.bbox, Some(vec![0.0, 0.0, 1.0, 1.0]));
		assert!(!geometry.is_point());
		assert!(!geometry.is_collection());
	}

	#[test]
	fn test_unknown_type_is_rejected_by_strict_decoder() {
		let error = strict()
			.decode_json(br#"{"type":"Circle","coordinates":[0,0]}"#)
			.unwrap_err();
		assert!(matches!(error, DecodeError::UnknownType { ref type_name, .. } if type_name == "Circle"));
		assert!(strict().decode_json(br#"{"type":"Point","coordinates":[0,0]}"#).is_ok());
	}

	#[test]
	fn test_strict_decoder_reports_nested_unknown_type_location() {
		let error = strict()
			.decode_json(
				br#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[0,0]},{"type":"Circle"}]}"#,
			)
			.unwrap_err();
		assert_eq!(error.path().unwrap().to_string(), "geometries[1]");
		assert_eq!(error.to_string(), "unknown type 'Circle' at geometries[1]");
	}

	#[test]
	fn test_bbox_errors_come_first() {
		let error = decode(r#"{"type":"Point","bbox":["a"],"coordinates":"x"}"#).unwrap_err();
		assert_eq!(error.path().unwrap().to_string(), "bbox[0]");
	}

	#[test]
	fn test_crs() {
		let geometry = decode(r#"{"type":"Point","coordinates":[1,2],"crs":{"type":"name","properties":{"name":"EPSG:4326"}}}"#).unwrap();
		assert_eq!(
			geometry.crs.unwrap().stringify(),
			r#"{"type":"name","properties":{"name":"EPSG:4326"}}"#
		);

		for crs in ["{}", "null", "\"EPSG:4326\"", "[1]"] {
			let json = format!(r#"{{"type":"Point","coordinates":[1,2],"crs":{crs}}}"#);
			assert_eq!(decode(&json).unwrap().crs, None, "crs {crs}");
		}
	}

	#[test]
	fn test_collection_depth_limit() {
		let nested = |levels: usize| {
			let mut json = String::from(r#"{"type":"Point","coordinates":[0,0]}"#);
			for _ in 0..levels {
				json = format!(r#"{{"type":"GeometryCollection","geometries":[{json}]}}"#);
			}
			json
		};
		let decoder = GeometryDecoder::new(DecoderConfig::default().with_max_collection_depth(2));
		assert!(decoder.decode_json(nested(2).as_bytes()).is_ok());
		let error = decoder.decode_json(nested(3).as_bytes()).unwrap_err();
		assert!(matches!(error, DecodeError::DepthExceeded { limit: 2, .. }));
		assert_eq!(error.path().unwrap().to_string(), "geometries[0].geometries[0]");
		assert!(GeometryDecoder::default().decode_json(nested(32).as_bytes()).is_ok());
		assert!(GeometryDecoder::default().decode_json(nested(33).as_bytes()).is_err());
	}
}
