//! GeoJSON `Feature` and `FeatureCollection` wrappers.
//!
//! Features add an identifier and a property map around a geometry. The geometry member is
//! handled entirely by [`GeometryDecoder`] and [`encode_tree`]; errors inside it are reported with
//! a `geometry` prefix, errors inside a collection with a `features[i]` prefix.

use crate::{DecodeError, Geometry, GeometryDecoder, encode_tree};
use geocodec_core::{TreeArray, TreeObject, TreeValue, json};

fn check_type(object: &TreeObject, name: &str) -> Result<(), DecodeError> {
	match object.get("type") {
		Some(TreeValue::String(type_name)) if type_name == name => Ok(()),
		Some(TreeValue::String(type_name)) => Err(DecodeError::unknown_type(type_name)),
		_ => Err(DecodeError::missing_field("type")),
	}
}

fn expect_object(value: &TreeValue) -> Result<&TreeObject, DecodeError> {
	match value {
		TreeValue::Object(object) => Ok(object),
		other => Err(DecodeError::not_an_object(other)),
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoFeature {
	/// A string or number. Absent when missing or `null`.
	pub id: Option<TreeValue>,
	/// `None` for unlocated features, written as `"geometry": null`.
	pub geometry: Option<Geometry>,
	pub properties: TreeObject,
}

impl GeoFeature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry: Some(geometry),
			properties: TreeObject::new(),
		}
	}

	pub fn set_id<T>(&mut self, id: T)
	where
		TreeValue: From<T>,
	{
		self.id = Some(TreeValue::from(id));
	}

	pub fn set_properties(&mut self, properties: TreeObject) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: &str, value: T)
	where
		TreeValue: From<T>,
	{
		self.properties.set(key, value);
	}

	/// Decode a feature with the default geometry decoder.
	pub fn decode_tree(value: &TreeValue) -> Result<Self, DecodeError> {
		Self::decode_with(&GeometryDecoder::default(), value)
	}

	pub fn decode_with(decoder: &GeometryDecoder, value: &TreeValue) -> Result<Self, DecodeError> {
		let object = expect_object(value)?;
		check_type(object, "Feature")?;

		let geometry = match object.get("geometry") {
			None => return Err(DecodeError::missing_field("geometry")),
			Some(TreeValue::Null) => None,
			Some(geometry) => Some(decoder.decode_tree(geometry).map_err(|e| e.at_key("geometry"))?),
		};

		let properties = match object.get("properties") {
			None | Some(TreeValue::Null) => TreeObject::new(),
			Some(TreeValue::Object(properties)) => properties.clone(),
			Some(other) => return Err(DecodeError::not_an_object(other).at_key("properties")),
		};

		let id = object.get("id").filter(|id| **id != TreeValue::Null).cloned();

		Ok(GeoFeature { id, geometry, properties })
	}

	pub fn from_json(bytes: &[u8]) -> Result<Self, DecodeError> {
		let tree = json::parse_json_bytes(bytes).map_err(DecodeError::Document)?;
		Self::decode_tree(&tree)
	}

	#[must_use]
	pub fn encode_tree(&self) -> TreeObject {
		let mut object = TreeObject::new();
		object.set("type", "Feature");
		object.set_optional("id", self.id.clone());
		match &self.geometry {
			Some(geometry) => object.set("geometry", encode_tree(geometry)),
			None => object.set("geometry", TreeValue::Null),
		}
		object.set("properties", self.properties.clone());
		object
	}

	#[must_use]
	pub fn to_json(&self) -> String {
		self.encode_tree().stringify()
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		let mut feature = GeoFeature::new(Geometry::new_example());
		feature.set_id(13);
		feature.set_property("name", "Nice");
		feature.set_property("population", 348_085);
		feature.set_property("is_nice", true);
		feature
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoFeatureCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoFeatureCollection {
	pub fn new(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	pub fn decode_tree(value: &TreeValue) -> Result<Self, DecodeError> {
		Self::decode_with(&GeometryDecoder::default(), value)
	}

	pub fn decode_with(decoder: &GeometryDecoder, value: &TreeValue) -> Result<Self, DecodeError> {
		let object = expect_object(value)?;
		check_type(object, "FeatureCollection")?;

		let features = object
			.get("features")
			.ok_or_else(|| DecodeError::missing_field("features"))?;
		let TreeValue::Array(features) = features else {
			return Err(DecodeError::shape_mismatch(1, features).at_key("features"));
		};

		let features = features
			.iter()
			.enumerate()
			.map(|(index, feature)| {
				GeoFeature::decode_with(decoder, feature).map_err(|e| e.at_index(index).at_key("features"))
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(GeoFeatureCollection { features })
	}

	pub fn from_json(bytes: &[u8]) -> Result<Self, DecodeError> {
		let tree = json::parse_json_bytes(bytes).map_err(DecodeError::Document)?;
		Self::decode_tree(&tree)
	}

	#[must_use]
	pub fn encode_tree(&self) -> TreeObject {
		let mut object = TreeObject::new();
		object.set("type", "FeatureCollection");
		object.set(
			"features",
			self.features
				.iter()
				.map(|feature| TreeValue::Object(feature.encode_tree()))
				.collect::<TreeArray>(),
		);
		object
	}

	#[must_use]
	pub fn to_json(&self) -> String {
		self.encode_tree().stringify()
	}
}
