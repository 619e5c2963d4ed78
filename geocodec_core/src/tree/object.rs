//! Object node of the generic tree.
use crate::{json, tree::*};
use anyhow::Result;
use indexmap::IndexMap;
use std::fmt::Debug;

/// A string-keyed map of tree nodes, backed by an `IndexMap` so that keys keep their insertion
/// order when serialized.
#[derive(Clone, Default, PartialEq)]
pub struct TreeObject(pub IndexMap<String, TreeValue>);

impl TreeObject {
	#[must_use]
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	/// Get a reference to the node stored under `key`, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&TreeValue> {
		self.0.get(key)
	}

	/// Set `key` to the given value. An existing key keeps its position.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		TreeValue: From<T>,
	{
		self.0.insert(key.to_owned(), TreeValue::from(value));
	}

	/// Set `key` only if the provided `Option` is `Some`.
	pub fn set_optional<T>(&mut self, key: &str, value: Option<T>)
	where
		TreeValue: From<T>,
	{
		if let Some(v) = value {
			self.set(key, v);
		}
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> indexmap::map::Iter<'_, String, TreeValue> {
		self.0.iter()
	}

	pub fn keys(&self) -> indexmap::map::Keys<'_, String, TreeValue> {
		self.0.keys()
	}

	/// Serialize this object into a compact JSON string, keys in insertion order.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", json::escape_json_string(key), json::stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}

	/// Parse a JSON string into a `TreeObject`, returning an error on invalid JSON or a
	/// non-object root.
	pub fn parse_json_str(text: &str) -> Result<TreeObject> {
		TreeValue::parse_json_str(text)?.into_object()
	}
}

impl Debug for TreeObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.0.iter()).finish()
	}
}

impl<T> From<Vec<(&str, T)>> for TreeObject
where
	TreeValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		TreeObject(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), TreeValue::from(value)))
				.collect(),
		)
	}
}

impl FromIterator<(String, TreeValue)> for TreeObject {
	fn from_iter<I: IntoIterator<Item = (String, TreeValue)>>(iter: I) -> Self {
		TreeObject(iter.into_iter().collect())
	}
}

impl IntoIterator for TreeObject {
	type Item = (String, TreeValue);
	type IntoIter = indexmap::map::IntoIter<String, TreeValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a TreeObject {
	type Item = (&'a String, &'a TreeValue);
	type IntoIter = indexmap::map::Iter<'a, String, TreeValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn test_insertion_order_is_kept() {
		let mut object = TreeObject::new();
		object.set("type", "Point");
		object.set("bbox", vec![1, 2]);
		object.set("coordinates", vec![0.5, 1.5]);
		assert_eq!(object.keys().collect::<Vec<_>>(), vec!["type", "bbox", "coordinates"]);
		assert_eq!(
			object.stringify(),
			r#"{"type":"Point","bbox":[1,2],"coordinates":[0.5,1.5]}"#
		);
	}

	#[test]
	fn test_set_existing_key_keeps_position() {
		let mut object = TreeObject::from(vec![("a", 1), ("b", 2)]);
		object.set("a", 3);
		assert_eq!(object.stringify(), r#"{"a":3,"b":2}"#);
	}

	#[test]
	fn test_set_optional() {
		let mut object = TreeObject::new();
		object.set_optional::<bool>("missing", None);
		object.set_optional("present", Some(true));
		assert!(!object.contains_key("missing"));
		assert_eq!(object.get("present"), Some(&TreeValue::Boolean(true)));
		assert_eq!(object.len(), 1);
	}

	#[test]
	fn test_escaped_keys() {
		let object = TreeObject::from(vec![("quote\"key", TreeValue::Null)]);
		assert_eq!(object.stringify(), r#"{"quote\"key":null}"#);
	}

	#[test]
	fn test_parse_json_str() {
		let object = TreeObject::parse_json_str(r#"{"z":1,"a":2}"#).unwrap();
		assert_eq!(object.keys().collect::<Vec<_>>(), vec!["z", "a"]);
		assert_eq!(object.len(), 2);
		assert!(TreeObject::parse_json_str("[1]").is_err());
	}

	#[test]
	fn test_equality_ignores_order() {
		let a = TreeObject::from(vec![("x", 1), ("y", 2)]);
		let b = TreeObject::from(vec![("y", 2), ("x", 1)]);
		assert_eq!(a, b);
	}
}
