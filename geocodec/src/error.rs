//! Errors reported while decoding geometries.
//!
//! Every decoding error is a non-retryable input validation error. Errors raised deep inside a
//! document carry a [`TreePath`] that is extended with the index or key of every level they pass
//! on the way up, so that the final message reads like
//! `expected a number at geometries[1].coordinates[0][2], got string "x"`.

use geocodec_core::TreeValue;
use std::fmt::{self, Display};
use thiserror::Error;

const MAX_SNIPPET_LENGTH: usize = 32;

/// One step from a parent node to a child node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
	Key(String),
	Index(usize),
}

/// The location of a node inside a decoded document, starting at the root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreePath(Vec<PathSegment>);

impl TreePath {
	#[must_use]
	pub fn root() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn is_root(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn segments(&self) -> &[PathSegment] {
		&self.0
	}

	fn prepend(&mut self, segment: PathSegment) {
		self.0.insert(0, segment);
	}
}

impl Display for TreePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.0.is_empty() {
			return f.write_str("<root>");
		}
		for (index, segment) in self.0.iter().enumerate() {
			match segment {
				PathSegment::Key(key) if index == 0 => f.write_str(key)?,
				PathSegment::Key(key) => write!(f, ".{key}")?,
				PathSegment::Index(i) => write!(f, "[{i}]")?,
			}
		}
		Ok(())
	}
}

#[derive(Debug, Error)]
pub enum DecodeError {
	/// A required key is absent.
	#[error("missing required field '{field}' at {path}")]
	MissingField { path: TreePath, field: String },

	/// A scalar that is neither an integer nor a float was found where a number is required.
	#[error("expected a number at {path}, got {got}")]
	TypeMismatch { path: TreePath, got: String },

	/// A node is not an array, or the array nesting disagrees with the geometry type.
	#[error("expected {} at {path}, got {got}", describe_depth(*.expected_depth))]
	ShapeMismatch {
		path: TreePath,
		expected_depth: usize,
		got: String,
	},

	/// A node that must be an object (a geometry or feature) is something else.
	#[error("expected an object at {path}, got {got}")]
	NotAnObject { path: TreePath, got: String },

	/// The type tag is not accepted. Only raised by strict decoders and by the feature wrappers.
	#[error("unknown type '{type_name}' at {path}")]
	UnknownType { path: TreePath, type_name: String },

	/// Geometry collections are nested deeper than the configured limit.
	#[error("geometry collections are nested deeper than {limit} levels at {path}")]
	DepthExceeded { path: TreePath, limit: usize },

	/// The column adapter received something other than text or bytes.
	#[error("unsupported source type {0}, expected text or bytes")]
	UnsupportedSourceType(String),

	/// The outer JSON or BSON layer rejected the input bytes.
	#[error("invalid document: {0:#}")]
	Document(anyhow::Error),
}

impl DecodeError {
	pub(crate) fn missing_field(field: &str) -> Self {
		DecodeError::MissingField {
			path: TreePath::root(),
			field: field.to_string(),
		}
	}

	pub(crate) fn unknown_type(type_name: &str) -> Self {
		DecodeError::UnknownType {
			path: TreePath::root(),
			type_name: type_name.to_string(),
		}
	}

	pub(crate) fn depth_exceeded(limit: usize) -> Self {
		DecodeError::DepthExceeded {
			path: TreePath::root(),
			limit,
		}
	}

	pub(crate) fn type_mismatch(value: &TreeValue) -> Self {
		DecodeError::TypeMismatch {
			path: TreePath::root(),
			got: describe_value(value),
		}
	}

	pub(crate) fn shape_mismatch(expected_depth: usize, value: &TreeValue) -> Self {
		DecodeError::ShapeMismatch {
			path: TreePath::root(),
			expected_depth,
			got: describe_value(value),
		}
	}

	pub(crate) fn not_an_object(value: &TreeValue) -> Self {
		DecodeError::NotAnObject {
			path: TreePath::root(),
			got: describe_value(value),
		}
	}

	/// The location of the failing node, for errors that have one.
	#[must_use]
	pub fn path(&self) -> Option<&TreePath> {
		match self {
			DecodeError::MissingField { path, .. }
			| DecodeError::TypeMismatch { path, .. }
			| DecodeError::ShapeMismatch { path, .. }
			| DecodeError::NotAnObject { path, .. }
			| DecodeError::UnknownType { path, .. }
			| DecodeError::DepthExceeded { path, .. } => Some(path),
			DecodeError::UnsupportedSourceType(_) | DecodeError::Document(_) => None,
		}
	}

	pub(crate) fn at_index(self, index: usize) -> Self {
		self.prepend(PathSegment::Index(index))
	}

	pub(crate) fn at_key(self, key: &str) -> Self {
		self.prepend(PathSegment::Key(key.to_string()))
	}

	fn prepend(mut self, segment: PathSegment) -> Self {
		match &mut self {
			DecodeError::MissingField { path, .. }
			| DecodeError::TypeMismatch { path, .. }
			| DecodeError::ShapeMismatch { path, .. }
			| DecodeError::NotAnObject { path, .. }
			| DecodeError::UnknownType { path, .. }
			| DecodeError::DepthExceeded { path, .. } => path.prepend(segment),
			DecodeError::UnsupportedSourceType(_) | DecodeError::Document(_) => {}
		}
		self
	}
}

fn describe_depth(depth: usize) -> String {
	match depth {
		0 => String::from("a number"),
		1 => String::from("an array"),
		n => format!("an array nested {n} levels deep"),
	}
}

/// A short rendering of a node for error messages: its type and a truncated JSON snippet.
fn describe_value(value: &TreeValue) -> String {
	if *value == TreeValue::Null {
		return String::from("null");
	}
	let mut snippet = value.stringify();
	if let Some((cut, _)) = snippet.char_indices().nth(MAX_SNIPPET_LENGTH) {
		snippet.truncate(cut);
		snippet.push_str("...");
	}
	format!("{} {snippet}", value.type_as_str())
}

#[cfg(test)]
mod tests {
	use super::*;
	use geocodec_core::TreeObject;

	#[test]
	fn test_path_display() {
		let error = DecodeError::type_mismatch(&TreeValue::from("x"))
			.at_index(2)
			.at_index(0)
			.at_key("coordinates")
			.at_index(1)
			.at_key("geometries");
		assert_eq!(
			error.to_string(),
			r#"expected a number at geometries[1].coordinates[0][2], got string "x""#
		);
		assert_eq!(error.path().unwrap().segments().len(), 5);
	}

	#[test]
	fn test_root_path() {
		let error = DecodeError::missing_field("type");
		assert_eq!(error.to_string(), "missing required field 'type' at <root>");
		assert!(error.path().unwrap().is_root());
	}

	#[test]
	fn test_shape_mismatch_messages() {
		let object = TreeValue::Object(TreeObject::from(vec![("a", 1)]));
		assert_eq!(
			DecodeError::shape_mismatch(1, &object).at_key("coordinates").to_string(),
			r#"expected an array at coordinates, got object {"a":1}"#
		);
		assert_eq!(
			DecodeError::shape_mismatch(3, &TreeValue::UInt(5)).to_string(),
			"expected an array nested 3 levels deep at <root>, got uint 5"
		);
		assert_eq!(
			DecodeError::shape_mismatch(0, &TreeValue::new_array()).to_string(),
			"expected a number at <root>, got array []"
		);
	}

	#[test]
	fn test_long_values_are_truncated() {
		let value = TreeValue::from("a".repeat(100));
		let described = describe_value(&value);
		assert_eq!(described, format!("string \"{}...", "a".repeat(31)));
	}

	#[test]
	fn test_type_errors_carry_their_location() {
		let error = DecodeError::unknown_type("Circle").at_index(3).at_key("geometries");
		assert_eq!(error.to_string(), "unknown type 'Circle' at geometries[3]");

		let error = DecodeError::depth_exceeded(4).at_index(0).at_key("geometries");
		assert_eq!(
			error.to_string(),
			"geometry collections are nested deeper than 4 levels at geometries[0]"
		);
	}

	#[test]
	fn test_errors_without_path_ignore_context() {
		let error = DecodeError::UnsupportedSourceType(String::from("real")).at_key("geometries");
		assert!(error.path().is_none());
		assert_eq!(error.to_string(), "unsupported source type real, expected text or bytes");
	}
}
