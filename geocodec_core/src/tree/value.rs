//! The generic tree node: the untyped value produced by the JSON and BSON document readers.

use crate::{json, tree::*};
use anyhow::{Result, bail};

/// Represents any node of a decoded document: objects, arrays, numbers, strings, booleans, null.
///
/// Numbers keep the physical flavor they were read with. Integers are stored canonically:
/// non-negative integers as `UInt`, negative integers as `Int`.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeValue {
	Array(TreeArray),
	Boolean(bool),
	Double(f64),
	Float(f32),
	Int(i64),
	Null,
	Object(TreeObject),
	String(String),
	UInt(u64),
}

impl TreeValue {
	/// Parse a JSON string into a `TreeValue`.
	///
	/// # Errors
	/// Returns an error if the JSON is invalid.
	pub fn parse_json_str(text: &str) -> Result<TreeValue> {
		json::parse_json_str(text)
	}

	/// Parse UTF-8 encoded JSON bytes into a `TreeValue`.
	///
	/// # Errors
	/// Returns an error if the JSON is invalid.
	pub fn parse_json_bytes(bytes: &[u8]) -> Result<TreeValue> {
		json::parse_json_bytes(bytes)
	}

	/// Return the node type as a lowercase string (`"array"`, `"object"`, `"int"`, etc.).
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		use TreeValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Double(_) => "double",
			Float(_) => "float",
			Int(_) => "int",
			Null => "null",
			Object(_) => "object",
			String(_) => "string",
			UInt(_) => "uint",
		}
	}

	/// Serialize the `TreeValue` to a compact JSON string.
	#[must_use]
	pub fn stringify(&self) -> String {
		json::stringify(self)
	}

	#[must_use]
	pub fn new_array() -> TreeValue {
		TreeValue::Array(TreeArray::default())
	}

	#[must_use]
	pub fn new_object() -> TreeValue {
		TreeValue::Object(TreeObject::default())
	}

	/// Returns `true` for the zero value of each node type: `null`, `false`, `0`, `""` and `[]`.
	///
	/// Objects are never considered zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		match self {
			TreeValue::Null => true,
			TreeValue::Boolean(b) => !b,
			TreeValue::Double(v) => *v == 0.0,
			TreeValue::Float(v) => *v == 0.0,
			TreeValue::Int(v) => *v == 0,
			TreeValue::UInt(v) => *v == 0,
			TreeValue::String(s) => s.is_empty(),
			TreeValue::Array(a) => a.is_empty(),
			TreeValue::Object(_) => false,
		}
	}

	/// Borrow the `TreeArray` if this value is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn as_array(&self) -> Result<&TreeArray> {
		match self {
			TreeValue::Array(array) => Ok(array),
			_ => bail!("expected an array, found a {}", self.type_as_str()),
		}
	}

	/// Borrow the `TreeObject` if this value is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn as_object(&self) -> Result<&TreeObject> {
		match self {
			TreeValue::Object(object) => Ok(object),
			_ => bail!("expected an object, found a {}", self.type_as_str()),
		}
	}

	/// Consume the `TreeValue` and extract the `TreeObject` if it is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn into_object(self) -> Result<TreeObject> {
		match self {
			TreeValue::Object(object) => Ok(object),
			_ => bail!("expected an object, found a {}", self.type_as_str()),
		}
	}
}

impl From<&str> for TreeValue {
	fn from(input: &str) -> Self {
		TreeValue::String(input.to_string())
	}
}

impl From<&String> for TreeValue {
	fn from(input: &String) -> Self {
		TreeValue::String(input.clone())
	}
}

impl From<String> for TreeValue {
	fn from(input: String) -> Self {
		TreeValue::String(input)
	}
}

impl From<bool> for TreeValue {
	fn from(input: bool) -> Self {
		TreeValue::Boolean(input)
	}
}

impl From<TreeArray> for TreeValue {
	fn from(input: TreeArray) -> Self {
		TreeValue::Array(input)
	}
}

impl From<TreeObject> for TreeValue {
	fn from(input: TreeObject) -> Self {
		TreeValue::Object(input)
	}
}

impl<T> From<Vec<T>> for TreeValue
where
	TreeValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		TreeValue::Array(TreeArray::from(input))
	}
}
