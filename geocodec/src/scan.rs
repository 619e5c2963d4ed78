use crate::{DecodeError, Geometry, decode_json};

/// A value read from a storage column, modelled on the SQLite storage classes.
///
/// Geometries are stored as JSON, either in a text or a blob column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScanValue<'a> {
	Null,
	Integer(i64),
	Real(f64),
	Text(&'a str),
	Blob(&'a [u8]),
}

impl ScanValue<'_> {
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			ScanValue::Null => "null",
			ScanValue::Integer(_) => "integer",
			ScanValue::Real(_) => "real",
			ScanValue::Text(_) => "text",
			ScanValue::Blob(_) => "blob",
		}
	}
}

impl<'a> From<&'a str> for ScanValue<'a> {
	fn from(value: &'a str) -> Self {
		ScanValue::Text(value)
	}
}

impl<'a> From<&'a [u8]> for ScanValue<'a> {
	fn from(value: &'a [u8]) -> Self {
		ScanValue::Blob(value)
	}
}

impl From<i64> for ScanValue<'_> {
	fn from(value: i64) -> Self {
		ScanValue::Integer(value)
	}
}

impl From<f64> for ScanValue<'_> {
	fn from(value: f64) -> Self {
		ScanValue::Real(value)
	}
}

impl Geometry {
	/// Decode a geometry read back from a storage column.
	///
	/// Text and blob values are decoded as JSON. Every other value fails with
	/// [`DecodeError::UnsupportedSourceType`].
	pub fn scan(value: ScanValue<'_>) -> Result<Geometry, DecodeError> {
		match value {
			ScanValue::Text(text) => decode_json(text.as_bytes()),
			ScanValue::Blob(bytes) => decode_json(bytes),
			other => Err(DecodeError::UnsupportedSourceType(other.type_name().to_string())),
		}
	}
}
