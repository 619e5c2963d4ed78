use super::coerce_number;
use crate::DecodeError;
use geocodec_core::TreeValue;

/// Decode the optional `bbox` member of a geometry.
///
/// An absent member and every zero value (`null`, `[]`, `0`, `""`, `false`) yield `None`. Any other
/// value must be an array of numbers. The element count is not checked.
pub fn decode_bbox(value: Option<&TreeValue>) -> Result<Option<Vec<f64>>, DecodeError> {
	let Some(value) = value.filter(|v| !v.is_zero()) else {
		return Ok(None);
	};
	let TreeValue::Array(array) = value else {
		return Err(DecodeError::shape_mismatch(1, value).at_key("bbox"));
	};
	array
		.iter()
		.enumerate()
		.map(|(index, item)| {
			coerce_number(item).map_err(|_| DecodeError::shape_mismatch(0, item).at_index(index).at_key("bbox"))
		})
		.collect::<Result<Vec<f64>, DecodeError>>()
		.map(Some)
}
