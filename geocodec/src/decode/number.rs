use crate::DecodeError;
use geocodec_core::TreeValue;

/// Read a numeric tree node as an `f64`, whatever its source flavor.
///
/// Integers above 2^53 lose precision. Arrays and objects fail with a shape mismatch at depth 0,
/// all other scalars with a type mismatch.
pub fn coerce_number(value: &TreeValue) -> Result<f64, DecodeError> {
	match value {
		TreeValue::Double(v) => Ok(*v),
		TreeValue::Float(v) => Ok(f64::from(*v)),
		TreeValue::Int(v) => Ok(*v as f64),
		TreeValue::UInt(v) => Ok(*v as f64),
		TreeValue::Array(_) | TreeValue::Object(_) => Err(DecodeError::shape_mismatch(0, value)),
		TreeValue::Boolean(_) | TreeValue::Null | TreeValue::String(_) => Err(DecodeError::type_mismatch(value)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(TreeValue::Double(1.5), 1.5)]
	#[case(TreeValue::Float(0.25), 0.25)]
	#[case(TreeValue::Int(-3), -3.0)]
	#[case(TreeValue::UInt(7), 7.0)]
	#[case(TreeValue::UInt(0), 0.0)]
	#[case(TreeValue::Int(i64::MIN), -9_223_372_036_854_775_808.0)]
	fn test_numbers(#[case] value: TreeValue, #[case] expected: f64) {
		assert_eq!(coerce_number(&value).unwrap(), expected);
	}

	#[test]
	fn test_large_integers_are_rounded() {
		assert_eq!(coerce_number(&TreeValue::UInt(9_007_199_254_740_993)).unwrap(), 9_007_199_254_740_992.0);
	}

	#[rstest]
	#[case(TreeValue::from("1.5"))]
	#[case(TreeValue::Boolean(true))]
	#[case(TreeValue::Null)]
	fn test_type_mismatch(#[case] value: TreeValue) {
		assert!(matches!(coerce_number(&value), Err(DecodeError::TypeMismatch { .. })));
	}

	#[rstest]
	#[case(TreeValue::new_array())]
	#[case(TreeValue::new_object())]
	fn test_containers_are_shape_mismatches(#[case] value: TreeValue) {
		assert!(matches!(
			coerce_number(&value),
			Err(DecodeError::ShapeMismatch { expected_depth: 0, .. })
		));
	}
}
