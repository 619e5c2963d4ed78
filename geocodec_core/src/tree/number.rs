//! Number conversions into `TreeValue`.
//!
//! Floats keep their width. Integers are stored canonically, so that a value built in code
//! compares equal to the same value read from a document: non-negative integers become `UInt`,
//! negative integers become `Int`.

use super::TreeValue;

impl From<f64> for TreeValue {
	fn from(input: f64) -> Self {
		TreeValue::Double(input)
	}
}

impl From<f32> for TreeValue {
	fn from(input: f32) -> Self {
		TreeValue::Float(input)
	}
}

macro_rules! impl_from_unsigned {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for TreeValue {
				fn from(input: $t) -> Self {
					TreeValue::UInt(input as u64)
				}
			}
		)+
	};
}

macro_rules! impl_from_signed {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for TreeValue {
				#[allow(clippy::cast_possible_wrap)]
				fn from(input: $t) -> Self {
					if input < 0 {
						TreeValue::Int(input as i64)
					} else {
						TreeValue::UInt(input as u64)
					}
				}
			}
		)+
	};
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
	use super::*;

	macro_rules! gen_from_number_tests {
		($($name:ident : $t:ty => [$($v:expr => $expected:expr),+ $(,)?];)+) => {
			$(
				#[test]
				fn $name() {
					$(
						let value: $t = $v;
						assert_eq!(TreeValue::from(value), $expected, "failed for {} ({})", value, stringify!($t));
					)+
				}
			)+
		};
	}

	gen_from_number_tests! {
		from_u8: u8 => [0 => TreeValue::UInt(0), 255 => TreeValue::UInt(255)];
		from_u64: u64 => [u64::MAX => TreeValue::UInt(u64::MAX)];
		from_usize: usize => [123_456 => TreeValue::UInt(123_456)];
		from_i8: i8 => [-128 => TreeValue::Int(-128), 127 => TreeValue::UInt(127)];
		from_i32: i32 => [-1 => TreeValue::Int(-1), 0 => TreeValue::UInt(0)];
		from_i64: i64 => [i64::MIN => TreeValue::Int(i64::MIN), 1_234_567_890_123 => TreeValue::UInt(1_234_567_890_123)];
		from_isize: isize => [-123_456 => TreeValue::Int(-123_456)];
	}

	#[test]
	fn floats_keep_their_width() {
		assert_eq!(TreeValue::from(1.5f32), TreeValue::Float(1.5));
		assert_eq!(TreeValue::from(1.5f64), TreeValue::Double(1.5));
	}
}
