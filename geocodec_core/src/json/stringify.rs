use crate::TreeValue;
use std::fmt::Display;

/// Serialize a tree node to compact JSON.
///
/// JSON has no representation for NaN or infinity, so non-finite floats are written as `null`.
/// Whole floats keep a fractional part (`2.0`) so that they are parsed back as floats.
pub fn stringify(value: &TreeValue) -> String {
	match value {
		TreeValue::String(s) => format!("\"{}\"", escape_json_string(s)),
		TreeValue::Double(n) => stringify_float(*n),
		TreeValue::Float(n) => stringify_float(*n),
		TreeValue::Int(n) => n.to_string(),
		TreeValue::UInt(n) => n.to_string(),
		TreeValue::Boolean(b) => b.to_string(),
		TreeValue::Null => String::from("null"),
		TreeValue::Array(arr) => arr.stringify(),
		TreeValue::Object(obj) => obj.stringify(),
	}
}

fn stringify_float<T: Copy + Display + Into<f64>>(n: T) -> String {
	let value: f64 = n.into();
	if !value.is_finite() {
		String::from("null")
	} else if value.fract() == 0.0 {
		format!("{n:.1}")
	} else {
		n.to_string()
	}
}

pub fn escape_json_string(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'"' => output.push_str("\\\""),
			'\\' => output.push_str("\\\\"),
			'\n' => output.push_str("\\n"),
			'\r' => output.push_str("\\r"),
			'\t' => output.push_str("\\t"),
			'\u{08}' => output.push_str("\\b"),
			'\u{0c}' => output.push_str("\\f"),
			c if c.is_control() => output.push_str(&format!("\\u{:04x}", c as u32)),
			c => output.push(c),
		}
	}
	output
}
