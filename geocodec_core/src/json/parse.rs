use crate::{
	TreeArray, TreeObject, TreeValue,
	byte_iterator::{
		ByteIterator, parse_array_entries, parse_number_as_string, parse_object_entries, parse_quoted_json_string,
		parse_tag,
	},
};
use anyhow::{Context, Result};

/// Maximum nesting of arrays and objects accepted by the parser.
pub const MAX_JSON_NESTING: usize = 256;

/// Parse a JSON text into a `TreeValue`.
pub fn parse_json_str(json: &str) -> Result<TreeValue> {
	parse_json_bytes(json.as_bytes())
}

/// Parse UTF-8 encoded JSON bytes into a `TreeValue`. Only whitespace may follow the root value.
pub fn parse_json_bytes(bytes: &[u8]) -> Result<TreeValue> {
	log::trace!("parsing {} bytes of JSON", bytes.len());
	let mut iter = ByteIterator::new(bytes);
	let value = parse_json_iter(&mut iter).context("while parsing JSON")?;
	iter.skip_whitespace();
	if !iter.is_at_end() {
		return Err(iter.format_error("unexpected trailing characters")).context("while parsing JSON");
	}
	Ok(value)
}

/// Parse the next JSON value from `iter`.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<TreeValue> {
	parse_json_value(iter, 0)
}

fn parse_json_value(iter: &mut ByteIterator, depth: usize) -> Result<TreeValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' | b'{' if depth >= MAX_JSON_NESTING => {
			Err(iter.format_error(&format!("nesting deeper than {MAX_JSON_NESTING} levels")))
		}
		b'[' => parse_array_entries(iter, |iter2| parse_json_value(iter2, depth + 1))
			.map(|list| TreeValue::Array(TreeArray(list))),
		b'{' => parse_json_object(iter, depth + 1),
		b'"' => parse_quoted_json_string(iter).map(TreeValue::String),
		b'-' | b'0'..=b'9' => parse_json_number(iter),
		b't' => parse_tag(iter, "true").map(|()| TreeValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| TreeValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| TreeValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_json_object(iter: &mut ByteIterator, depth: usize) -> Result<TreeValue> {
	let mut object = TreeObject::new();
	parse_object_entries(iter, |key, iter2| {
		let value = parse_json_value(iter2, depth)?;
		object.0.insert(key, value);
		Ok(())
	})?;
	Ok(TreeValue::Object(object))
}

/// Numbers without fraction or exponent stay integers: `Int` when negative, `UInt` otherwise.
/// Everything else, including integers that do not fit into 64 bits, becomes a `Double`.
fn parse_json_number(iter: &mut ByteIterator) -> Result<TreeValue> {
	let number = parse_number_as_string(iter)?;

	if !number.contains(['.', 'e', 'E']) {
		if number.starts_with('-') {
			if let Ok(value) = number.parse::<i64>() {
				return Ok(TreeValue::from(value));
			}
		} else if let Ok(value) = number.parse::<u64>() {
			return Ok(TreeValue::UInt(value));
		}
	}

	number
		.parse::<f64>()
		.map(TreeValue::Double)
		.map_err(|_| iter.format_error("invalid number"))
}
