//! Small parsing helpers built on top of [`ByteIterator`](super::iterator::ByteIterator).
//!
//! These functions implement the token level of the JSON grammar:
//! - `parse_tag` for matching fixed ASCII tags (`true`, `false`, `null`)
//! - `parse_quoted_json_string` for JSON string literals with escapes, including surrogate pairs
//! - `parse_number_as_string` for JSON number syntax
//! - `parse_object_entries` and `parse_array_entries` to iterate over object/array contents
//!
//! Parsing functions consume only as much as needed and leave the iterator positioned at the
//! next token (e.g., after a closing `]` or `}`).

use super::iterator::ByteIterator;
use anyhow::Result;

/// Match a fixed ASCII tag at the current iterator position.
///
/// # Errors
/// Returns an error if the upcoming bytes do not exactly match `tag`.
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for c in tag.bytes() {
		if iter.expect_next_byte()? != c {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

fn parse_hex4(iter: &mut ByteIterator) -> Result<u16> {
	let mut code = 0u16;
	for _ in 0..4 {
		let digit = char::from(iter.expect_next_byte()?)
			.to_digit(16)
			.ok_or_else(|| iter.format_error("invalid unicode escape"))?;
		code = (code << 4) | digit as u16;
	}
	Ok(code)
}

/// Parse a JSON quoted string literal and return it as `String`.
///
/// Supports the escapes `\" \\ \/ \b \f \n \r \t` and `\uXXXX`, where a high surrogate must be
/// followed by an escaped low surrogate. Leaves the iterator positioned after the closing quote.
///
/// # Errors
/// Returns an error on a missing quote, an unescaped control character, an invalid escape, an
/// unpaired surrogate or invalid UTF-8.
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		return Err(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);

	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let mut units = vec![parse_hex4(iter)?];
					if (0xD800..0xDC00).contains(&units[0]) {
						parse_tag(iter, "\\u").map_err(|_| iter.format_error("expected a low surrogate"))?;
						units.push(parse_hex4(iter)?);
					}
					let decoded = String::from_utf16(&units).map_err(|_| iter.format_error("invalid unicode code point"))?;
					bytes.extend_from_slice(decoded.as_bytes());
				}
				_ => return Err(iter.format_error("invalid escape sequence")),
			},
			c if c < 0x20 => return Err(iter.format_error("unescaped control character in string")),
			c => bytes.push(c),
		}
	}

	String::from_utf8(bytes).map_err(|_| iter.format_error("invalid UTF-8 in string"))
}

fn push_digits(iter: &mut ByteIterator, number: &mut String) -> bool {
	let mut has_digits = false;
	while let Some(digit @ b'0'..=b'9') = iter.peek() {
		has_digits = true;
		number.push(char::from(digit));
		iter.advance();
	}
	has_digits
}

/// Parse a JSON number and return its textual representation.
///
/// Accepts the JSON number grammar: optional minus, integer, optional fraction and optional
/// exponent. Leaves the iterator at the first byte after the number.
///
/// # Errors
/// Returns an error if required digits are missing.
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	let mut number = String::with_capacity(16);

	if iter.peek() == Some(b'-') {
		number.push('-');
		iter.advance();
	}

	if !push_digits(iter, &mut number) {
		return Err(iter.format_error("expected digits in number"));
	}

	if iter.peek() == Some(b'.') {
		number.push('.');
		iter.advance();
		if !push_digits(iter, &mut number) {
			return Err(iter.format_error("expected digits after decimal point"));
		}
	}

	if let Some(e @ (b'e' | b'E')) = iter.peek() {
		number.push(char::from(e));
		iter.advance();
		if let Some(sign @ (b'+' | b'-')) = iter.peek() {
			number.push(char::from(sign));
			iter.advance();
		}
		if !push_digits(iter, &mut number) {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	Ok(number)
}

/// Iterate over JSON object entries, invoking `parse_value` for each key.
///
/// The closure receives the parsed key and the iterator positioned at the start of the value,
/// and is responsible for parsing the value itself.
///
/// # Errors
/// Returns an error on malformed objects or if `parse_value` returns an error.
pub fn parse_object_entries(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<()>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		return Err(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if iter.peek() == Some(b'}') {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("parsing object, expected '\"'"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b'}' => break,
			_ => return Err(iter.format_error("expected ',' or '}'")),
		}
	}
	Ok(())
}

/// Iterate over JSON array entries, collecting the results from `parse_value`.
///
/// # Errors
/// Returns an error on malformed arrays or if `parse_value` returns an error.
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		return Err(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	iter.skip_whitespace();
	if iter.peek() == Some(b']') {
		iter.advance();
		return Ok(result);
	}

	loop {
		iter.skip_whitespace();
		result.push(parse_value(iter)?);

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b']' => break,
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}

	Ok(result)
}
