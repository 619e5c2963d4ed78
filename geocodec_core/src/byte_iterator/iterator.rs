//! A byte-level cursor over an in-memory document with peeking and positioned error messages.
//!
//! `ByteIterator` walks a borrowed byte slice one byte at a time. It supports peeking at the next
//! byte without consuming it, and formats errors with the current position and a short snippet
//! of the bytes preceding it, so that parse failures point at the offending spot.

use anyhow::{Error, Result, anyhow};

const SNIPPET_LENGTH: usize = 16;

/// A cursor over a byte slice with support for peeking, consuming, and error reporting.
pub struct ByteIterator<'a> {
	bytes: &'a [u8],
	position: usize,
}

impl<'a> ByteIterator<'a> {
	/// Creates a new `ByteIterator` positioned at the first byte of `bytes`.
	#[must_use]
	pub fn new(bytes: &'a [u8]) -> Self {
		ByteIterator { bytes, position: 0 }
	}

	/// Formats an error message including the current byte position and a snippet of the
	/// bytes leading up to it. `<EOF>` marks an exhausted input.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let end = self.position.min(self.bytes.len());
		let start = end.saturating_sub(SNIPPET_LENGTH);
		let mut snippet = String::from_utf8_lossy(&self.bytes[start..end]).into_owned();
		if self.peek().is_none() {
			snippet.push_str("<EOF>");
		}
		anyhow!("{msg} at position {}: {snippet}", self.position)
	}

	/// Returns the current position in the byte slice.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Peeks at the next byte without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	/// Advances past the current byte.
	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.bytes.len() {
			self.position += 1;
		}
	}

	/// Consumes and returns the next byte, or `None` at the end of the input.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peek();
		self.advance();
		byte
	}

	/// Consumes and returns the next byte.
	///
	/// # Errors
	/// Returns an error if the end of the input is reached unexpectedly.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		self.consume().ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Returns the next byte without consuming it.
	///
	/// # Errors
	/// Returns an error if the end of the input is reached unexpectedly.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Skips over JSON whitespace (space, tab, newline, carriage return).
	#[inline]
	pub fn skip_whitespace(&mut self) {
		while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
			self.advance();
		}
	}

	/// Returns `true` once every byte has been consumed.
	#[inline]
	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.position >= self.bytes.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_peek_and_consume() {
		let mut iter = ByteIterator::new(b"ab");
		assert_eq!(iter.peek(), Some(b'a'));
		assert_eq!(iter.consume(), Some(b'a'));
		assert_eq!(iter.position(), 1);
		assert_eq!(iter.consume(), Some(b'b'));
		assert_eq!(iter.consume(), None);
		assert!(iter.is_at_end());
	}

	#[test]
	fn test_expect_next_byte_at_end() {
		let mut iter = ByteIterator::new(b"x");
		assert_eq!(iter.expect_next_byte().unwrap(), b'x');
		let error = iter.expect_next_byte().unwrap_err();
		assert_eq!(error.to_string(), "unexpected end at position 1: x<EOF>");
	}

	#[test]
	fn test_skip_whitespace() {
		let mut iter = ByteIterator::new(b" \t\r\n  42");
		iter.skip_whitespace();
		assert_eq!(iter.expect_peeked_byte().unwrap(), b'4');
		assert_eq!(iter.position(), 6);
	}

	#[test]
	fn test_format_error_snippet_is_truncated() {
		let mut iter = ByteIterator::new(b"0123456789abcdefghijklmnop");
		for _ in 0..20 {
			iter.advance();
		}
		let error = iter.format_error("boom");
		assert_eq!(error.to_string(), "boom at position 20: 456789abcdefghij");
	}
}
