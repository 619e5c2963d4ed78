//! Decoders for fixed-depth arrays of numbers.
//!
//! A coordinate shape is a `Vec` nested one to four times around `f64`. The [`Shape`] trait
//! describes one level, so every depth is decoded by the same recursive code and the nesting is
//! checked by the type system rather than at runtime.

use super::coerce_number;
use crate::{DecodeError, PathSet, PolygonSet, Position, PositionSet};
use geocodec_core::TreeValue;

/// A value that can be decoded from a tree node with a known array nesting depth.
pub trait Shape: Sized {
	/// Number of array levels around the numbers: 0 for a plain number.
	const DEPTH: usize;

	fn decode_shape(value: &TreeValue) -> Result<Self, DecodeError>;
}

impl Shape for f64 {
	const DEPTH: usize = 0;

	fn decode_shape(value: &TreeValue) -> Result<Self, DecodeError> {
		coerce_number(value)
	}
}

impl<T: Shape> Shape for Vec<T> {
	const DEPTH: usize = T::DEPTH + 1;

	fn decode_shape(value: &TreeValue) -> Result<Self, DecodeError> {
		let TreeValue::Array(array) = value else {
			return Err(DecodeError::shape_mismatch(Self::DEPTH, value));
		};
		array
			.iter()
			.enumerate()
			.map(|(index, item)| T::decode_shape(item).map_err(|e| e.at_index(index)))
			.collect()
	}
}

/// Decode `[n, n, ...]`.
pub fn decode_position(value: &TreeValue) -> Result<Position, DecodeError> {
	Position::decode_shape(value)
}

/// Decode `[[n, ...], ...]`.
pub fn decode_position_set(value: &TreeValue) -> Result<PositionSet, DecodeError> {
	PositionSet::decode_shape(value)
}

/// Decode `[[[n, ...], ...], ...]`.
pub fn decode_path_set(value: &TreeValue) -> Result<PathSet, DecodeError> {
	PathSet::decode_shape(value)
}

/// Decode `[[[[n, ...], ...], ...], ...]`.
pub fn decode_polygon_set(value: &TreeValue) -> Result<PolygonSet, DecodeError> {
	PolygonSet::decode_shape(value)
}
