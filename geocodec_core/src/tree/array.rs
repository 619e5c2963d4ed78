//! Array node of the generic tree.

use crate::{json, tree::TreeValue};
use std::fmt::Debug;

/// An ordered sequence of tree nodes, backed by a `Vec<TreeValue>`.
#[derive(Clone, Default, PartialEq)]
pub struct TreeArray(pub Vec<TreeValue>);

impl TreeArray {
	/// Serialize the array to a compact JSON string.
	///
	/// ```rust
	/// use geocodec_core::{TreeArray, TreeValue};
	/// let array = TreeArray(vec![TreeValue::from(1), TreeValue::from(2.5)]);
	/// assert_eq!(array.stringify(), "[1,2.5]");
	/// ```
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(json::stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	#[must_use]
	pub fn as_vec(&self) -> &Vec<TreeValue> {
		&self.0
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, TreeValue> {
		self.0.iter()
	}
}

impl Debug for TreeArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.0.iter()).finish()
	}
}

impl<T> From<Vec<T>> for TreeArray
where
	TreeValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		TreeArray(input.into_iter().map(TreeValue::from).collect())
	}
}

impl<T> From<&[T]> for TreeArray
where
	TreeValue: From<T>,
	T: Clone,
{
	fn from(input: &[T]) -> Self {
		TreeArray(input.iter().cloned().map(TreeValue::from).collect())
	}
}

impl FromIterator<TreeValue> for TreeArray {
	fn from_iter<I: IntoIterator<Item = TreeValue>>(iter: I) -> Self {
		TreeArray(iter.into_iter().collect())
	}
}

impl IntoIterator for TreeArray {
	type Item = TreeValue;
	type IntoIter = std::vec::IntoIter<TreeValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a TreeArray {
	type Item = &'a TreeValue;
	type IntoIter = std::slice::Iter<'a, TreeValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_stringify() {
		let array = TreeArray::from(vec![TreeValue::from("a"), TreeValue::Null, TreeValue::Int(-3)]);
		assert_eq!(array.stringify(), r#"["a",null,-3]"#);
		assert_eq!(TreeArray::default().stringify(), "[]");
	}

	#[test]
	fn test_len_and_iter() {
		assert!(TreeArray::default().is_empty());
		let array = TreeArray::from(vec![TreeValue::from(1), TreeValue::from("two")]);
		assert_eq!(array.len(), 2);
		assert_eq!(
			array.iter().map(TreeValue::type_as_str).collect::<Vec<_>>(),
			vec!["uint", "string"]
		);
	}

	#[test]
	fn test_from_slice_and_collect() {
		let from_slice = TreeArray::from(&[1.0, 2.0][..]);
		let collected: TreeArray = vec![1.0, 2.0].into_iter().map(TreeValue::from).collect();
		assert_eq!(from_slice, collected);
		assert_eq!(format!("{from_slice:?}"), "[Double(1.0), Double(2.0)]");
	}
}
