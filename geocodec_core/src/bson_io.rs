//! Reading and writing BSON documents as generic trees.
//!
//! The BSON library has its own document model: arrays, embedded documents and several number
//! types. Reading normalizes that model into the generic tree once, at the boundary, so that
//! everything downstream deals with a single representation of objects, arrays and numbers.

use crate::{TreeArray, TreeObject, TreeValue};
use anyhow::{Context, Result, anyhow, bail};
use bson::{Bson, Document};
use std::io::Cursor;

/// Read a BSON document from `bytes` and normalize it into a `TreeObject`.
pub fn parse_bson(bytes: &[u8]) -> Result<TreeObject> {
	log::trace!("reading {} bytes of BSON", bytes.len());
	let document = Document::from_reader(&mut Cursor::new(bytes)).context("while reading a BSON document")?;
	normalize_document(document)
}

/// Convert a BSON document into a `TreeObject`, recursively normalizing arrays, embedded
/// documents and numbers. Key order is preserved.
///
/// # Errors
/// Returns an error naming the offending key if an element has no tree representation
/// (binary data, object ids, dates, regular expressions, decimals, ...).
pub fn normalize_document(document: Document) -> Result<TreeObject> {
	document
		.into_iter()
		.map(|(key, value)| {
			let value = normalize_bson(value).with_context(|| format!("in field '{key}'"))?;
			Ok((key, value))
		})
		.collect()
}

/// Convert a single BSON element into a `TreeValue`.
pub fn normalize_bson(value: Bson) -> Result<TreeValue> {
	Ok(match value {
		Bson::Array(array) => TreeValue::Array(
			array
				.into_iter()
				.enumerate()
				.map(|(index, value)| normalize_bson(value).with_context(|| format!("at index {index}")))
				.collect::<Result<TreeArray>>()?,
		),
		Bson::Document(document) => TreeValue::Object(normalize_document(document)?),
		Bson::Double(v) => TreeValue::Double(v),
		Bson::Int32(v) => TreeValue::from(v),
		Bson::Int64(v) => TreeValue::from(v),
		Bson::String(v) | Bson::Symbol(v) => TreeValue::String(v),
		Bson::Boolean(v) => TreeValue::Boolean(v),
		Bson::Null | Bson::Undefined => TreeValue::Null,
		other => bail!("unsupported BSON element type {:?}", other.element_type()),
	})
}

/// Serialize a `TreeObject` as a BSON document.
///
/// # Errors
/// Returns an error if a value has no BSON representation, e.g. an unsigned integer above
/// `i64::MAX`.
pub fn to_bson(object: &TreeObject) -> Result<Vec<u8>> {
	let document = tree_to_document(object)?;
	let mut buffer = Vec::new();
	document
		.to_writer(&mut buffer)
		.context("while writing a BSON document")?;
	Ok(buffer)
}

/// Convert a `TreeObject` into a BSON document.
pub fn tree_to_document(object: &TreeObject) -> Result<Document> {
	let mut document = Document::new();
	for (key, value) in object {
		let value = tree_to_bson(value).with_context(|| format!("in field '{key}'"))?;
		document.insert(key.clone(), value);
	}
	Ok(document)
}

/// Convert a single `TreeValue` into a BSON element.
pub fn tree_to_bson(value: &TreeValue) -> Result<Bson> {
	Ok(match value {
		TreeValue::Array(array) => Bson::Array(
			array
				.iter()
				.enumerate()
				.map(|(index, value)| tree_to_bson(value).with_context(|| format!("at index {index}")))
				.collect::<Result<Vec<_>>>()?,
		),
		TreeValue::Object(object) => Bson::Document(tree_to_document(object)?),
		TreeValue::Boolean(b) => Bson::Boolean(*b),
		TreeValue::Double(v) => Bson::Double(*v),
		TreeValue::Float(v) => Bson::Double(f64::from(*v)),
		TreeValue::Int(v) => Bson::Int64(*v),
		TreeValue::UInt(v) => Bson::Int64(
			i64::try_from(*v).map_err(|_| anyhow!("unsigned integer {v} does not fit into a BSON int64"))?,
		),
		TreeValue::Null => Bson::Null,
		TreeValue::String(s) => Bson::String(s.clone()),
	})
}
