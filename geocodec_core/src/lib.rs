//! The generic document tree used by `geocodec`, together with the document layers that produce
//! and consume it.
//!
//! - [`TreeValue`], [`TreeArray`] and [`TreeObject`] form the untyped tree. Objects keep their
//!   key order, numbers keep their integer or floating point flavor.
//! - [`json`] parses and stringifies JSON documents.
//! - [`bson_io`] (feature `bson`) reads and writes BSON documents, normalizing the BSON document
//!   model into the tree at the boundary.
//! - [`byte_iterator`] provides the byte cursor and token helpers behind the JSON parser.

pub mod byte_iterator;
#[cfg(feature = "bson")]
pub mod bson_io;
pub mod json;
mod tree;

pub use tree::*;
