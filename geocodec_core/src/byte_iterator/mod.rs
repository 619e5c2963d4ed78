//! Byte-level iteration over in-memory documents and the JSON token helpers built on it.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
