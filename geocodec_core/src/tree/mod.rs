//! The generic document tree shared by the JSON and BSON readers and writers.

mod array;
mod number;
mod object;
mod value;

pub use array::TreeArray;
pub use object::TreeObject;
pub use value::TreeValue;
