//! Reading and writing JSON documents as generic trees.

mod parse;
mod stringify;

pub use parse::{MAX_JSON_NESTING, parse_json_bytes, parse_json_iter, parse_json_str};
pub use stringify::{escape_json_string, stringify};
