/// Default limit for nested geometry collections.
pub const DEFAULT_MAX_COLLECTION_DEPTH: usize = 32;

/// Settings of a [`GeometryDecoder`](crate::GeometryDecoder).
///
/// ```
/// use geocodec::DecoderConfig;
///
/// let config = DecoderConfig::default().with_strict_types(true).with_max_collection_depth(4);
/// assert!(config.strict_types);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
	/// How many geometry collections may be nested inside each other.
	pub max_collection_depth: usize,
	/// Reject unrecognized `type` tags instead of keeping them as `Unknown` geometries.
	pub strict_types: bool,
}

impl Default for DecoderConfig {
	fn default() -> Self {
		DecoderConfig {
			max_collection_depth: DEFAULT_MAX_COLLECTION_DEPTH,
			strict_types: false,
		}
	}
}

impl DecoderConfig {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_max_collection_depth(mut self, depth: usize) -> Self {
		self.max_collection_depth = depth;
		self
	}

	pub fn with_strict_types(mut self, strict: bool) -> Self {
		self.strict_types = strict;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = DecoderConfig::new();
		assert_eq!(config.max_collection_depth, 32);
		assert!(!config.strict_types);
	}

	#[test]
	fn test_builders() {
		let config = DecoderConfig::default().with_max_collection_depth(2).with_strict_types(true);
		assert_eq!(
			config,
			DecoderConfig {
				max_collection_depth: 2,
				strict_types: true
			}
		);
	}
}
