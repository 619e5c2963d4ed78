use std::fmt::{self, Display};

/// The seven recognized GeoJSON geometry types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKind {
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
	GeometryCollection,
}

impl GeometryKind {
	pub const ALL: [GeometryKind; 7] = [
		GeometryKind::Point,
		GeometryKind::MultiPoint,
		GeometryKind::LineString,
		GeometryKind::MultiLineString,
		GeometryKind::Polygon,
		GeometryKind::MultiPolygon,
		GeometryKind::GeometryCollection,
	];

	/// The exact tag used in the `type` field.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			GeometryKind::Point => "Point",
			GeometryKind::MultiPoint => "MultiPoint",
			GeometryKind::LineString => "LineString",
			GeometryKind::MultiLineString => "MultiLineString",
			GeometryKind::Polygon => "Polygon",
			GeometryKind::MultiPolygon => "MultiPolygon",
			GeometryKind::GeometryCollection => "GeometryCollection",
		}
	}

	/// Look up a tag. Matching is case-sensitive, so `"point"` is not a `Point`.
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		GeometryKind::ALL.into_iter().find(|kind| kind.as_str() == name)
	}

	/// Array nesting depth of the `coordinates` member, `None` for collections.
	#[must_use]
	pub fn coordinate_depth(self) -> Option<usize> {
		match self {
			GeometryKind::Point => Some(1),
			GeometryKind::MultiPoint | GeometryKind::LineString => Some(2),
			GeometryKind::MultiLineString | GeometryKind::Polygon => Some(3),
			GeometryKind::MultiPolygon => Some(4),
			GeometryKind::GeometryCollection => None,
		}
	}
}

impl Display for GeometryKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
