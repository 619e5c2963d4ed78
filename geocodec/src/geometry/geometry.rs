use super::GeometryKind;
use geocodec_core::TreeObject;
use std::fmt::Debug;

/// One coordinate tuple, e.g. `[x, y]` or `[x, y, z]`. The length is not checked.
pub type Position = Vec<f64>;
/// A list of positions: the points of a `MultiPoint` or the vertices of a `LineString`.
pub type PositionSet = Vec<Position>;
/// A list of paths: the lines of a `MultiLineString` or the rings of a `Polygon`.
pub type PathSet = Vec<PositionSet>;
/// A list of polygons, each a list of rings.
pub type PolygonSet = Vec<PathSet>;

/// The payload of a geometry. Exactly one variant is populated, matching the type tag.
#[derive(Clone, PartialEq)]
pub enum GeometryValue {
	Point(Position),
	MultiPoint(PositionSet),
	LineString(PositionSet),
	MultiLineString(PathSet),
	Polygon(PathSet),
	MultiPolygon(PolygonSet),
	GeometryCollection(Vec<Geometry>),
	/// An unrecognized type tag, kept verbatim. It has no payload.
	Unknown(String),
}

impl GeometryValue {
	/// The recognized kind, `None` for unknown tags.
	#[must_use]
	pub fn kind(&self) -> Option<GeometryKind> {
		Some(match self {
			GeometryValue::Point(_) => GeometryKind::Point,
			GeometryValue::MultiPoint(_) => GeometryKind::MultiPoint,
			GeometryValue::LineString(_) => GeometryKind::LineString,
			GeometryValue::MultiLineString(_) => GeometryKind::MultiLineString,
			GeometryValue::Polygon(_) => GeometryKind::Polygon,
			GeometryValue::MultiPolygon(_) => GeometryKind::MultiPolygon,
			GeometryValue::GeometryCollection(_) => GeometryKind::GeometryCollection,
			GeometryValue::Unknown(_) => return None,
		})
	}

	/// The type tag written into the `type` field.
	#[must_use]
	pub fn type_name(&self) -> &str {
		match self {
			GeometryValue::Unknown(name) => name,
			_ => self.kind().map_or("", GeometryKind::as_str),
		}
	}
}

impl Debug for GeometryValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (type_name, inner): (&str, &dyn Debug) = match self {
			GeometryValue::Point(g) => ("Point", g),
			GeometryValue::MultiPoint(g) => ("MultiPoint", g),
			GeometryValue::LineString(g) => ("LineString", g),
			GeometryValue::MultiLineString(g) => ("MultiLineString", g),
			GeometryValue::Polygon(g) => ("Polygon", g),
			GeometryValue::MultiPolygon(g) => ("MultiPolygon", g),
			GeometryValue::GeometryCollection(g) => ("GeometryCollection", g),
			GeometryValue::Unknown(name) => return f.debug_tuple("Unknown").field(name).finish(),
		};
		f.debug_tuple(type_name).field(inner).finish()
	}
}

/// A GeoJSON geometry: a tagged payload plus the optional `bbox` and `crs` members.
///
/// An empty `bbox` or `crs` is treated like an absent one, so the constructors and builders never
/// store `Some` of an empty value.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
	pub value: GeometryValue,
	pub bbox: Option<Vec<f64>>,
	pub crs: Option<TreeObject>,
}

impl Geometry {
	#[must_use]
	pub fn new(value: GeometryValue) -> Self {
		Geometry {
			value,
			bbox: None,
			crs: None,
		}
	}

	pub fn new_point(position: Position) -> Self {
		Self::new(GeometryValue::Point(position))
	}
	pub fn new_multi_point(points: PositionSet) -> Self {
		Self::new(GeometryValue::MultiPoint(points))
	}
	pub fn new_line_string(vertices: PositionSet) -> Self {
		Self::new(GeometryValue::LineString(vertices))
	}
	pub fn new_multi_line_string(lines: PathSet) -> Self {
		Self::new(GeometryValue::MultiLineString(lines))
	}
	pub fn new_polygon(rings: PathSet) -> Self {
		Self::new(GeometryValue::Polygon(rings))
	}
	pub fn new_multi_polygon(polygons: PolygonSet) -> Self {
		Self::new(GeometryValue::MultiPolygon(polygons))
	}
	pub fn new_collection(geometries: Vec<Geometry>) -> Self {
		Self::new(GeometryValue::GeometryCollection(geometries))
	}
	/// A geometry with an unrecognized type tag. Returns `None` for the names of the known kinds,
	/// which always need their coordinates.
	pub fn new_unknown(type_name: &str) -> Option<Self> {
		if GeometryKind::from_name(type_name).is_some() {
			return None;
		}
		Some(Self::new(GeometryValue::Unknown(type_name.to_string())))
	}

	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![vec![0.0, 0.0], vec![5.0, 0.0], vec![2.5, 4.0], vec![0.0, 0.0]],
				vec![vec![2.0, 1.0], vec![2.5, 2.0], vec![3.0, 1.0], vec![2.0, 1.0]],
			],
			vec![vec![
				vec![6.0, 0.0],
				vec![9.0, 0.0],
				vec![9.0, 4.0],
				vec![6.0, 4.0],
				vec![6.0, 0.0],
			]],
		])
	}

	pub fn with_bbox(mut self, bbox: Vec<f64>) -> Self {
		self.bbox = if bbox.is_empty() { None } else { Some(bbox) };
		self
	}

	pub fn with_crs(mut self, crs: TreeObject) -> Self {
		self.crs = if crs.is_empty() { None } else { Some(crs) };
		self
	}

	#[must_use]
	pub fn kind(&self) -> Option<GeometryKind> {
		self.value.kind()
	}

	#[must_use]
	pub fn type_name(&self) -> &str {
		self.value.type_name()
	}

	/// The members of a collection, `None` for every other kind.
	#[must_use]
	pub fn geometries(&self) -> Option<&[Geometry]> {
		match &self.value {
			GeometryValue::GeometryCollection(geometries) => Some(geometries),
			_ => None,
		}
	}

	#[must_use]
	pub fn is_point(&self) -> bool {
		matches!(self.value, GeometryValue::Point(_))
	}
	#[must_use]
	pub fn is_multi_point(&self) -> bool {
		matches!(self.value, GeometryValue::MultiPoint(_))
	}
	#[must_use]
	pub fn is_line_string(&self) -> bool {
		matches!(self.value, GeometryValue::LineString(_))
	}
	#[must_use]
	pub fn is_multi_line_string(&self) -> bool {
		matches!(self.value, GeometryValue::MultiLineString(_))
	}
	#[must_use]
	pub fn is_polygon(&self) -> bool {
		matches!(self.value, GeometryValue::Polygon(_))
	}
	#[must_use]
	pub fn is_multi_polygon(&self) -> bool {
		matches!(self.value, GeometryValue::MultiPolygon(_))
	}
	#[must_use]
	pub fn is_collection(&self) -> bool {
		matches!(self.value, GeometryValue::GeometryCollection(_))
	}
	#[must_use]
	pub fn is_unknown(&self) -> bool {
		matches!(self.value, GeometryValue::Unknown(_))
	}
}
