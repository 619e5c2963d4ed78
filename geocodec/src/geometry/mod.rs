#[allow(clippy::module_inception)]
mod geometry;
mod kind;

pub use geometry::*;
pub use kind::GeometryKind;
