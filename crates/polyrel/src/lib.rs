//! Pairwise relations between convex polygons.
//!
//! For every ordered pair of shapes, decide whether the first is separate
//! from, intersects, surrounds, or is inside the second. The decision uses
//! the separating-axis test over both polygons' edge normals, followed by a
//! per-axis containment check.
//!
//! Layout
//! - `geom2`: validated polygons, edges, axes, projections, random sampler.
//! - `sat`: overlap test and containment refinement for one pair.
//! - `pairwise`: driver over all ordered pairs.
//!
//! Loading shapes and rendering results belong to the caller (see the `cli` crate).

pub mod geom2;
pub mod pairwise;
pub mod sat;

#[cfg(test)]
mod proptests;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{Axis, GeomCfg, Interval, Polygon, PolygonError};
    pub use crate::pairwise::{relate_all, relate_pairs, PairRelation, Shape};
    pub use crate::sat::{relate, Relation};
    pub use nalgebra::Vector2 as Vec2;
}
