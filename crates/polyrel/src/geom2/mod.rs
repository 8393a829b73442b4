//! 2D geometry for the separating-axis test.
//!
//! Purpose
//! - Validated convex polygons (`Polygon`) and the primitives the SAT needs:
//!   edges, unit edge normals (`Axis`), projections (`Interval`).
//! - Degenerate input is rejected at construction, so no NaN reaches a comparison.
//!
//! Code cross-refs: `Polygon`, `Axis`, `Interval`, `GeomCfg`, `crate::sat`

pub mod rand;
mod types;
mod util;

pub use types::{Axis, GeomCfg, Interval, Polygon, PolygonError};
pub use util::{axes, convex_hull, dot, edges, normalize, perpendicular, project, vector};
