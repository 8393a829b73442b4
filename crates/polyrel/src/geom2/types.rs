//! Basic 2D types and tolerances used by the separating-axis test.
//!
//! - `GeomCfg`: slack applied to interval comparisons.
//! - `Polygon`: validated vertex list (>= 3 finite vertices, no zero-length edge).
//! - `Axis`: unit projection direction, only constructible by normalizing a non-zero vector.
//! - `Interval`: closed `[min, max]` range of projected coordinates.
//!
//! Code cross-refs: `util::{edges, axes, project}`, `crate::sat`

use nalgebra::Vector2;
use std::fmt;

/// Geometry configuration (tolerances).
///
/// `eps` is an absolute slack added to every interval comparison: overlap and
/// "inside" checks become permissive by `eps`. The default is `0.0` (exact
/// comparisons); a positive `eps` must be chosen relative to the input's scale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
}

/// Unit-length projection direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis(Vector2<f64>);

impl Axis {
    /// Normalize `v`; `None` if `|v|` is zero or not finite.
    #[inline]
    pub fn new(v: Vector2<f64>) -> Option<Self> {
        let norm = v.norm();
        if !norm.is_finite() || norm <= 0.0 {
            return None;
        }
        Some(Self(v / norm))
    }

    #[inline]
    pub fn dir(&self) -> Vector2<f64> {
        self.0
    }
}

/// Closed interval `[min, max]` on a projection axis. `min <= max` always holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Build from two endpoints in any order.
    #[inline]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Widen to include `x`.
    #[inline]
    pub fn include(self, x: f64) -> Self {
        Self {
            min: self.min.min(x),
            max: self.max.max(x),
        }
    }

    /// True iff both endpoints of `inner` lie in `self`, inclusive, with slack `eps`.
    #[inline]
    pub fn contains_eps(&self, inner: &Interval, eps: f64) -> bool {
        self.min - eps <= inner.min && inner.max <= self.max + eps
    }
}

/// Why a vertex list was rejected by `Polygon::new`.
#[derive(Debug, Clone, PartialEq)]
pub enum PolygonError {
    /// Too few vertices, a non-finite coordinate, or an edge whose length overflows.
    Invalid { reason: String },
    /// A zero-length edge (consecutive vertices coincide).
    Degenerate { reason: String },
}

impl PolygonError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { reason } => write!(f, "invalid polygon: {reason}"),
            Self::Degenerate { reason } => write!(f, "degenerate polygon: {reason}"),
        }
    }
}

impl std::error::Error for PolygonError {}

/// Convex polygon as an ordered vertex list (either winding).
///
/// Invariants (checked by `new`):
/// - At least 3 vertices.
/// - All coordinates finite.
/// - No zero-length edge, including the closing edge last→first.
/// - Every edge length is finite and non-zero in `f64`, so every edge has a unit normal.
///
/// Convexity and consistent winding are preconditions and are not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    verts: Vec<Vector2<f64>>,
}

impl Polygon {
    pub fn new(verts: Vec<Vector2<f64>>) -> Result<Self, PolygonError> {
        if verts.len() < 3 {
            return Err(PolygonError::invalid(format!(
                "need at least 3 vertices, got {}",
                verts.len()
            )));
        }
        if let Some(k) = verts.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(PolygonError::invalid(format!(
                "vertex {k} has a non-finite coordinate"
            )));
        }
        let n = verts.len();
        for (k, p) in verts.iter().enumerate() {
            let next = (k + 1) % n;
            let q = verts[next];
            if q == *p {
                return Err(PolygonError::degenerate(format!(
                    "zero-length edge between vertices {k} and {next}"
                )));
            }
            if Axis::new(q - p).is_none() {
                return Err(PolygonError::invalid(format!(
                    "edge between vertices {k} and {next} has a length that over- or underflows"
                )));
            }
        }
        Ok(Self { verts })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_xy(points: &[(f64, f64)]) -> Result<Self, PolygonError> {
        Self::new(points.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Always false for a constructed polygon; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Image under `x ↦ m x + t`. Fails only if the map collapses an edge.
    pub fn map_affine(
        &self,
        m: nalgebra::Matrix2<f64>,
        t: Vector2<f64>,
    ) -> Result<Self, PolygonError> {
        Self::new(self.verts.iter().map(|p| m * p + t).collect())
    }
}
