//! Separating-axis test and containment refinement for convex polygons.
//!
//! Purpose
//! - Decide, for an ordered pair `(a, b)`, whether `a` is separate from,
//!   intersects, surrounds, or is inside `b`.
//!
//! Model
//! - Candidate axes are the unit normals of both polygons' edges. For convex
//!   polygons, disjointness holds iff one of them separates the projections.
//! - If no axis separates, each axis is classified by which projection
//!   contains the other. Uniform containment on every axis means nesting.
//!
//! Code cross-refs: `geom2::{axes, edges, project}`, `pairwise::relate_pairs`

use std::fmt;

use crate::geom2::{axes, edges, project, Axis, GeomCfg, Interval, Polygon};

/// Relation of an ordered pair, read "A ⟨relation⟩ B".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    Separate,
    Intersects,
    Surrounds,
    IsInside,
}

impl Relation {
    /// Relation of the swapped pair `(b, a)`.
    #[inline]
    pub fn inverse(self) -> Self {
        match self {
            Self::Surrounds => Self::IsInside,
            Self::IsInside => Self::Surrounds,
            r => r,
        }
    }

    /// Sentence fragment used in the `shape A <phrase> shape B` line format.
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Separate => "is separate from",
            Self::Intersects => "intersects",
            Self::Surrounds => "surrounds",
            Self::IsInside => "is inside",
        }
    }

    /// Short machine-friendly name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Separate => "separate",
            Self::Intersects => "intersects",
            Self::Surrounds => "surrounds",
            Self::IsInside => "is-inside",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Per-axis containment direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Containment {
    /// `a`'s interval lies within `b`'s.
    AInsideB,
    /// `b`'s interval lies within `a`'s.
    BInsideA,
    /// Both intervals coincide (within slack); agrees with either direction.
    Coincident,
}

/// True iff the intervals share a point (inclusive, slack `eps`).
#[inline]
pub fn intervals_overlap(a: &Interval, b: &Interval, eps: f64) -> bool {
    !(a.max + eps < b.min || b.max + eps < a.min)
}

/// SAT overlap check; `false` as soon as one axis separates the projections.
pub fn shapes_overlap(a: &Polygon, b: &Polygon, axes: &[Axis], cfg: GeomCfg) -> bool {
    axes.iter().all(|axis| {
        let pa = project(a.vertices(), axis);
        let pb = project(b.vertices(), axis);
        intervals_overlap(&pa, &pb, cfg.eps)
    })
}

/// Which interval contains the other; `None` if neither does.
#[inline]
pub fn classify(a: &Interval, b: &Interval, eps: f64) -> Option<Containment> {
    match (b.contains_eps(a, eps), a.contains_eps(b, eps)) {
        (true, true) => Some(Containment::Coincident),
        (true, false) => Some(Containment::AInsideB),
        (false, true) => Some(Containment::BInsideA),
        (false, false) => None,
    }
}

/// Containment refinement for a pair already known to overlap on every axis.
pub fn containment(a: &Polygon, b: &Polygon, axes: &[Axis], cfg: GeomCfg) -> Relation {
    let mut dir: Option<Containment> = None;
    for axis in axes {
        let pa = project(a.vertices(), axis);
        let pb = project(b.vertices(), axis);
        match (classify(&pa, &pb, cfg.eps), dir) {
            (None, _) => return Relation::Intersects,
            (Some(Containment::Coincident), _) => {}
            (Some(c), None) => dir = Some(c),
            // Crossing shapes can look contained on every axis, but in
            // opposite directions on different axes. Only a uniform direction
            // means nesting.
            (Some(c), Some(d)) if c != d => return Relation::Intersects,
            (Some(_), Some(_)) => {}
        }
    }
    match dir {
        Some(Containment::BInsideA) => Relation::Surrounds,
        Some(Containment::AInsideB) => Relation::IsInside,
        // Projections coincide on every axis: congruent shapes overlap fully.
        Some(Containment::Coincident) | None => Relation::Intersects,
    }
}

/// Relation of `a` to `b`.
pub fn relate(a: &Polygon, b: &Polygon, cfg: GeomCfg) -> Relation {
    let axes = axes(&edges(a), &edges(b));
    if !shapes_overlap(a, b, &axes, cfg) {
        return Relation::Separate;
    }
    containment(a, b, &axes, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(pts: &[(f64, f64)]) -> Polygon {
        Polygon::from_xy(pts).unwrap()
    }

    fn both(a: &Polygon, b: &Polygon) -> (Relation, Relation) {
        let cfg = GeomCfg::default();
        (relate(a, b, cfg), relate(b, a, cfg))
    }

    #[test]
    fn disjoint_squares_are_separate() {
        let a = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let b = poly(&[(2.0, 0.0), (3.0, 0.0), (3.0, 1.0), (2.0, 1.0)]);
        assert_eq!(both(&a, &b), (Relation::Separate, Relation::Separate));
    }

    #[test]
    fn nested_squares() {
        let a = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let b = poly(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]);
        assert_eq!(both(&a, &b), (Relation::Surrounds, Relation::IsInside));
    }

    #[test]
    fn overlapping_squares_intersect() {
        let a = poly(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let b = poly(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
        assert_eq!(both(&a, &b), (Relation::Intersects, Relation::Intersects));
    }

    #[test]
    fn crossing_quadrilateral_and_rectangle_are_not_nested() {
        // A is a quadrilateral with a slanted edge, B an upright rectangle
        // poking out of A's top and bottom.
        let a = poly(&[(0.0, 0.0), (0.0, 2.0), (3.0, 2.0), (3.0, 1.0)]);
        let b = poly(&[(1.0, 0.0), (1.0, 3.0), (2.0, 3.0), (2.0, 0.0)]);
        let cfg = GeomCfg::default();
        let ax = axes(&edges(&a), &edges(&b));
        // every axis overlaps and every axis shows containment ...
        assert!(shapes_overlap(&a, &b, &ax, cfg));
        let dirs: Vec<_> = ax
            .iter()
            .map(|axis| {
                classify(
                    &project(a.vertices(), axis),
                    &project(b.vertices(), axis),
                    cfg.eps,
                )
            })
            .collect();
        assert!(dirs.iter().all(Option::is_some));
        // ... but not in a single direction
        assert!(dirs.contains(&Some(Containment::AInsideB)));
        assert!(dirs.contains(&Some(Containment::BInsideA)));
        assert_eq!(both(&a, &b), (Relation::Intersects, Relation::Intersects));

        // axis-aligned variant: a horizontal bar across a vertical bar
        let bar = poly(&[(0.0, 1.0), (0.0, 2.0), (3.0, 2.0), (3.0, 1.0)]);
        assert_eq!(both(&bar, &b), (Relation::Intersects, Relation::Intersects));
    }

    #[test]
    fn touching_edges_count_as_overlap() {
        let a = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let b = poly(&[(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0)]);
        assert_eq!(both(&a, &b), (Relation::Intersects, Relation::Intersects));
    }

    #[test]
    fn identical_shapes_intersect() {
        let a = poly(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(relate(&a, &a.clone(), GeomCfg::default()), Relation::Intersects);
    }

    #[test]
    fn coincident_axes_do_not_pick_a_direction() {
        // strip spanning the square's full width
        let sq = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let strip = poly(&[(0.0, 1.0), (4.0, 1.0), (4.0, 2.0), (0.0, 2.0)]);
        assert_eq!(both(&sq, &strip), (Relation::Surrounds, Relation::IsInside));
    }

    #[test]
    fn triangle_inside_square_with_mixed_winding() {
        let sq = poly(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
        let tri = poly(&[(2.0, 2.0), (6.0, 2.0), (4.0, 5.0)]);
        assert_eq!(both(&sq, &tri), (Relation::Surrounds, Relation::IsInside));
    }

    #[test]
    fn eps_controls_near_misses() {
        let a = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let b = poly(&[(1.0 + 1e-6, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0 + 1e-6, 1.0)]);
        assert_eq!(GeomCfg::default().eps, 0.0);
        assert_eq!(relate(&a, &b, GeomCfg::default()), Relation::Separate);
        assert_eq!(relate(&a, &b, GeomCfg { eps: 1e-5 }), Relation::Intersects);
    }

    #[test]
    fn tiny_shapes_keep_exact_relations_by_default() {
        let s = 1e-10;
        let square = |x0: f64, y0: f64, side: f64| {
            poly(&[(x0, y0), (x0 + side, y0), (x0 + side, y0 + side), (x0, y0 + side)])
        };
        // gap of 5e-10 between two squares of side 1e-10
        let a = square(0.0, 0.0, s);
        let b = square(6.0 * s, 0.0, s);
        assert_eq!(both(&a, &b), (Relation::Separate, Relation::Separate));
        // c pokes out of d by 1e-10 on the right
        let d = square(0.0, 0.0, 10.0 * s);
        let c = square(5.0 * s, 2.0 * s, 6.0 * s);
        assert_eq!(both(&d, &c), (Relation::Intersects, Relation::Intersects));
        // and a properly nested tiny square is still nested
        let e = square(2.0 * s, 2.0 * s, 3.0 * s);
        assert_eq!(both(&d, &e), (Relation::Surrounds, Relation::IsInside));
    }

    #[test]
    fn interval_overlap_cases() {
        let a = Interval::new(0.0, 1.0);
        assert!(intervals_overlap(&a, &Interval::new(0.5, 2.0), 0.0));
        assert!(intervals_overlap(&a, &Interval::new(1.0, 2.0), 0.0));
        assert!(intervals_overlap(&a, &Interval::new(-1.0, 3.0), 0.0));
        assert!(!intervals_overlap(&a, &Interval::new(1.5, 2.0), 0.0));
        assert!(!intervals_overlap(&Interval::new(1.5, 2.0), &a, 0.0));
    }

    #[test]
    fn relation_inverse_and_text() {
        assert_eq!(Relation::Surrounds.inverse(), Relation::IsInside);
        assert_eq!(Relation::IsInside.inverse(), Relation::Surrounds);
        assert_eq!(Relation::Separate.inverse(), Relation::Separate);
        assert_eq!(Relation::Intersects.inverse(), Relation::Intersects);
        assert_eq!(Relation::Separate.to_string(), "is separate from");
        assert_eq!(Relation::IsInside.as_str(), "is-inside");
    }
}
