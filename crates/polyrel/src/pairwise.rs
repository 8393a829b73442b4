//! Pairwise driver: relate every ordered pair of distinct shapes.
//!
//! - Pairs are visited row-major (`i` outer, `j` inner), `i != j`.
//! - Each ordered pair is computed independently; the swapped pair is never
//!   derived from an earlier result.

use crate::geom2::{GeomCfg, Polygon};
use crate::sat::{relate, Relation};

/// A polygon with its opaque external id.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape<Id> {
    pub id: Id,
    pub polygon: Polygon,
}

impl<Id> Shape<Id> {
    pub fn new(id: Id, polygon: Polygon) -> Self {
        Self { id, polygon }
    }
}

/// Result for one ordered pair: `shapes[i] ⟨relation⟩ shapes[j]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairRelation<'a, Id> {
    pub i: usize,
    pub j: usize,
    pub a: &'a Id,
    pub relation: Relation,
    pub b: &'a Id,
}

/// Lazily relate all ordered pairs; yields `n * (n - 1)` items.
pub fn relate_pairs<'a, Id>(
    shapes: &'a [Shape<Id>],
    cfg: GeomCfg,
) -> impl Iterator<Item = PairRelation<'a, Id>> + 'a {
    shapes.iter().enumerate().flat_map(move |(i, sa)| {
        shapes
            .iter()
            .enumerate()
            .filter(move |&(j, _)| j != i)
            .map(move |(j, sb)| PairRelation {
                i,
                j,
                a: &sa.id,
                relation: relate(&sa.polygon, &sb.polygon, cfg),
                b: &sb.id,
            })
    })
}

/// Collecting form of `relate_pairs`.
pub fn relate_all<Id>(shapes: &[Shape<Id>], cfg: GeomCfg) -> Vec<PairRelation<'_, Id>> {
    relate_pairs(shapes, cfg).collect()
}
