use nalgebra::Vector2;

use super::types::{Axis, Interval, Polygon};

/// Vector from `p1` to `p2`.
#[inline]
pub fn vector(p1: Vector2<f64>, p2: Vector2<f64>) -> Vector2<f64> {
    p2 - p1
}

/// Fixed 90° clockwise rotation `(x, y) ↦ (y, -x)`.
#[inline]
pub fn perpendicular(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(v.y, -v.x)
}

/// Unit vector along `v`; `None` for a zero or non-finite `v`.
#[inline]
pub fn normalize(v: Vector2<f64>) -> Option<Axis> {
    Axis::new(v)
}

#[inline]
pub fn dot(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.dot(&b)
}

/// Edge vectors `v[k] → v[(k+1) % n]`, one per vertex (the last one closes the polygon).
pub fn edges(poly: &Polygon) -> Vec<Vector2<f64>> {
    let verts = poly.vertices();
    verts
        .iter()
        .zip(verts.iter().cycle().skip(1))
        .map(|(p, q)| vector(*p, *q))
        .collect()
}

/// Candidate separating axes: unit normals of every edge of both polygons.
///
/// Parallel axes are kept. Zero edges yield no axis; a `Polygon` never has one.
pub fn axes(edges_a: &[Vector2<f64>], edges_b: &[Vector2<f64>]) -> Vec<Axis> {
    edges_a
        .iter()
        .chain(edges_b)
        .filter_map(|e| normalize(perpendicular(*e)))
        .collect()
}

/// Project `points` onto `axis`, returning the covered interval.
///
/// Pre: `points` is non-empty.
pub fn project(points: &[Vector2<f64>], axis: &Axis) -> Interval {
    let dir = axis.dir();
    let mut it = points.iter().map(|p| dot(*p, dir));
    let first = it.next().unwrap_or(0.0);
    it.fold(Interval::new(first, first), Interval::include)
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order, near-duplicates dropped).
pub fn convex_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}
