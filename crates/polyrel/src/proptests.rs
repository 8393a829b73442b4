//! Property tests over sampled convex polygons.

use nalgebra::{Matrix2, Vector2};
use proptest::prelude::*;

use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use crate::geom2::{GeomCfg, Polygon};
use crate::pairwise::{relate_all, Shape};
use crate::sat::{relate, Relation};

fn sample(seed: u64, index: u64, cx: f64, cy: f64, radius: f64) -> Polygon {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 9 },
        base_radius: radius,
        center: Vector2::new(cx, cy),
        ..RadialCfg::default()
    };
    draw_polygon_radial(cfg, ReplayToken { seed, index }).expect("sampler yields a polygon")
}

prop_compose! {
    fn polygon_pair()(
        seed in any::<u64>(),
        ax in -3.0..3.0f64, ay in -3.0..3.0f64, ar in 0.2..3.0f64,
        bx in -3.0..3.0f64, by in -3.0..3.0f64, br in 0.2..3.0f64,
    ) -> (Polygon, Polygon) {
        (sample(seed, 0, ax, ay, ar), sample(seed, 1, bx, by, br))
    }
}

fn rotation(theta: f64) -> Matrix2<f64> {
    let (s, c) = theta.sin_cos();
    Matrix2::new(c, -s, s, c)
}

proptest! {
    #[test]
    fn swapped_pair_gives_inverse((a, b) in polygon_pair()) {
        let cfg = GeomCfg::default();
        prop_assert_eq!(relate(&b, &a, cfg), relate(&a, &b, cfg).inverse());
    }

    #[test]
    fn translation_invariance((a, b) in polygon_pair(), tx in -100.0..100.0f64, ty in -100.0..100.0f64) {
        let cfg = GeomCfg::default();
        let t = Vector2::new(tx, ty);
        let a2 = a.map_affine(Matrix2::identity(), t).unwrap();
        let b2 = b.map_affine(Matrix2::identity(), t).unwrap();
        prop_assert_eq!(relate(&a2, &b2, cfg), relate(&a, &b, cfg));
    }

    #[test]
    fn rotation_invariance((a, b) in polygon_pair(), theta in 0.0..std::f64::consts::TAU) {
        let cfg = GeomCfg::default();
        let m = rotation(theta);
        let a2 = a.map_affine(m, Vector2::zeros()).unwrap();
        let b2 = b.map_affine(m, Vector2::zeros()).unwrap();
        prop_assert_eq!(relate(&a2, &b2, cfg), relate(&a, &b, cfg));
    }

    #[test]
    fn shrunk_copy_is_inside((a, _b) in polygon_pair(), s in 0.1..0.9f64) {
        // scale about a vertex-average point, which is interior for a convex polygon
        let verts = a.vertices();
        let c = verts.iter().sum::<Vector2<f64>>() / verts.len() as f64;
        let inner = a.map_affine(Matrix2::identity() * s, c * (1.0 - s)).unwrap();
        let cfg = GeomCfg::default();
        prop_assert_eq!(relate(&a, &inner, cfg), Relation::Surrounds);
        prop_assert_eq!(relate(&inner, &a, cfg), Relation::IsInside);
    }

    #[test]
    fn far_apart_is_separate((a, b) in polygon_pair()) {
        let b_far = b.map_affine(Matrix2::identity(), Vector2::new(50.0, 0.0)).unwrap();
        prop_assert_eq!(relate(&a, &b_far, GeomCfg::default()), Relation::Separate);
    }

    #[test]
    fn driver_matches_single_pair((a, b) in polygon_pair()) {
        let cfg = GeomCfg::default();
        let shapes = vec![Shape::new(0u32, a.clone()), Shape::new(1u32, b.clone())];
        let out = relate_all(&shapes, cfg);
        prop_assert_eq!(out.len(), 2);
        prop_assert_eq!(out[0].relation, relate(&a, &b, cfg));
        prop_assert_eq!(out[1].relation, relate(&b, &a, cfg));
    }
}
