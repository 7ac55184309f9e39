use super::*;
use nalgebra::Vector2;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn field(seed: u64, irr: f64) -> DefectField {
    let mut rng = StdRng::seed_from_u64(seed);
    DefectField::generate(&mut rng, irr, irr, DefectField::DEFAULT_COUNT_RANGE).unwrap()
}

#[test]
fn circle_point_count_and_radius_bound() {
    let irr = 0.07;
    let size = 1.0;
    let defects = field(11, irr);
    let mut rng = StdRng::seed_from_u64(12);
    let contour = build_circle(16, irr, size, &defects, &mut rng).unwrap();
    assert_eq!(contour.len(), 17);

    // Worst case: every defect at full influence plus the per-sample jitter.
    // Smoothing is a convex combination, so it cannot exceed the bound.
    let bound = size * (1.0 + defects.len() as f64 * 1.2 * irr + 0.1 * irr);
    assert!(contour.max_radius() <= bound + 1e-12);
    // Lower bound gets an extra chord factor: the 3-tap average of polar
    // samples 22.5° apart can pull slightly inside the raw radius envelope.
    let chord = 0.5 + 0.5 * (2.0 * std::f64::consts::PI / 16.0).cos();
    let floor = size * (1.0 - defects.len() as f64 * 1.2 * irr - 0.1 * irr) * chord;
    for p in &contour.points {
        assert!(p.norm() >= floor - 1e-12);
    }
}

#[test]
fn circle_smoothing_keeps_endpoints() {
    let defects = field(3, 0.06);
    let mut rng_a = StdRng::seed_from_u64(4);
    let smoothed = build_circle(16, 0.06, 1.0, &defects, &mut rng_a).unwrap();
    // Endpoints of the smoothing pass are the raw polar samples at 0° and
    // 360°: both lie exactly on the x-axis direction.
    assert!(smoothed.points[0].y.abs() < 1e-12);
    assert!(smoothed.points[16].y.abs() < 1e-12);
}

#[test]
fn polygon_point_count_and_corner_angles() {
    let sides = 3;
    let start = 25.0;
    let mut rng = StdRng::seed_from_u64(99);
    let contour = build_polygon(sides, 0.06, 1.0, start, &mut rng).unwrap();
    assert_eq!(contour.len(), sides * 10);

    // Corner perturbation is purely radial, so the first point of each edge
    // group sits exactly on its corner ray.
    for i in 0..sides {
        let corner = contour.points[i * 10];
        let expect = (start + 360.0 * i as f64 / sides as f64).to_radians();
        let got = corner.y.atan2(corner.x);
        let diff = (got - expect).rem_euclid(2.0 * std::f64::consts::PI);
        let diff = diff.min(2.0 * std::f64::consts::PI - diff);
        assert!(diff < 1e-9, "corner {i} off its ray by {diff}");
        let r = corner.norm();
        assert!(r >= 1.0 - 0.2 * 0.06 - 1e-12);
        assert!(r <= 1.0 + 0.2 * 0.06 + 1e-12);
    }
}

#[test]
fn square_zero_irregularity_is_a_clean_rectangle() {
    let mut rng = StdRng::seed_from_u64(5);
    let contour = build_square(0.0, 1.0, &mut rng).unwrap();
    assert_eq!(contour.len(), 40);

    let bl = contour.points[0];
    let br = contour.points[10];
    let tr = contour.points[20];
    let tl = contour.points[30];
    assert!(bl.x < 0.0 && bl.y < 0.0);
    assert!(br.x > 0.0 && br.y < 0.0);
    assert!(tr.x > 0.0 && tr.y > 0.0);
    assert!(tl.x < 0.0 && tl.y > 0.0);
    // Mirror symmetry of the unperturbed corners.
    assert!((br.x + bl.x).abs() < 1e-12 && (br.y - bl.y).abs() < 1e-12);
    assert!((tr.x - br.x).abs() < 1e-12 && (tr.y + br.y).abs() < 1e-12);
    assert!((tl.x - bl.x).abs() < 1e-12 && (tl.y - tr.y).abs() < 1e-12);
    // Width/height scale factors stay in [0.9, 1.1].
    assert!((0.9..=1.1).contains(&br.x) && (0.9..=1.1).contains(&tr.y));
    // With zero irregularity every intermediate lies on the straight edge.
    for j in 1..10 {
        let t = j as f64 / 10.0;
        let on_edge = bl + (br - bl) * t;
        assert!((contour.points[j] - on_edge).norm() < 1e-12);
    }
}

#[test]
fn square_fixed_seed_end_to_end() {
    let irr = 0.06;
    let mut rng = StdRng::seed_from_u64(2024);
    let contour = build_square(irr, 1.0, &mut rng).unwrap();
    assert_eq!(contour.len(), 40);
    // Loose per-axis bound: scale + corner noise + bow + edge noise.
    let bound = 1.1 + irr * 0.2 + irr * 0.3 + irr * 0.1;
    for p in &contour.points {
        assert!(p.x.abs() <= bound && p.y.abs() <= bound);
    }
    // Corner order stays bottom-left, bottom-right, top-right, top-left.
    assert!(contour.points[0].x < 0.0 && contour.points[0].y < 0.0);
    assert!(contour.points[10].x > 0.0 && contour.points[10].y < 0.0);
    assert!(contour.points[20].x > 0.0 && contour.points[20].y > 0.0);
    assert!(contour.points[30].x < 0.0 && contour.points[30].y > 0.0);
}

#[test]
fn builders_are_bit_deterministic() {
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let defects = DefectField::generate(&mut rng, 0.05, 0.07, 3..6).unwrap();
        let c = build_circle(16, 0.06, 1.0, &defects, &mut rng).unwrap();
        let p = build_polygon(3, 0.06, 1.0, 30.0, &mut rng).unwrap();
        let s = build_square(0.06, 1.0, &mut rng).unwrap();
        (c, p, s)
    };
    let (c1, p1, s1) = run(77);
    let (c2, p2, s2) = run(77);
    for (a, b) in [(c1, c2), (p1, p2), (s1, s2)] {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.points.iter().zip(b.points.iter()) {
            assert_eq!(x.x.to_bits(), y.x.to_bits());
            assert_eq!(x.y.to_bits(), y.y.to_bits());
        }
    }
}

#[test]
fn degenerate_params_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let defects = field(1, 0.05);
    assert!(build_circle(0, 0.05, 1.0, &defects, &mut rng).is_err());
    assert!(build_circle(2, 0.05, 1.0, &defects, &mut rng).is_err());
    assert!(build_polygon(2, 0.05, 1.0, 0.0, &mut rng).is_err());
    assert!(build_circle(16, -0.01, 1.0, &defects, &mut rng).is_err());
    assert!(build_polygon(3, 0.05, 0.0, 0.0, &mut rng).is_err());
    assert!(build_square(0.05, f64::NAN, &mut rng).is_err());
    assert!(build_polygon(3, 0.05, 1.0, f64::INFINITY, &mut rng).is_err());
}

#[test]
fn transformed_rotates_then_translates() {
    let contour = Contour {
        points: vec![Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0), Vector2::new(-1.0, 0.0)],
    };
    let moved = contour.transformed(90.0, Vector2::new(0.5, -0.5));
    assert!((moved.points[0] - Vector2::new(0.5, 0.5)).norm() < 1e-12);
    assert!((moved.points[1] - Vector2::new(-0.5, -0.5)).norm() < 1e-12);
}

proptest! {
    #[test]
    fn smoother_laws(xs in prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 0..64)) {
        let pts: Vec<Vector2<f64>> = xs.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
        let out = smooth_polyline(&pts);
        prop_assert_eq!(out.len(), pts.len());
        if pts.len() < 3 {
            prop_assert_eq!(&out, &pts);
        } else {
            prop_assert_eq!(out[0], pts[0]);
            prop_assert_eq!(out[pts.len() - 1], pts[pts.len() - 1]);
            for i in 1..pts.len() - 1 {
                let expect = pts[i - 1] * 0.25 + pts[i] * 0.5 + pts[i + 1] * 0.25;
                prop_assert!((out[i] - expect).norm() < 1e-12);
            }
        }
    }

    #[test]
    fn polygon_count_holds_for_any_valid_sides(sides in 3usize..12, seed in 0u64..1000) {
        let mut rng = StdRng::seed_from_u64(seed);
        let contour = build_polygon(sides, 0.06, 1.0, 10.0, &mut rng).unwrap();
        prop_assert_eq!(contour.len(), sides * 10);
    }
}
