// File: crates/ecoplot-core/tests/field.rs
// Purpose: Validate the direction-field sampler: normalization, the
//          zero-vector guard, the magnitude channel, mesh shape, isoclines.

use ecoplot_core::{competition_rhs, CompetitionParams, DirectionField};

fn symmetric_params() -> CompetitionParams {
    CompetitionParams { r1: 1.0, r2: 1.0, k1: 10.0, k2: 10.0, a21: 0.5, a12: 0.5 }
}

#[test]
fn nonzero_vectors_normalize_to_unit_length() {
    let params = CompetitionParams { r1: 1.4, r2: 0.8, k1: 12.0, k2: 7.0, a21: 0.9, a12: 1.1 };
    let field = DirectionField::sample(competition_rhs, &params, 20);

    for r in 0..20 {
        for c in 0..20 {
            let dx = field.dx.get(r, c);
            let dy = field.dy.get(r, c);
            if field.magnitude.get(r, c) > 0.0 {
                assert!(
                    (dx.hypot(dy) - 1.0).abs() < 1e-9,
                    "non-unit direction at ({r}, {c}): ({dx}, {dy})"
                );
            } else {
                assert_eq!((dx, dy), (0.0, 0.0));
            }
        }
    }
}

#[test]
fn zero_field_stays_exactly_zero() {
    let params = symmetric_params();
    let field = DirectionField::sample(|_, _, _| [0.0, 0.0], &params, 8);

    for r in 0..8 {
        for c in 0..8 {
            assert_eq!(field.dx.get(r, c), 0.0);
            assert_eq!(field.dy.get(r, c), 0.0);
            assert_eq!(field.magnitude.get(r, c), 0.0);
        }
    }
}

#[test]
fn zero_guard_leaves_other_cells_untouched() {
    let params = symmetric_params();
    // Zero vector only at the origin cell.
    let field = DirectionField::sample(
        |_, [x, y], _| if x == 0.0 && y == 0.0 { [0.0, 0.0] } else { [2.0, 0.0] },
        &params,
        4,
    );

    assert_eq!((field.dx.get(0, 0), field.dy.get(0, 0)), (0.0, 0.0));
    assert_eq!(field.magnitude.get(0, 0), 0.0);
    for r in 0..4 {
        for c in 0..4 {
            if (r, c) != (0, 0) {
                assert_eq!((field.dx.get(r, c), field.dy.get(r, c)), (1.0, 0.0));
                assert_eq!(field.magnitude.get(r, c), 2.0);
            }
        }
    }
}

#[test]
fn magnitude_channel_is_raw_speed() {
    let params = symmetric_params();
    let field = DirectionField::sample(|_, _, _| [3.0, 4.0], &params, 6);

    for r in 0..6 {
        for c in 0..6 {
            assert!((field.magnitude.get(r, c) - 5.0).abs() < 1e-12);
            assert!((field.dx.get(r, c) - 0.6).abs() < 1e-12);
            assert!((field.dy.get(r, c) - 0.8).abs() < 1e-12);
        }
    }
}

#[test]
fn mesh_shape_matches_resolution() {
    let params = symmetric_params();
    for n in [1usize, 2, 3, 7, 20] {
        let field = DirectionField::sample(competition_rhs, &params, n);
        assert_eq!(field.nb_points(), n);
        assert_eq!((field.x.rows(), field.x.cols()), (n, n));
        assert_eq!((field.dy.rows(), field.dy.cols()), (n, n));
        if n >= 2 {
            assert_eq!(field.x.get(0, 0), 0.0);
            assert_eq!(field.x.get(0, n - 1), 10.0);
            assert_eq!(field.y.get(0, 0), 0.0);
            assert_eq!(field.y.get(n - 1, 0), 10.0);
        }
    }
}

#[test]
fn negative_carrying_capacity_clamps_bounds() {
    let params = CompetitionParams { r1: 1.0, r2: 1.0, k1: -5.0, k2: 10.0, a21: 0.5, a12: 0.5 };
    assert_eq!(params.sample_bounds(), (0.0, 10.0));
}

#[test]
fn isocline_endpoints() {
    let params = symmetric_params();
    let [a, b] = params.isoclines();
    assert_eq!(a.start, (0.0, 20.0)); // (0, k2/a21)
    assert_eq!(a.end, (10.0, 0.0)); // (k2, 0)
    assert_eq!(b.start, (0.0, 10.0)); // (0, k1)
    assert_eq!(b.end, (20.0, 0.0)); // (k1/a12, 0)

    let params = CompetitionParams { r1: 1.0, r2: 1.0, k1: 6.0, k2: 9.0, a21: 3.0, a12: 2.0 };
    let [a, b] = params.isoclines();
    assert_eq!(a.start, (0.0, 3.0));
    assert_eq!(a.end, (9.0, 0.0));
    assert_eq!(b.start, (0.0, 6.0));
    assert_eq!(b.end, (3.0, 0.0));
}

#[test]
fn display_limits_scale_with_carrying_capacities() {
    let params = symmetric_params();
    let ((x0, x1), (y0, y1)) = params.display_limits();
    assert_eq!(x0, -0.2);
    assert!((x1 - 11.0).abs() < 1e-12);
    assert_eq!(y0, -0.2);
    assert!((y1 - 11.0).abs() < 1e-12);
}

#[test]
fn competition_example_end_to_end() {
    // r1=r2=1, k1=k2=10, a21=a12=0.5, 5 samples per axis: the mesh spans
    // [0, 10] on both axes and the center point (5, 5) has raw growth
    // (1.25, 1.25).
    let params = symmetric_params();
    let field = DirectionField::sample(competition_rhs, &params, 5);

    let xs: Vec<f64> = (0..5).map(|c| field.x.get(0, c)).collect();
    assert_eq!(xs, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    let ys: Vec<f64> = (0..5).map(|r| field.y.get(r, 0)).collect();
    assert_eq!(ys, vec![0.0, 2.5, 5.0, 7.5, 10.0]);

    assert_eq!((field.x.get(2, 2), field.y.get(2, 2)), (5.0, 5.0));
    assert!((field.magnitude.get(2, 2) - 1.7678).abs() < 1e-4);
    assert!((field.dx.get(2, 2) - 0.7071).abs() < 1e-4);
    assert!((field.dy.get(2, 2) - 0.7071).abs() < 1e-4);
}
