// File: crates/ecoplot-core/tests/extent.rs
// Purpose: Validate autoscaled data extents and the phase-plane limits.

use ecoplot_core::figure::{LatticeLayer, Layer, LineLayer, QuiverLayer};
use ecoplot_core::{
    competition_rhs, CategoryMap, CompetitionParams, DataExtent, DirectionField, Figure, Lattice,
    Palette,
};

fn line(points: Vec<(f64, f64)>) -> Layer {
    Layer::Line(LineLayer {
        points,
        color: skia_safe::Color::from_argb(255, 0, 0, 0),
        width: 1.0,
        alpha: 1.0,
        label: None,
    })
}

#[test]
fn extent_spans_line_points_with_y_margin() {
    let layers = vec![line(vec![(0.0, 1.0), (5.0, 3.0)])];
    let e = DataExtent::from_layers(&layers);
    assert_eq!((e.x_min, e.x_max), (0.0, 5.0));
    assert!(e.y_min <= 1.0 && e.y_min > 0.9);
    assert!(e.y_max >= 3.0 && e.y_max < 3.1);
}

#[test]
fn extent_covers_quiver_mesh() {
    let params = CompetitionParams { r1: 1.0, r2: 1.0, k1: 10.0, k2: 8.0, a21: 0.5, a12: 0.5 };
    let field = DirectionField::sample(competition_rhs, &params, 6);
    let layers = vec![Layer::Quiver(QuiverLayer {
        field,
        cmap: ecoplot_core::Colormap::Grayscale,
        alpha: 1.0,
    })];
    let e = DataExtent::from_layers(&layers);
    assert_eq!((e.x_min, e.x_max), (0.0, 10.0));
    assert!(e.y_min <= 0.0);
    assert!(e.y_max >= 8.0);
}

#[test]
fn extent_covers_lattice_cells() {
    let lattice = Lattice::new(3, 5, vec![1; 15]).unwrap();
    let layers = vec![Layer::Lattice(LatticeLayer {
        lattice,
        categories: CategoryMap::new(["a"], &Palette::opinion()),
    })];
    let e = DataExtent::from_layers(&layers);
    assert_eq!((e.x_min, e.x_max), (0.0, 5.0));
    assert!(e.y_min <= 0.0);
    assert!(e.y_max >= 3.0);
}

#[test]
fn empty_figure_falls_back_to_unit_extent() {
    let e = DataExtent::from_layers(&[]);
    assert_eq!((e.x_min, e.x_max, e.y_min, e.y_max), (0.0, 1.0, 0.0, 1.0));
}

#[test]
fn phase_plane_sets_display_limits() {
    let params = CompetitionParams { r1: 1.0, r2: 1.0, k1: 10.0, k2: 10.0, a21: 0.5, a12: 0.5 };
    let fig = Figure::competition_phase_plane(competition_rhs, &params, 5);

    let (x0, x1) = fig.style.xlims.expect("xlims set");
    let (y0, y1) = fig.style.ylims.expect("ylims set");
    assert_eq!(x0, -0.2);
    assert!((x1 - 11.0).abs() < 1e-12);
    assert_eq!(y0, -0.2);
    assert!((y1 - 11.0).abs() < 1e-12);
    assert!(!fig.style.legend);
    assert_eq!(fig.layers.len(), 3); // two isoclines + quiver
}
