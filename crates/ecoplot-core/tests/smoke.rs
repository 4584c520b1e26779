// File: crates/ecoplot-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use ecoplot_core::{competition_rhs, CompetitionParams, Figure, RenderOptions};

#[test]
fn render_smoke_png() {
    let params = CompetitionParams { r1: 1.0, r2: 0.7, k1: 10.0, k2: 12.0, a21: 0.8, a12: 1.2 };
    let mut fig = Figure::competition_phase_plane(competition_rhs, &params, 15);
    fig.style = fig
        .style
        .with_title("Two-species competition")
        .with_xlabel("Species 1")
        .with_ylabel("Species 2");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    fig.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify the in-memory API works
    let bytes = fig.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
