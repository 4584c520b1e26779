// File: crates/ecoplot-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use ecoplot_core::{CategoryMap, Figure, Lattice, Palette, RenderOptions};

#[test]
fn render_rgba8_buffer() {
    let lattice = Lattice::new(4, 4, vec![0, 1, 2, 3, 1, 1, 2, 2, 3, 3, 0, 0, 1, 2, 3, 1]).unwrap();
    let categories = CategoryMap::new(["undecided", "agree", "disagree"], &Palette::opinion());
    let fig = Figure::from_lattice(lattice, categories);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = fig.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background alpha in the top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);
}

#[test]
fn decoded_png_matches_requested_size() {
    let lattice = Lattice::new(2, 2, vec![1, 2, 2, 1]).unwrap();
    let categories = CategoryMap::new(["S", "I"], &Palette::sir());
    let fig = Figure::from_lattice(lattice, categories);

    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 240;
    opts.draw_labels = false;
    let bytes = fig.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (320, 240));
}
