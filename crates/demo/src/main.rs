// File: crates/demo/src/main.rs
// Summary: Demo renders a two-species competition phase plane and an opinion
//          lattice to PNGs; the lattice grid can come from a CSV file.

use anyhow::{Context, Result};
use ecoplot_core::{
    competition_rhs, CategoryMap, CompetitionParams, Figure, Lattice, Palette, RenderOptions,
    DEFAULT_NB_POINTS,
};
use log::info;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = PathBuf::from("target/out");
    let opts = RenderOptions::default();
    // Optional second arg picks a theme preset by name.
    let theme = ecoplot_core::theme::find(&std::env::args().nth(2).unwrap_or_default());

    // 1) Competition phase plane
    let params = CompetitionParams { r1: 1.0, r2: 0.72, k1: 10.0, k2: 14.0, a21: 0.9, a12: 1.3 };
    let mut fig =
        Figure::competition_phase_plane(competition_rhs, &params, DEFAULT_NB_POINTS).with_theme(theme);
    fig.style = fig
        .style
        .with_title("Two-species competition")
        .with_xlabel("Species 1")
        .with_ylabel("Species 2");

    let out = out_dir.join("phase_plane.png");
    fig.render_to_png(&opts, &out)
        .with_context(|| format!("rendering {}", out.display()))?;
    println!("Wrote {}", out.display());

    // 2) Opinion lattice, from a CSV of state codes when one is given
    let lattice = match std::env::args().nth(1) {
        Some(path) => {
            let path = Path::new(&path);
            let lattice = load_lattice_csv(path)
                .with_context(|| format!("failed to load lattice CSV '{}'", path.display()))?;
            info!("loaded {}x{} lattice from {}", lattice.rows(), lattice.cols(), path.display());
            lattice
        }
        None => sample_lattice(),
    };

    let categories = CategoryMap::new(
        ["strongly against", "against", "neutral", "leaning for", "for", "strongly for"],
        &Palette::opinion(),
    );
    let mut lattice_fig = Figure::from_lattice(lattice, categories).with_theme(theme);
    lattice_fig.style = lattice_fig.style.with_title("Opinion lattice");

    let out = out_dir.join("lattice.png");
    lattice_fig
        .render_to_png(&opts, &out)
        .with_context(|| format!("rendering {}", out.display()))?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Load a headerless CSV of integer state codes, one lattice row per record.
fn load_lattice_csv(path: &Path) -> Result<Lattice> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut states = Vec::new();
    let mut cols = 0usize;
    let mut rows = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        if rows == 0 {
            cols = rec.len();
        } else if rec.len() != cols {
            anyhow::bail!("row {} has {} cells, expected {}", rows + 1, rec.len(), cols);
        }
        for cell in rec.iter() {
            let state: u16 = cell
                .trim()
                .parse()
                .with_context(|| format!("invalid state code '{}'", cell.trim()))?;
            states.push(state);
        }
        rows += 1;
    }
    Ok(Lattice::new(rows, cols, states)?)
}

/// Deterministic fallback pattern: banded opinions with scattered empty cells.
fn sample_lattice() -> Lattice {
    let (rows, cols) = (40, 40);
    let mut states = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let state = if (r + c) % 11 == 0 {
                0
            } else {
                ((r / 7 + c / 5) % 6 + 1) as u16
            };
            states.push(state);
        }
    }
    Lattice::new(rows, cols, states).expect("shape is consistent by construction")
}
