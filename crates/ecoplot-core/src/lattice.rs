// File: crates/ecoplot-core/src/lattice.rs
// Summary: Categorical agent-state grid and its discrete color/legend mapping.

use skia_safe as skia;

use crate::figure::FigureError;
use crate::theme::{empty_cell_color, Palette};

/// A `rows x cols` grid of small integer state codes.
///
/// State 0 means an empty cell; states 1.. are categories. The grid is
/// immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    rows: usize,
    cols: usize,
    states: Vec<u16>,
}

impl Lattice {
    /// Wrap a row-major state buffer; fails when the buffer does not fill
    /// the stated shape.
    pub fn new(rows: usize, cols: usize, states: Vec<u16>) -> Result<Self, FigureError> {
        if states.len() != rows * cols {
            return Err(FigureError::LatticeShape { rows, cols, cells: states.len() });
        }
        Ok(Self { rows, cols, states })
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    #[inline]
    pub fn state(&self, row: usize, col: usize) -> u16 {
        self.states[row * self.cols + col]
    }

    /// True when any cell is empty (state 0).
    pub fn has_empty_cells(&self) -> bool {
        self.states.iter().any(|&s| s == 0)
    }
}

/// Ordered category labels with their colors, drawn from a `Palette`.
///
/// State code `s >= 1` maps to category `s - 1`; state 0 always renders in
/// the neutral empty-cell color.
#[derive(Clone, Debug)]
pub struct CategoryMap {
    labels: Vec<String>,
    colors: Vec<skia::Color>,
}

impl CategoryMap {
    pub fn new<I, S>(labels: I, palette: &Palette) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let colors = (0..labels.len()).map(|i| palette.color(i)).collect();
        Self { labels, colors }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Fill color for a state code.
    pub fn color_for(&self, state: u16) -> skia::Color {
        if state == 0 || self.colors.is_empty() {
            empty_cell_color()
        } else {
            self.colors[(state as usize - 1) % self.colors.len()]
        }
    }

    /// One `(label, color)` pair per category, in declaration order. Every
    /// category appears whether or not its state occurs in the lattice.
    pub fn legend_entries(&self) -> Vec<(String, skia::Color)> {
        self.labels
            .iter()
            .cloned()
            .zip(self.colors.iter().copied())
            .collect()
    }
}
