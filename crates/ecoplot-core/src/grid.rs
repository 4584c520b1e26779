// File: crates/ecoplot-core/src/grid.rs
// Summary: Sampling helpers: linspace, row-major 2D arrays, meshgrid.

/// Evenly spaced values over `[start, end]`, endpoints included.
/// `steps == 0` yields an empty vector and `steps == 1` yields `[start]`,
/// so a caller asking for an `n x n` mesh gets exactly `n` samples per axis.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            // Pin the last sample so the range endpoint is hit exactly.
            out[steps - 1] = end;
            out
        }
    }
}

/// Row-major `rows x cols` array of `f64`.
///
/// Grids are built once and read afterwards; there is no mutation API.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid2 {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid2 {
    /// Wrap an existing row-major buffer. `data.len()` must equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), rows * cols, "grid buffer does not match shape");
        Self { rows, cols, data }
    }

    /// Build a grid by evaluating `f(row, col)` at every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Elementwise combination with another grid of the same shape.
    pub fn zip_map(&self, other: &Grid2, f: impl Fn(f64, f64) -> f64) -> Grid2 {
        debug_assert_eq!((self.rows, self.cols), (other.rows, other.cols));
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Grid2 { rows: self.rows, cols: self.cols, data }
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    /// Largest value in the grid, or 0.0 for an empty grid.
    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(0.0_f64, f64::max)
    }
}

/// Coordinate matrices for a rectangular mesh: `X[r][c] = xs[c]`, `Y[r][c] = ys[r]`.
pub fn meshgrid(xs: &[f64], ys: &[f64]) -> (Grid2, Grid2) {
    let (rows, cols) = (ys.len(), xs.len());
    let x = Grid2::from_fn(rows, cols, |_, c| xs[c]);
    let y = Grid2::from_fn(rows, cols, |r, _| ys[r]);
    (x, y)
}
