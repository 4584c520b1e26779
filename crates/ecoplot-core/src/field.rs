// File: crates/ecoplot-core/src/field.rs
// Summary: Two-species competition model parameters, isoclines, and the
//          normalized direction-field sampler behind the quiver layer.

use log::debug;

use crate::grid::{linspace, meshgrid, Grid2};

/// Default mesh resolution per axis.
pub const DEFAULT_NB_POINTS: usize = 20;

/// Parameters of a two-species competition model.
///
/// `r1`/`r2` are intrinsic growth rates, `k1`/`k2` carrying capacities, and
/// `a21`/`a12` interspecies competition coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompetitionParams {
    pub r1: f64,
    pub r2: f64,
    pub k1: f64,
    pub k2: f64,
    pub a21: f64,
    pub a12: f64,
}

/// A zero-growth line segment, drawn directly rather than sampled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Isocline {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

impl CompetitionParams {
    /// The two display isoclines: one per species in the absence of the other.
    pub fn isoclines(&self) -> [Isocline; 2] {
        [
            Isocline { start: (0.0, self.k2 / self.a21), end: (self.k2, 0.0) },
            Isocline { start: (0.0, self.k1), end: (self.k1 / self.a12, 0.0) },
        ]
    }

    /// Upper corner of the sampling rectangle `[0, xmax] x [0, ymax]`.
    ///
    /// Bounds come straight from the carrying capacities, clamped to be
    /// non-negative; no drawing-surface state is consulted.
    pub fn sample_bounds(&self) -> (f64, f64) {
        (self.k1.max(0.0), self.k2.max(0.0))
    }

    /// Axis limits for the final figure: `[-0.2, 1.1*k]` per species.
    pub fn display_limits(&self) -> ((f64, f64), (f64, f64)) {
        ((-0.2, self.k1 * 1.1), (-0.2, self.k2 * 1.1))
    }
}

/// Standard Lotka-Volterra competition right-hand side.
///
/// The time argument is unused by the model but kept so user-supplied
/// alternatives with time dependence fit the same shape.
pub fn competition_rhs(_t: f64, state: [f64; 2], p: &CompetitionParams) -> [f64; 2] {
    let [x, y] = state;
    [
        p.r1 * x * (1.0 - (x + p.a12 * y) / p.k1),
        p.r2 * y * (1.0 - (y + p.a21 * x) / p.k2),
    ]
}

/// A sampled, normalized direction field over a regular mesh.
///
/// `dx`/`dy` hold unit direction vectors except where the raw field was
/// exactly zero (those stay exactly zero). `magnitude` is the raw growth-rate
/// speed `hypot(dx_raw, dy_raw)` before normalization, for use as a color
/// channel.
#[derive(Clone, Debug)]
pub struct DirectionField {
    pub x: Grid2,
    pub y: Grid2,
    pub dx: Grid2,
    pub dy: Grid2,
    pub magnitude: Grid2,
}

impl DirectionField {
    /// Evaluate `f(0, [x, y], params)` over an `nb_points x nb_points` mesh
    /// and normalize the result.
    ///
    /// Failures inside `f` propagate unchanged; there is no retry or
    /// recovery here.
    pub fn sample<F>(f: F, params: &CompetitionParams, nb_points: usize) -> Self
    where
        F: Fn(f64, [f64; 2], &CompetitionParams) -> [f64; 2],
    {
        let (xmax, ymax) = params.sample_bounds();
        let xs = linspace(0.0, xmax, nb_points);
        let ys = linspace(0.0, ymax, nb_points);
        let (x, y) = meshgrid(&xs, &ys);

        let mut raw_dx = Vec::with_capacity(nb_points * nb_points);
        let mut raw_dy = Vec::with_capacity(nb_points * nb_points);
        for &yv in &ys {
            for &xv in &xs {
                let [dx, dy] = f(0.0, [xv, yv], params);
                raw_dx.push(dx);
                raw_dy.push(dy);
            }
        }
        let raw_dx = Grid2::from_vec(nb_points, nb_points, raw_dx);
        let raw_dy = Grid2::from_vec(nb_points, nb_points, raw_dy);

        let magnitude = raw_dx.zip_map(&raw_dy, f64::hypot);
        // Exact-zero magnitudes divide by 1 instead, so true zero vectors
        // come out exactly (0, 0). The returned magnitude stays raw.
        let dx = raw_dx.zip_map(&magnitude, |d, m| d / if m == 0.0 { 1.0 } else { m });
        let dy = raw_dy.zip_map(&magnitude, |d, m| d / if m == 0.0 { 1.0 } else { m });

        debug!(
            "sampled {nb_points}x{nb_points} direction field over [0, {xmax:.3}] x [0, {ymax:.3}]"
        );
        Self { x, y, dx, dy, magnitude }
    }

    /// Mesh resolution per axis.
    pub fn nb_points(&self) -> usize {
        self.x.rows()
    }
}
