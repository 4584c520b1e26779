// File: crates/ecoplot-core/src/view.rs
// Summary: Data-extent autoscaling across figure layers.

use crate::figure::Layer;

/// Axis-aligned data extent covering every layer in a figure, used when
/// explicit `xlims`/`ylims` are not set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataExtent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataExtent {
    pub fn from_layers(layers: &[Layer]) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for layer in layers {
            match layer {
                Layer::Line(line) => {
                    for &(x, y) in &line.points {
                        x_min = x_min.min(x);
                        x_max = x_max.max(x);
                        y_min = y_min.min(y);
                        y_max = y_max.max(y);
                    }
                }
                Layer::Quiver(q) => {
                    for x in q.field.x.iter() {
                        x_min = x_min.min(x);
                        x_max = x_max.max(x);
                    }
                    for y in q.field.y.iter() {
                        y_min = y_min.min(y);
                        y_max = y_max.max(y);
                    }
                }
                Layer::Lattice(l) => {
                    x_min = x_min.min(0.0);
                    x_max = x_max.max(l.lattice.cols() as f64);
                    y_min = y_min.min(0.0);
                    y_max = y_max.max(l.lattice.rows() as f64);
                }
            }
        }

        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let margin = (y_max - y_min) * 0.02;
        Self { x_min, x_max, y_min: y_min - margin, y_max: y_max + margin }
    }
}
