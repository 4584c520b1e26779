// File: crates/ecoplot-core/src/lib.rs
// Summary: Core library entry point; exports the public API for sampling
//          direction fields and rendering population-dynamics figures.

pub mod axis;
pub mod field;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod lattice;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{AxisStyle, LegendArgs, LegendLoc, TickLabelArgs};
pub use field::{competition_rhs, CompetitionParams, DirectionField, Isocline, DEFAULT_NB_POINTS};
pub use figure::{Figure, FigureError, Layer, LatticeLayer, LineLayer, QuiverLayer, RenderOptions};
pub use grid::{linspace, meshgrid, Grid2};
pub use lattice::{CategoryMap, Lattice};
pub use scale::{AxisMapper, ScaleKind};
pub use text::TextShaper;
pub use theme::{Colormap, Palette, Theme};
pub use view::DataExtent;
