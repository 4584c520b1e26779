// File: crates/ecoplot-core/src/axis.rs
// Summary: Axis styling record: titles, labels, scales, limits, ticks, legend.

use crate::scale::ScaleKind;

/// Legend placement inside the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendLoc {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Legend presentation options.
#[derive(Clone, Debug)]
pub struct LegendArgs {
    pub loc: LegendLoc,
    pub frame: bool,
    pub frame_alpha: f32,
}

impl Default for LegendArgs {
    fn default() -> Self {
        Self { loc: LegendLoc::UpperRight, frame: false, frame_alpha: 1.0 }
    }
}

/// Tick-label presentation options.
#[derive(Clone, Debug)]
pub struct TickLabelArgs {
    pub size: f32,
    /// Rotation in degrees, counter-clockwise.
    pub rotation: f32,
}

impl Default for TickLabelArgs {
    fn default() -> Self {
        Self { size: 12.0, rotation: 0.0 }
    }
}

/// Cosmetic axis configuration applied when a figure is rendered.
///
/// Unset options fall back to renderer defaults: autoscaled limits,
/// evenly spaced ticks with formatted numeric labels. Top and right
/// spines are never drawn.
#[derive(Clone, Debug)]
pub struct AxisStyle {
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub xscale: ScaleKind,
    pub yscale: ScaleKind,
    pub xlims: Option<(f64, f64)>,
    pub ylims: Option<(f64, f64)>,
    pub xticks: Option<Vec<f64>>,
    pub yticks: Option<Vec<f64>>,
    pub xticklabels: Option<Vec<String>>,
    pub yticklabels: Option<Vec<String>>,
    pub legend: bool,
    pub legend_args: LegendArgs,
    pub xticklabels_args: TickLabelArgs,
    pub yticklabels_args: TickLabelArgs,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            title: None,
            xlabel: None,
            ylabel: None,
            xscale: ScaleKind::Linear,
            yscale: ScaleKind::Linear,
            xlims: None,
            ylims: None,
            xticks: None,
            yticks: None,
            xticklabels: None,
            yticklabels: None,
            legend: true,
            legend_args: LegendArgs::default(),
            xticklabels_args: TickLabelArgs::default(),
            yticklabels_args: TickLabelArgs::default(),
        }
    }
}

impl AxisStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_xlabel(mut self, label: impl Into<String>) -> Self {
        self.xlabel = Some(label.into());
        self
    }

    pub fn with_ylabel(mut self, label: impl Into<String>) -> Self {
        self.ylabel = Some(label.into());
        self
    }

    pub fn with_xscale(mut self, kind: ScaleKind) -> Self {
        self.xscale = kind;
        self
    }

    pub fn with_yscale(mut self, kind: ScaleKind) -> Self {
        self.yscale = kind;
        self
    }

    pub fn with_xlims(mut self, lims: (f64, f64)) -> Self {
        self.xlims = Some(lims);
        self
    }

    pub fn with_ylims(mut self, lims: (f64, f64)) -> Self {
        self.ylims = Some(lims);
        self
    }

    pub fn with_xticks(mut self, ticks: Vec<f64>) -> Self {
        self.xticks = Some(ticks);
        self
    }

    pub fn with_yticks(mut self, ticks: Vec<f64>) -> Self {
        self.yticks = Some(ticks);
        self
    }

    pub fn with_xticklabels(mut self, labels: Vec<String>) -> Self {
        self.xticklabels = Some(labels);
        self
    }

    pub fn with_yticklabels(mut self, labels: Vec<String>) -> Self {
        self.yticklabels = Some(labels);
        self
    }

    pub fn with_legend(mut self, on: bool) -> Self {
        self.legend = on;
        self
    }

    pub fn with_legend_args(mut self, args: LegendArgs) -> Self {
        self.legend_args = args;
        self
    }
}
