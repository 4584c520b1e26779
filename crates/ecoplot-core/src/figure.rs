// File: crates/ecoplot-core/src/figure.rs
// Summary: Figure model (line/quiver/lattice layers) and headless rendering
//          pipeline using Skia CPU raster surfaces.

use log::debug;
use skia_safe as skia;
use thiserror::Error;

use crate::axis::{AxisStyle, LegendArgs, LegendLoc};
use crate::field::{CompetitionParams, DirectionField};
use crate::geometry::{clamp, RectI32};
use crate::grid::linspace;
use crate::lattice::{CategoryMap, Lattice};
use crate::scale::AxisMapper;
use crate::text::TextShaper;
use crate::theme::{Colormap, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::DataExtent;

#[derive(Debug, Error)]
pub enum FigureError {
    #[error("failed to create raster surface")]
    Surface,
    #[error("failed to encode figure as PNG")]
    Encode,
    #[error("lattice shape mismatch: {rows}x{cols} grid cannot hold {cells} cells")]
    LatticeShape { rows: usize, cols: usize, cells: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Overrides the theme background when set.
    pub background: Option<skia::Color>,
    /// Disable to skip all text (titles, labels, ticks, legend); pixel
    /// output then does not depend on installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: None,
            draw_labels: true,
        }
    }
}

/// Plain line segments/polyline in data coordinates.
#[derive(Clone, Debug)]
pub struct LineLayer {
    pub points: Vec<(f64, f64)>,
    pub color: skia::Color,
    pub width: f32,
    pub alpha: f32,
    pub label: Option<String>,
}

/// A sampled direction field drawn as pivot-mid arrows colored by raw
/// magnitude.
#[derive(Clone, Debug)]
pub struct QuiverLayer {
    pub field: DirectionField,
    pub cmap: Colormap,
    pub alpha: f32,
}

/// A categorical state grid filling its cell rectangles.
#[derive(Clone, Debug)]
pub struct LatticeLayer {
    pub lattice: Lattice,
    pub categories: CategoryMap,
}

#[derive(Clone, Debug)]
pub enum Layer {
    Line(LineLayer),
    Quiver(QuiverLayer),
    Lattice(LatticeLayer),
}

pub struct Figure {
    pub layers: Vec<Layer>,
    pub style: AxisStyle,
    pub theme: Theme,
}

impl Figure {
    pub fn new() -> Self {
        Self { layers: Vec::new(), style: AxisStyle::default(), theme: Theme::light() }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Assemble a competition phase plane: both isoclines, a normalized
    /// quiver field sampled from `f`, and display limits derived from the
    /// carrying capacities. The legend is off; isoclines carry fixed
    /// display colors.
    pub fn competition_phase_plane<F>(f: F, params: &CompetitionParams, nb_points: usize) -> Self
    where
        F: Fn(f64, [f64; 2], &CompetitionParams) -> [f64; 2],
    {
        let [iso_a, iso_b] = params.isoclines();
        let field = DirectionField::sample(f, params, nb_points);
        let (xlims, ylims) = params.display_limits();

        let mut fig = Figure::new();
        fig.style = AxisStyle::new()
            .with_xlims(xlims)
            .with_ylims(ylims)
            .with_legend(false);
        fig.add_layer(Layer::Line(LineLayer {
            points: vec![iso_a.start, iso_a.end],
            color: skia::Color::from_argb(255, 128, 0, 128),
            width: 1.5,
            alpha: 0.5,
            label: None,
        }));
        fig.add_layer(Layer::Line(LineLayer {
            points: vec![iso_b.start, iso_b.end],
            color: skia::Color::from_argb(255, 0, 128, 0),
            width: 1.5,
            alpha: 0.5,
            label: None,
        }));
        fig.add_layer(Layer::Quiver(QuiverLayer { field, cmap: Colormap::Grayscale, alpha: 0.5 }));
        fig
    }

    /// Assemble a lattice figure with its category legend anchored upper
    /// left in an opaque frame.
    pub fn from_lattice(lattice: Lattice, categories: CategoryMap) -> Self {
        let mut fig = Figure::new();
        fig.style = AxisStyle::new().with_legend(true).with_legend_args(LegendArgs {
            loc: LegendLoc::UpperLeft,
            frame: true,
            frame_alpha: 1.0,
        });
        fig.add_layer(Layer::Lattice(LatticeLayer { lattice, categories }));
        fig
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), FigureError> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, FigureError> {
        let mut surface = self.render_to_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(FigureError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer; returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize), FigureError> {
        let mut surface = self.render_to_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = info.min_row_bytes();
        let mut pixels = vec![0u8; info.compute_byte_size(stride)];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(FigureError::Surface);
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn render_to_surface(&self, opts: &RenderOptions) -> Result<skia::Surface, FigureError> {
        let mut surface =
            skia::surfaces::raster_n32_premul((opts.width, opts.height)).ok_or(FigureError::Surface)?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        debug!(
            "rendering {}x{} figure with {} layers",
            opts.width,
            opts.height,
            self.layers.len()
        );
        canvas.clear(opts.background.unwrap_or(self.theme.background));

        let plot = RectI32::from_ltrb(
            opts.insets.left as i32,
            opts.insets.top as i32,
            opts.width - opts.insets.right as i32,
            opts.height - opts.insets.bottom as i32,
        );

        let extent = DataExtent::from_layers(&self.layers);
        let (x_min, x_max) = self.style.xlims.unwrap_or((extent.x_min, extent.x_max));
        let (y_min, y_max) = self.style.ylims.unwrap_or((extent.y_min, extent.y_max));
        let xm = AxisMapper::new(self.style.xscale, x_min, x_max, plot.left as f32, plot.right as f32);
        let ym = AxisMapper::new(self.style.yscale, y_min, y_max, plot.bottom as f32, plot.top as f32);

        // Layers are clipped to the plot area; isoclines may extend past the
        // display limits.
        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32),
            None,
            None,
        );
        for layer in &self.layers {
            match layer {
                Layer::Line(line) => draw_line_layer(canvas, &xm, &ym, line),
                Layer::Quiver(q) => draw_quiver_layer(canvas, &xm, &ym, q, plot),
                Layer::Lattice(l) => draw_lattice_layer(canvas, &xm, &ym, l),
            }
        }
        canvas.restore();

        draw_spines(canvas, plot, &self.theme);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            self.draw_ticks(canvas, &shaper, plot, &xm, &ym, (x_min, x_max), (y_min, y_max));
            self.draw_labels(canvas, &shaper, plot);
            if self.style.legend {
                let entries = collect_legend_entries(&self.layers);
                if !entries.is_empty() {
                    draw_legend(canvas, &shaper, plot, &self.theme, &self.style.legend_args, &entries);
                }
            }
        }
    }

    fn draw_ticks(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        plot: RectI32,
        xm: &AxisMapper,
        ym: &AxisMapper,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) {
        let mut tick_paint = skia::Paint::default();
        tick_paint.set_color(self.theme.tick);
        tick_paint.set_anti_alias(true);
        tick_paint.set_stroke_width(1.0);

        let xticks = self
            .style
            .xticks
            .clone()
            .unwrap_or_else(|| linspace(x_range.0, x_range.1, 6));
        let yticks = self
            .style
            .yticks
            .clone()
            .unwrap_or_else(|| linspace(y_range.0, y_range.1, 6));

        let xargs = &self.style.xticklabels_args;
        for (i, &v) in xticks.iter().enumerate() {
            if v < x_range.0.min(x_range.1) || v > x_range.0.max(x_range.1) {
                continue;
            }
            let px = xm.to_px(v);
            let bottom = plot.bottom as f32;
            canvas.draw_line((px, bottom), (px, bottom + 4.0), &tick_paint);
            let label = tick_label(&self.style.xticklabels, i, v);
            if xargs.rotation == 0.0 {
                shaper.draw_centered(canvas, &label, px, bottom + 6.0 + xargs.size, xargs.size, self.theme.tick_label, true);
            } else {
                shaper.draw_rotated(canvas, &label, px, bottom + 6.0 + xargs.size, xargs.rotation, xargs.size, self.theme.tick_label, true);
            }
        }

        let yargs = &self.style.yticklabels_args;
        for (i, &v) in yticks.iter().enumerate() {
            if v < y_range.0.min(y_range.1) || v > y_range.0.max(y_range.1) {
                continue;
            }
            let py = ym.to_px(v);
            let left = plot.left as f32;
            canvas.draw_line((left - 4.0, py), (left, py), &tick_paint);
            let label = tick_label(&self.style.yticklabels, i, v);
            if yargs.rotation == 0.0 {
                let w = shaper.measure_width(&label, yargs.size, true);
                shaper.draw_left(canvas, &label, left - 8.0 - w, py + yargs.size * 0.35, yargs.size, self.theme.tick_label, true);
            } else {
                shaper.draw_rotated(canvas, &label, left - 8.0, py, yargs.rotation, yargs.size, self.theme.tick_label, true);
            }
        }
    }

    fn draw_labels(&self, canvas: &skia::Canvas, shaper: &TextShaper, plot: RectI32) {
        let cx = (plot.left + plot.right) as f32 * 0.5;
        if let Some(title) = &self.style.title {
            shaper.draw_centered(canvas, title, cx, plot.top as f32 - 14.0, 16.0, self.theme.title, false);
        }
        if let Some(xlabel) = &self.style.xlabel {
            shaper.draw_centered(canvas, xlabel, cx, plot.bottom as f32 + 46.0, 14.0, self.theme.axis_label, false);
        }
        if let Some(ylabel) = &self.style.ylabel {
            let cy = (plot.top + plot.bottom) as f32 * 0.5;
            let w = shaper.measure_width(ylabel, 14.0, false);
            shaper.draw_rotated(canvas, ylabel, plot.left as f32 - 48.0, cy + w * 0.5, -90.0, 14.0, self.theme.axis_label, false);
        }
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn with_alpha(c: skia::Color, alpha: f32) -> skia::Color {
    skia::Color::from_argb((alpha.clamp(0.0, 1.0) * 255.0).round() as u8, c.r(), c.g(), c.b())
}

/// Compact numeric tick label, or the user-supplied override when present.
fn tick_label(overrides: &Option<Vec<String>>, index: usize, v: f64) -> String {
    if let Some(labels) = overrides {
        if let Some(label) = labels.get(index) {
            return label.clone();
        }
    }
    if (v - v.round()).abs() < 1e-9 && v.abs() < 1e9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v:.2}")
    }
}

fn draw_line_layer(canvas: &skia::Canvas, xm: &AxisMapper, ym: &AxisMapper, line: &LineLayer) {
    if line.points.len() < 2 {
        return;
    }
    let mut builder = skia::PathBuilder::new();
    let (x0, y0) = line.points[0];
    builder.move_to((xm.to_px(x0), ym.to_px(y0)));
    for &(x, y) in line.points.iter().skip(1) {
        builder.line_to((xm.to_px(x), ym.to_px(y)));
    }
    let path = builder.detach();

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(line.width);
    stroke.set_color(with_alpha(line.color, line.alpha));
    canvas.draw_path(&path, &stroke);
}

fn draw_quiver_layer(
    canvas: &skia::Canvas,
    xm: &AxisMapper,
    ym: &AxisMapper,
    q: &QuiverLayer,
    plot: RectI32,
) {
    let (rows, cols) = (q.field.x.rows(), q.field.x.cols());
    if rows == 0 || cols == 0 {
        return;
    }
    let m_max = q.field.magnitude.max_value();
    let denom = if m_max > 0.0 { m_max } else { 1.0 };
    // Arrow shafts fill most of a mesh cell.
    let shaft = (plot.width().min(plot.height()) as f32 / rows.max(cols) as f32) * 0.8;

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.2);

    for r in 0..rows {
        for c in 0..cols {
            let dx = q.field.dx.get(r, c);
            let dy = q.field.dy.get(r, c);
            if dx == 0.0 && dy == 0.0 {
                continue;
            }
            let t = clamp((q.field.magnitude.get(r, c) / denom) as f32, 0.0, 1.0);
            paint.set_color(with_alpha(q.cmap.color(t), q.alpha));

            let cx = xm.to_px(q.field.x.get(r, c));
            let cy = ym.to_px(q.field.y.get(r, c));
            // Screen-space direction; pixel y grows downward.
            let (ux, uy) = (dx as f32, -(dy as f32));
            let half = shaft * 0.5;
            let tip = (cx + ux * half, cy + uy * half);
            let tail = (cx - ux * half, cy - uy * half);
            canvas.draw_line(tail, tip, &paint);

            let head = shaft * 0.35;
            for angle in [150.0_f32.to_radians(), -150.0_f32.to_radians()] {
                let (sin, cos) = angle.sin_cos();
                let bx = ux * cos - uy * sin;
                let by = ux * sin + uy * cos;
                canvas.draw_line(tip, (tip.0 + bx * head, tip.1 + by * head), &paint);
            }
        }
    }
}

fn draw_lattice_layer(canvas: &skia::Canvas, xm: &AxisMapper, ym: &AxisMapper, layer: &LatticeLayer) {
    let (rows, cols) = (layer.lattice.rows(), layer.lattice.cols());
    // Crisp cell edges, no interpolation.
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(false);
    paint.set_style(skia::paint::Style::Fill);

    for r in 0..rows {
        for c in 0..cols {
            paint.set_color(layer.categories.color_for(layer.lattice.state(r, c)));
            // Row 0 sits at the top, like an image.
            let x0 = xm.to_px(c as f64);
            let x1 = xm.to_px((c + 1) as f64);
            let ya = ym.to_px((rows - r) as f64);
            let yb = ym.to_px((rows - 1 - r) as f64);
            let rect = skia::Rect::from_ltrb(x0, ya.min(yb), x1, ya.max(yb));
            canvas.draw_rect(rect, &paint);
        }
    }
}

fn draw_spines(canvas: &skia::Canvas, plot: RectI32, theme: &Theme) {
    let mut spine_paint = skia::Paint::default();
    spine_paint.set_color(theme.spine);
    spine_paint.set_anti_alias(true);
    spine_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    // Bottom and left only; top and right spines stay hidden.
    canvas.draw_line((l, b), (r, b), &spine_paint);
    canvas.draw_line((l, t), (l, b), &spine_paint);
}

struct LegendEntry {
    label: String,
    color: skia::Color,
    line_sample: bool,
}

fn collect_legend_entries(layers: &[Layer]) -> Vec<LegendEntry> {
    let mut entries = Vec::new();
    for layer in layers {
        match layer {
            Layer::Line(line) => {
                if let Some(label) = &line.label {
                    entries.push(LegendEntry { label: label.clone(), color: line.color, line_sample: true });
                }
            }
            Layer::Lattice(l) => {
                for (label, color) in l.categories.legend_entries() {
                    entries.push(LegendEntry { label, color, line_sample: false });
                }
            }
            Layer::Quiver(_) => {}
        }
    }
    entries
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: RectI32,
    theme: &Theme,
    args: &LegendArgs,
    entries: &[LegendEntry],
) {
    let size = 12.0_f32;
    let pad = 8.0_f32;
    let swatch = 12.0_f32;
    let gap = 6.0_f32;
    let row_h = 18.0_f32;
    let margin = 10.0_f32;

    let text_w = entries
        .iter()
        .map(|e| shaper.measure_width(&e.label, size, false))
        .fold(0.0_f32, f32::max);
    let w = pad * 2.0 + swatch + gap + text_w;
    let h = pad * 2.0 + row_h * entries.len() as f32;

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let (x0, y0) = match args.loc {
        LegendLoc::UpperLeft => (l + margin, t + margin),
        LegendLoc::UpperRight => (r - margin - w, t + margin),
        LegendLoc::LowerLeft => (l + margin, b - margin - h),
        LegendLoc::LowerRight => (r - margin - w, b - margin - h),
    };

    if args.frame {
        let frame = skia::Rect::from_xywh(x0, y0, w, h);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(with_alpha(theme.legend_frame, args.frame_alpha));
        canvas.draw_rect(frame, &fill);

        let mut edge = skia::Paint::default();
        edge.set_anti_alias(true);
        edge.set_style(skia::paint::Style::Stroke);
        edge.set_stroke_width(1.0);
        edge.set_color(theme.legend_edge);
        canvas.draw_rect(frame, &edge);
    }

    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_stroke_width(1.0);
    edge.set_color(skia::Color::from_argb(255, 0, 0, 0));

    for (i, entry) in entries.iter().enumerate() {
        let ey = y0 + pad + i as f32 * row_h;
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(entry.color);
        if entry.line_sample {
            fill.set_style(skia::paint::Style::Stroke);
            fill.set_stroke_width(2.0);
            let mid = ey + swatch * 0.5;
            canvas.draw_line((x0 + pad, mid), (x0 + pad + swatch, mid), &fill);
        } else {
            fill.set_style(skia::paint::Style::Fill);
            let rect = skia::Rect::from_xywh(x0 + pad, ey, swatch, swatch);
            canvas.draw_rect(rect, &fill);
            canvas.draw_rect(rect, &edge);
        }
        shaper.draw_left(canvas, &entry.label, x0 + pad + swatch + gap, ey + size * 0.8, size, theme.axis_label, false);
    }
}
