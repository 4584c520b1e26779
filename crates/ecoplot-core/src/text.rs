// File: crates/ecoplot-core/src/text.rs
// Summary: Text shaping/drawing via Skia textlayout; sans labels, mono ticks.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, mono_numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if mono_numeric {
            // Tabular digits keep tick columns aligned.
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool) -> Paragraph {
        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, mono_numeric));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, mono_numeric: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), mono_numeric);
        p.longest_line()
    }

    /// Draw with `(x, y)` as an approximate left baseline.
    pub fn draw_left(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        mono_numeric: bool,
    ) {
        let mut p = self.layout(text, size, color, mono_numeric);
        // Paragraphs paint from the top-left corner; shift up to the baseline.
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw horizontally centered on `cx`, with `y` as the baseline.
    pub fn draw_centered(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        cx: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        mono_numeric: bool,
    ) {
        let w = self.measure_width(text, size, mono_numeric);
        self.draw_left(canvas, text, cx - w * 0.5, y, size, color, mono_numeric);
    }

    /// Draw rotated by `degrees` about the anchor `(x, y)`.
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        degrees: f32,
        size: f32,
        color: skia::Color,
        mono_numeric: bool,
    ) {
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(degrees, None);
        self.draw_left(canvas, text, 0.0, 0.0, size, color, mono_numeric);
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
