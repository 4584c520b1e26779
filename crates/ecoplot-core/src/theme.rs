// File: crates/ecoplot-core/src/theme.rs
// Summary: Render themes, categorical palettes, and magnitude colormaps.
//          All color state is explicit values handed to the figure.

use skia_safe as skia;

fn rgb(r: u8, g: u8, b: u8) -> skia::Color {
    skia::Color::from_argb(255, r, g, b)
}

/// Chrome colors for a rendered figure.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub spine: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub legend_frame: skia::Color,
    pub legend_edge: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: rgb(255, 255, 255),
            spine: rgb(60, 60, 70),
            tick: rgb(100, 100, 110),
            tick_label: rgb(69, 69, 69),
            axis_label: rgb(69, 69, 69),
            title: rgb(20, 20, 30),
            legend_frame: rgb(250, 250, 252),
            legend_edge: rgb(60, 60, 70),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: rgb(18, 18, 20),
            spine: rgb(180, 180, 190),
            tick: rgb(150, 150, 160),
            tick_label: rgb(200, 200, 210),
            axis_label: rgb(210, 210, 220),
            title: rgb(235, 235, 245),
            legend_frame: rgb(30, 30, 34),
            legend_edge: rgb(180, 180, 190),
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}

/// Neutral fill for empty lattice cells (state 0).
pub fn empty_cell_color() -> skia::Color {
    rgb(0xEE, 0xEE, 0xEE)
}

/// An ordered list of categorical colors.
#[derive(Clone, Debug)]
pub struct Palette {
    pub name: &'static str,
    pub colors: Vec<skia::Color>,
}

impl Palette {
    /// Epidemic-compartment palette: susceptible, infected, recovered.
    pub fn sir() -> Self {
        Self {
            name: "sir",
            colors: vec![rgb(0xBF, 0x99, 0x37), rgb(0x7D, 0x2E, 0x2B), rgb(0x33, 0x62, 0x59)],
        }
    }

    /// Six-step palette used for opinion lattices.
    pub fn opinion() -> Self {
        Self {
            name: "opinion",
            colors: vec![
                rgb(0x30, 0x4B, 0x58),
                rgb(0x5B, 0x95, 0x8D),
                rgb(0xF3, 0xE0, 0x8D),
                rgb(0xEC, 0xAD, 0x74),
                rgb(0xC1, 0x6E, 0x54),
                rgb(0x84, 0x2D, 0x2D),
            ],
        }
    }

    /// Color for `index`, cycling past the end of the palette.
    pub fn color(&self, index: usize) -> skia::Color {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Continuous map from a normalized value in `[0, 1]` to a color, used to
/// encode growth-rate magnitude on quiver arrows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colormap {
    /// Black at 0 up to white at 1.
    Grayscale,
    /// Black through red to yellow.
    Heat,
}

impl Colormap {
    pub fn color(&self, t: f32) -> skia::Color {
        let t = t.clamp(0.0, 1.0);
        match self {
            Colormap::Grayscale => {
                let v = (t * 255.0).round() as u8;
                rgb(v, v, v)
            }
            Colormap::Heat => {
                if t < 0.5 {
                    let v = (t * 2.0 * 255.0).round() as u8;
                    rgb(v, 0, 0)
                } else {
                    let v = ((t - 0.5) * 2.0 * 255.0).round() as u8;
                    rgb(255, v, 0)
                }
            }
        }
    }
}
