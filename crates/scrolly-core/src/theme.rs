// File: crates/scrolly-core/src/theme.rs
// Summary: Light/Dark theming for chart colors, including the neutral and accent line strokes.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    /// Stroke for every series that is not highlighted.
    pub neutral_line: skia::Color,
    /// Stroke for the highlighted series.
    pub accent_line: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            neutral_line: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            accent_line: skia::Color::from_argb(255, 0xe4, 0x57, 0x2e),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            neutral_line: skia::Color::from_argb(255, 0x55, 0x55, 0x5c),
            accent_line: skia::Color::from_argb(255, 0xff, 0x8a, 0x3d),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}

/// `#rrggbb` form of a color, as used in SVG attributes. Alpha is dropped.
pub fn hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}
