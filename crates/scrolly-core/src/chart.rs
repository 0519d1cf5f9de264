// File: crates/scrolly-core/src/chart.rs
// Summary: Chart over wide records; builds a complete scene for an optional highlighted group.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::axis::Axis;
use crate::dataset::{Group, WideRecord};
use crate::error::Result;
use crate::scale::LinearScale;
use crate::scene::{Element, Scene, SeriesLine};
use crate::series::LineSeries;
use crate::theme::{self, Theme};
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};

/// Surface size, margins, tick counts and stroke styling.
///
/// Deserializes from partial JSON; missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Theme preset name, see [`theme::find`].
    pub theme: String,
    /// Requested tick count on the year axis.
    pub x_ticks: usize,
    /// Requested tick count on the value axis.
    pub y_ticks: usize,
    pub neutral_width: f32,
    pub accent_width: f32,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: "light".to_string(),
            x_ticks: 5,
            y_ticks: 10,
            neutral_width: 1.5,
            accent_width: 4.0,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }

    pub fn plot_rect(&self) -> PlotRect {
        PlotRect::from_surface(self.width, self.height, &self.insets)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chart {
    pub records: Vec<WideRecord>,
}

impl Chart {
    pub fn new(records: Vec<WideRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Year scale over the data extent, spanning the plot horizontally.
    pub fn x_scale(&self, plot: &PlotRect) -> Option<LinearScale> {
        LinearScale::from_extent(self.records.iter().map(|r| r.year as f64), (plot.left, plot.right))
    }

    /// Value scale from zero to the largest non-null value, origin at the bottom.
    pub fn y_scale(&self, plot: &PlotRect) -> Option<LinearScale> {
        if self.records.is_empty() {
            return None;
        }
        let max = self
            .records
            .iter()
            .filter_map(WideRecord::max_value)
            .fold(0.0_f64, f64::max);
        Some(LinearScale::new((0.0, max), (plot.bottom, plot.top)))
    }

    /// Build the full frame. `None` when there are no records to draw.
    pub fn scene(&self, highlight: Option<Group>, opts: &RenderOptions) -> Option<Scene> {
        let plot = opts.plot_rect();
        let x = self.x_scale(&plot)?;
        let y = self.y_scale(&plot)?;
        let theme = opts.theme();

        let mut scene = Scene::blank(opts.width, opts.height, theme.background);

        // Highlighted line last so it sits on top of the neutral ones.
        let order = Group::ALL
            .into_iter()
            .filter(|g| Some(*g) != highlight)
            .chain(highlight);
        for group in order {
            let highlighted = Some(group) == highlight;
            let series = LineSeries::from_records(&self.records, group);
            scene.push(Element::Series(SeriesLine {
                group,
                segments: series.segments(&x, &y),
                color: if highlighted { theme.accent_line } else { theme.neutral_line },
                width: if highlighted { opts.accent_width } else { opts.neutral_width },
                highlighted,
            }));
        }

        scene.elements.extend(Axis::bottom(x, opts.x_ticks).elements(&plot, &theme, opts.draw_labels));
        scene.elements.extend(Axis::left(y, opts.y_ticks).elements(&plot, &theme, opts.draw_labels));

        debug!(
            years = self.records.len(),
            highlight = highlight.map(Group::as_str).unwrap_or("none"),
            elements = scene.elements.len(),
            "built scene"
        );
        Some(scene)
    }

    /// Render straight to a PNG file. Writes nothing when there is no data.
    pub fn render_to_png(
        &self,
        highlight: Option<Group>,
        opts: &RenderOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<bool> {
        match self.scene(highlight, opts) {
            Some(scene) => scene.render_to_png(output_png_path).map(|_| true),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_options_keep_defaults() {
        let opts = RenderOptions::from_json(r#"{"theme":"dark","insets":{"left":80}}"#).unwrap();
        assert_eq!(opts.theme().name, "dark");
        assert_eq!(opts.insets, Insets::new(80, 40, 40, 40));
        assert_eq!(opts.width, 500);
        assert_eq!(opts.x_ticks, 5);
    }

    #[test]
    fn y_scale_starts_at_zero() {
        let chart = Chart::new(vec![WideRecord { white: Some(250.0), ..WideRecord::empty(2001) }]);
        let plot = RenderOptions::default().plot_rect();
        let y = chart.y_scale(&plot).unwrap();
        assert_eq!(y.domain, (0.0, 250.0));
        assert_eq!(y.range, (360.0, 40.0));
    }

    #[test]
    fn empty_chart_has_no_scene() {
        assert!(Chart::default().scene(None, &RenderOptions::default()).is_none());
    }
}
