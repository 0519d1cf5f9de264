// File: crates/scrolly-core/src/view.rs
// First-class view state: the records on display, the options they render with, and the current frame.

use tracing::debug;

use crate::chart::{Chart, RenderOptions};
use crate::dataset::{Group, WideRecord};
use crate::error::{Error, Result};
use crate::scene::Scene;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStatus {
    /// The scene was replaced with a fresh frame.
    Drawn,
    /// No records; the previous scene was left as it was.
    Empty,
}

#[derive(Clone, Debug)]
pub struct ChartView {
    chart: Chart,
    options: RenderOptions,
    scene: Scene,
    highlight: Option<Group>,
}

impl ChartView {
    /// A view with no data yet; its scene is blank.
    pub fn new(options: RenderOptions) -> Self {
        let scene = Scene::blank(options.width, options.height, options.theme().background);
        Self { chart: Chart::default(), options, scene, highlight: None }
    }

    pub fn with_records(records: Vec<WideRecord>, options: RenderOptions) -> Self {
        let mut view = Self::new(options);
        view.replace_data(records);
        view
    }

    /// Swap in a new dataset wholesale. The scene is not redrawn until the next [`render`](Self::render).
    pub fn replace_data(&mut self, records: Vec<WideRecord>) {
        debug!(years = records.len(), "replacing view data");
        self.chart = Chart::new(records);
    }

    pub fn records(&self) -> &[WideRecord] {
        &self.chart.records
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Group emphasized by the last successful render.
    pub fn highlight(&self) -> Option<Group> {
        self.highlight
    }

    /// `Err(EmptyDataset)` when there is nothing to draw.
    pub fn ensure_data(&self) -> Result<()> {
        if self.chart.is_empty() {
            Err(Error::EmptyDataset)
        } else {
            Ok(())
        }
    }

    /// Redraw the whole chart with `highlight` emphasized. A no-op without data.
    pub fn render(&mut self, highlight: Option<Group>) -> RenderStatus {
        match self.chart.scene(highlight, &self.options) {
            Some(scene) => {
                self.scene = scene;
                self.highlight = highlight;
                RenderStatus::Drawn
            }
            None => {
                debug!("render skipped, no data");
                RenderStatus::Empty
            }
        }
    }
}
