// File: crates/scrolly-core/src/observer.rs
// Summary: Viewport intersection entries turned into step events, and the driver that redraws on them.
// Notes:
// - A step fires when its section's visible ratio rises across the threshold.
// - Events are handled one at a time, in delivery order; there is no debouncing.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::chart::RenderOptions;
use crate::dataset::{load_wide, WideRecord};
use crate::error::Result;
use crate::scene::Scene;
use crate::steps::{Section, Step, SECTIONS};
use crate::view::{ChartView, RenderStatus};

/// Fraction of a section that must be visible before its step activates.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// One intersection report for an observed section.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry {
    /// The section's `data-step` attribute.
    pub target: String,
    /// Visible fraction of the section, in `[0, 1]`.
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<String>, ratio: f64) -> Self {
        Self { target: target.into(), ratio }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepEvent {
    pub step: Step,
    /// Position of this event in the observer's output, starting at 0.
    pub seq: u64,
}

#[derive(Clone, Debug)]
pub struct StepObserver {
    threshold: f64,
    last_ratio: BTreeMap<Step, f64>,
    next_seq: u64,
}

impl StepObserver {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, last_ratio: BTreeMap::new(), next_seq: 0 }
    }

    /// Observer watching every given section at the default threshold.
    pub fn for_sections(sections: &[Section]) -> Self {
        let mut obs = Self::new(VISIBILITY_THRESHOLD);
        for s in sections {
            obs.observe(s.step);
        }
        obs
    }

    pub fn observe(&mut self, step: Step) {
        self.last_ratio.entry(step).or_insert(0.0);
    }

    pub fn is_observing(&self, step: Step) -> bool {
        self.last_ratio.contains_key(&step)
    }

    /// Record an entry; returns the step event it triggers, if any.
    pub fn notify(&mut self, entry: &IntersectionEntry) -> Option<StepEvent> {
        let step = match entry.target.parse::<Step>() {
            Ok(step) if self.is_observing(step) => step,
            _ => {
                warn!(target_id = %entry.target, "intersection for unobserved section ignored");
                return None;
            }
        };

        if !entry.ratio.is_finite() {
            warn!(step = %step, ratio = entry.ratio, "non-finite visibility ratio ignored");
            return None;
        }
        let ratio = entry.ratio.clamp(0.0, 1.0);
        let prev = self.last_ratio.insert(step, ratio).unwrap_or(0.0);
        if prev < self.threshold && ratio >= self.threshold {
            let event = StepEvent { step, seq: self.next_seq };
            self.next_seq += 1;
            Some(event)
        } else {
            None
        }
    }
}

impl Default for StepObserver {
    fn default() -> Self {
        Self::for_sections(&SECTIONS)
    }
}

/// Owns the view and its observer; every step event triggers a full redraw.
#[derive(Clone, Debug)]
pub struct ScrollDriver {
    view: ChartView,
    observer: StepObserver,
}

impl ScrollDriver {
    pub fn new(view: ChartView, observer: StepObserver) -> Self {
        Self { view, observer }
    }

    /// Initial frame with no highlight, then start watching every section.
    pub fn start(records: Vec<WideRecord>, options: RenderOptions) -> Self {
        let mut view = ChartView::with_records(records, options);
        let status = view.render(None);
        debug!(?status, "initial render");
        Self::new(view, StepObserver::default())
    }

    /// Load the dataset document and start. Fails only on a malformed document.
    pub fn from_json(json: &str, options: RenderOptions) -> Result<Self> {
        Ok(Self::start(load_wide(json)?, options))
    }

    pub fn view(&self) -> &ChartView {
        &self.view
    }

    pub fn observer(&self) -> &StepObserver {
        &self.observer
    }

    pub fn into_view(self) -> ChartView {
        self.view
    }

    /// Redraw for one step.
    pub fn dispatch(&mut self, event: StepEvent) -> RenderStatus {
        let highlight = event.step.highlight();
        let status = self.view.render(highlight);
        debug!(step = %event.step, seq = event.seq, ?status, "step dispatched");
        status
    }

    /// Feed intersection entries in order. Each drawn frame goes to `sink`;
    /// returns how many frames were drawn.
    pub fn feed<I, F, E>(&mut self, entries: I, mut sink: F) -> std::result::Result<usize, E>
    where
        I: IntoIterator<Item = IntersectionEntry>,
        F: FnMut(&StepEvent, &Scene) -> std::result::Result<(), E>,
    {
        let mut drawn = 0;
        for entry in entries {
            let Some(event) = self.observer.notify(&entry) else { continue };
            if self.dispatch(event) == RenderStatus::Drawn {
                sink(&event, self.view.scene())?;
                drawn += 1;
            }
        }
        Ok(drawn)
    }
}
