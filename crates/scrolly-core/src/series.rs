// File: crates/scrolly-core/src/series.rs
// Summary: Per-group line series pulled out of wide records; nulls break the line.

use crate::dataset::{Group, WideRecord};
use crate::scale::LinearScale;

#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub group: Group,
    /// `(year, value)` per record; `None` where the group has no value that year.
    pub points: Vec<(f64, Option<f64>)>,
}

impl LineSeries {
    pub fn from_records(records: &[WideRecord], group: Group) -> Self {
        let points = records
            .iter()
            .map(|r| (r.year as f64, r.get(group)))
            .collect();
        Self { group, points }
    }

    /// Pixel runs of consecutive defined points. Nothing is interpolated across a gap.
    pub fn segments(&self, x: &LinearScale, y: &LinearScale) -> Vec<Vec<(f32, f32)>> {
        let mut out = Vec::new();
        let mut run: Vec<(f32, f32)> = Vec::new();
        for &(year, value) in &self.points {
            match value {
                Some(v) => run.push((x.to_px(year), y.to_px(v))),
                None if !run.is_empty() => out.push(std::mem::take(&mut run)),
                None => {}
            }
        }
        if !run.is_empty() {
            out.push(run);
        }
        out
    }
}
