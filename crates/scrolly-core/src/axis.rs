// File: crates/scrolly-core/src/axis.rs
// Summary: Axis model (orientation, ticks, label format) and its scene elements.

use crate::grid::precision_for_step;
use crate::scale::LinearScale;
use crate::scene::{Anchor, Element, Label, Rule};
use crate::theme::Theme;
use crate::types::PlotRect;

/// Tick mark length, in pixels, drawn outward from the plot.
pub const TICK_SIZE: f32 = 6.0;
/// Gap between the tick mark's end and its label.
pub const TICK_PADDING: f32 = 3.0;
pub const LABEL_SIZE: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Rounded to a whole number, no grouping (years).
    Integer,
    /// Thousands separators with a fixed number of decimals.
    Grouped { precision: usize },
}

impl TickFormat {
    pub fn format(&self, v: f64) -> String {
        match *self {
            TickFormat::Integer => format!("{}", v.round() as i64),
            TickFormat::Grouped { precision } => format_grouped(v, precision),
        }
    }
}

/// `1234567.5` with precision 1 becomes `1,234,567.5`.
pub fn format_grouped(v: f64, precision: usize) -> String {
    let raw = format!("{:.*}", precision, v.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut out = String::with_capacity(raw.len() + int_part.len() / 3 + 1);
    let negative = v < 0.0 && raw.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: Orient,
    pub scale: LinearScale,
    pub ticks: Vec<f64>,
    pub format: TickFormat,
}

impl Axis {
    /// Year axis under the plot: `count` ticks, whole-number labels.
    pub fn bottom(scale: LinearScale, count: usize) -> Self {
        Self { orient: Orient::Bottom, scale, ticks: scale.ticks(count), format: TickFormat::Integer }
    }

    /// Value axis left of the plot, labels precise enough for the tick step.
    pub fn left(scale: LinearScale, count: usize) -> Self {
        let precision = scale.tick_step(count).map(precision_for_step).unwrap_or(0);
        Self {
            orient: Orient::Left,
            scale,
            ticks: scale.ticks(count),
            format: TickFormat::Grouped { precision },
        }
    }

    pub fn class(&self) -> &'static str {
        match self.orient {
            Orient::Bottom => "axis-x",
            Orient::Left => "axis-y",
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.ticks.iter().map(|&t| self.format.format(t)).collect()
    }

    /// Domain line, tick marks and (optionally) tick labels.
    pub fn elements(&self, plot: &PlotRect, theme: &Theme, draw_labels: bool) -> Vec<Element> {
        let mut out = Vec::with_capacity(1 + self.ticks.len() * 2);
        let domain = match self.orient {
            Orient::Bottom => ((plot.left, plot.bottom), (plot.right, plot.bottom)),
            Orient::Left => ((plot.left, plot.top), (plot.left, plot.bottom)),
        };
        out.push(Element::Rule(Rule {
            class: "domain",
            from: domain.0,
            to: domain.1,
            color: theme.axis_line,
            width: 1.0,
        }));

        for (&t, text) in self.ticks.iter().zip(self.labels()) {
            let p = self.scale.to_px(t);
            let (from, to, at, anchor) = match self.orient {
                Orient::Bottom => (
                    (p, plot.bottom),
                    (p, plot.bottom + TICK_SIZE),
                    (p, plot.bottom + TICK_SIZE + TICK_PADDING + LABEL_SIZE * 0.71),
                    Anchor::Middle,
                ),
                Orient::Left => (
                    (plot.left, p),
                    (plot.left - TICK_SIZE, p),
                    (plot.left - TICK_SIZE - TICK_PADDING, p + LABEL_SIZE * 0.32),
                    Anchor::End,
                ),
            };
            out.push(Element::Rule(Rule { class: "tick", from, to, color: theme.tick, width: 1.0 }));
            if draw_labels {
                out.push(Element::Label(Label {
                    class: self.class(),
                    at,
                    text,
                    anchor,
                    color: theme.axis_label,
                    size: LABEL_SIZE,
                }));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_format() {
        assert_eq!(format_grouped(0.0, 0), "0");
        assert_eq!(format_grouped(20_000.0, 0), "20,000");
        assert_eq!(format_grouped(1_234_567.5, 1), "1,234,567.5");
        assert_eq!(format_grouped(-1500.0, 0), "-1,500");
        assert_eq!(format_grouped(-0.0001, 0), "0");
    }

    #[test]
    fn integer_format_rounds() {
        assert_eq!(TickFormat::Integer.format(2010.0), "2010");
        assert_eq!(TickFormat::Integer.format(2009.6), "2010");
    }

    #[test]
    fn left_axis_precision_follows_step() {
        let y = LinearScale::new((0.0, 1.0), (360.0, 40.0));
        let axis = Axis::left(y, 5);
        assert_eq!(axis.format, TickFormat::Grouped { precision: 1 });
        assert_eq!(axis.labels().first().map(String::as_str), Some("0.0"));
    }
}
