// File: crates/scrolly-core/src/scale.rs
// Summary: Linear data-to-pixel scale used for both the year (X) and value (Y) axes.

use crate::grid::{nice_ticks, tick_step};

/// Linear mapping from a data domain onto a pixel range.
///
/// The range may be inverted (`range.0 > range.1`), which is how the value
/// axis puts its origin at the bottom of the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Scale over the smallest and largest of `values`, or `None` when empty.
    pub fn from_extent(values: impl IntoIterator<Item = f64>, range: (f32, f32)) -> Option<Self> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        (lo.is_finite() && hi.is_finite()).then(|| Self::new((lo, hi), range))
    }

    /// Data value to pixel. A zero-width domain maps everything to the middle of the range.
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 || !span.is_finite() { 0.5 } else { (v - d0) / span };
        r0 + (t as f32) * (r1 - r0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }

    pub fn tick_step(&self, count: usize) -> Option<f64> {
        tick_step(self.domain.0, self.domain.1, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_years_across_plot() {
        let x = LinearScale::new((2007.0, 2019.0), (60.0, 460.0));
        assert_eq!(x.to_px(2007.0), 60.0);
        assert_eq!(x.to_px(2019.0), 460.0);
        assert!((x.to_px(2013.0) - 260.0).abs() < 1e-4);
    }

    #[test]
    fn inverted_value_range_puts_zero_at_bottom() {
        let y = LinearScale::new((0.0, 100.0), (360.0, 40.0));
        assert_eq!(y.to_px(0.0), 360.0);
        assert_eq!(y.to_px(100.0), 40.0);
        assert_eq!(y.to_px(50.0), 200.0);
    }

    #[test]
    fn zero_width_domain_maps_to_midpoint() {
        let x = LinearScale::new((2010.0, 2010.0), (60.0, 460.0));
        assert_eq!(x.to_px(2010.0), 260.0);
    }

    #[test]
    fn extent_of_nothing_is_none() {
        assert!(LinearScale::from_extent(std::iter::empty(), (0.0, 1.0)).is_none());
        let s = LinearScale::from_extent([3.0, -1.0, 7.0], (0.0, 1.0)).unwrap();
        assert_eq!(s.domain, (-1.0, 7.0));
    }
}
