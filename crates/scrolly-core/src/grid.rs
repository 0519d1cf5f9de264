// File: crates/scrolly-core/src/grid.rs
// Summary: Tick layout helpers: "nice" tick values, their spacing, and label precision.

/// Integer bounds and increment of nice ticks over `[start, stop]` (start <= stop).
/// A negative increment means "divide by -inc", which keeps fractional steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round() as i64;
        i2 = (stop * k).round() as i64;
        if (i1 as f64) / k < start { i1 += 1; }
        if (i2 as f64) / k > stop { i2 -= 1; }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round() as i64;
        i2 = (stop / k).round() as i64;
        if (i1 as f64) * k < start { i1 += 1; }
        if (i2 as f64) * k > stop { i2 -= 1; }
        inc = k;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if !inc.is_finite() || inc == 0.0 {
        return None;
    }
    Some((i1, i2, inc))
}

/// Roughly `count` round tick values spanning `[start, stop]`, ascending.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (a, b) = if stop < start { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(a, b, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }
    (i1..=i2)
        .map(|i| if inc < 0.0 { i as f64 / -inc } else { i as f64 * inc })
        .collect()
}

/// Distance between consecutive ticks produced by [`nice_ticks`].
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let (a, b) = if stop < start { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_spec(a, b, count as f64)?;
    Some(if inc < 0.0 { 1.0 / -inc } else { inc })
}

/// Decimal places needed to tell ticks `step` apart.
pub fn precision_for_step(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_over_years() {
        assert_eq!(nice_ticks(2007.0, 2019.0, 5), vec![2008.0, 2010.0, 2012.0, 2014.0, 2016.0, 2018.0]);
    }

    #[test]
    fn ticks_over_values() {
        let t = nice_ticks(0.0, 183_000.0, 10);
        assert_eq!(t.first(), Some(&0.0));
        assert_eq!(t.last(), Some(&180_000.0));
        assert_eq!(tick_step(0.0, 183_000.0, 10), Some(20_000.0));
    }

    #[test]
    fn fractional_ticks_are_exact() {
        assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(precision_for_step(0.2), 1);
        assert_eq!(precision_for_step(20_000.0), 0);
    }

    #[test]
    fn degenerate_domains() {
        assert_eq!(nice_ticks(3.0, 3.0, 10), vec![3.0]);
        assert!(nice_ticks(f64::NAN, 1.0, 10).is_empty());
        assert!(nice_ticks(0.0, 1.0, 0).is_empty());
    }
}
