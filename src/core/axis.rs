//! Vertical domain of a comparison plot.

const BASE_PAD_RATIO: f64 = 0.1;
const STEP_PAD_RATIO: f64 = 0.06;
const DEGENERATE_PAD: f64 = 1.0;
/// Fallback padding never drops below this share of the largest magnitude, so
/// it still moves the bounds when unit steps are below float resolution.
const RELATIVE_FALLBACK: f64 = 1e-9;

/// Padding derived from the value range, plus where brackets start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub y_min: f64,
    pub y_max: f64,
    /// Vertical gap between bracket levels.
    pub step_pad: f64,
    /// y of level-0 brackets.
    pub bracket_base: f64,
}

impl AxisDomain {
    pub fn as_array(&self) -> [f64; 2] {
        [self.y_min, self.y_max]
    }

    pub fn bracket_y(&self, level: usize) -> f64 {
        self.bracket_base + level as f64 * self.step_pad
    }
}

/// Finite min/max of an iterator, `None` when it yields nothing finite.
pub fn finite_extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// `values` are observation values and summary means; `ci_extent` is the
/// min/max of the error-bar ends; `max_level` is the highest bracket level.
///
/// Returns `None` when there is nothing finite to draw.
pub fn compute_domain(
    values: impl IntoIterator<Item = f64>,
    ci_extent: Option<(f64, f64)>,
    max_level: Option<usize>,
) -> Option<AxisDomain> {
    let (min_v, max_v) = finite_extent(values)?;

    let (low, high) = match ci_extent {
        Some((ci_lo, ci_hi)) => (min_v.min(ci_lo), max_v.max(ci_hi)),
        None => (min_v, max_v),
    };

    let range = max_v - min_v;
    let base_pad = range * BASE_PAD_RATIO;
    let step_pad = range * STEP_PAD_RATIO;
    // a range too small to move the bounds is as degenerate as a zero range
    let visible = low - base_pad < low && high + base_pad + step_pad > high + base_pad;
    let (base_pad, step_pad) = if range > 0.0 && visible {
        (base_pad, step_pad)
    } else {
        let pad = fallback_pad(low, high);
        (pad, pad)
    };

    let y_min = low - base_pad;
    let bracket_base = high + base_pad;
    let extra_top = max_level.map_or(0.0, |level| (level + 1) as f64 * step_pad);

    Some(AxisDomain {
        y_min,
        y_max: bracket_base + extra_top,
        step_pad,
        bracket_base,
    })
}

fn fallback_pad(low: f64, high: f64) -> f64 {
    DEGENERATE_PAD.max(low.abs().max(high.abs()) * RELATIVE_FALLBACK)
}
