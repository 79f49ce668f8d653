use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Step the zero-based axis rounds up to. Tuned for metrics with values in
/// the hundreds; coarse for small-valued metrics, kept per observed product
/// behavior.
const NICE_STEP: f64 = 100.0;

/// How a numeric domain is derived from a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainPolicy {
    /// `min`/`max` of the observed values; used by the curve chart.
    TightFit,
    /// `min = 0`, `max` rounded up to a nice boundary; used by the bar chart.
    ZeroBased,
}

/// Closed numeric domain for a value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || max < min {
            return Err(ChartError::InvalidData(
                "domain must be finite with max >= min".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn range(self) -> f64 {
        self.max - self.min
    }
}

/// Derives the value domain for a series under the given policy.
///
/// Fails with `EmptySeries` on empty input and `InvalidData` on non-finite
/// values; a constant series still yields a valid (zero-range) domain, which
/// the layout engines widen themselves.
pub fn compute_domain(series: &[DataPoint], policy: DomainPolicy) -> ChartResult<Domain> {
    if series.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in series {
        if !point.value.is_finite() {
            return Err(ChartError::InvalidData(
                "series values must be finite".to_owned(),
            ));
        }
        min = min.min(point.value);
        max = max.max(point.value);
    }

    match policy {
        DomainPolicy::TightFit => Domain::new(min, max),
        DomainPolicy::ZeroBased => Domain::new(0.0, nice_round_up(max)),
    }
}

/// Produces `count` evenly spaced values from `domain.min` to `domain.max`
/// inclusive; used for gridlines and axis labels.
#[must_use]
pub fn tick_values(domain: Domain, count: usize) -> SmallVec<[f64; 8]> {
    let mut ticks = SmallVec::new();
    if count == 0 {
        return ticks;
    }
    if count == 1 {
        ticks.push(domain.min);
        return ticks;
    }

    let span = domain.range();
    let denominator = (count - 1) as f64;
    for index in 0..count {
        let ratio = (index as f64) / denominator;
        ticks.push(domain.min + span * ratio);
    }
    ticks
}

/// Rounds a maximum up to the next `NICE_STEP` multiple so the axis divides
/// into equal whole-number ticks; an all-zero series gets one full step.
fn nice_round_up(value: f64) -> f64 {
    if value <= 0.0 {
        return NICE_STEP;
    }
    (value / NICE_STEP).ceil() * NICE_STEP
}
