use serde::{Deserialize, Serialize};

use crate::core::scale::Domain;
use crate::core::types::{CanvasBox, DataPoint};
use crate::error::{ChartError, ChartResult};

/// Tuning for bar sizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarStyle {
    /// Fraction of the segment column the visible bar occupies.
    pub width_ratio: f64,
    /// Floor so zero and near-zero values stay visible and tappable.
    pub min_visible_height: f64,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            width_ratio: 0.5,
            min_visible_height: 2.0,
        }
    }
}

impl BarStyle {
    pub fn validate(self) -> ChartResult<()> {
        if !self.width_ratio.is_finite() || self.width_ratio <= 0.0 || self.width_ratio > 1.0 {
            return Err(ChartError::InvalidData(
                "bar width ratio must be finite and in (0, 1]".to_owned(),
            ));
        }
        if !self.min_visible_height.is_finite() || self.min_visible_height < 0.0 {
            return Err(ChartError::InvalidData(
                "bar minimum visible height must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One bar rectangle in pixel space, index-aligned with the input series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub label: String,
    pub value: f64,
}

/// Renderable output of the bar layout plus the segment model used for
/// hit-testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartGeometry {
    bars: Vec<Bar>,
    segment_width: f64,
}

impl BarChartGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bars: Vec::new(),
            segment_width: 0.0,
        }
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    #[must_use]
    pub fn segment_width(&self) -> f64 {
        self.segment_width
    }

    /// Index of the bar whose full segment column contains `x`, or `None`
    /// outside the chart. Hit-testing the whole column, not just the visible
    /// bar width, keeps taps forgiving.
    #[must_use]
    pub fn hit_test(&self, x: f64) -> Option<usize> {
        if self.bars.is_empty() || !x.is_finite() || x < 0.0 || self.segment_width <= 0.0 {
            return None;
        }
        let index = (x / self.segment_width).floor() as usize;
        (index < self.bars.len()).then_some(index)
    }
}

/// Projects a series into equal-width bar segments across the canvas.
///
/// Bar heights scale against `domain.max` over the plot height, floored at
/// `style.min_visible_height`. An empty series yields empty geometry rather
/// than an error.
pub fn project_bar_geometry(
    series: &[DataPoint],
    canvas: CanvasBox,
    domain: Domain,
    style: BarStyle,
) -> ChartResult<BarChartGeometry> {
    canvas.validate()?;
    style.validate()?;

    if series.is_empty() {
        return Ok(BarChartGeometry::empty());
    }

    if domain.max <= 0.0 {
        return Err(ChartError::InvalidData(
            "bar domain max must be > 0".to_owned(),
        ));
    }

    let count = series.len();
    let segment_width = canvas.width / count as f64;
    let bar_width = segment_width * style.width_ratio;
    let plot_height = canvas.plot_height();
    let plot_bottom = canvas.plot_bottom();

    let mut bars = Vec::with_capacity(count);
    for (index, point) in series.iter().enumerate() {
        if !point.value.is_finite() {
            return Err(ChartError::InvalidData(
                "series values must be finite".to_owned(),
            ));
        }
        let segment_start = index as f64 * segment_width;
        let height = ((point.value / domain.max) * plot_height).max(style.min_visible_height);
        bars.push(Bar {
            x: segment_start + (segment_width - bar_width) / 2.0,
            y: plot_bottom - height,
            width: bar_width,
            height,
            center_x: segment_start + segment_width / 2.0,
            label: point.label.clone(),
            value: point.value,
        });
    }

    Ok(BarChartGeometry {
        bars,
        segment_width,
    })
}
