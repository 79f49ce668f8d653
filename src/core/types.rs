use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One observation in a trend series, e.g. one day of aggregated sensor data.
///
/// Ordering inside a series is chronological and significant; the layout
/// engines never reorder points, so the slot index on screen is the sequence
/// position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Pixel canvas a layout engine renders into.
///
/// The box is an opaque caller-supplied input (derived from the device screen
/// width in the host app); the engines never compute it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBox {
    pub width: f64,
    pub height: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub padding_left: f64,
}

impl CanvasBox {
    /// Creates a canvas with the host app's default chart paddings.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding_top: 15.0,
            padding_bottom: 20.0,
            padding_left: 20.0,
        }
    }

    #[must_use]
    pub fn with_paddings(mut self, top: f64, bottom: f64, left: f64) -> Self {
        self.padding_top = top;
        self.padding_bottom = bottom;
        self.padding_left = left;
        self
    }

    /// Horizontal plot span; `padding_left` applies to both sides.
    #[must_use]
    pub fn effective_width(self) -> f64 {
        self.width - 2.0 * self.padding_left
    }

    /// Vertical span available to scaled values.
    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.height - self.padding_top - self.padding_bottom
    }

    /// Pixel y of the lowest plottable value.
    #[must_use]
    pub fn plot_bottom(self) -> f64 {
        self.height - self.padding_bottom
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0 {
            return Err(ChartError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }

        if !self.padding_top.is_finite()
            || !self.padding_bottom.is_finite()
            || !self.padding_left.is_finite()
            || self.padding_top < 0.0
            || self.padding_bottom < 0.0
            || self.padding_left < 0.0
        {
            return Err(ChartError::InvalidData(
                "canvas paddings must be finite and >= 0".to_owned(),
            ));
        }

        if self.effective_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(ChartError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }
}

/// Horizontal screen extent used to keep tooltips on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub left: f64,
    pub right: f64,
}

impl ScreenBounds {
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.left.is_finite() || !self.right.is_finite() || self.right <= self.left {
            return Err(ChartError::InvalidData(
                "screen bounds must be finite with right > left".to_owned(),
            ));
        }
        Ok(())
    }
}
