use serde::{Deserialize, Serialize};

use crate::core::bars::BarChartGeometry;
use crate::core::types::ScreenBounds;
use crate::error::{ChartError, ChartResult};

/// Which data slot, if any, is active on the chart. At most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected(usize),
}

impl SelectionState {
    #[must_use]
    pub fn active_index(self) -> Option<usize> {
        match self {
            Self::Unselected => None,
            Self::Selected(index) => Some(index),
        }
    }
}

/// Fixed tooltip box the anchor computation clamps on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    pub width: f64,
    pub margin: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            width: 120.0,
            margin: 8.0,
        }
    }
}

impl TooltipConfig {
    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "tooltip width must be finite and > 0".to_owned(),
            ));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ChartError::InvalidData(
                "tooltip margin must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Tap-selection state machine for the bar chart.
///
/// Re-selecting the active index toggles back to `Unselected`; selecting a
/// different index replaces it. A metric switch forces `reset()` so stale
/// indices from the previous series never survive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionController {
    state: SelectionState,
    tooltip: TooltipConfig,
}

impl SelectionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tooltip_config(tooltip: TooltipConfig) -> ChartResult<Self> {
        tooltip.validate()?;
        Ok(Self {
            state: SelectionState::Unselected,
            tooltip,
        })
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.state.active_index()
    }

    #[must_use]
    pub fn tooltip_config(&self) -> TooltipConfig {
        self.tooltip
    }

    /// Applies the toggle transition and returns the resulting state.
    pub fn select(&mut self, index: usize) -> SelectionState {
        self.state = match self.state {
            SelectionState::Selected(active) if active == index => SelectionState::Unselected,
            _ => SelectionState::Selected(index),
        };
        self.state
    }

    /// Forced transition to `Unselected`.
    pub fn reset(&mut self) {
        self.state = SelectionState::Unselected;
    }

    /// Left edge x for a tooltip centered on the selected bar, clamped so the
    /// tooltip never leaves `[bounds.left, bounds.right]`.
    pub fn tooltip_anchor(
        &self,
        geometry: &BarChartGeometry,
        index: usize,
        bounds: ScreenBounds,
    ) -> ChartResult<f64> {
        bounds.validate()?;

        let bar = geometry.get(index).ok_or_else(|| {
            ChartError::InvalidData(format!(
                "selection index {index} out of range for {} bars",
                geometry.len()
            ))
        })?;

        let desired = bar.center_x - self.tooltip.width / 2.0;
        let low = bounds.left + self.tooltip.margin;
        let high = bounds.right - self.tooltip.width - self.tooltip.margin;
        // A screen narrower than the tooltip pins the anchor to the left stop.
        Ok(desired.clamp(low, high.max(low)))
    }
}
