//! High-level engine composing the selector, selection state, and layout
//! strategies behind one API for the host UI.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::bars::BarStyle;
use crate::core::layout::{ChartGeometry, ChartKind, layout_chart};
use crate::core::scale::{DomainPolicy, compute_domain, tick_values};
use crate::core::types::{CanvasBox, ScreenBounds};
use crate::data::TrendDataSource;
use crate::error::ChartResult;
use crate::interaction::{SelectionController, SelectionState, TooltipConfig};
use crate::metrics::{MetricCatalog, MetricDisplay, MetricId, MetricSeriesSelector, MetricSummary};

/// Chart configuration supplied by the host screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendChartConfig {
    pub canvas: CanvasBox,
    pub kind: ChartKind,
    /// Gridline count for the curve variant.
    pub curve_grid_tick_count: usize,
    /// Y-axis tick count for the bar variant, zero included.
    pub bar_axis_tick_count: usize,
    pub bar_style: BarStyle,
    pub tooltip: TooltipConfig,
}

impl TrendChartConfig {
    #[must_use]
    pub fn new(canvas: CanvasBox) -> Self {
        Self {
            canvas,
            kind: ChartKind::Curve,
            curve_grid_tick_count: 3,
            bar_axis_tick_count: 5,
            bar_style: BarStyle::default(),
            tooltip: TooltipConfig::default(),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_bar_style(mut self, style: BarStyle) -> Self {
        self.bar_style = style;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.canvas.validate()?;
        self.bar_style.validate()?;
        self.tooltip.validate()
    }
}

/// One historical chart: active metric, tap selection, and geometry
/// recomputed on demand from the current state.
///
/// All operations are synchronous and cheap (O(n) in series length), so the
/// host re-runs them on every render instead of caching frames. Metric
/// switching swaps the series and clears the selection inside one `&mut`
/// call, so a concurrent render can never observe half-updated state.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChartEngine {
    config: TrendChartConfig,
    selector: MetricSeriesSelector,
    selection: SelectionController,
}

impl TrendChartEngine {
    pub fn new(catalog: MetricCatalog, config: TrendChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let selector = MetricSeriesSelector::new(catalog)?;
        let selection = SelectionController::with_tooltip_config(config.tooltip)?;
        debug!(active = %selector.active_metric(), kind = ?config.kind, "trend chart engine initialized");
        Ok(Self {
            config,
            selector,
            selection,
        })
    }

    /// Builds an engine from whatever data source the app wired in.
    pub fn from_source<S: TrendDataSource>(source: &S, config: TrendChartConfig) -> ChartResult<Self> {
        Self::new(source.fetch_trends()?, config)
    }

    #[must_use]
    pub fn config(&self) -> &TrendChartConfig {
        &self.config
    }

    /// Activates a metric tab and clears any selection from the previous
    /// series. Fails with `UnknownMetric` when the catalog has no entry.
    pub fn select_metric(&mut self, metric: MetricId) -> ChartResult<()> {
        self.selector.select(metric, &mut self.selection)?;
        debug!(active = %metric, "metric switched, selection cleared");
        Ok(())
    }

    /// Toggle-selects a data slot and returns the resulting state.
    pub fn select_point(&mut self, index: usize) -> SelectionState {
        let state = self.selection.select(index);
        trace!(?state, "point selection updated");
        state
    }

    pub fn clear_selection(&mut self) {
        self.selection.reset();
    }

    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    #[must_use]
    pub fn active_metric(&self) -> MetricId {
        self.selector.active_metric()
    }

    #[must_use]
    pub fn active_summary(&self) -> MetricSummary {
        self.selector.active_summary()
    }

    #[must_use]
    pub fn active_display(&self) -> &'static MetricDisplay {
        self.selector.active_display()
    }

    #[must_use]
    pub fn format_active_value(&self, value: f64) -> String {
        self.selector.format_active_value(value)
    }

    /// Lays out the active series with the configured strategy.
    pub fn geometry(&self) -> ChartResult<ChartGeometry> {
        layout_chart(
            self.config.kind,
            self.selector.active_series(),
            self.config.canvas,
            self.config.bar_style,
        )
    }

    /// Axis tick values for the active series under the configured variant.
    /// An empty series yields no ticks (blank chart, never an error).
    pub fn axis_ticks(&self) -> ChartResult<SmallVec<[f64; 8]>> {
        let series = self.selector.active_series();
        if series.is_empty() {
            return Ok(SmallVec::new());
        }
        let (policy, count) = match self.config.kind {
            ChartKind::Curve => (DomainPolicy::TightFit, self.config.curve_grid_tick_count),
            ChartKind::Bar => (DomainPolicy::ZeroBased, self.config.bar_axis_tick_count),
        };
        let domain = compute_domain(series, policy)?;
        Ok(tick_values(domain, count))
    }

    /// Resolves a tap at pixel `x` to a slot index: segment hit-test for
    /// bars, nearest-point snap for the curve.
    pub fn hit_test(&self, x: f64) -> ChartResult<Option<usize>> {
        Ok(match self.geometry()? {
            ChartGeometry::Bars(geometry) => geometry.hit_test(x),
            ChartGeometry::Curve(geometry) => geometry.nearest_point(x),
        })
    }

    /// Applies a tap at pixel `x`: hit-test, then toggle-select the slot.
    /// Taps outside the chart leave the selection unchanged.
    pub fn tap(&mut self, x: f64) -> ChartResult<SelectionState> {
        if let Some(index) = self.hit_test(x)? {
            Ok(self.select_point(index))
        } else {
            Ok(self.selection.state())
        }
    }

    /// Clamped tooltip left edge for the current selection, or `None` when
    /// nothing is selected or the variant has no bar geometry.
    pub fn tooltip_anchor(&self, bounds: ScreenBounds) -> ChartResult<Option<f64>> {
        let Some(index) = self.selection.active_index() else {
            return Ok(None);
        };
        match self.geometry()? {
            ChartGeometry::Bars(geometry) => self
                .selection
                .tooltip_anchor(&geometry, index, bounds)
                .map(Some),
            ChartGeometry::Curve(_) => Ok(None),
        }
    }
}
