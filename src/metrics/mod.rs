mod display;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::DataPoint;
use crate::error::{ChartError, ChartResult};
use crate::interaction::SelectionController;

pub use display::{AlertSeverity, BarStatus, MetricDisplay, SeverityDisplay};

/// The metrics the wearable reports weekly trends for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricId {
    Hydration,
    Impedance,
    SkinTemp,
    HeartRate,
}

impl MetricId {
    pub const ALL: [Self; 4] = [Self::Hydration, Self::Impedance, Self::SkinTemp, Self::HeartRate];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hydration => "hydration",
            Self::Impedance => "impedance",
            Self::SkinTemp => "skinTemp",
            Self::HeartRate => "heartRate",
        }
    }

    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == input)
    }

    /// Shared static presentation table for this metric.
    #[must_use]
    pub const fn display(self) -> &'static MetricDisplay {
        display::metric_display(self)
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headline statistic shown next to a chart: latest value and
/// period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MetricSummary {
    pub current: f64,
    pub change_percent: f64,
}

impl MetricSummary {
    /// Derives the summary from a weekly series: current = last observation,
    /// change = first-to-last delta in percent. Series shorter than two
    /// points (or starting at zero) report no change.
    #[must_use]
    pub fn from_series(series: &[DataPoint]) -> Self {
        let Some(last) = series.last() else {
            return Self::default();
        };
        let change_percent = match series.first() {
            Some(first) if series.len() >= 2 && first.value != 0.0 => {
                ((last.value - first.value) / first.value) * 100.0
            }
            _ => 0.0,
        };
        Self {
            current: last.value,
            change_percent,
        }
    }
}

/// Aggregate stats row (AVG / MIN / MAX) for a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

impl SeriesStats {
    pub fn from_series(series: &[DataPoint]) -> ChartResult<Self> {
        if series.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for point in series {
            if !point.value.is_finite() {
                return Err(ChartError::InvalidData(
                    "series values must be finite".to_owned(),
                ));
            }
            min = min.min(point.value);
            max = max.max(point.value);
            sum += point.value;
        }
        Ok(Self {
            avg: sum / series.len() as f64,
            min,
            max,
        })
    }
}

/// One metric's catalog entry: its weekly series plus derived summary and
/// any extra aggregates the data source reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEntry {
    pub series: Vec<DataPoint>,
    pub summary: MetricSummary,
    #[serde(default)]
    pub consistency: Option<f64>,
    #[serde(default)]
    pub score: Option<f64>,
}

impl MetricEntry {
    #[must_use]
    pub fn new(series: Vec<DataPoint>) -> Self {
        let summary = MetricSummary::from_series(&series);
        Self {
            series,
            summary,
            consistency: None,
            score: None,
        }
    }
}

/// All parallel metric series, keyed by metric id.
///
/// Insertion order is presentation order (tab order in the host UI); the
/// engines only ever read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MetricCatalog {
    entries: IndexMap<MetricId, MetricEntry>,
}

impl MetricCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric: MetricId, entry: MetricEntry) {
        self.entries.insert(metric, entry);
    }

    #[must_use]
    pub fn get(&self, metric: MetricId) -> Option<&MetricEntry> {
        self.entries.get(&metric)
    }

    #[must_use]
    pub fn contains(&self, metric: MetricId) -> bool {
        self.entries.contains_key(&metric)
    }

    #[must_use]
    pub fn first_metric(&self) -> Option<MetricId> {
        self.entries.keys().next().copied()
    }

    pub fn metric_ids(&self) -> impl Iterator<Item = MetricId> + '_ {
        self.entries.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Formats a value under the per-metric presentation rule: one decimal place
/// for temperature-like metrics, integer rounding otherwise.
///
/// Centralized here so the layout engines stay format-agnostic.
#[must_use]
pub fn format_value(value: f64, metric: MetricId) -> String {
    match metric {
        MetricId::SkinTemp => format!("{value:.1}"),
        _ => format!("{}", value.round() as i64),
    }
}

/// Tracks which metric series is on display.
///
/// Switching metrics resets the passed selection controller in the same
/// call, so a stale selection index from the previous series can never meet
/// geometry computed from the new one.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeriesSelector {
    catalog: MetricCatalog,
    active: MetricId,
}

impl MetricSeriesSelector {
    /// Starts on hydration when present, otherwise the catalog's first
    /// metric. An empty catalog is a caller bug and fails.
    pub fn new(catalog: MetricCatalog) -> ChartResult<Self> {
        let active = if catalog.contains(MetricId::Hydration) {
            MetricId::Hydration
        } else {
            catalog
                .first_metric()
                .ok_or_else(|| ChartError::InvalidData("metric catalog is empty".to_owned()))?
        };
        Ok(Self { catalog, active })
    }

    pub fn select(
        &mut self,
        metric: MetricId,
        selection: &mut SelectionController,
    ) -> ChartResult<()> {
        if !self.catalog.contains(metric) {
            return Err(ChartError::UnknownMetric(metric.to_string()));
        }
        self.active = metric;
        selection.reset();
        Ok(())
    }

    #[must_use]
    pub fn active_metric(&self) -> MetricId {
        self.active
    }

    #[must_use]
    pub fn active_series(&self) -> &[DataPoint] {
        self.catalog
            .get(self.active)
            .map(|entry| entry.series.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn active_summary(&self) -> MetricSummary {
        self.catalog
            .get(self.active)
            .map(|entry| entry.summary)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn active_display(&self) -> &'static MetricDisplay {
        self.active.display()
    }

    /// Formats a value under the active metric's presentation rule.
    #[must_use]
    pub fn format_active_value(&self, value: f64) -> String {
        format_value(value, self.active)
    }

    #[must_use]
    pub fn catalog(&self) -> &MetricCatalog {
        &self.catalog
    }
}
