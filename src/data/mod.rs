//! Pluggable trend data sourcing.
//!
//! The geometry engines only require that a catalog is available by the time
//! layout runs; fetch latency, retries, and transport errors stay with the
//! data collaborator behind [`TrendDataSource`], so a real backend can
//! replace the bundled fixture without touching geometry code.

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::warn;

use crate::core::types::DataPoint;
use crate::error::{ChartError, ChartResult};
use crate::metrics::{MetricCatalog, MetricEntry, MetricId};

/// Seam between the chart core and whatever supplies trend data.
pub trait TrendDataSource {
    fn fetch_trends(&self) -> ChartResult<MetricCatalog>;
}

#[derive(Debug, Deserialize)]
struct TrendsFixture {
    trends: IndexMap<String, MetricFixture>,
}

#[derive(Debug, Deserialize)]
struct MetricFixture {
    weekly: Vec<WeeklyPointFixture>,
    #[serde(default)]
    consistency: Option<f64>,
    #[serde(default)]
    score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WeeklyPointFixture {
    day: String,
    // The bar-chart fixtures name the field `avgLevel`, the curve-chart
    // fixtures name it `value`.
    #[serde(alias = "avgLevel")]
    value: f64,
}

/// Data source backed by the mock JSON the host app ships:
/// `{ "trends": { <metric>: { "weekly": [{ "day", "value"|"avgLevel" }],
/// "consistency", "score" } } }`.
#[derive(Debug, Clone)]
pub struct FixtureDataSource {
    raw: String,
}

impl FixtureDataSource {
    #[must_use]
    pub fn new(json: impl Into<String>) -> Self {
        Self { raw: json.into() }
    }

    /// Parses the fixture shape into a catalog.
    ///
    /// Metric names the catalog does not model are skipped with a warning
    /// rather than failing the whole fetch; malformed JSON fails.
    pub fn parse(json: &str) -> ChartResult<MetricCatalog> {
        let fixture: TrendsFixture = serde_json::from_str(json).map_err(|source| {
            ChartError::InvalidData(format!("failed to parse trends fixture: {source}"))
        })?;

        let mut catalog = MetricCatalog::new();
        for (name, metric) in fixture.trends {
            let Some(id) = MetricId::parse(&name) else {
                warn!(metric = %name, "skipping unrecognized metric in trends fixture");
                continue;
            };
            let series: Vec<DataPoint> = metric
                .weekly
                .into_iter()
                .map(|point| DataPoint::new(point.day, point.value))
                .collect();
            let mut entry = MetricEntry::new(series);
            entry.consistency = metric.consistency;
            entry.score = metric.score;
            catalog.insert(id, entry);
        }
        Ok(catalog)
    }
}

impl TrendDataSource for FixtureDataSource {
    fn fetch_trends(&self) -> ChartResult<MetricCatalog> {
        Self::parse(&self.raw)
    }
}
