use serde::{Deserialize, Serialize};

use crate::core::bars::{BarChartGeometry, BarStyle, project_bar_geometry};
use crate::core::curve::{PathGeometry, project_curve_geometry};
use crate::core::scale::{DomainPolicy, compute_domain};
use crate::core::types::{CanvasBox, DataPoint};
use crate::error::ChartResult;

/// Which of the two historical-chart variants a config selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartKind {
    #[default]
    Curve,
    Bar,
}

/// Common seam over the two layout strategies.
///
/// Each strategy pairs a domain policy with a projection, so callers compose
/// one code path for both chart variants instead of duplicating it.
pub trait ChartLayoutEngine {
    type Geometry;

    fn domain_policy(&self) -> DomainPolicy;

    /// Full series-to-geometry pass: derive the domain under the strategy's
    /// policy, then project. Empty series short-circuit to empty geometry.
    fn layout(&self, series: &[DataPoint], canvas: CanvasBox) -> ChartResult<Self::Geometry>;
}

/// Smooth interpolated line + filled area over a tight-fit domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurveLayoutEngine;

impl ChartLayoutEngine for CurveLayoutEngine {
    type Geometry = PathGeometry;

    fn domain_policy(&self) -> DomainPolicy {
        DomainPolicy::TightFit
    }

    fn layout(&self, series: &[DataPoint], canvas: CanvasBox) -> ChartResult<PathGeometry> {
        if series.is_empty() {
            canvas.validate()?;
            return Ok(PathGeometry::empty());
        }
        let domain = compute_domain(series, self.domain_policy())?;
        project_curve_geometry(series, canvas, domain)
    }
}

/// Discrete segment-aligned bars over a zero-based nice-rounded domain.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarLayoutEngine {
    style: BarStyle,
}

impl BarLayoutEngine {
    pub fn new(style: BarStyle) -> ChartResult<Self> {
        style.validate()?;
        Ok(Self { style })
    }

    #[must_use]
    pub fn style(&self) -> BarStyle {
        self.style
    }
}

impl ChartLayoutEngine for BarLayoutEngine {
    type Geometry = BarChartGeometry;

    fn domain_policy(&self) -> DomainPolicy {
        DomainPolicy::ZeroBased
    }

    fn layout(&self, series: &[DataPoint], canvas: CanvasBox) -> ChartResult<BarChartGeometry> {
        if series.is_empty() {
            canvas.validate()?;
            return Ok(BarChartGeometry::empty());
        }
        let domain = compute_domain(series, self.domain_policy())?;
        project_bar_geometry(series, canvas, domain, self.style)
    }
}

/// Geometry from whichever strategy a `ChartKind` selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartGeometry {
    Curve(PathGeometry),
    Bars(BarChartGeometry),
}

impl ChartGeometry {
    /// Number of rendered slots, index-aligned with the input series.
    #[must_use]
    pub fn point_count(&self) -> usize {
        match self {
            Self::Curve(geometry) => geometry.points.len(),
            Self::Bars(geometry) => geometry.len(),
        }
    }
}

/// Lays out a series with the strategy selected by `kind`.
pub fn layout_chart(
    kind: ChartKind,
    series: &[DataPoint],
    canvas: CanvasBox,
    bar_style: BarStyle,
) -> ChartResult<ChartGeometry> {
    match kind {
        ChartKind::Curve => CurveLayoutEngine
            .layout(series, canvas)
            .map(ChartGeometry::Curve),
        ChartKind::Bar => BarLayoutEngine::new(bar_style)?
            .layout(series, canvas)
            .map(ChartGeometry::Bars),
    }
}
