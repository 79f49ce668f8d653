use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::path::PathBuilder;
use crate::core::scale::Domain;
use crate::core::types::{CanvasBox, DataPoint};
use crate::error::{ChartError, ChartResult};

/// Mapped point on the curve, index-aligned with the input series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: f64,
}

/// Renderable output of the curve layout: smooth line path, closed area
/// fill, and the per-point markers.
///
/// Owned by the caller for one render frame and recomputed from scratch on
/// every series or canvas change; there is no incremental mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathGeometry {
    pub line_path: String,
    pub area_path: String,
    pub points: Vec<CurvePoint>,
}

impl PathGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_path: String::new(),
            area_path: String::new(),
            points: Vec::new(),
        }
    }

    /// Index of the point whose x is nearest to `x`, for snap-style
    /// point selection on the curve chart.
    #[must_use]
    pub fn nearest_point(&self, x: f64) -> Option<usize> {
        if !x.is_finite() {
            return None;
        }
        self.points
            .iter()
            .enumerate()
            .min_by_key(|(_, point)| OrderedFloat((point.x - x).abs()))
            .map(|(index, _)| index)
    }
}

/// Projects a series into smooth curve geometry in pixel space.
///
/// Between each consecutive point pair the line emits one cubic segment with
/// both control points at the horizontal midpoint, each at its endpoint's own
/// y. The curve passes exactly through every data point; there is no
/// overshoot correction or monotonicity clamp. A single-point series yields a
/// zero-length line at `padding_left`, and an empty series yields empty
/// geometry rather than an error so the consuming UI tree never interrupts.
pub fn project_curve_geometry(
    series: &[DataPoint],
    canvas: CanvasBox,
    domain: Domain,
) -> ChartResult<PathGeometry> {
    canvas.validate()?;

    if series.is_empty() {
        return Ok(PathGeometry::empty());
    }

    // A constant series would otherwise divide by zero.
    let range = if domain.range() == 0.0 { 1.0 } else { domain.range() };

    let count = series.len();
    let effective_width = canvas.effective_width();
    let plot_bottom = canvas.plot_bottom();
    let scaled_height = canvas.plot_height();

    let mut points = Vec::with_capacity(count);
    for (index, point) in series.iter().enumerate() {
        if !point.value.is_finite() {
            return Err(ChartError::InvalidData(
                "series values must be finite".to_owned(),
            ));
        }
        let x = if count == 1 {
            canvas.padding_left
        } else {
            canvas.padding_left + (index as f64 / (count - 1) as f64) * effective_width
        };
        let y = plot_bottom - ((point.value - domain.min) / range) * scaled_height;
        points.push(CurvePoint {
            x,
            y,
            label: point.label.clone(),
            value: point.value,
        });
    }

    let mut line = PathBuilder::new();
    line.move_to(points[0].x, points[0].y);

    // The area trace mirrors the line, closed against the canvas bottom edge.
    let mut area = PathBuilder::new();
    area.move_to(points[0].x, canvas.height);
    area.line_to(points[0].x, points[0].y);

    for pair in points.windows(2) {
        let mid_x = (pair[0].x + pair[1].x) / 2.0;
        line.curve_to(mid_x, pair[0].y, mid_x, pair[1].y, pair[1].x, pair[1].y);
        area.curve_to(mid_x, pair[0].y, mid_x, pair[1].y, pair[1].x, pair[1].y);
    }

    let last = &points[count - 1];
    area.line_to(last.x, canvas.height);
    area.close();

    Ok(PathGeometry {
        line_path: line.finish(),
        area_path: area.finish(),
        points,
    })
}
