pub mod bars;
pub mod curve;
pub mod layout;
pub mod path;
pub mod scale;
pub mod types;

pub use bars::{Bar, BarChartGeometry, BarStyle, project_bar_geometry};
pub use curve::{CurvePoint, PathGeometry, project_curve_geometry};
pub use layout::{
    BarLayoutEngine, ChartGeometry, ChartKind, ChartLayoutEngine, CurveLayoutEngine, layout_chart,
};
pub use path::PathBuilder;
pub use scale::{Domain, DomainPolicy, compute_domain, tick_values};
pub use types::{CanvasBox, DataPoint, ScreenBounds};
