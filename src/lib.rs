//! hydrochart: chart-geometry core for a hydration-dashboard companion app.
//!
//! The crate maps day-labeled sensor series to renderer-agnostic geometry
//! (textual paths, bar rectangles, axis ticks) and models the surrounding
//! interaction state: metric tab switching, tap selection, and clamped
//! tooltip anchoring. Rendering, navigation, and data fetching stay with the
//! host UI framework.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod metrics;
pub mod telemetry;

pub use api::{TrendChartConfig, TrendChartEngine};
pub use error::{ChartError, ChartResult};
