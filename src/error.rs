use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("cannot compute a domain over an empty series")]
    EmptySeries,

    #[error("metric not present in catalog: {0}")]
    UnknownMetric(String),

    #[error("invalid canvas box: width={width}, height={height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
