use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid visible range request: from={from}, to={to}, len={len}")]
    InvalidRange { from: usize, to: usize, len: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
