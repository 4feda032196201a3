use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("sample buffer is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
