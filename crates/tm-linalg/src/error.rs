use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinalgError {
    #[error("dimension mismatch: matrix side {side} does not match vector length {len}")]
    DimensionMismatch { side: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, LinalgError>;
