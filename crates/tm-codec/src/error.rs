use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file truncated: {expected} bytes required by the header, found {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("invalid matrix dimension {0}: must be a positive multiple of the 5x5 block size")]
    InvalidDimension(i32),
    #[error("invalid vector length: {0}")]
    InvalidLength(i32),
}

pub type Result<T> = std::result::Result<T, CodecError>;
