use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("dimension {dim} is not divisible by block size {block}")]
    BlockMismatch { dim: usize, block: usize },
    #[error("flat data length {len} does not match {dim}x{dim} matrix")]
    LengthMismatch { dim: usize, len: usize },
    #[error("matrix error: {0}")]
    Matrix(#[from] tv_matrix::MatrixError),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
