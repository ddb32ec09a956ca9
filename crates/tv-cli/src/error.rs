use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("matrix error: {0}")]
    Matrix(#[from] tv_matrix::MatrixError),
    #[error("schedule error: {0}")]
    Schedule(#[from] tv_schedule::ScheduleError),
    #[error("serialization error: {0}")]
    Hex(#[from] tv_hex::HexError),
    #[error(
        "{acc_width}-bit accumulator cannot hold a {dim}x{dim} product of \
         {data_width}-bit operands; widen the accumulator or shrink the run"
    )]
    AccumulatorTooNarrow {
        dim: usize,
        data_width: u32,
        acc_width: u32,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;
