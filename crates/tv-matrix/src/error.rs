use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("invalid matrix dimension: {dim}")]
    InvalidDimension { dim: usize },
    #[error("data length {len} does not match {dim}x{dim} matrix")]
    LengthMismatch { dim: usize, len: usize },
    #[error("operand dimensions differ: {a}x{a} vs {b}x{b}")]
    DimensionMismatch { a: usize, b: usize },
    #[error("unsupported accumulator width: {width} (expected 1..=64)")]
    InvalidWidth { width: u32 },
    #[error("product entry C[{row}][{col}] = {value} exceeds the {acc_width}-bit accumulator")]
    Overflow {
        row: usize,
        col: usize,
        value: u128,
        acc_width: u32,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
