use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexError {
    #[error("unsupported bit width: {width} (expected 1..=64)")]
    UnsupportedWidth { width: u32 },
    #[error("value {value:#x} does not fit in {width} bits")]
    ValueOutOfRange { value: u64, width: u32 },
    #[error("sequence length {len} is not a multiple of row length {row_len}")]
    RowLengthMismatch { len: usize, row_len: usize },
    #[error("row length must be positive")]
    EmptyRow,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HexError>;
