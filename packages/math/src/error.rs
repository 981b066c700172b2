use thiserror::Error;

/// Errors raised when input falls outside the domain a routine can handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("invalid digit {ch:?} at position {position}")]
    InvalidDigit { ch: char, position: usize },

    #[error("input is empty")]
    Empty,

    #[error("window length must be at least 1")]
    ZeroLength,

    #[error("window of {window} does not fit in {len} digits")]
    WindowTooLarge { window: usize, len: usize },

    #[error("{value} is outside the supported range {min}..={max}")]
    OutOfRange { value: u64, min: u64, max: u64 },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("triangle row {row} has {found} entries, expected {expected}")]
    MalformedTriangle {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("product of {window} values overflows u64")]
    Overflow { window: usize },

    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

pub type Result<T> = std::result::Result<T, MathError>;
