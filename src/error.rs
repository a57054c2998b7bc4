use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("cannot parse date `{input}` with pattern `{pattern}`: {reason}")]
    DateParse {
        input: String,
        pattern: String,
        reason: String,
    },

    #[error("invalid date pattern `{pattern}`: {reason}")]
    InvalidDatePattern { pattern: String, reason: String },

    #[error("trend index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}
