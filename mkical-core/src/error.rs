//! Error types for mkical.

use thiserror::Error;

/// Errors that can occur while building a countdown calendar.
#[derive(Error, Debug)]
pub enum MkicalError {
    #[error("invalid dom: dom must be between 0 and 28 (got {0})")]
    InvalidDayOfMonth(i64),

    #[error("invalid months: months must be between 0 and 500 (got {0})")]
    InvalidMonthCount(i64),

    #[error("invalid start month '{0}': expected YYYY-MM")]
    InvalidStartMonth(String),

    #[error("date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MkicalError {
    /// Process exit code for this error.
    ///
    /// Day-of-month and month-count violations keep their historical codes
    /// (1 and 2); everything else exits with 3.
    pub fn exit_code(&self) -> u8 {
        match self {
            MkicalError::InvalidDayOfMonth(_) => 1,
            MkicalError::InvalidMonthCount(_) => 2,
            _ => 3,
        }
    }
}

/// Result type alias for mkical operations.
pub type MkicalResult<T> = Result<T, MkicalError>;
