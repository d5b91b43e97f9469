use std::fmt;

/// Result type for recylog-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Validation errors raised at the input boundary, before anything is
/// written to the store.
#[derive(Debug)]
pub enum Error {
    /// A required field was empty
    MissingField(&'static str),
    /// Quantity or value was negative or not finite
    NegativeNumber { field: &'static str, value: f64 },
    /// Quantity or value could not be parsed as a number
    InvalidNumber { field: &'static str, raw: String },
    /// A date string did not match the ISO `YYYY-MM-DD` layout
    InvalidDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingField(field) => write!(f, "missing required field: {}", field),
            Error::NegativeNumber { field, value } => {
                write!(f, "{} must be a finite, non-negative number (got {})", field, value)
            }
            Error::InvalidNumber { field, raw } => {
                write!(f, "{} is not a valid number: {:?}", field, raw)
            }
            Error::InvalidDate(raw) => write!(f, "invalid date (expected YYYY-MM-DD): {:?}", raw),
        }
    }
}

impl std::error::Error for Error {}
