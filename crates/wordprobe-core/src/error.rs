use thiserror::Error;

/// Boundary rejections for a submitted profile.
///
/// Every variant carries the human-readable message surfaced to the
/// caller; none of these are retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Incorrect authorization phrase")]
    AuthPhrase,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("DOB must be in DD/MM/YYYY format")]
    DobFormat,
    #[error("Invalid date in DOB")]
    DobRange,
    #[error("Phone must be 10 digits")]
    PhoneDigits,
    #[error("Invalid email format")]
    EmailFormat,
}

/// Convenience alias for results returned by boundary validation.
pub type Result<T> = std::result::Result<T, ValidationError>;
