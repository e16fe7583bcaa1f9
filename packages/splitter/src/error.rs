//! Error types for the splitter

use thiserror::Error;

/// Main error type for split operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Separator text was requested as a regular expression but does not compile
    #[error("Invalid separator pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type alias for split operations
pub type Result<T> = std::result::Result<T, SplitError>;
