//! ParseKit Splitter
//!
//! Escape-aware string splitting for the ParseKit source-analysis toolchain.
//! This library provides functionality for:
//! - Splitting a subject string at separator occurrences (literal text or
//!   regular expression)
//! - Neutralizing separator occurrences preceded by an odd-length run of
//!   backslash escape markers
//! - Bounding the number of splits applied and filtering empty segments
//!
//! Segments are returned verbatim: escape markers are never removed or
//! unescaped in the output. Splitting is a pure function of its inputs and
//! is safe to call concurrently.
//!
//! # Example
//!
//! ```
//! use parsekit_splitter::split;
//!
//! // The quote after the backslash is escaped and does not split
//! let segments = split("'", r"out1 'escaped: \' ' out2", 0, false, false).unwrap();
//! assert_eq!(segments, vec!["out1 ", r"escaped: \' ", " out2"]);
//! ```

pub mod cache;
pub mod error;
pub mod escape;
pub mod pattern;
pub mod splitter;

// Re-export commonly used items
pub use cache::PatternCache;
pub use error::{Result, SplitError};
pub use escape::{escape_run_len, is_escaped, ESCAPE_MARKER};
pub use pattern::{MatchSpan, Pattern};
pub use splitter::{split, Splitter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
