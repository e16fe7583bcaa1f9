//! Separator patterns: literal text or compiled regular expressions
//!
//! A separator is supplied as text plus a boolean choosing its
//! interpretation: exact substring, or regular expression compiled with the
//! `regex` crate. The same text can be interpreted either way. Only the
//! overall match span of a regex is used; capture groups are discarded.

use crate::error::Result;
use regex::Regex;

/// One matched separator occurrence, as half-open byte offsets
/// `[start, end)` into the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
}

impl MatchSpan {
    /// Width of the match in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether this is a zero-width match (possible for regexes like `a*`)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Separator pattern, chosen once at call entry.
///
/// The scan loop never inspects the variant again after construction; both
/// variants answer the same `find_at` query.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Exact, case-sensitive substring. The text is opaque data even if it
    /// contains characters that would be meaningful as a regex.
    Literal(String),
    /// Compiled regular expression, kept together with its source text for
    /// the max-split tail re-join.
    Regex { source: String, compiled: Regex },
}

impl Pattern {
    /// Construct a pattern from separator text.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::Pattern` when `use_regex` is true and `text`
    /// does not compile. Nothing is scanned before this succeeds.
    pub fn new(text: &str, use_regex: bool) -> Result<Self> {
        if use_regex {
            let compiled = Regex::new(text)?;
            tracing::debug!(pattern = %text, "Compiled separator regex");
            Ok(Pattern::Regex {
                source: text.to_string(),
                compiled,
            })
        } else {
            Ok(Pattern::Literal(text.to_string()))
        }
    }

    /// The separator text exactly as supplied by the caller.
    pub fn source(&self) -> &str {
        match self {
            Pattern::Literal(text) => text,
            Pattern::Regex { source, .. } => source,
        }
    }

    /// Leftmost occurrence of the separator at or after byte offset `from`,
    /// or `None` if absent. An offset past the end of `subject` yields
    /// `None` rather than panicking.
    ///
    /// `from` must lie on a character boundary of `subject`.
    pub fn find_at(&self, subject: &str, from: usize) -> Option<MatchSpan> {
        if from > subject.len() {
            return None;
        }
        match self {
            Pattern::Literal(text) => subject[from..].find(text.as_str()).map(|i| MatchSpan {
                start: from + i,
                end: from + i + text.len(),
            }),
            Pattern::Regex { compiled, .. } => compiled.find_at(subject, from).map(|m| MatchSpan {
                start: m.start(),
                end: m.end(),
            }),
        }
    }
}
