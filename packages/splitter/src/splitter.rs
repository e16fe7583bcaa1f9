//! Escape-aware split scan and post-processing
//!
//! The scan walks the subject once, asking the pattern for the next
//! occurrence and the escape scanner whether that occurrence is neutralized.
//! Accepted occurrences become split points delimiting raw segments; the
//! post-processing stage then applies the max-split cutoff and the
//! empty-segment filter. Segments are returned verbatim - escape markers
//! are never removed from the output.

use crate::error::Result;
use crate::escape::is_escaped;
use crate::pattern::{MatchSpan, Pattern};

/// Reusable escape-aware splitter for one compiled separator pattern.
///
/// Construction follows the builder style: options default to off and are
/// toggled with `with_*` methods. Splitting itself is infallible and holds
/// no mutable state, so one `Splitter` can be shared across threads.
///
/// # Example
///
/// ```
/// use parsekit_splitter::{Pattern, Splitter};
///
/// let pattern = Pattern::new("'", false).unwrap();
/// let splitter = Splitter::new(pattern);
/// assert_eq!(
///     splitter.split(r"out1 'str1' out2 \' still out2"),
///     vec!["out1 ", "str1", r" out2 \' still out2"],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Splitter {
    pattern: Pattern,
    max_split: usize,
    remove_empty_matches: bool,
}

impl Splitter {
    /// Create a splitter with unlimited splits and no empty-segment filter.
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            max_split: 0,
            remove_empty_matches: false,
        }
    }

    /// Bound the number of split points applied. `0` means unlimited.
    ///
    /// When the scan accepts more split points than the bound, the first
    /// `max_split` segments are kept and the unprocessed remainder is
    /// re-joined with the separator's source text into one trailing segment.
    pub fn with_max_split(mut self, max_split: usize) -> Self {
        self.max_split = max_split;
        self
    }

    /// Filter zero-length segments out of the result.
    pub fn with_remove_empty_matches(mut self, remove: bool) -> Self {
        self.remove_empty_matches = remove;
        self
    }

    /// The separator text this splitter was built from.
    pub fn pattern_source(&self) -> &str {
        self.pattern.source()
    }

    /// Split `subject` into segments at unescaped separator occurrences.
    pub fn split(&self, subject: &str) -> Vec<String> {
        let (segments, points) = self.scan(subject);
        tracing::debug!(
            pattern = %self.pattern.source(),
            split_points = points.len(),
            segments = segments.len(),
            "Split scan complete"
        );
        self.post_process(segments)
    }

    /// The accepted (unescaped) separator occurrences in `subject`, in
    /// order, as byte spans.
    ///
    /// This is the raw scan output: neither the max-split bound nor the
    /// empty-segment filter applies to it.
    pub fn split_points(&self, subject: &str) -> Vec<MatchSpan> {
        self.scan(subject).1
    }

    /// Single pass over the subject producing raw segments and accepted
    /// split points. The raw segment count is always the split point count
    /// plus one.
    fn scan(&self, subject: &str) -> (Vec<String>, Vec<MatchSpan>) {
        let mut segments = Vec::new();
        let mut points = Vec::new();
        let mut segment_start = 0;
        let mut search_from = 0;
        let mut probes = 0;

        while let Some(span) = self.pattern.find_at(subject, search_from) {
            // The search cursor strictly increases, so at most one query
            // per byte offset (plus the initial one) can return a match.
            probes += 1;
            debug_assert!(
                probes <= subject.len() + 1,
                "matcher query bound exceeded: {probes} probes on a {}-byte subject",
                subject.len()
            );
            if is_escaped(subject, span.start) {
                // Neutralized occurrence. Step one character past its start
                // (not past its end) so a backslash immediately behind it
                // can still open a further escape run.
                search_from = span.start + char_width(subject, span.start);
                continue;
            }
            segments.push(subject[segment_start..span.start].to_string());
            points.push(span);
            segment_start = span.end;
            search_from = if span.is_empty() {
                // Zero-width regex match: force progress so the same empty
                // span cannot be returned again.
                span.end + char_width(subject, span.end)
            } else {
                span.end
            };
        }
        segments.push(subject[segment_start..].to_string());

        (segments, points)
    }

    /// Max-split cutoff, then empty-segment filter. Pure list
    /// transformation; performs no matching and cannot fail.
    fn post_process(&self, mut segments: Vec<String>) -> Vec<String> {
        if self.max_split > 0 && segments.len() > self.max_split {
            // The tail is re-joined with the separator's source text, not
            // re-scanned. In regex mode with variable-width matches this
            // can differ from the original subject text; that behavior is
            // documented and kept.
            let tail = segments.split_off(self.max_split).join(self.pattern.source());
            segments.push(tail);
        }
        if self.remove_empty_matches {
            segments.retain(|segment| !segment.is_empty());
        }
        segments
    }
}

/// Width in bytes of the character starting at byte offset `at`, or 1 when
/// `at` is at or past the end (enough to push a search cursor out of range).
fn char_width(subject: &str, at: usize) -> usize {
    subject[at..].chars().next().map_or(1, char::len_utf8)
}

/// Split `subject` at unescaped occurrences of `pattern`.
///
/// * `pattern` - the separator, exact text or regex per `use_regex`
/// * `subject` - the text to split; may be empty
/// * `max_split` - `0` for unlimited, otherwise bounds the split points
///   applied, with the remainder re-joined into one trailing segment
/// * `remove_empty_matches` - filter zero-length segments from the result
/// * `use_regex` - interpret `pattern` as a regular expression
///
/// # Errors
///
/// Returns `SplitError::Pattern` when `use_regex` is true and `pattern`
/// does not compile; no scanning happens in that case.
///
/// # Example
///
/// ```
/// use parsekit_splitter::split;
///
/// let segments = split("'", "out1 'str1' out2", 0, false, false).unwrap();
/// assert_eq!(segments, vec!["out1 ", "str1", " out2"]);
/// ```
pub fn split(
    pattern: &str,
    subject: &str,
    max_split: usize,
    remove_empty_matches: bool,
    use_regex: bool,
) -> Result<Vec<String>> {
    let pattern = Pattern::new(pattern, use_regex)?;
    Ok(Splitter::new(pattern)
        .with_max_split(max_split)
        .with_remove_empty_matches(remove_empty_matches)
        .split(subject))
}
