//! Backslash escape detection
//!
//! A separator occurrence is neutralized ("escaped") when it is preceded by
//! an odd-length run of backslashes: `\x` escapes `x`, while `\\` is one
//! literal backslash that escapes nothing further. Each candidate occurrence
//! is judged independently by a backward scan from its start offset, so no
//! state is carried between candidates.

/// The fixed escape marker. Not configurable.
pub const ESCAPE_MARKER: char = '\\';

/// Length of the maximal run of backslashes immediately preceding
/// `match_start` (a byte offset into `subject`).
///
/// The escape marker is ASCII, so a byte-wise reverse scan cannot misread a
/// UTF-8 continuation byte as a backslash.
pub fn escape_run_len(subject: &str, match_start: usize) -> usize {
    subject.as_bytes()[..match_start]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count()
}

/// Whether a separator occurrence starting at `match_start` is escaped,
/// i.e. preceded by an odd-length run of backslashes.
pub fn is_escaped(subject: &str, match_start: usize) -> bool {
    escape_run_len(subject, match_start) % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_preceding_backslash() {
        assert_eq!(escape_run_len("abc'", 3), 0);
        assert!(!is_escaped("abc'", 3));
    }

    #[test]
    fn test_single_backslash_escapes() {
        assert_eq!(escape_run_len(r"ab\'", 3), 1);
        assert!(is_escaped(r"ab\'", 3));
    }

    #[test]
    fn test_double_backslash_cancels() {
        assert_eq!(escape_run_len(r"a\\'", 3), 2);
        assert!(!is_escaped(r"a\\'", 3));
    }

    #[test]
    fn test_triple_backslash_escapes() {
        assert_eq!(escape_run_len(r"\\\'", 3), 3);
        assert!(is_escaped(r"\\\'", 3));
    }

    #[test]
    fn test_run_stops_at_non_marker() {
        // Run counting stops at the first non-backslash going backward
        assert_eq!(escape_run_len(r"\a\\'", 4), 2);
        assert!(!is_escaped(r"\a\\'", 4));
    }

    #[test]
    fn test_start_of_subject() {
        assert_eq!(escape_run_len("'", 0), 0);
        assert!(!is_escaped("'", 0));
    }

    #[test]
    fn test_subject_of_only_markers() {
        assert_eq!(escape_run_len(r"\\\\", 4), 4);
        assert!(!is_escaped(r"\\\\", 4));
        assert_eq!(escape_run_len(r"\\\\", 3), 3);
        assert!(is_escaped(r"\\\\", 3));
    }

    #[test]
    fn test_multibyte_char_before_marker() {
        // "é" is two bytes; the run must not extend into it
        let subject = "é\\'";
        let quote_at = subject.len() - 1;
        assert_eq!(escape_run_len(subject, quote_at), 1);
        assert!(is_escaped(subject, quote_at));
    }

    #[test]
    fn test_escape_marker_constant() {
        assert_eq!(ESCAPE_MARKER, '\\');
        assert_eq!(ESCAPE_MARKER.len_utf8(), 1);
    }
}
