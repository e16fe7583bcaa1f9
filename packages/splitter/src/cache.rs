//! Caller-owned cache of compiled separator patterns
//!
//! The split routine itself never caches anything and never touches shared
//! state. Callers that split with the same separator text many times can
//! hold a `PatternCache` and hand out the compiled pattern instead of
//! recompiling, keyed by the text together with its interpretation flag
//! (the same text means different things as literal and as regex).

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::pattern::Pattern;

/// Explicit compiled-pattern cache keyed by `(pattern text, use_regex)`.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: HashMap<(String, bool), Arc<Pattern>>,
}

impl PatternCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached pattern for `(text, use_regex)`, compiling and
    /// storing it on first use.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::Pattern` when `use_regex` is true and `text`
    /// does not compile; failed compilations are not cached.
    pub fn get_or_compile(&mut self, text: &str, use_regex: bool) -> Result<Arc<Pattern>> {
        let key = (text.to_string(), use_regex);
        if let Some(pattern) = self.patterns.get(&key) {
            return Ok(Arc::clone(pattern));
        }
        let pattern = Arc::new(Pattern::new(text, use_regex)?);
        tracing::debug!(pattern = %text, use_regex, "Cached compiled separator pattern");
        self.patterns.insert(key, Arc::clone(&pattern));
        Ok(pattern)
    }

    /// Number of cached patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the cache holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Drop all cached patterns.
    pub fn clear(&mut self) {
        self.patterns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiles_on_first_use() {
        let mut cache = PatternCache::new();
        assert!(cache.is_empty());
        let pattern = cache.get_or_compile("'", false).unwrap();
        assert_eq!(pattern.source(), "'");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_second_lookup_shares_the_compilation() {
        let mut cache = PatternCache::new();
        let first = cache.get_or_compile("a+", true).unwrap();
        let second = cache.get_or_compile("a+", true).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_literal_and_regex_are_distinct_entries() {
        let mut cache = PatternCache::new();
        let literal = cache.get_or_compile("a+", false).unwrap();
        let regex = cache.get_or_compile("a+", true).unwrap();
        assert!(!Arc::ptr_eq(&literal, &regex));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_failed_compilation_is_not_cached() {
        let mut cache = PatternCache::new();
        assert!(cache.get_or_compile("(", true).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cache = PatternCache::new();
        cache.get_or_compile("'", false).unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }
}
