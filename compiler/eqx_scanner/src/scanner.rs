//! The cursor and its text probes.
//!
//! The cursor is a byte offset into a borrowed `&str` that only ever lands
//! on `char` boundaries. Every public `scan_*` method goes through
//! [`Scanner::probe`], which skips the skip set, runs the match, and rolls
//! the offset back to its pre-call value when the match fails.
//!
//! Numeric probes live in [`crate::numeric`] as a second `impl` block.

use crate::char_set::CharSet;
use crate::position::{locate, Position};

/// Per-scanner settings.
///
/// The default skips whitespace and newlines before every probe and matches
/// literals case-sensitively.
#[derive(Clone, Debug)]
pub struct ScannerConfig {
    /// Characters skipped before each probe; `None` disables skipping.
    pub skip: Option<CharSet>,
    /// Whether `scan_string`/`scan_up_to` compare literals exactly. When
    /// `false`, ASCII letters compare without regard to case.
    pub case_sensitive: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            skip: Some(CharSet::WhitespaceAndNewlines),
            case_sensitive: true,
        }
    }
}

/// Left-to-right scanner over one input string.
///
/// # Invariant
///
/// `pos <= source.len()` and `source.is_char_boundary(pos)`. A probe that
/// returns `None` leaves `pos` unchanged.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    /// Current byte offset into `source`.
    pos: usize,
    skip: Option<CharSet>,
    case_sensitive: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at offset 0 with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, ScannerConfig::default())
    }

    /// Create a scanner at offset 0 with explicit settings.
    pub fn with_config(source: &'a str, config: ScannerConfig) -> Self {
        Self {
            source,
            pos: 0,
            skip: config.skip,
            case_sensitive: config.case_sensitive,
        }
    }

    /// The full input.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Unconsumed input, starting at the cursor.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        let source = self.source;
        &source[self.pos..]
    }

    /// Returns `true` if nothing but skip-set characters remains.
    pub fn is_at_end(&self) -> bool {
        let rest = self.remaining();
        match &self.skip {
            Some(skip) => skip.prefix_len(rest) == rest.len(),
            None => rest.is_empty(),
        }
    }

    /// Characters skipped before each probe, if any.
    pub fn skip_set(&self) -> Option<&CharSet> {
        self.skip.as_ref()
    }

    /// Replace the skip set; `None` disables skipping.
    pub fn set_skip_set(&mut self, skip: Option<CharSet>) {
        self.skip = skip;
    }

    /// Whether literal probes compare case exactly.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Switch literal probes between exact and ASCII case-insensitive matching.
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    /// Row and column of the cursor, recomputed from the input on each call.
    pub fn position(&self) -> Position {
        locate(self.source, self.pos)
    }

    // ─── Probe machinery ────────────────────────────────────────────────

    /// Skip the skip set, then run `attempt`. Restores the saved offset if
    /// `attempt` returns `None`.
    pub(crate) fn probe<T>(&mut self, attempt: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let saved = self.pos;
        self.skip_ignored();
        let result = attempt(self);
        if result.is_none() {
            self.pos = saved;
        }
        debug_assert!(self.source.is_char_boundary(self.pos));
        result
    }

    /// Consume `len` bytes from the cursor and return them.
    pub(crate) fn take(&mut self, len: usize) -> &'a str {
        let source = self.source;
        let start = self.pos;
        self.pos += len;
        &source[start..self.pos]
    }

    fn skip_ignored(&mut self) {
        if let Some(skip) = &self.skip {
            let rest = &self.source[self.pos..];
            self.pos += skip.prefix_len(rest);
        }
    }

    /// Length of `literal` if the remaining input starts with it.
    fn match_len(&self, literal: &str) -> Option<usize> {
        let head = self.remaining().get(..literal.len())?;
        let matched = if self.case_sensitive {
            head == literal
        } else {
            head.eq_ignore_ascii_case(literal)
        };
        matched.then_some(literal.len())
    }

    /// Byte offset of the first occurrence of `literal` in `haystack`.
    fn find_literal(&self, haystack: &str, literal: &str) -> Option<usize> {
        if self.case_sensitive {
            memchr::memmem::find(haystack.as_bytes(), literal.as_bytes())
        } else {
            find_ignore_ascii_case(haystack.as_bytes(), literal.as_bytes())
        }
    }

    // ─── Text probes ────────────────────────────────────────────────────

    /// Consume the longest non-empty run of characters in `set`.
    ///
    /// Returns `None` if the character at the cursor is not in `set`, or if
    /// the input is exhausted.
    pub fn scan_characters(&mut self, set: &CharSet) -> Option<&'a str> {
        self.probe(|s| {
            let len = set.prefix_len(s.remaining());
            if len == 0 {
                return None;
            }
            Some(s.take(len))
        })
    }

    /// Consume characters until one in `set` is found, or to the end.
    ///
    /// The result is empty when the cursor already sits on a member of
    /// `set`. Returns `None` only when nothing remains to consume.
    pub fn scan_up_to_characters(&mut self, set: &CharSet) -> Option<&'a str> {
        self.probe(|s| {
            let rest = s.remaining();
            if rest.is_empty() {
                return None;
            }
            Some(s.take(set.find_in(rest)))
        })
    }

    /// Consume `literal` if the remaining input starts with it.
    ///
    /// Returns the matched source text, which differs from `literal` only in
    /// ASCII case when the scanner is case-insensitive.
    pub fn scan_string(&mut self, literal: &str) -> Option<&'a str> {
        self.probe(|s| {
            if s.remaining().is_empty() {
                return None;
            }
            let len = s.match_len(literal)?;
            Some(s.take(len))
        })
    }

    /// Consume everything before the first occurrence of `literal`, or the
    /// rest of the input when `literal` does not occur.
    ///
    /// The result is empty when `literal` starts at the cursor. Returns
    /// `None` only when nothing remains to consume.
    pub fn scan_up_to(&mut self, literal: &str) -> Option<&'a str> {
        self.probe(|s| {
            let rest = s.remaining();
            if rest.is_empty() {
                return None;
            }
            let len = s.find_literal(rest, literal).unwrap_or(rest.len());
            Some(s.take(len))
        })
    }
}

/// Naive window search with ASCII case folding.
///
/// Match offsets are always `char` boundaries: the needle is valid UTF-8, so
/// its first byte is never a continuation byte, and folding only touches ASCII.
fn find_ignore_ascii_case(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
