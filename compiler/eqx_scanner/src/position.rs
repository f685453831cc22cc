//! Row/column tracking for diagnostics.
//!
//! Positions are recomputed from the input on every call by walking line
//! spans from the start. That is O(lines) per lookup, fine for the error
//! path it serves, and there is no cache to go stale when the same input is
//! scanned by several cursors.
//!
//! Lines end at `\n`, `\r\n`, a lone `\r`, NEL (U+0085), LINE SEPARATOR
//! (U+2028) or PARAGRAPH SEPARATOR (U+2029). VT and FF are skipped as
//! newlines by [`CharSet::Newlines`](crate::CharSet::Newlines) but do not
//! end a line.

use std::fmt;
use std::ops::Range;

/// Location of a byte offset within its input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte span of the line holding the offset, terminator included.
    pub line: Range<usize>,
    /// 1-based line number.
    pub row: usize,
    /// 1-based column, in `char`s from the start of the line.
    pub column: usize,
}

impl Position {
    /// The text of this position's line, without its terminator.
    pub fn line_text<'s>(&self, source: &'s str) -> &'s str {
        source
            .get(self.line.clone())
            .map_or("", |line| line.trim_end_matches(is_line_terminator))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// Compute the position of `offset` in `source`.
///
/// Offsets past the end are clamped to `source.len()`, and offsets inside a
/// multi-byte character are moved back to its first byte. An offset at the
/// end of input after a trailing line terminator sits on a fresh, empty line.
pub fn locate(source: &str, offset: usize) -> Position {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let mut start = 0;
    let mut row = 1;
    loop {
        let (end, terminated) = line_end(source, start);
        if terminated && end <= offset {
            start = end;
            row += 1;
            continue;
        }
        return Position {
            line: start..end,
            row,
            column: source[start..offset].chars().count() + 1,
        };
    }
}

/// End of the line starting at `start` (just past its terminator), and
/// whether a terminator was found before the end of input.
fn line_end(source: &str, start: usize) -> (usize, bool) {
    let mut chars = source[start..].char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            return (start + i + 2, true);
        }
        if is_line_terminator(c) {
            return (start + i + c.len_utf8(), true);
        }
    }
    (source.len(), false)
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}
