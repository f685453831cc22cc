//! Character sets used to delimit scans and to define the skip set.

use std::fmt;

/// A membership predicate over `char`.
///
/// The built-in variants mirror the character classes editors usually expose
/// (whitespace, newlines, digits, letters). Arbitrary sets are built with
/// [`CharSet::from_chars`] or [`CharSet::from_fn`], and any set can be
/// complemented with [`CharSet::inverted`].
#[derive(Clone)]
pub enum CharSet {
    /// Horizontal whitespace: tab plus the Unicode space separators (`Zs`).
    Whitespace,
    /// Line terminators: LF, VT, FF, CR, NEL, LINE SEPARATOR, PARAGRAPH SEPARATOR.
    Newlines,
    /// Union of [`Whitespace`](Self::Whitespace) and [`Newlines`](Self::Newlines).
    WhitespaceAndNewlines,
    /// ASCII `0`-`9`.
    DecimalDigits,
    /// Unicode alphabetic characters.
    Letters,
    /// Unicode alphabetic or numeric characters.
    Alphanumerics,
    /// Exactly the listed characters.
    Chars(Box<[char]>),
    /// Characters accepted by a plain function.
    Predicate(fn(char) -> bool),
    /// Complement of the inner set.
    Inverted(Box<CharSet>),
}

impl CharSet {
    /// Set containing each character of `chars`.
    pub fn from_chars(chars: &str) -> Self {
        let mut members: Vec<char> = chars.chars().collect();
        members.sort_unstable();
        members.dedup();
        CharSet::Chars(members.into_boxed_slice())
    }

    /// Set defined by a predicate.
    pub fn from_fn(pred: fn(char) -> bool) -> Self {
        CharSet::Predicate(pred)
    }

    /// Complement of this set. Inverting twice gives back the set it started from.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            CharSet::Inverted(inner) => *inner,
            other => CharSet::Inverted(Box::new(other)),
        }
    }

    /// Returns `true` if `c` is a member.
    pub fn contains(&self, c: char) -> bool {
        match self {
            CharSet::Whitespace => is_whitespace(c),
            CharSet::Newlines => is_newline(c),
            CharSet::WhitespaceAndNewlines => is_whitespace(c) || is_newline(c),
            CharSet::DecimalDigits => c.is_ascii_digit(),
            CharSet::Letters => c.is_alphabetic(),
            CharSet::Alphanumerics => c.is_alphanumeric(),
            CharSet::Chars(members) => members.binary_search(&c).is_ok(),
            CharSet::Predicate(pred) => pred(c),
            CharSet::Inverted(inner) => !inner.contains(c),
        }
    }

    /// Byte length of the longest prefix of `text` made of members.
    pub fn prefix_len(&self, text: &str) -> usize {
        text.char_indices()
            .find(|&(_, c)| !self.contains(c))
            .map_or(text.len(), |(i, _)| i)
    }

    /// Byte offset of the first member in `text`, or `text.len()` if none.
    pub fn find_in(&self, text: &str) -> usize {
        text.char_indices()
            .find(|&(_, c)| self.contains(c))
            .map_or(text.len(), |(i, _)| i)
    }
}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharSet::Whitespace => f.write_str("Whitespace"),
            CharSet::Newlines => f.write_str("Newlines"),
            CharSet::WhitespaceAndNewlines => f.write_str("WhitespaceAndNewlines"),
            CharSet::DecimalDigits => f.write_str("DecimalDigits"),
            CharSet::Letters => f.write_str("Letters"),
            CharSet::Alphanumerics => f.write_str("Alphanumerics"),
            CharSet::Chars(members) => f.debug_tuple("Chars").field(members).finish(),
            CharSet::Predicate(_) => f.write_str("Predicate(..)"),
            CharSet::Inverted(inner) => f.debug_tuple("Inverted").field(inner).finish(),
        }
    }
}

/// Tab and the Unicode `Zs` category.
fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{000B}' | '\u{000C}' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}
