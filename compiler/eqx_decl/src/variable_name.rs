//! `let`/`var` declaration lines.
//!
//! Modifiers are probed in a fixed order: `weak`, one access modifier, `weak`
//! again, then the binding keyword. Both `weak private var` and
//! `private weak var` are accepted.

use std::fmt;

use eqx_scanner::Scanner;

use crate::error::ParseError;

/// Access-control keyword preceding a variable declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessModifier {
    Open,
    Public,
    Internal,
    Private,
    FilePrivate,
}

impl AccessModifier {
    /// Probe order; the first match wins.
    pub const ALL: [AccessModifier; 5] = [
        AccessModifier::Open,
        AccessModifier::Public,
        AccessModifier::Internal,
        AccessModifier::Private,
        AccessModifier::FilePrivate,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            AccessModifier::Open => "open",
            AccessModifier::Public => "public",
            AccessModifier::Internal => "internal",
            AccessModifier::Private => "private",
            AccessModifier::FilePrivate => "fileprivate",
        }
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Binding keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Binding {
    Let,
    Var,
}

impl Binding {
    pub const ALL: [Binding; 2] = [Binding::Let, Binding::Var];

    pub fn keyword(self) -> &'static str {
        match self {
            Binding::Let => "let",
            Binding::Var => "var",
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A recognised variable declaration line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableDeclaration {
    /// Text between the binding keyword and `:`, not trimmed.
    pub name: String,
    pub access: Option<AccessModifier>,
    /// `weak` appeared before or after the access modifier.
    pub is_weak: bool,
    pub binding: Binding,
}

#[tracing::instrument(level = "trace")]
pub fn scan_variable_declaration(line: &str) -> Result<VariableDeclaration, ParseError> {
    let mut scanner = Scanner::new(line);
    let result = variable_declaration(&mut scanner);
    if let Err(error) = &result {
        tracing::debug!(%error, "not a variable declaration");
    }
    result
}

/// Name of the variable declared on `line`.
///
/// ```
/// let name = eqx_decl::scan_variable_name("private weak var delegate: AnyObject?").unwrap();
/// assert_eq!(name, "delegate");
/// ```
pub fn scan_variable_name(line: &str) -> Result<String, ParseError> {
    scan_variable_declaration(line).map(|decl| decl.name)
}

fn variable_declaration(scanner: &mut Scanner<'_>) -> Result<VariableDeclaration, ParseError> {
    let mut is_weak = scanner.scan_string("weak").is_some();
    let access = AccessModifier::ALL
        .into_iter()
        .find(|modifier| scanner.scan_string(modifier.keyword()).is_some());
    is_weak |= scanner.scan_string("weak").is_some();

    let binding = Binding::ALL
        .into_iter()
        .find(|binding| scanner.scan_string(binding.keyword()).is_some())
        .ok_or_else(|| ParseError::expected_keyword(scanner, "`let` or `var`"))?;

    let name = scanner
        .scan_up_to(":")
        .ok_or_else(|| ParseError::missing_delimiter(scanner, ':'))?;

    Ok(VariableDeclaration {
        name: name.to_owned(),
        access,
        is_weak,
        binding,
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests;
