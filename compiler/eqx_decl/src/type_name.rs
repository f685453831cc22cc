//! `struct`/`enum` declaration lines.

use std::fmt;

use eqx_scanner::Scanner;

use crate::error::ParseError;

/// Keyword that introduced a type declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Struct,
    Enum,
}

impl TypeKind {
    /// Probed in this order.
    pub const ALL: [TypeKind; 2] = [TypeKind::Struct, TypeKind::Enum];

    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A recognised type declaration line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub kind: TypeKind,
    /// Everything between the keyword and `{`, spaces trimmed. Includes any
    /// inheritance clause: `enum Bar: Int {` gives `Bar: Int`.
    pub name: String,
}

/// Read `struct NAME {` or `enum NAME {` from `line`.
#[tracing::instrument(level = "trace")]
pub fn scan_type_declaration(line: &str) -> Result<TypeDeclaration, ParseError> {
    let mut scanner = Scanner::new(line);
    let result = type_declaration(&mut scanner);
    if let Err(error) = &result {
        tracing::debug!(%error, "not a type declaration");
    }
    result
}

/// Name of the type declared on `line`.
///
/// ```
/// assert_eq!(eqx_decl::scan_type_name("struct Foo {").unwrap(), "Foo");
/// assert!(eqx_decl::scan_type_name("class Foo {").is_err());
/// ```
pub fn scan_type_name(line: &str) -> Result<String, ParseError> {
    scan_type_declaration(line).map(|decl| decl.name)
}

fn type_declaration(scanner: &mut Scanner<'_>) -> Result<TypeDeclaration, ParseError> {
    let kind = TypeKind::ALL
        .into_iter()
        .find(|kind| scanner.scan_string(kind.keyword()).is_some())
        .ok_or_else(|| ParseError::expected_keyword(scanner, "`struct` or `enum`"))?;

    let name = scanner
        .scan_up_to("{")
        .ok_or_else(|| ParseError::missing_delimiter(scanner, '{'))?;

    Ok(TypeDeclaration {
        kind,
        name: name.trim_matches(' ').to_owned(),
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests;
