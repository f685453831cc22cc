//! Either kind of declaration line.

use crate::error::ParseError;
use crate::type_name::{scan_type_declaration, TypeDeclaration};
use crate::variable_name::{scan_variable_declaration, VariableDeclaration};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Declaration {
    Type(TypeDeclaration),
    Variable(VariableDeclaration),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Type(decl) => &decl.name,
            Declaration::Variable(decl) => &decl.name,
        }
    }
}

/// Try the type extractor, then the variable extractor.
///
/// When neither matches, the variable extractor's error is returned.
pub fn scan_declaration(line: &str) -> Result<Declaration, ParseError> {
    if let Ok(decl) = scan_type_declaration(line) {
        return Ok(Declaration::Type(decl));
    }
    scan_variable_declaration(line).map(Declaration::Variable)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test assertions use unwrap and panic for clarity"
)]
mod tests;
