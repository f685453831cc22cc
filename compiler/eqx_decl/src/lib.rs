//! Extract declared names from single source lines.
//!
//! Each extractor runs a fresh [`Scanner`](eqx_scanner::Scanner) over one
//! line with the default skip set, probes the keywords it expects, and
//! captures the text up to the declaration's delimiter (`{` for types, `:`
//! for variables). Matching is line-oriented and order-sensitive; nothing
//! past the delimiter is validated.
//!
//! | Function | Accepts | Returns |
//! |---|---|---|
//! | [`scan_type_name`] | `struct`/`enum` NAME `{` | NAME, spaces trimmed |
//! | [`scan_variable_name`] | \[`weak`\] \[access\] \[`weak`\] `let`/`var` NAME `:` | NAME, untrimmed |
//! | [`scan_declaration`] | either of the above | [`Declaration`] |

mod declaration;
mod error;
mod type_name;
mod variable_name;

pub use declaration::{scan_declaration, Declaration};
pub use eqx_scanner::Position;
pub use error::ParseError;
pub use type_name::{scan_type_declaration, scan_type_name, TypeDeclaration, TypeKind};
pub use variable_name::{
    scan_variable_declaration, scan_variable_name, AccessModifier, Binding, VariableDeclaration,
};
