//! Cursor scanner for declaration lines.
//!
//! A [`Scanner`] walks a borrowed `&str` left to right. Every primitive is a
//! *probe*: it first skips the configured skip set, then either consumes a
//! match and returns it, or returns `None` and leaves the cursor exactly where
//! it was before the call (skipped prefix included).
//!
//! # Modules
//!
//! - [`char_set`]: membership predicates used by `scan_characters` and
//!   `scan_up_to_characters`, and as the skip set.
//! - [`scanner`]: the cursor itself plus the text probes.
//! - [`numeric`]: decimal and hexadecimal number probes.
//! - [`decimal`]: the base-10 value returned by `scan_decimal`.
//! - [`position`]: 1-based row/column tracking, recomputed on demand.
//!
//! # Example
//!
//! ```
//! use eqx_scanner::{CharSet, Scanner};
//!
//! let mut scanner = Scanner::new("width = 0x1F;");
//! assert_eq!(scanner.scan_characters(&CharSet::Letters), Some("width"));
//! assert_eq!(scanner.scan_string("="), Some("="));
//! assert_eq!(scanner.scan_hex_int32(), Some(0x1F));
//! assert_eq!(scanner.position().column, 13);
//! ```

pub mod char_set;
pub mod decimal;
pub mod numeric;
pub mod position;
pub mod scanner;

pub use char_set::CharSet;
pub use decimal::Decimal;
pub use position::{locate, Position};
pub use scanner::{Scanner, ScannerConfig};
