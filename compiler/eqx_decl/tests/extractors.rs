//! Runs the extractors over a whole source file, one line at a time.

#![allow(clippy::unwrap_used, reason = "integration tests use unwrap for brevity")]

use eqx_decl::{scan_declaration, scan_type_name, scan_variable_name, Declaration, ParseError};
use pretty_assertions::assert_eq;

const SOURCE: &str = "\
import Foundation

public struct Account {
    public let id: UUID
    private(set) var balance: Decimal
    weak var owner: Person?
    fileprivate var cache : [String: Int]

    func deposit(_ amount: Decimal) {
        balance += amount
    }
}

enum Currency: String {
    case usd
}
";

#[test]
fn type_names_in_file() {
    let names: Vec<String> = SOURCE
        .lines()
        .filter_map(|line| scan_type_name(line).ok())
        .collect();
    // `public struct` is not matched: only a leading keyword is accepted.
    assert_eq!(names, ["Currency: String"]);
}

#[test]
fn variable_names_in_file() {
    let names: Vec<String> = SOURCE
        .lines()
        .filter_map(|line| scan_variable_name(line).ok())
        .collect();
    assert_eq!(names, ["id", "owner", "cache "]);
}

#[test]
fn declarations_in_file() {
    let decls: Vec<Declaration> = SOURCE
        .lines()
        .filter_map(|line| scan_declaration(line).ok())
        .collect();
    assert_eq!(decls.len(), 4);
    assert!(matches!(decls[3], Declaration::Type(_)));
}

#[test]
fn errors_carry_line_local_positions() {
    let error = scan_variable_name("    func deposit(_ amount: Decimal) {").unwrap_err();
    assert!(matches!(error, ParseError::ExpectedKeyword { .. }));
    assert_eq!((error.position().row, error.position().column), (1, 1));
}
