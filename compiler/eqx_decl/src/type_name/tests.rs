use super::*;
use eqx_scanner::locate;
use pretty_assertions::assert_eq;

// === Accepted lines ===

#[test]
fn struct_name() {
    assert_eq!(scan_type_name("struct Foo {").unwrap(), "Foo");
}

#[test]
fn enum_with_raw_type_keeps_clause() {
    assert_eq!(scan_type_name("enum Bar: Int {").unwrap(), "Bar: Int");
}

#[test]
fn structured_result_carries_kind() {
    assert_eq!(
        scan_type_declaration("  enum Suit {").unwrap(),
        TypeDeclaration {
            kind: TypeKind::Enum,
            name: "Suit".to_owned(),
        }
    );
}

#[test]
fn surrounding_spaces_are_trimmed() {
    assert_eq!(scan_type_name("   struct   Foo   {").unwrap(), "Foo");
}

#[test]
fn only_spaces_are_trimmed() {
    assert_eq!(scan_type_name("struct Foo\t{").unwrap(), "Foo\t");
}

#[test]
fn missing_brace_takes_rest_of_line() {
    assert_eq!(scan_type_name("struct Foo").unwrap(), "Foo");
}

#[test]
fn brace_right_after_keyword_is_empty_name() {
    assert_eq!(scan_type_name("struct {").unwrap(), "");
}

#[test]
fn keyword_match_is_not_word_aware() {
    assert_eq!(scan_type_name("structure Foo {").unwrap(), "ure Foo");
}

// === Rejected lines ===

#[test]
fn class_is_rejected() {
    let error = scan_type_name("class Foo {").unwrap_err();
    assert_eq!(
        error,
        ParseError::ExpectedKeyword {
            expected: "`struct` or `enum`",
            at: locate("class Foo {", 0),
        }
    );
    assert_eq!(error.to_string(), "1:1: expected `struct` or `enum`");
}

#[test]
fn access_modifier_before_type_is_rejected() {
    assert!(scan_type_name("public struct Foo {").is_err());
}

#[test]
fn keyword_alone_is_missing_name() {
    let error = scan_type_name("struct   ").unwrap_err();
    assert!(matches!(
        error,
        ParseError::MissingDelimiter { delimiter: '{', .. }
    ));
    assert_eq!(error.position().column, 7);
    assert_eq!(error.to_string(), "1:7: expected a name before `{`");
}

#[test]
fn empty_line_is_rejected() {
    assert!(matches!(
        scan_type_declaration(""),
        Err(ParseError::ExpectedKeyword { .. })
    ));
}

#[test]
fn kind_display_is_keyword() {
    assert_eq!(TypeKind::Struct.to_string(), "struct");
    assert_eq!(TypeKind::Enum.to_string(), "enum");
}
