use super::*;
use pretty_assertions::assert_eq;

// === Accepted lines ===

#[test]
fn plain_let() {
    assert_eq!(scan_variable_name("let x: Int").unwrap(), "x");
}

#[test]
fn name_is_not_trimmed() {
    assert_eq!(scan_variable_name("var count : Int").unwrap(), "count ");
}

#[test]
fn access_then_weak() {
    assert_eq!(
        scan_variable_declaration("private weak var delegate: AnyObject?").unwrap(),
        VariableDeclaration {
            name: "delegate".to_owned(),
            access: Some(AccessModifier::Private),
            is_weak: true,
            binding: Binding::Var,
        }
    );
}

#[test]
fn weak_then_access() {
    let decl = scan_variable_declaration("weak public var view: UIView?").unwrap();
    assert_eq!(decl.access, Some(AccessModifier::Public));
    assert!(decl.is_weak);
}

#[test]
fn weak_without_access() {
    let decl = scan_variable_declaration("weak var parent: Node?").unwrap();
    assert_eq!(decl.access, None);
    assert!(decl.is_weak);
}

#[test]
fn fileprivate_is_not_mistaken_for_private() {
    let decl = scan_variable_declaration("fileprivate let cache: [String: Int]").unwrap();
    assert_eq!(decl.access, Some(AccessModifier::FilePrivate));
    assert_eq!(decl.binding, Binding::Let);
    assert_eq!(decl.name, "cache");
}

#[test]
fn every_access_modifier() {
    for access in AccessModifier::ALL {
        let line = format!("{access} let value: Int");
        let decl = scan_variable_declaration(&line).unwrap();
        assert_eq!(decl.access, Some(access), "{line:?}");
        assert!(!decl.is_weak);
    }
}

#[test]
fn missing_colon_takes_rest_of_line() {
    assert_eq!(scan_variable_name("let x").unwrap(), "x");
}

// === Rejected lines ===

#[test]
fn function_is_rejected() {
    let error = scan_variable_name("func foo()").unwrap_err();
    assert!(matches!(
        error,
        ParseError::ExpectedKeyword {
            expected: "`let` or `var`",
            ..
        }
    ));
    assert_eq!(error.position().column, 1);
}

#[test]
fn error_points_past_consumed_modifiers() {
    let error = scan_variable_name("private func foo()").unwrap_err();
    assert_eq!(error.position().column, 8);
    assert_eq!(error.to_string(), "1:8: expected `let` or `var`");
}

#[test]
fn unknown_modifier_is_rejected() {
    assert!(scan_variable_name("static let shared: Foo").is_err());
}

#[test]
fn binding_alone_is_missing_name() {
    let error = scan_variable_name("let").unwrap_err();
    assert!(matches!(
        error,
        ParseError::MissingDelimiter { delimiter: ':', .. }
    ));
    assert_eq!(error.position().column, 4);
}

#[test]
fn display_is_keyword() {
    assert_eq!(AccessModifier::FilePrivate.to_string(), "fileprivate");
    assert_eq!(Binding::Var.to_string(), "var");
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_lines {
    use super::*;
    use proptest::prelude::*;

    fn access() -> impl Strategy<Value = Option<AccessModifier>> {
        proptest::option::of(proptest::sample::select(AccessModifier::ALL.to_vec()))
    }

    fn binding() -> impl Strategy<Value = Binding> {
        proptest::sample::select(Binding::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn composed_line_round_trips(
            access in access(),
            weak_before in any::<bool>(),
            weak_after in any::<bool>(),
            binding in binding(),
            name in "[a-z][a-zA-Z0-9]{0,8}",
        ) {
            let mut line = String::new();
            if weak_before {
                line.push_str("weak ");
            }
            if let Some(access) = access {
                line.push_str(access.keyword());
                line.push(' ');
            }
            if weak_after {
                line.push_str("weak ");
            }
            line.push_str(&format!("{binding} {name}: Int"));

            let decl = scan_variable_declaration(&line).unwrap();
            prop_assert_eq!(decl.access, access);
            prop_assert_eq!(decl.is_weak, weak_before || weak_after);
            prop_assert_eq!(decl.binding, binding);
            prop_assert_eq!(decl.name, name);
        }
    }
}
