use super::*;
use crate::type_name::TypeKind;
use crate::variable_name::Binding;
use pretty_assertions::assert_eq;

#[test]
fn type_line() {
    let Ok(Declaration::Type(decl)) = scan_declaration("struct Point {") else {
        panic!("expected a type declaration");
    };
    assert_eq!(decl.kind, TypeKind::Struct);
    assert_eq!(decl.name, "Point");
}

#[test]
fn variable_line() {
    let Ok(Declaration::Variable(decl)) = scan_declaration("var x: Double") else {
        panic!("expected a variable declaration");
    };
    assert_eq!(decl.binding, Binding::Var);
    assert_eq!(decl.name, "x");
}

#[test]
fn name_of_either_kind() {
    let names: Vec<String> = ["enum Axis {", "let y: Double"]
        .into_iter()
        .filter_map(|line| scan_declaration(line).ok())
        .map(|decl| decl.name().to_owned())
        .collect();
    assert_eq!(names, ["Axis", "y"]);
}

#[test]
fn neither_reports_variable_error() {
    let line = "func area() -> Double {";
    assert_eq!(
        scan_declaration(line),
        Err(scan_variable_declaration(line).unwrap_err())
    );
}
