//! Unit tests for CSS generation.

use super::generator::generate;
use crate::ast::{
    ast::{BodyItem, Member, Stylesheet},
    expressions::Expression,
    statements::{Declaration, IfClause, Selector, Stylerule, VariableAssignment},
};

fn declaration(property: &str, expression: Expression) -> BodyItem {
    BodyItem::from(Declaration::new(property, expression))
}

#[test]
fn test_generate_empty_stylesheet() {
    assert_eq!(generate(&Stylesheet::default(), 2), "");
}

#[test]
fn test_generate_single_rule() {
    let stylesheet = Stylesheet::new(vec![Member::from(Stylerule::new(
        vec![Selector::Tag("p".to_string())],
        vec![
            declaration("width", Expression::pixel(30)),
            declaration("background-color", Expression::color("#ff0000")),
        ],
    ))]);

    assert_eq!(
        generate(&stylesheet, 2),
        "p {\n  width: 30px;\n  background-color: #ff0000;\n}\n"
    );
}

#[test]
fn test_generate_multiple_rules_and_selectors() {
    let stylesheet = Stylesheet::new(vec![
        Member::from(VariableAssignment::new("Unused", Expression::scalar(1))),
        Member::from(Stylerule::new(
            vec![Selector::Tag("a".to_string()), Selector::Class(".menu".to_string())],
            vec![declaration("height", Expression::percentage(50))],
        )),
        Member::from(Stylerule::new(vec![Selector::Id("#nav".to_string())], vec![])),
    ]);

    assert_eq!(
        generate(&stylesheet, 4),
        "a, .menu {\n    height: 50%;\n}\n\n#nav {\n}\n"
    );
}

#[test]
fn test_generate_skips_unflattened_items() {
    let stylesheet = Stylesheet::new(vec![Member::from(Stylerule::new(
        vec![Selector::Tag("p".to_string())],
        vec![
            BodyItem::from(IfClause::new(Expression::bool(true), vec![], None)),
            declaration("width", Expression::add(Expression::pixel(1), Expression::pixel(2))),
            declaration("height", Expression::scalar(3)),
        ],
    ))]);

    assert_eq!(generate(&stylesheet, 2), "p {\n  height: 3;\n}\n");
}
