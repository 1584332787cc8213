//! Unit tests for the checker.
//!
//! Trees are built by hand so each rule can be exercised on its own.

use super::checker::{check, check_expr, Checker, Property};
use crate::{
    ast::{
        ast::{BodyItem, Member, Stylesheet},
        expressions::Expression,
        statements::{Declaration, ElseClause, IfClause, Selector, Stylerule, VariableAssignment},
        types::ExpressionType,
    },
    errors::errors::SemanticError,
};

fn rule(body: Vec<BodyItem>) -> Member {
    Member::from(Stylerule::new(vec![Selector::Tag("p".to_string())], body))
}

fn declaration(property: &str, expression: Expression) -> BodyItem {
    BodyItem::from(Declaration::new(property, expression))
}

fn assignment(name: &str, expression: Expression) -> VariableAssignment {
    VariableAssignment::new(name, expression)
}

fn type_of(expression: Expression) -> (ExpressionType, Expression) {
    let mut checker = Checker::new();
    checker.variable_types.push();
    let mut expression = expression;
    let ty = check_expr(&mut checker, &mut expression);
    (ty, expression)
}

fn error_names(stylesheet: &Stylesheet) -> Vec<String> {
    stylesheet
        .diagnostics()
        .iter()
        .map(|diagnostic| diagnostic.error.get_error_name().to_string())
        .collect()
}

#[test]
fn test_well_typed_declarations_pass() {
    let mut stylesheet = Stylesheet::new(vec![rule(vec![
        declaration("color", Expression::color("#ff0000")),
        declaration("background-color", Expression::color("#ffffff")),
        declaration("width", Expression::pixel(10)),
        declaration("height", Expression::percentage(50)),
    ])]);

    check(&mut stylesheet);

    assert!(!stylesheet.has_errors());
}

#[test]
fn test_type_mismatch_attached_to_declaration() {
    let mut stylesheet = Stylesheet::new(vec![rule(vec![
        declaration("width", Expression::color("#ff0000")),
        declaration("color", Expression::pixel(10)),
    ])]);

    check(&mut stylesheet);

    let diagnostics = stylesheet.diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].node, "Declaration (width)");
    assert!(matches!(
        diagnostics[0].error,
        SemanticError::TypeMismatch {
            received: ExpressionType::Color,
            ..
        }
    ));
    assert_eq!(diagnostics[1].node, "Declaration (color)");
}

#[test]
fn test_scalar_width_is_rejected() {
    let mut stylesheet = Stylesheet::new(vec![rule(vec![declaration("width", Expression::scalar(3))])]);

    check(&mut stylesheet);

    assert_eq!(error_names(&stylesheet), vec!["TypeMismatch"]);
}

#[test]
fn test_unknown_property() {
    let mut stylesheet = Stylesheet::new(vec![rule(vec![declaration("colour", Expression::color("#ff0000"))])]);

    check(&mut stylesheet);

    let diagnostics = stylesheet.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].error,
        SemanticError::UnknownProperty {
            property: "colour".to_string()
        }
    );
}

#[test]
fn test_undefined_variable_reported_once() {
    let mut stylesheet = Stylesheet::new(vec![rule(vec![declaration("width", Expression::reference("Missing"))])]);

    check(&mut stylesheet);

    let diagnostics = stylesheet.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].node, "VariableReference (Missing)");
    assert_eq!(diagnostics[0].error.get_error_name(), "UndefinedVariable");
}

#[test]
fn test_undefined_reference_types_as_undefined() {
    let (ty, expression) = type_of(Expression::reference("Missing"));

    assert_eq!(ty, ExpressionType::Undefined);
    assert!(expression.get_error().is_some());
}

#[test]
fn test_global_variable_visible_in_rule() {
    let mut stylesheet = Stylesheet::new(vec![
        Member::from(assignment("LinkColor", Expression::color("#ff0000"))),
        rule(vec![declaration("color", Expression::reference("LinkColor"))]),
    ]);

    check(&mut stylesheet);

    assert!(!stylesheet.has_errors());
}

#[test]
fn test_variable_not_visible_before_assignment() {
    let mut stylesheet = Stylesheet::new(vec![rule(vec![
        declaration("width", Expression::reference("Width")),
        BodyItem::from(assignment("Width", Expression::pixel(10))),
        declaration("height", Expression::reference("Width")),
    ])]);

    check(&mut stylesheet);

    let diagnostics = stylesheet.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].node, "VariableReference (Width)");
}

#[test]
fn test_rule_variable_not_visible_in_other_rule() {
    let mut stylesheet = Stylesheet::new(vec![
        rule(vec![BodyItem::from(assignment("Local", Expression::pixel(1)))]),
        rule(vec![declaration("width", Expression::reference("Local"))]),
    ]);

    check(&mut stylesheet);

    assert_eq!(error_names(&stylesheet), vec!["UndefinedVariable"]);
}

#[test]
fn test_if_body_variable_scoping() {
    // Visible to later siblings and nested blocks inside the if, not before
    // or after it in the enclosing rule.
    let mut stylesheet = Stylesheet::new(vec![rule(vec![
        declaration("width", Expression::reference("Inner")),
        BodyItem::from(IfClause::new(
            Expression::bool(true),
            vec![
                BodyItem::from(assignment("Inner", Expression::pixel(5))),
                declaration("width", Expression::reference("Inner")),
                BodyItem::from(IfClause::new(
                    Expression::bool(true),
                    vec![declaration("height", Expression::reference("Inner"))],
                    None,
                )),
            ],
            None,
        )),
        declaration("height", Expression::reference("Inner")),
    ])]);

    check(&mut stylesheet);

    let diagnostics = stylesheet.diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics
        .iter()
        .all(|diagnostic| diagnostic.error.get_error_name() == "UndefinedVariable"));
}

#[test]
fn test_shadowing_inner_type_wins() {
    let mut stylesheet = Stylesheet::new(vec![
        Member::from(assignment("Size", Expression::color("#000000"))),
        rule(vec![
            BodyItem::from(assignment("Size", Expression::pixel(10))),
            declaration("width", Expression::reference("Size")),
        ]),
    ]);

    check(&mut stylesheet);

    assert!(!stylesheet.has_errors());
}

#[test]
fn test_else_does_not_see_if_body_variables() {
    let mut stylesheet = Stylesheet::new(vec![rule(vec![BodyItem::from(IfClause::new(
        Expression::bool(false),
        vec![BodyItem::from(assignment("Branch", Expression::pixel(1)))],
        Some(ElseClause::new(vec![declaration("width", Expression::reference("Branch"))])),
    ))])]);

    check(&mut stylesheet);

    assert_eq!(error_names(&stylesheet), vec!["UndefinedVariable"]);
}

#[test]
fn test_add_subtract_rules() {
    assert_eq!(type_of(Expression::add(Expression::pixel(1), Expression::pixel(2))).0, ExpressionType::Pixel);
    assert_eq!(
        type_of(Expression::subtract(Expression::percentage(1), Expression::percentage(2))).0,
        ExpressionType::Percentage
    );
    assert_eq!(type_of(Expression::add(Expression::scalar(1), Expression::scalar(2))).0, ExpressionType::Scalar);

    let (ty, expression) = type_of(Expression::add(Expression::pixel(1), Expression::percentage(2)));
    assert_eq!(ty, ExpressionType::Undefined);
    assert!(matches!(
        expression.get_error(),
        Some(SemanticError::OperandTypeMismatch {
            left: ExpressionType::Pixel,
            right: ExpressionType::Percentage
        })
    ));
}

#[test]
fn test_multiply_rules() {
    assert_eq!(type_of(Expression::multiply(Expression::scalar(2), Expression::pixel(10))).0, ExpressionType::Pixel);
    assert_eq!(type_of(Expression::multiply(Expression::pixel(10), Expression::scalar(2))).0, ExpressionType::Pixel);
    assert_eq!(
        type_of(Expression::multiply(Expression::percentage(10), Expression::scalar(2))).0,
        ExpressionType::Percentage
    );
    assert_eq!(type_of(Expression::multiply(Expression::scalar(2), Expression::scalar(3))).0, ExpressionType::Scalar);

    let (ty, expression) = type_of(Expression::multiply(Expression::pixel(10), Expression::pixel(2)));
    assert_eq!(ty, ExpressionType::Undefined);
    assert!(matches!(expression.get_error(), Some(SemanticError::InvalidMultiply { .. })));

    let (ty, _) = type_of(Expression::multiply(Expression::pixel(10), Expression::percentage(2)));
    assert_eq!(ty, ExpressionType::Undefined);
}

#[test]
fn test_color_and_bool_literal_operands_rejected() {
    for expression in [
        Expression::add(Expression::color("#ffffff"), Expression::pixel(1)),
        Expression::subtract(Expression::pixel(1), Expression::bool(true)),
        Expression::multiply(Expression::scalar(2), Expression::color("#000000")),
        Expression::add(Expression::bool(false), Expression::bool(true)),
    ] {
        let mut stylesheet = Stylesheet::new(vec![rule(vec![declaration("width", expression)])]);

        check(&mut stylesheet);

        let diagnostics = stylesheet.diagnostics();
        assert!(!diagnostics.is_empty());
        assert!(diagnostics
            .iter()
            .all(|diagnostic| diagnostic.error.get_error_name() == "IllegalOperand"));
        assert!(diagnostics.iter().all(|diagnostic| diagnostic.node.starts_with("Literal")));
    }
}

#[test]
fn test_color_operand_through_variable_rejected() {
    let mut stylesheet = Stylesheet::new(vec![
        Member::from(assignment("Main", Expression::color("#ff0000"))),
        rule(vec![declaration(
            "color",
            Expression::add(Expression::reference("Main"), Expression::reference("Main")),
        )]),
    ]);

    check(&mut stylesheet);

    let diagnostics = stylesheet.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].node, "Operation (+)");
    assert_eq!(diagnostics[0].error.get_error_name(), "IllegalOperand");
}

#[test]
fn test_nested_errors_do_not_cascade() {
    // The inner mismatch is the only error, the outer add and the
    // declaration stay quiet.
    let mut stylesheet = Stylesheet::new(vec![rule(vec![declaration(
        "width",
        Expression::add(
            Expression::add(Expression::pixel(1), Expression::percentage(1)),
            Expression::pixel(2),
        ),
    )])]);

    check(&mut stylesheet);

    assert_eq!(error_names(&stylesheet), vec!["OperandTypeMismatch"]);
}

#[test]
fn test_broken_variable_does_not_cascade() {
    let mut stylesheet = Stylesheet::new(vec![
        Member::from(assignment("Broken", Expression::reference("Nope"))),
        rule(vec![declaration("width", Expression::reference("Broken"))]),
    ]);

    check(&mut stylesheet);

    assert_eq!(error_names(&stylesheet), vec!["UndefinedVariable"]);
}

#[test]
fn test_conditional_must_be_boolean() {
    let mut stylesheet = Stylesheet::new(vec![
        Member::from(assignment("Flag", Expression::pixel(1))),
        rule(vec![
            BodyItem::from(IfClause::new(Expression::reference("Flag"), vec![], None)),
            BodyItem::from(IfClause::new(Expression::scalar(1), vec![], None)),
        ]),
    ]);

    check(&mut stylesheet);

    let diagnostics = stylesheet.diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|diagnostic| diagnostic.node == "IfClause"));
    assert_eq!(
        diagnostics[0].error,
        SemanticError::InvalidConditional {
            received: ExpressionType::Pixel
        }
    );
}

#[test]
fn test_boolean_variable_conditional_passes() {
    let mut stylesheet = Stylesheet::new(vec![
        Member::from(assignment("UseColor", Expression::bool(true))),
        rule(vec![BodyItem::from(IfClause::new(
            Expression::reference("UseColor"),
            vec![declaration("color", Expression::color("#124532"))],
            Some(ElseClause::new(vec![declaration("color", Expression::color("#000000"))])),
        ))]),
    ]);

    check(&mut stylesheet);

    assert!(!stylesheet.has_errors());
}

#[test]
fn test_errors_in_one_rule_do_not_stop_the_next() {
    let mut stylesheet = Stylesheet::new(vec![
        rule(vec![declaration("width", Expression::reference("A"))]),
        rule(vec![declaration("height", Expression::reference("B"))]),
    ]);

    check(&mut stylesheet);

    assert_eq!(stylesheet.diagnostics().len(), 2);
}

#[test]
fn test_end_to_end_scalar_times_pixel() {
    let mut stylesheet = Stylesheet::new(vec![
        Member::from(assignment("K", Expression::scalar(3))),
        rule(vec![declaration(
            "width",
            Expression::multiply(Expression::reference("K"), Expression::pixel(10)),
        )]),
    ]);

    check(&mut stylesheet);

    assert!(!stylesheet.has_errors());
}

#[test]
fn test_property_lookup() {
    assert_eq!(Property::from_name("background-color"), Some(Property::BackgroundColor));
    assert_eq!(Property::from_name("margin"), None);
    assert!(Property::Width.accepts(ExpressionType::Percentage));
    assert!(!Property::Color.accepts(ExpressionType::Pixel));
}
