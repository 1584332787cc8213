use tracing::debug;

use crate::{
    ast::{
        ast::{BodyItem, Member, Stylesheet},
        expressions::{Expression, Operation, OperationKind},
        statements::{Declaration, ElseClause, IfClause, Stylerule, VariableAssignment},
        types::ExpressionType,
    },
    errors::errors::SemanticError,
    scope::scope::ScopeChain,
};

/// Properties the checker knows about, with the types each accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    BackgroundColor,
    Color,
    Width,
    Height,
}

impl Property {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "background-color" => Some(Property::BackgroundColor),
            "color" => Some(Property::Color),
            "width" => Some(Property::Width),
            "height" => Some(Property::Height),
            _ => None,
        }
    }

    pub fn allowed_types(&self) -> &'static [ExpressionType] {
        match self {
            Property::BackgroundColor | Property::Color => &[ExpressionType::Color],
            Property::Width | Property::Height => &[ExpressionType::Pixel, ExpressionType::Percentage],
        }
    }

    pub fn accepts(&self, ty: ExpressionType) -> bool {
        self.allowed_types().contains(&ty)
    }

    fn describe_allowed(&self) -> String {
        self.allowed_types()
            .iter()
            .map(|ty| ty.to_string())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

#[derive(Debug, Default)]
pub struct Checker {
    pub variable_types: ScopeChain<ExpressionType>,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }
}

fn report(node: &str, error: &SemanticError) {
    debug!(node, %error, "semantic error");
}

pub fn check_stylesheet(checker: &mut Checker, stylesheet: &mut Stylesheet) {
    checker.variable_types.push();

    for member in stylesheet.members.iter_mut() {
        match member {
            Member::Stylerule(rule) => check_stylerule(checker, rule),
            Member::VariableAssignment(assignment) => check_variable_assignment(checker, assignment),
        }
    }

    checker.variable_types.pop();
}

pub fn check_stylerule(checker: &mut Checker, rule: &mut Stylerule) {
    // Selectors are valid by construction, only the body needs checking.
    checker.variable_types.push();
    check_body(checker, &mut rule.body);
    checker.variable_types.pop();
}

fn check_body(checker: &mut Checker, body: &mut [BodyItem]) {
    for item in body.iter_mut() {
        match item {
            BodyItem::Declaration(declaration) => check_declaration(checker, declaration),
            BodyItem::VariableAssignment(assignment) => check_variable_assignment(checker, assignment),
            BodyItem::IfClause(if_clause) => check_if_clause(checker, if_clause),
        }
    }
}

pub fn check_declaration(checker: &mut Checker, declaration: &mut Declaration) {
    let ty = check_expr(checker, &mut declaration.expression);

    let Some(property) = Property::from_name(&declaration.property) else {
        let error = SemanticError::UnknownProperty {
            property: declaration.property.clone(),
        };
        report(&declaration.property, &error);
        declaration.error = Some(error);
        return;
    };

    if ty != ExpressionType::Undefined && !property.accepts(ty) {
        let error = SemanticError::TypeMismatch {
            property: declaration.property.clone(),
            expected: property.describe_allowed(),
            received: ty,
        };
        report(&declaration.property, &error);
        declaration.error = Some(error);
    }
}

pub fn check_variable_assignment(checker: &mut Checker, assignment: &mut VariableAssignment) {
    let ty = check_expr(checker, &mut assignment.expression);
    // Undefined is stored too, later references then stay silent.
    checker.variable_types.declare(assignment.name.clone(), ty);
}

pub fn check_if_clause(checker: &mut Checker, if_clause: &mut IfClause) {
    checker.variable_types.push();

    let ty = check_expr(checker, &mut if_clause.condition);
    if ty != ExpressionType::Undefined && ty != ExpressionType::Bool {
        let error = SemanticError::InvalidConditional { received: ty };
        report("IfClause", &error);
        if_clause.error = Some(error);
    }

    check_body(checker, &mut if_clause.body);
    checker.variable_types.pop();

    // The else body is a sibling scope of the if body, not nested in it.
    if let Some(else_clause) = if_clause.else_clause.as_mut() {
        check_else_clause(checker, else_clause);
    }
}

pub fn check_else_clause(checker: &mut Checker, else_clause: &mut ElseClause) {
    checker.variable_types.push();
    check_body(checker, &mut else_clause.body);
    checker.variable_types.pop();
}

/// Computes the static type of an expression, attaching errors to the
/// offending nodes. Returns `Undefined` for anything that failed.
pub fn check_expr(checker: &mut Checker, expression: &mut Expression) -> ExpressionType {
    match expression {
        Expression::Literal(literal) => literal.value.get_type(),
        Expression::VariableReference(reference) => {
            match checker.variable_types.resolve(&reference.name) {
                Some(ty) => *ty,
                None => {
                    let error = SemanticError::UndefinedVariable {
                        variable: reference.name.clone(),
                    };
                    report(&reference.name, &error);
                    reference.error = Some(error);
                    ExpressionType::Undefined
                }
            }
        }
        Expression::Operation(operation) => check_operation(checker, operation),
    }
}

fn reject_literal_operand(operand: &mut Expression) -> bool {
    let Some(literal) = operand.as_literal() else {
        return false;
    };
    if literal.is_operand() {
        return false;
    }

    let error = SemanticError::IllegalOperand {
        operand: literal.to_string(),
    };
    report("Literal", &error);
    operand.set_error(error);
    true
}

fn check_operation(checker: &mut Checker, operation: &mut Operation) -> ExpressionType {
    let lhs_rejected = reject_literal_operand(&mut operation.lhs);
    let rhs_rejected = reject_literal_operand(&mut operation.rhs);
    if lhs_rejected || rhs_rejected {
        return ExpressionType::Undefined;
    }

    let left = check_expr(checker, &mut operation.lhs);
    let right = check_expr(checker, &mut operation.rhs);
    if left == ExpressionType::Undefined || right == ExpressionType::Undefined {
        return ExpressionType::Undefined;
    }

    // Colors and booleans reached through a variable.
    for (side, ty) in [(&operation.lhs, left), (&operation.rhs, right)] {
        if matches!(ty, ExpressionType::Color | ExpressionType::Bool) {
            let error = SemanticError::IllegalOperand {
                operand: format!("{} of type {}", side, ty),
            };
            report("Operation", &error);
            operation.error = Some(error);
            return ExpressionType::Undefined;
        }
    }

    let result = match operation.kind {
        OperationKind::Add | OperationKind::Subtract => {
            if left == right {
                Ok(left)
            } else {
                Err(SemanticError::OperandTypeMismatch { left, right })
            }
        }
        OperationKind::Multiply => match (left, right) {
            (ExpressionType::Scalar, other) | (other, ExpressionType::Scalar) => Ok(other),
            _ => Err(SemanticError::InvalidMultiply { left, right }),
        },
    };

    match result {
        Ok(ty) => ty,
        Err(error) => {
            report("Operation", &error);
            operation.error = Some(error);
            ExpressionType::Undefined
        }
    }
}

/// Checks a whole stylesheet in place.
///
/// Errors are attached to the nodes that caused them and the walk always
/// covers the full tree. Use [`Stylesheet::diagnostics`] afterwards to
/// decide whether the tree may be evaluated.
pub fn check(ast: &mut Stylesheet) {
    debug!(members = ast.members.len(), "checking stylesheet");

    let mut checker = Checker::new();
    check_stylesheet(&mut checker, ast);
}
