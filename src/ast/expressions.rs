use std::fmt::Display;

use crate::errors::errors::SemanticError;

use super::types::Literal;

/// Expression node: a literal, a variable reference or an arithmetic
/// operation. Each variant keeps its own error slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(LiteralExpr),
    VariableReference(VariableReference),
    Operation(Operation),
}

impl Expression {
    pub fn bool(value: bool) -> Self {
        Expression::literal(Literal::Bool(value))
    }

    pub fn color(value: impl Into<String>) -> Self {
        Expression::literal(Literal::Color(value.into()))
    }

    pub fn pixel(value: i64) -> Self {
        Expression::literal(Literal::Pixel(value))
    }

    pub fn percentage(value: i64) -> Self {
        Expression::literal(Literal::Percentage(value))
    }

    pub fn scalar(value: i64) -> Self {
        Expression::literal(Literal::Scalar(value))
    }

    pub fn literal(value: Literal) -> Self {
        Expression::Literal(LiteralExpr { value, error: None })
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Expression::VariableReference(VariableReference {
            name: name.into(),
            error: None,
        })
    }

    pub fn add(lhs: Expression, rhs: Expression) -> Self {
        Expression::operation(OperationKind::Add, lhs, rhs)
    }

    pub fn subtract(lhs: Expression, rhs: Expression) -> Self {
        Expression::operation(OperationKind::Subtract, lhs, rhs)
    }

    pub fn multiply(lhs: Expression, rhs: Expression) -> Self {
        Expression::operation(OperationKind::Multiply, lhs, rhs)
    }

    pub fn operation(kind: OperationKind, lhs: Expression, rhs: Expression) -> Self {
        Expression::Operation(Operation {
            kind,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            error: None,
        })
    }

    /// Returns the literal value if this expression is a plain literal.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Literal(literal) => Some(&literal.value),
            _ => None,
        }
    }

    pub fn get_error(&self) -> Option<&SemanticError> {
        match self {
            Expression::Literal(literal) => literal.error.as_ref(),
            Expression::VariableReference(reference) => reference.error.as_ref(),
            Expression::Operation(operation) => operation.error.as_ref(),
        }
    }

    pub fn set_error(&mut self, error: SemanticError) {
        match self {
            Expression::Literal(literal) => literal.error = Some(error),
            Expression::VariableReference(reference) => reference.error = Some(error),
            Expression::Operation(operation) => operation.error = Some(error),
        }
    }
}

impl From<Literal> for Expression {
    fn from(value: Literal) -> Self {
        Expression::literal(value)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(literal) => write!(f, "{}", literal.value),
            Expression::VariableReference(reference) => write!(f, "{}", reference.name),
            Expression::Operation(operation) => write!(
                f,
                "({} {} {})",
                operation.lhs, operation.kind, operation.rhs
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
    pub error: Option<SemanticError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableReference {
    pub name: String,
    pub error: Option<SemanticError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Add => write!(f, "+"),
            OperationKind::Subtract => write!(f, "-"),
            OperationKind::Multiply => write!(f, "*"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub kind: OperationKind,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
    pub error: Option<SemanticError>,
}
