use std::mem;

use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{BodyItem, Member, Stylesheet},
        expressions::{Expression, OperationKind},
        statements::{IfClause, VariableAssignment},
        types::Literal,
    },
    errors::errors::{Error, ErrorImpl},
    scope::scope::ScopeChain,
};

#[derive(Debug, Default)]
pub struct Evaluator {
    pub variable_values: ScopeChain<Literal>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds an expression to a literal using the current scopes.
    ///
    /// Returns `None` when a variable is unknown or the operand types have
    /// no arithmetic defined for them, which a checked tree never contains.
    pub fn evaluate(&self, expression: &Expression) -> Option<Literal> {
        match expression {
            Expression::Literal(literal) => Some(literal.value.clone()),
            Expression::VariableReference(reference) => self.variable_values.resolve(&reference.name).cloned(),
            Expression::Operation(operation) => {
                let left = self.evaluate(&operation.lhs)?;
                let right = self.evaluate(&operation.rhs)?;
                evaluate_operation(operation.kind, &left, &right)
            }
        }
    }

    fn evaluate_to_literal(&self, expression: &Expression) -> Result<Literal, Error> {
        self.evaluate(expression).ok_or_else(|| {
            Error::unpositioned(ErrorImpl::UnresolvedExpression {
                expression: expression.to_string(),
            })
        })
    }

    fn assign(&mut self, assignment: &VariableAssignment) -> Result<(), Error> {
        let value = self.evaluate_to_literal(&assignment.expression)?;
        trace!(name = %assignment.name, %value, "bound variable");
        self.variable_values.declare(assignment.name.clone(), value);
        Ok(())
    }
}

/// Arithmetic on two literals.
///
/// Add and subtract need operands of the same numeric unit, multiply needs
/// at least one scalar and keeps the unit of the other side.
pub fn evaluate_operation(kind: OperationKind, left: &Literal, right: &Literal) -> Option<Literal> {
    match kind {
        OperationKind::Add | OperationKind::Subtract => {
            let apply = |l: i64, r: i64| match kind {
                OperationKind::Add => l.checked_add(r),
                _ => l.checked_sub(r),
            };
            match (left, right) {
                (Literal::Pixel(l), Literal::Pixel(r)) => apply(*l, *r).map(Literal::Pixel),
                (Literal::Percentage(l), Literal::Percentage(r)) => apply(*l, *r).map(Literal::Percentage),
                (Literal::Scalar(l), Literal::Scalar(r)) => apply(*l, *r).map(Literal::Scalar),
                _ => None,
            }
        }
        OperationKind::Multiply => match (left, right) {
            (Literal::Pixel(l), Literal::Scalar(r)) | (Literal::Scalar(l), Literal::Pixel(r)) => {
                l.checked_mul(*r).map(Literal::Pixel)
            }
            (Literal::Percentage(l), Literal::Scalar(r)) | (Literal::Scalar(l), Literal::Percentage(r)) => {
                l.checked_mul(*r).map(Literal::Percentage)
            }
            (Literal::Scalar(l), Literal::Scalar(r)) => l.checked_mul(*r).map(Literal::Scalar),
            _ => None,
        },
    }
}

pub fn apply_stylesheet(evaluator: &mut Evaluator, stylesheet: &mut Stylesheet) -> Result<(), Error> {
    evaluator.variable_values.push();
    let result = apply_members(evaluator, stylesheet);
    evaluator.variable_values.pop();
    result
}

fn apply_members(evaluator: &mut Evaluator, stylesheet: &mut Stylesheet) -> Result<(), Error> {
    let mut members = mem::take(&mut stylesheet.members).into_iter();

    while let Some(mut member) = members.next() {
        let result = match &mut member {
            Member::Stylerule(rule) => flatten_body(evaluator, &rule.body).map(|body| rule.body = body),
            Member::VariableAssignment(assignment) => evaluator.assign(assignment),
        };

        if let Err(error) = result {
            // The failing member and everything after it stay as they were.
            stylesheet.members.push(member);
            stylesheet.members.extend(members);
            return Err(error);
        }

        if let Member::Stylerule(_) = member {
            stylesheet.members.push(member);
        }
    }

    Ok(())
}

/// Flattens a rule, if or else body in its own scope.
///
/// Declarations keep their order with a literal expression and assignments
/// are recorded and dropped. The contents of the branches picked by if
/// clauses are appended after the body's own declarations.
pub fn flatten_body(evaluator: &mut Evaluator, body: &[BodyItem]) -> Result<Vec<BodyItem>, Error> {
    evaluator.variable_values.push();
    let result = flatten_items(evaluator, body);
    evaluator.variable_values.pop();
    result
}

fn flatten_items(evaluator: &mut Evaluator, body: &[BodyItem]) -> Result<Vec<BodyItem>, Error> {
    let mut flattened = Vec::with_capacity(body.len());
    let mut branches = vec![];

    for item in body {
        match item {
            BodyItem::Declaration(declaration) => {
                let value = evaluator.evaluate_to_literal(&declaration.expression)?;
                let mut declaration = declaration.clone();
                declaration.expression = Expression::from(value);
                flattened.push(BodyItem::Declaration(declaration));
            }
            BodyItem::VariableAssignment(assignment) => evaluator.assign(assignment)?,
            BodyItem::IfClause(if_clause) => branches.extend(resolve_if_clause(evaluator, if_clause)?),
        }
    }

    flattened.extend(branches);
    Ok(flattened)
}

/// Picks the branch of an if clause and returns its flattened contents.
/// A false condition without an else branch yields nothing.
pub fn resolve_if_clause(evaluator: &mut Evaluator, if_clause: &IfClause) -> Result<Vec<BodyItem>, Error> {
    let condition = match evaluator.evaluate(&if_clause.condition) {
        Some(Literal::Bool(value)) => value,
        _ => {
            return Err(Error::unpositioned(ErrorImpl::NonBooleanCondition {
                condition: if_clause.condition.to_string(),
            }))
        }
    };
    trace!(condition, "resolved if clause");

    if condition {
        flatten_body(evaluator, &if_clause.body)
    } else if let Some(else_clause) = &if_clause.else_clause {
        flatten_body(evaluator, &else_clause.body)
    } else {
        Ok(vec![])
    }
}

/// Flattens a checked stylesheet in place.
///
/// Afterwards the tree holds only style rules whose bodies are declarations
/// with literal expressions. Running it on a tree with checker errors is a
/// caller bug and fails with the first expression that cannot be folded.
pub fn apply(ast: &mut Stylesheet) -> Result<(), Error> {
    debug!(members = ast.members.len(), "evaluating stylesheet");

    let mut evaluator = Evaluator::new();
    apply_stylesheet(&mut evaluator, ast)
}
