use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::ExpressionType, Position};

/// Positioned error raised by the lexer, the parser or the evaluator.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    /// Creates an error that is not tied to a place in the source, such as
    /// a failure while flattening an already checked tree.
    pub fn unpositioned(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnresolvedExpression { .. } => "UnresolvedExpression",
            ErrorImpl::NonBooleanCondition { .. } => "NonBooleanCondition",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnresolvedExpression { expression } => ErrorTip::Suggestion(format!(
                "Expression `{}` could not be folded to a literal, was the stylesheet checked?",
                expression
            )),
            ErrorImpl::NonBooleanCondition { condition } => ErrorTip::Suggestion(format!(
                "Condition `{}` did not evaluate to TRUE or FALSE",
                condition
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.position {
            Some(position) => write!(f, "{} at {}:{}", self.internal_error, position.1, position.0),
            None => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expression {expression} cannot be evaluated to a literal")]
    UnresolvedExpression { expression: String },
    #[error("condition {condition} is not a boolean")]
    NonBooleanCondition { condition: String },
}

/// Semantic error attached to the node that caused it.
///
/// The variant is the error kind, the `Display` output is the message shown
/// to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    #[error("unknown property {property:?}")]
    UnknownProperty { property: String },
    #[error("property {property:?} expects {expected}, received {received}")]
    TypeMismatch {
        property: String,
        expected: String,
        received: ExpressionType,
    },
    #[error("{operand} cannot be used in an operation")]
    IllegalOperand { operand: String },
    #[error("operand types do not match: {left} and {right}")]
    OperandTypeMismatch {
        left: ExpressionType,
        right: ExpressionType,
    },
    #[error("multiplication needs a scalar operand, received {left} and {right}")]
    InvalidMultiply {
        left: ExpressionType,
        right: ExpressionType,
    },
    #[error("variable {variable:?} not defined")]
    UndefinedVariable { variable: String },
    #[error("if condition must be a boolean, received {received}")]
    InvalidConditional { received: ExpressionType },
}

impl SemanticError {
    pub fn get_error_name(&self) -> &str {
        match self {
            SemanticError::UnknownProperty { .. } => "UnknownProperty",
            SemanticError::TypeMismatch { .. } => "TypeMismatch",
            SemanticError::IllegalOperand { .. } => "IllegalOperand",
            SemanticError::OperandTypeMismatch { .. } => "OperandTypeMismatch",
            SemanticError::InvalidMultiply { .. } => "InvalidMultiply",
            SemanticError::UndefinedVariable { .. } => "UndefinedVariable",
            SemanticError::InvalidConditional { .. } => "InvalidConditional",
        }
    }
}

/// A semantic error together with the label of the node carrying it.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticDiagnostic {
    pub node: String,
    pub error: SemanticError,
}

impl Display for SemanticDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.node, self.error)
    }
}

/// Failure of a whole compilation, by stage.
#[derive(Error, Debug, Clone)]
pub enum CompileError {
    #[error("syntax error: {0}")]
    Syntax(Error),
    #[error("{} semantic error(s) found", .0.len())]
    Semantic(Vec<SemanticDiagnostic>),
    #[error("evaluation error: {0}")]
    Evaluation(Error),
}
