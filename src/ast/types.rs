use std::fmt::Display;

/// Static type of an ICSS expression.
///
/// `Undefined` is returned for any expression that already carries an error,
/// so that enclosing nodes do not report follow-up errors for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionType {
    Bool,
    Color,
    Pixel,
    Percentage,
    Scalar,
    Undefined,
}

impl Display for ExpressionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExpressionType::Bool => "BOOL",
            ExpressionType::Color => "COLOR",
            ExpressionType::Pixel => "PIXEL",
            ExpressionType::Percentage => "PERCENTAGE",
            ExpressionType::Scalar => "SCALAR",
            ExpressionType::Undefined => "UNDEFINED",
        };
        write!(f, "{}", name)
    }
}

/// A literal value. Every variant has a fixed [`ExpressionType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Bool(bool),
    Color(String),
    Pixel(i64),
    Percentage(i64),
    Scalar(i64),
}

impl Literal {
    pub fn get_type(&self) -> ExpressionType {
        match self {
            Literal::Bool(_) => ExpressionType::Bool,
            Literal::Color(_) => ExpressionType::Color,
            Literal::Pixel(_) => ExpressionType::Pixel,
            Literal::Percentage(_) => ExpressionType::Percentage,
            Literal::Scalar(_) => ExpressionType::Scalar,
        }
    }

    /// Colors and booleans can never take part in arithmetic.
    pub fn is_operand(&self) -> bool {
        !matches!(self, Literal::Bool(_) | Literal::Color(_))
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Bool(true) => write!(f, "TRUE"),
            Literal::Bool(false) => write!(f, "FALSE"),
            Literal::Color(value) => write!(f, "{}", value),
            Literal::Pixel(value) => write!(f, "{}px", value),
            Literal::Percentage(value) => write!(f, "{}%", value),
            Literal::Scalar(value) => write!(f, "{}", value),
        }
    }
}
