use std::fmt::Display;

use crate::errors::errors::SemanticError;

use super::{ast::BodyItem, expressions::Expression};

/// Style rule: one or more selectors followed by a body.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylerule {
    pub selectors: Vec<Selector>,
    pub body: Vec<BodyItem>,
}

impl Stylerule {
    pub fn new(selectors: Vec<Selector>, body: Vec<BodyItem>) -> Self {
        Stylerule { selectors, body }
    }
}

/// Selector of a style rule. Class and id names keep their `.`/`#` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    Tag(String),
    Class(String),
    Id(String),
}

impl Selector {
    pub fn name(&self) -> &str {
        match self {
            Selector::Tag(name) | Selector::Class(name) | Selector::Id(name) => name,
        }
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub expression: Expression,
    pub error: Option<SemanticError>,
}

impl Declaration {
    pub fn new(property: impl Into<String>, expression: Expression) -> Self {
        Declaration {
            property: property.into(),
            expression,
            error: None,
        }
    }
}

/// `Name := expression;`. Removed from the tree by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignment {
    pub name: String,
    pub expression: Expression,
}

impl VariableAssignment {
    pub fn new(name: impl Into<String>, expression: Expression) -> Self {
        VariableAssignment {
            name: name.into(),
            expression,
        }
    }
}

/// `if [condition] { ... } else { ... }`. Replaced by the evaluator with the
/// contents of the branch it selects.
#[derive(Debug, Clone, PartialEq)]
pub struct IfClause {
    pub condition: Expression,
    pub body: Vec<BodyItem>,
    pub else_clause: Option<ElseClause>,
    pub error: Option<SemanticError>,
}

impl IfClause {
    pub fn new(condition: Expression, body: Vec<BodyItem>, else_clause: Option<ElseClause>) -> Self {
        IfClause {
            condition,
            body,
            else_clause,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseClause {
    pub body: Vec<BodyItem>,
}

impl ElseClause {
    pub fn new(body: Vec<BodyItem>) -> Self {
        ElseClause { body }
    }
}
