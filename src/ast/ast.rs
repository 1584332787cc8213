use crate::errors::errors::{SemanticDiagnostic, SemanticError};

use super::{
    expressions::Expression,
    statements::{Declaration, ElseClause, IfClause, Selector, Stylerule, VariableAssignment},
};

/// Root of the tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    pub members: Vec<Member>,
}

impl Stylesheet {
    pub fn new(members: Vec<Member>) -> Self {
        Stylesheet { members }
    }

    /// Walks the whole tree in declaration order and returns every error the
    /// checker attached, labelled with the node it sits on.
    pub fn diagnostics(&self) -> Vec<SemanticDiagnostic> {
        let mut diagnostics = vec![];
        collect_diagnostics(NodeRef::Stylesheet(self), &mut diagnostics);
        diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics().is_empty()
    }
}

fn collect_diagnostics(node: NodeRef<'_>, diagnostics: &mut Vec<SemanticDiagnostic>) {
    if let Some(error) = node.get_error() {
        diagnostics.push(SemanticDiagnostic {
            node: node.get_label(),
            error: error.clone(),
        });
    }

    for child in node.children() {
        collect_diagnostics(child, diagnostics);
    }
}

/// Top-level member of a stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Stylerule(Stylerule),
    VariableAssignment(VariableAssignment),
}

/// Item of a rule, if or else body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyItem {
    Declaration(Declaration),
    VariableAssignment(VariableAssignment),
    IfClause(IfClause),
}

impl From<Stylerule> for Member {
    fn from(rule: Stylerule) -> Self {
        Member::Stylerule(rule)
    }
}

impl From<VariableAssignment> for Member {
    fn from(assignment: VariableAssignment) -> Self {
        Member::VariableAssignment(assignment)
    }
}

impl From<Declaration> for BodyItem {
    fn from(declaration: Declaration) -> Self {
        BodyItem::Declaration(declaration)
    }
}

impl From<VariableAssignment> for BodyItem {
    fn from(assignment: VariableAssignment) -> Self {
        BodyItem::VariableAssignment(assignment)
    }
}

impl From<IfClause> for BodyItem {
    fn from(if_clause: IfClause) -> Self {
        BodyItem::IfClause(if_clause)
    }
}

/// Borrowed view of any node in the tree.
///
/// Gives every node kind the same contract: an ordered list of children, a
/// label for diagnostics and the error attached to it, if any. Children are
/// listed in the order the node interprets them (an operation yields its
/// lhs before its rhs, an if clause yields its condition, its body items and
/// then its else clause).
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Stylesheet(&'a Stylesheet),
    Stylerule(&'a Stylerule),
    Selector(&'a Selector),
    Declaration(&'a Declaration),
    VariableAssignment(&'a VariableAssignment),
    IfClause(&'a IfClause),
    ElseClause(&'a ElseClause),
    Expression(&'a Expression),
}

impl<'a> NodeRef<'a> {
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match *self {
            NodeRef::Stylesheet(stylesheet) => stylesheet
                .members
                .iter()
                .map(|member| match member {
                    Member::Stylerule(rule) => NodeRef::Stylerule(rule),
                    Member::VariableAssignment(assignment) => NodeRef::VariableAssignment(assignment),
                })
                .collect(),
            NodeRef::Stylerule(rule) => rule
                .selectors
                .iter()
                .map(NodeRef::Selector)
                .chain(rule.body.iter().map(NodeRef::from))
                .collect(),
            NodeRef::Selector(_) => vec![],
            NodeRef::Declaration(declaration) => vec![NodeRef::Expression(&declaration.expression)],
            NodeRef::VariableAssignment(assignment) => vec![NodeRef::Expression(&assignment.expression)],
            NodeRef::IfClause(if_clause) => {
                let mut children = vec![NodeRef::Expression(&if_clause.condition)];
                children.extend(if_clause.body.iter().map(NodeRef::from));
                if let Some(else_clause) = &if_clause.else_clause {
                    children.push(NodeRef::ElseClause(else_clause));
                }
                children
            }
            NodeRef::ElseClause(else_clause) => else_clause.body.iter().map(NodeRef::from).collect(),
            NodeRef::Expression(Expression::Operation(operation)) => vec![
                NodeRef::Expression(&operation.lhs),
                NodeRef::Expression(&operation.rhs),
            ],
            NodeRef::Expression(_) => vec![],
        }
    }

    pub fn get_label(&self) -> String {
        match self {
            NodeRef::Stylesheet(_) => String::from("Stylesheet"),
            NodeRef::Stylerule(_) => String::from("Stylerule"),
            NodeRef::Selector(Selector::Tag(name)) => format!("TagSelector ({})", name),
            NodeRef::Selector(Selector::Class(name)) => format!("ClassSelector ({})", name),
            NodeRef::Selector(Selector::Id(name)) => format!("IdSelector ({})", name),
            NodeRef::Declaration(declaration) => format!("Declaration ({})", declaration.property),
            NodeRef::VariableAssignment(assignment) => format!("VariableAssignment ({})", assignment.name),
            NodeRef::IfClause(_) => String::from("IfClause"),
            NodeRef::ElseClause(_) => String::from("ElseClause"),
            NodeRef::Expression(Expression::Literal(literal)) => format!("Literal ({})", literal.value),
            NodeRef::Expression(Expression::VariableReference(reference)) => {
                format!("VariableReference ({})", reference.name)
            }
            NodeRef::Expression(Expression::Operation(operation)) => format!("Operation ({})", operation.kind),
        }
    }

    pub fn get_error(&self) -> Option<&'a SemanticError> {
        match *self {
            NodeRef::Declaration(declaration) => declaration.error.as_ref(),
            NodeRef::IfClause(if_clause) => if_clause.error.as_ref(),
            NodeRef::Expression(expression) => expression.get_error(),
            _ => None,
        }
    }
}

impl<'a> From<&'a BodyItem> for NodeRef<'a> {
    fn from(item: &'a BodyItem) -> Self {
        match item {
            BodyItem::Declaration(declaration) => NodeRef::Declaration(declaration),
            BodyItem::VariableAssignment(assignment) => NodeRef::VariableAssignment(assignment),
            BodyItem::IfClause(if_clause) => NodeRef::IfClause(if_clause),
        }
    }
}
