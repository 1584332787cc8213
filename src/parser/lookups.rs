use std::collections::HashMap;

use crate::{ast::{ast::BodyItem, expressions::Expression}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
    Primary
}

pub type StmtHandler = fn(&mut Parser) -> Result<BodyItem, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type LEDHandler = fn(&mut Parser, Expression, BindingPower) -> Result<Expression, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Min, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Mul, BindingPower::Multiplicative, parse_binary_expr);

    // Literals and variable references
    parser.nud(TokenKind::PixelSize, parse_primary_expr);
    parser.nud(TokenKind::Percentage, parse_primary_expr);
    parser.nud(TokenKind::Scalar, parse_primary_expr);
    parser.nud(TokenKind::Color, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::CapitalIdent, parse_primary_expr);

    // Body items
    parser.stmt(TokenKind::LowerIdent, parse_declaration);
    parser.stmt(TokenKind::CapitalIdent, parse_variable_assignment_item);
    parser.stmt(TokenKind::If, parse_if_clause_item);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
