use crate::{
    ast::{
        ast::BodyItem,
        statements::{Declaration, ElseClause, IfClause, Selector, Stylerule, VariableAssignment},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_body_item(parser: &mut Parser) -> Result<BodyItem, Error> {
    let Some(stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() else {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    };

    stmt_fn(parser)
}

/// Parses body items up to and including the closing curly.
fn parse_block(parser: &mut Parser) -> Result<Vec<BodyItem>, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut body = vec![];
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
        body.push(parse_body_item(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;
    Ok(body)
}

pub fn parse_declaration(parser: &mut Parser) -> Result<BodyItem, Error> {
    let property = parser.expect(TokenKind::LowerIdent)?.value;

    let error = parser.unexpected("expected `:` after property name");
    parser.expect_error(TokenKind::Colon, Some(error))?;

    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(BodyItem::Declaration(Declaration::new(property, expression)))
}

pub fn parse_variable_assignment(parser: &mut Parser) -> Result<VariableAssignment, Error> {
    let name = parser.expect(TokenKind::CapitalIdent)?.value;

    let error = parser.unexpected("expected `:=` after variable name");
    parser.expect_error(TokenKind::AssignmentOperator, Some(error))?;

    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(VariableAssignment::new(name, expression))
}

pub fn parse_variable_assignment_item(parser: &mut Parser) -> Result<BodyItem, Error> {
    Ok(BodyItem::VariableAssignment(parse_variable_assignment(parser)?))
}

pub fn parse_if_clause(parser: &mut Parser) -> Result<IfClause, Error> {
    parser.expect(TokenKind::If)?;

    let error = parser.unexpected("expected `[` before condition");
    parser.expect_error(TokenKind::OpenBracket, Some(error))?;

    let condition = parse_expr(parser, BindingPower::Default)?;

    let error = parser.unexpected("expected `]` after condition");
    parser.expect_error(TokenKind::CloseBracket, Some(error))?;

    let body = parse_block(parser)?;

    let else_clause = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(ElseClause::new(parse_block(parser)?))
    } else {
        None
    };

    Ok(IfClause::new(condition, body, else_clause))
}

pub fn parse_if_clause_item(parser: &mut Parser) -> Result<BodyItem, Error> {
    Ok(BodyItem::IfClause(parse_if_clause(parser)?))
}

fn parse_selector(parser: &mut Parser) -> Result<Selector, Error> {
    let token = parser.current_token().clone();

    let selector = match token.kind {
        TokenKind::LowerIdent => Selector::Tag(token.value),
        TokenKind::ClassIdent => Selector::Class(token.value),
        // Ids that happen to be six hex digits lex as colors
        TokenKind::IdIdent | TokenKind::Color => Selector::Id(token.value),
        _ => return Err(parser.unexpected("expected a selector")),
    };

    parser.advance();
    Ok(selector)
}

pub fn parse_stylerule(parser: &mut Parser) -> Result<Stylerule, Error> {
    let mut selectors = vec![parse_selector(parser)?];

    while parser.current_token_kind() != TokenKind::OpenCurly {
        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        }
        selectors.push(parse_selector(parser)?);
    }

    let body = parse_block(parser)?;

    Ok(Stylerule::new(selectors, body))
}
