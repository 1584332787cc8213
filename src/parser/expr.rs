use crate::{
    ast::{
        expressions::{Expression, OperationKind},
        types::Literal,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected("expected a literal or variable"));
    };

    let mut left = nud_fn(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while let Some(next_bp) = parser.get_bp_lookup().get(&parser.current_token_kind()).copied() {
        if next_bp <= bp {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&parser.current_token_kind()).copied() else {
            return Err(parser.unexpected("expected an operator or `;`"));
        };

        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

fn parse_number(token: &Token, suffix: &str) -> Result<i64, Error> {
    token
        .value
        .strip_suffix(suffix)
        .unwrap_or(&token.value)
        .parse()
        .map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            )
        })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    let expression = match token.kind {
        TokenKind::PixelSize => Expression::literal(Literal::Pixel(parse_number(&token, "px")?)),
        TokenKind::Percentage => Expression::literal(Literal::Percentage(parse_number(&token, "%")?)),
        TokenKind::Scalar => Expression::literal(Literal::Scalar(parse_number(&token, "")?)),
        TokenKind::Color => Expression::color(token.value.clone()),
        TokenKind::True => Expression::bool(true),
        TokenKind::False => Expression::bool(false),
        TokenKind::CapitalIdent => Expression::reference(token.value.clone()),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: token.value },
                token.span.start,
            ))
        }
    };

    parser.advance();
    Ok(expression)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expression, bp: BindingPower) -> Result<Expression, Error> {
    let operator_token = parser.advance().clone();

    let kind = match operator_token.kind {
        TokenKind::Plus => OperationKind::Add,
        TokenKind::Min => OperationKind::Subtract,
        TokenKind::Mul => OperationKind::Multiply,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.value,
                },
                operator_token.span.start,
            ))
        }
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expression::operation(kind, left, right))
}
