//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the stylesheet entry
//! point. The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and a statement lookup for rule body items.
//!
//! It maintains lookup tables for:
//! - Body item handlers
//! - NUD (null denotation) handlers for literals and variable references
//! - LED (left denotation) handlers for infix operators
//! - Binding powers for operator precedence

use std::{collections::HashMap, rc::Rc};

use tracing::trace;

use crate::{
    ast::ast::{Member, Stylesheet},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::{parse_stylerule, parse_variable_assignment},
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and maintains lookup tables for
/// parsing body items and expressions. It tracks the current position in
/// the token stream and provides methods for token consumption.
pub struct Parser {
    /// The list of tokens to parse, always ending in EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Lookup table for body item parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Reference-counted string containing the source file name
    ///
    /// # Returns
    ///
    /// A new Parser instance ready to parse the token stream.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Rc::clone(&file)));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: crate::Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            file,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    /// Stays on EOF once it is reached.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: Option<Error>) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Builds an `UnexpectedTokenDetailed` error at the current token.
    pub fn unexpected(&self, message: &str) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: String::from(message),
            },
            token.span.start.clone(),
        )
    }

    /// Checks if there are more tokens to parse.
    ///
    /// # Returns
    ///
    /// Returns true if the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the body item lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup.insert(kind, BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a body item handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.binding_power_lookup.insert(kind, BindingPower::Default);
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }
}

/// Parses a stream of tokens into a stylesheet.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses top-level variable assignments
/// and style rules until EOF. The first syntax error stops parsing.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Reference-counted string containing the source file name
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Stylesheet, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    let mut members = vec![];

    while parser.has_tokens() {
        let member = if parser.current_token_kind() == TokenKind::CapitalIdent {
            Member::VariableAssignment(parse_variable_assignment(&mut parser)?)
        } else {
            Member::Stylerule(parse_stylerule(&mut parser)?)
        };
        members.push(member);
    }

    trace!(members = members.len(), file = %parser.get_file(), "parsed stylesheet");
    Ok(Stylesheet::new(members))
}
