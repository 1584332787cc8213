use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_MATCH_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("token patterns are valid regular expressions"),
        handler,
    }
}

lazy_static! {
    // Tried in order, the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern(r"^\s+", skip_handler),
        pattern(r"^/\*(?s:.*?)\*/", skip_handler),
        pattern(r"^//[^\n]*", skip_handler),
        pattern(r"^[0-9]+px", MK_MATCH_HANDLER!(TokenKind::PixelSize)),
        pattern(r"^[0-9]+%", MK_MATCH_HANDLER!(TokenKind::Percentage)),
        pattern(r"^[0-9]+", MK_MATCH_HANDLER!(TokenKind::Scalar)),
        pattern(r"^#[0-9a-fA-F]{6}\b", MK_MATCH_HANDLER!(TokenKind::Color)),
        pattern(r"^#[a-z0-9\-]+", MK_MATCH_HANDLER!(TokenKind::IdIdent)),
        pattern(r"^\.[a-z0-9\-]+", MK_MATCH_HANDLER!(TokenKind::ClassIdent)),
        pattern(r"^[A-Z][A-Za-z0-9_]*", capital_ident_handler),
        pattern(r"^[a-z][a-z0-9\-]*", lower_ident_handler),
        pattern(r"^:=", MK_DEFAULT_HANDLER!(TokenKind::AssignmentOperator, ":=")),
        pattern(r"^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern(r"^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern(r"^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern(r"^\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern(r"^\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        pattern(r"^\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        pattern(r"^\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        pattern(r"^\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern(r"^-", MK_DEFAULT_HANDLER!(TokenKind::Min, "-")),
        pattern(r"^\*", MK_DEFAULT_HANDLER!(TokenKind::Mul, "*")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from("shell")));

        Lexer {
            pos: 0,
            tokens: vec![],
            source: source.to_string(),
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span from the cursor covering the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    /// Text the regex matches at the cursor, empty if it does not match.
    pub fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let skipped = lexer.matched(regex).len();
    lexer.advance_n(skipped);
}

fn ident_handler(lexer: &mut Lexer, regex: &Regex, kind: TokenKind) {
    let value = lexer.matched(regex);
    let kind = RESERVED_LOOKUP.get(value.as_str()).copied().unwrap_or(kind);
    let span = lexer.span_of(value.len());

    lexer.advance_n(value.len());
    lexer.push(MK_TOKEN!(kind, value, span));
}

fn capital_ident_handler(lexer: &mut Lexer, regex: &Regex) {
    ident_handler(lexer, regex, TokenKind::CapitalIdent);
}

fn lower_ident_handler(lexer: &mut Lexer, regex: &Regex) {
    ident_handler(lexer, regex, TokenKind::LowerIdent);
}

pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                let token = lex.at().map(String::from).unwrap_or_default();
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, lex.position()));
            }
        }
    }

    let span = lex.span_of(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span));
    trace!(tokens = lex.tokens.len(), "tokenized source");

    Ok(lex.tokens)
}
