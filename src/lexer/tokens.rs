use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("TRUE", TokenKind::True);
        map.insert("true", TokenKind::True);
        map.insert("FALSE", TokenKind::False);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    // Literals
    PixelSize,  // 10px
    Percentage, // 50%
    Scalar,     // 3
    Color,      // #ff00ff
    True,
    False,

    // Identifiers
    IdIdent,      // #menu
    ClassIdent,   // .menu
    LowerIdent,   // p, width, background-color
    CapitalIdent, // Variable names

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    AssignmentOperator, // :=
    Colon,
    Semicolon,
    Comma,

    Plus,
    Min,
    Mul,

    // Reserved
    If,
    Else,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
