//! Utility macros for the compiler.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Scalar, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for fixed single-token patterns.
///
/// Generates a handler function that pushes a token with the given kind
/// and advances the lexer position by the token's length.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let span = lexer.span_of($value.len());
            lexer.push(MK_TOKEN!($kind, String::from($value), span));
            lexer.advance_n($value.len());
        }
    };
}

/// Creates a lexer handler that pushes whatever the pattern matched as a
/// token of the given kind.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\.[a-z0-9\\-]+").unwrap(),
///     handler: MK_MATCH_HANDLER!(TokenKind::ClassIdent),
/// }
/// ```
#[macro_export]
macro_rules! MK_MATCH_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, regex: &Regex| {
            let matched = lexer.matched(regex);
            let span = lexer.span_of(matched.len());
            lexer.advance_n(matched.len());
            lexer.push(MK_TOKEN!($kind, matched, span));
        }
    };
}
