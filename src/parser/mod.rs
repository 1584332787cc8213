//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a stylesheet tree. It uses a Pratt parser for expressions with
//! proper operator precedence and handles:
//!
//! - Top-level variable assignments and style rules
//! - Rule bodies (declarations, assignments, if/else clauses)
//! - Expressions (additive and multiplicative operations, literals,
//!   variable references)
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
