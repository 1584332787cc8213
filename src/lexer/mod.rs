//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts ICSS source
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered regex pattern table
//! - Recognition of keywords, selectors, variable names and unit literals
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
