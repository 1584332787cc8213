//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Positioned errors for the lexer, the parser and the evaluator
//! - Semantic errors that the checker attaches to AST nodes
//! - The stage-level `CompileError` returned by the driver
//! - Helpful error messages and suggestions

pub mod errors;
