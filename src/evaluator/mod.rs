//! Evaluation and flattening of a checked stylesheet.
//!
//! This module turns the checked AST into its final shape:
//!
//! - Variable references are resolved through lexical scopes
//! - Arithmetic is folded to a single literal per declaration
//! - Compile-time if/else clauses are replaced by the branch they select
//! - Variable assignments are removed
//!
//! The result contains only style rules with literal-valued declarations.

pub mod evaluator;
