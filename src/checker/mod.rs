//! Semantic checking of the stylesheet AST.
//!
//! This module walks the tree top-down and enforces the ICSS type rules:
//!
//! - Every expression gets a static type (color, pixel, percentage, scalar or bool)
//! - Declarations must match the types their property accepts
//! - Arithmetic is restricted per operator, colors and booleans never take part
//! - Variables resolve through lexical scopes opened by rules and if/else bodies
//! - If conditions must be boolean
//!
//! Errors are attached to the offending node and never stop the walk.

pub mod checker;

#[cfg(test)]
mod tests;
