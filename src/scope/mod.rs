//! Lexical scoping shared by the checker and the evaluator.
//!
//! A frame is pushed for the stylesheet, for every rule body and for every
//! if/else body. Lookups walk the frames innermost-first, so inner
//! assignments shadow outer ones.

pub mod scope;

#[cfg(test)]
mod tests;
