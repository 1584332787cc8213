use std::collections::HashMap;

use tracing::{trace, warn};

type ScopeFrame<T> = HashMap<String, T>;

/// Ordered stack of lexical frames.
///
/// The checker keeps variable types in it, the evaluator keeps literal
/// values. Each pass owns its own chain for the duration of one call.
#[derive(Debug, Clone)]
pub struct ScopeChain<T> {
    frames: Vec<ScopeFrame<T>>,
}

impl<T> Default for ScopeChain<T> {
    fn default() -> Self {
        ScopeChain { frames: vec![] }
    }
}

impl<T> ScopeChain<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a new frame
    pub fn push(&mut self) {
        self.frames.push(HashMap::new());
        trace!(depth = self.frames.len(), "entered scope");
    }

    /// Leave the innermost frame
    pub fn pop(&mut self) {
        if self.frames.pop().is_none() {
            warn!("attempted to leave a scope with no frames left");
        }
        trace!(depth = self.frames.len(), "left scope");
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Bind a name in the innermost frame, replacing an earlier binding of
    /// the same name in that frame.
    pub fn declare(&mut self, name: impl Into<String>, value: T) {
        let name = name.into();
        let depth = self.frames.len();
        match self.frames.last_mut() {
            Some(frame) => {
                trace!(%name, depth, "declared variable");
                frame.insert(name, value);
            }
            None => warn!(%name, "declared variable outside of any scope, ignoring"),
        }
    }

    /// Resolve a name by searching from innermost to outermost frame
    pub fn resolve(&self, name: &str) -> Option<&T> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}
