//! CSS text generation from a flattened stylesheet.

pub mod generator;

#[cfg(test)]
mod tests;
