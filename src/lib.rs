#![allow(clippy::module_inception)]

use std::{rc::Rc, time::Instant};

use tracing::debug;

use crate::{
    checker::checker::check,
    ast::ast::Stylesheet,
    errors::errors::{CompileError, Error, ErrorTip},
    evaluator::evaluator::apply,
    generator::generator::generate,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod checker;
pub mod errors;
pub mod evaluator;
pub mod generator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod scope;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Settings for a single compilation.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Name reported in error positions, `shell` when absent
    pub file_name: Option<String>,
    /// Spaces before each generated declaration
    pub indent_width: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            file_name: None,
            indent_width: 2,
        }
    }
}

/// Tokenizes, parses and checks one source text.
///
/// Semantic errors do not stop the checker, so every one of them is
/// returned together. On success the checked tree is ready for `apply`.
pub fn check_source(source: &str, options: &CompileOptions) -> Result<Stylesheet, CompileError> {
    let file = Rc::new(options.file_name.clone().unwrap_or_else(|| String::from("shell")));

    let start = Instant::now();
    let tokens = tokenize(source, Some(file.to_string())).map_err(CompileError::Syntax)?;
    debug!(tokens = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    let parse_start = Instant::now();
    let mut stylesheet = parse(tokens, Rc::clone(&file)).map_err(CompileError::Syntax)?;
    debug!(members = stylesheet.members.len(), elapsed = ?parse_start.elapsed(), "parsed");

    let check_start = Instant::now();
    check(&mut stylesheet);
    let diagnostics = stylesheet.diagnostics();
    debug!(errors = diagnostics.len(), elapsed = ?check_start.elapsed(), "checked");

    if !diagnostics.is_empty() {
        return Err(CompileError::Semantic(diagnostics));
    }

    Ok(stylesheet)
}

/// Runs the whole pipeline on one source text and returns the CSS.
///
/// The evaluator only runs on a tree without semantic errors.
pub fn compile_source(source: &str, options: &CompileOptions) -> Result<String, CompileError> {
    let start = Instant::now();
    let mut stylesheet = check_source(source, options)?;

    let apply_start = Instant::now();
    apply(&mut stylesheet).map_err(CompileError::Evaluation)?;
    debug!(elapsed = ?apply_start.elapsed(), "flattened");

    let css = generate(&stylesheet, options.indent_width);
    debug!(elapsed = ?start.elapsed(), "compiled");

    Ok(css)
}

/// Finds the line holding a byte offset.
///
/// Returns the 1-based line number, the line text (with its newline) and
/// the offset within that line. An offset equal to the source length maps
/// to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut last = None;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        last = Some((index + 1, line.to_string(), line.trim_end_matches('\n').len()));
        start = end;
    }

    last
}

/// Renders an error for the terminal.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `}`, did you miss a semicolon?)
/// -> style.icss
///   |
/// 2 | width: 10px
///   | -----------^
/// ```
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    let mut output = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };

    let Some((line, line_text, line_pos)) = error
        .get_position()
        .and_then(|position| get_line_at_position(source, position.0))
    else {
        output.push_str(&format!("{}\n", error));
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("-> {}\n", file));
    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (String::from(&string[start..]), start)
}
