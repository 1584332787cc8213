use tracing::{trace, warn};

use crate::ast::{
    ast::{BodyItem, Member, Stylesheet},
    statements::{Declaration, Stylerule},
};

/// Accumulates CSS text for a flattened stylesheet.
pub struct Generator {
    output: String,
    indent: String,
}

impl Generator {
    pub fn new(indent_width: usize) -> Self {
        Generator {
            output: String::new(),
            indent: " ".repeat(indent_width),
        }
    }

    pub fn finish(self) -> String {
        self.output
    }
}

pub fn generate_stylerule(generator: &mut Generator, rule: &Stylerule) {
    if !generator.output.is_empty() {
        generator.output.push('\n');
    }

    let selectors: Vec<String> = rule.selectors.iter().map(|selector| selector.to_string()).collect();
    generator.output.push_str(&format!("{} {{\n", selectors.join(", ")));

    for item in &rule.body {
        match item {
            BodyItem::Declaration(declaration) => generate_declaration(generator, declaration),
            BodyItem::VariableAssignment(_) | BodyItem::IfClause(_) => {
                trace!("skipping unflattened body item");
            }
        }
    }

    generator.output.push_str("}\n");
}

pub fn generate_declaration(generator: &mut Generator, declaration: &Declaration) {
    let Some(value) = declaration.expression.as_literal() else {
        warn!(
            property = %declaration.property,
            expression = %declaration.expression,
            "declaration was not folded to a literal, skipping"
        );
        return;
    };

    let line = format!("{}{}: {};\n", generator.indent, declaration.property, value);
    generator.output.push_str(&line);
}

/// Renders a flattened stylesheet as CSS text.
///
/// Top-level variable assignments produce no output. Rules are separated
/// by a blank line and every declaration sits on its own indented line.
pub fn generate(stylesheet: &Stylesheet, indent_width: usize) -> String {
    let mut generator = Generator::new(indent_width);

    for member in &stylesheet.members {
        if let Member::Stylerule(rule) = member {
            generate_stylerule(&mut generator, rule);
        }
    }

    generator.finish()
}
