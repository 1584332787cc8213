/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The stylesheet root, member/body enums and the generic node view
/// - expressions: Literal, variable reference and operation expressions
/// - statements: Style rules, selectors, declarations, assignments and if/else
/// - types: Static expression types and literal values
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
