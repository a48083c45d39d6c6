//! Frontend for minic: the AST, its traversal and printer, the lexer and the parser.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod visitor;

pub use ast::{Node, NodeKind};
pub use printer::print_tree;
