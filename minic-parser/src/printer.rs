//! Indented, pre-order rendering of an AST.
//!
//! Every node produces one header line naming its variant and scalar payload, followed by its children one level
//! deeper. Each level is indented by two spaces. `if` and `while` statements add labeled sections (`Condition:`,
//! `Then:`, `Else:`, `Body:`) whose contents are nested one level below the label.

use crate::ast::Node;
use crate::visitor::Visitor;
use std::fmt;

const INDENT: &str = "  ";

/// Renders the tree rooted at `root`. An absent root renders as the empty string.
pub fn print_tree(root: Option<&Node>) -> String {
    let mut printer = TreePrinter::new();
    if let Some(root) = root {
        printer.visit_node(root);
    }
    printer.into_inner()
}

/// One pending line of output.
enum Entry<'ast> {
    Node(&'ast Node),
    Label(&'static str),
    Params(&'ast [String]),
}

/// Accumulates the rendered trace of every node it visits.
///
/// Pending lines are kept on an explicit stack rather than the call stack, so arbitrarily deep trees can be printed.
#[derive(Debug, Default)]
pub struct TreePrinter {
    out: String,
    indent: usize,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `TreePrinter` whose first header line is nested `indent` levels deep.
    pub fn with_indent(indent: usize) -> Self {
        Self {
            out: String::new(),
            indent,
        }
    }

    /// Consumes the printer and returns the rendered trace.
    pub fn into_inner(self) -> String {
        self.out
    }

    fn line(&mut self, indent: usize, text: &str) {
        for _ in 0..indent {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn header(node: &Node) -> String {
        let kind = node.kind();
        match node {
            Node::Number(value) => format!("{}: {}", kind, value),
            Node::BinaryOp { op, .. } => format!("{}: {}", kind, op),
            Node::Identifier(ident)
            | Node::VarDecl { ident, .. }
            | Node::Assign { ident, .. }
            | Node::FunCall { ident, .. }
            | Node::FunDef { ident, .. } => format!("{}: {}", kind, ident),
            Node::Return(_) | Node::If { .. } | Node::While { .. } | Node::Compound(_) => {
                format!("{}:", kind)
            }
        }
    }

    /// Appends the lines below `node`'s header to `entries`, in output order.
    /// `indent` is the level of the header's direct children.
    fn layout<'ast>(node: &'ast Node, indent: usize, entries: &mut Vec<(usize, Entry<'ast>)>) {
        let mut section = |label: &'static str, child: &'ast Node| {
            entries.push((indent, Entry::Label(label)));
            entries.push((indent + 1, Entry::Node(child)));
        };

        match node {
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => {
                section("Condition:", &**condition);
                section("Then:", &**then_branch);
                if let Some(else_branch) = else_branch {
                    section("Else:", &**else_branch);
                }
            }
            Node::While { condition, body } => {
                section("Condition:", &**condition);
                section("Body:", &**body);
            }
            Node::FunDef { params, body, .. } => {
                entries.push((indent, Entry::Params(params.as_slice())));
                entries.push((indent, Entry::Node(&**body)));
            }
            Node::Number(_)
            | Node::Identifier(_)
            | Node::BinaryOp { .. }
            | Node::VarDecl { .. }
            | Node::Assign { .. }
            | Node::Return(_)
            | Node::FunCall { .. }
            | Node::Compound(_) => entries.extend(
                node.children()
                    .into_iter()
                    .map(|child| (indent, Entry::Node(child))),
            ),
        }
    }
}

impl<'ast> Visitor<'ast> for TreePrinter {
    fn visit_node(&mut self, node: &'ast Node) {
        let mut stack = vec![(self.indent, Entry::Node(node))];

        while let Some((indent, entry)) = stack.pop() {
            match entry {
                Entry::Label(label) => self.line(indent, label),
                Entry::Params(params) => {
                    let mut line = String::from("Params:");
                    for param in params {
                        line.push(' ');
                        line.push_str(param);
                    }
                    self.line(indent, &line);
                }
                Entry::Node(node) => {
                    self.line(indent, &Self::header(node));
                    // pushed in output order, popped in reverse
                    let first = stack.len();
                    Self::layout(node, indent + 1, &mut stack);
                    stack[first..].reverse();
                }
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_tree(Some(self)))
    }
}
