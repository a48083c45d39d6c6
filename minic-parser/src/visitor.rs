//! Visitor pattern for AST nodes.

use crate::ast::Node;

pub trait Visitor<'ast>: Sized {
    fn visit_node(&mut self, node: &'ast Node) {
        walk_node(self, node);
    }
}

/// Visits the direct children of `node` in source order.
pub fn walk_node<'ast>(visitor: &mut impl Visitor<'ast>, node: &'ast Node) {
    /// Iteratively visit all nodes in a `Vec<Node>`.
    macro_rules! visit_node_list {
        ($visitor: expr, $body: expr) => {
            for node in $body {
                Visitor::visit_node($visitor, node);
            }
        };
    }

    match node {
        Node::Number(_) => {}
        Node::Identifier(_) => {}
        Node::BinaryOp { op: _, lhs, rhs } => {
            visitor.visit_node(lhs);
            visitor.visit_node(rhs);
        }
        Node::VarDecl {
            ident: _,
            initializer,
        } => {
            if let Some(initializer) = initializer {
                visitor.visit_node(initializer);
            }
        }
        Node::Assign { ident: _, value } => visitor.visit_node(value),
        Node::Return(expr) => visitor.visit_node(expr),
        Node::If {
            condition,
            then_branch,
            else_branch,
        } => {
            visitor.visit_node(condition);
            visitor.visit_node(then_branch);
            if let Some(else_branch) = else_branch {
                visitor.visit_node(else_branch);
            }
        }
        Node::While { condition, body } => {
            visitor.visit_node(condition);
            visitor.visit_node(body);
        }
        Node::FunCall { ident: _, args } => visit_node_list!(visitor, args),
        Node::FunDef {
            ident: _,
            params: _,
            body,
        } => visitor.visit_node(body),
        Node::Compound(body) => visit_node_list!(visitor, body),
    }
}
