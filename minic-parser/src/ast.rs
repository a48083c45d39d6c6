//! Abstract syntax tree.
//!
//! Nodes are built bottom-up through the factory functions on [`Node`]. Every factory takes ownership of its
//! children and copies names into owned strings, so a tree never borrows from the buffer it was parsed from.

use std::{fmt, mem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An integer literal (e.g. `5`).
    Number(i32),
    /// An identifier (e.g. `foo`).
    Identifier(String),
    /// A binary expression (e.g. `1+1`).
    BinaryOp {
        op: char,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    /// A variable declaration (e.g. `int x = 1;` or `int x;`).
    VarDecl {
        ident: String,
        initializer: Option<Box<Node>>,
    },
    /// An assignment (e.g. `x = 1;`).
    Assign { ident: String, value: Box<Node> },
    Return(Box<Node>),
    If {
        condition: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
    /// A function call (e.g. `f(a, b)`). Arguments are kept in call-site order.
    FunCall { ident: String, args: Vec<Node> },
    /// A function definition (e.g. `int f(int a) { ... }`).
    FunDef {
        ident: String,
        params: Vec<String>,
        body: Box<Node>,
    },
    /// A block (e.g. `{ ... }`). Statements are kept in execution order.
    Compound(Vec<Node>),
}

/// Fieldless tag of a [`Node`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Number,
    Identifier,
    BinaryOp,
    VarDecl,
    Assign,
    Return,
    If,
    While,
    FunCall,
    FunDef,
    Compound,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Number => "Number",
            NodeKind::Identifier => "Identifier",
            NodeKind::BinaryOp => "BinaryOp",
            NodeKind::VarDecl => "VarDecl",
            NodeKind::Assign => "Assign",
            NodeKind::Return => "Return",
            NodeKind::If => "If",
            NodeKind::While => "While",
            NodeKind::FunCall => "Function Call",
            NodeKind::FunDef => "Function Definition",
            NodeKind::Compound => "Compound Statement",
        };
        f.write_str(name)
    }
}

/* Factories */
impl Node {
    pub fn number(value: i32) -> Self {
        Node::Number(value)
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier(name.into())
    }

    pub fn binary_op(op: char, lhs: Node, rhs: Node) -> Self {
        Node::BinaryOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Creates a variable declaration. `initializer` is `None` for a bare declaration.
    pub fn var_decl(name: impl Into<String>, initializer: Option<Node>) -> Self {
        Node::VarDecl {
            ident: name.into(),
            initializer: initializer.map(Box::new),
        }
    }

    pub fn assign(name: impl Into<String>, value: Node) -> Self {
        Node::Assign {
            ident: name.into(),
            value: Box::new(value),
        }
    }

    pub fn return_stmt(expr: Node) -> Self {
        Node::Return(Box::new(expr))
    }

    /// Creates an `if` statement. `else_branch` is `None` when there is no `else`.
    pub fn if_stmt(condition: Node, then_branch: Node, else_branch: Option<Node>) -> Self {
        Node::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn while_stmt(condition: Node, body: Node) -> Self {
        Node::While {
            condition: Box::new(condition),
            body: Box::new(body),
        }
    }

    pub fn fun_call(name: impl Into<String>, args: Vec<Node>) -> Self {
        Node::FunCall {
            ident: name.into(),
            args,
        }
    }

    pub fn fun_def<I, S>(name: impl Into<String>, params: I, body: Node) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Node::FunDef {
            ident: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            body: Box::new(body),
        }
    }

    pub fn compound(stmts: Vec<Node>) -> Self {
        Node::Compound(stmts)
    }
}

/* Queries */
impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Number(_) => NodeKind::Number,
            Node::Identifier(_) => NodeKind::Identifier,
            Node::BinaryOp { .. } => NodeKind::BinaryOp,
            Node::VarDecl { .. } => NodeKind::VarDecl,
            Node::Assign { .. } => NodeKind::Assign,
            Node::Return(_) => NodeKind::Return,
            Node::If { .. } => NodeKind::If,
            Node::While { .. } => NodeKind::While,
            Node::FunCall { .. } => NodeKind::FunCall,
            Node::FunDef { .. } => NodeKind::FunDef,
            Node::Compound(_) => NodeKind::Compound,
        }
    }

    /// Returns the direct children of this node, in traversal order.
    /// Absent optional children are skipped.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Number(_) | Node::Identifier(_) => Vec::new(),
            Node::BinaryOp { lhs, rhs, .. } => vec![&**lhs, &**rhs],
            Node::VarDecl { initializer, .. } => initializer.as_deref().into_iter().collect(),
            Node::Assign { value, .. } => vec![&**value],
            Node::Return(expr) => vec![&**expr],
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let mut children = vec![&**condition, &**then_branch];
                children.extend(else_branch.as_deref());
                children
            }
            Node::While { condition, body } => vec![&**condition, &**body],
            Node::FunCall { args, .. } => args.iter().collect(),
            Node::FunDef { body, .. } => vec![&**body],
            Node::Compound(stmts) => stmts.iter().collect(),
        }
    }

    /// Number of nodes on the longest path from this node down to a leaf. A leaf has depth `1`.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children().into_iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Moves every child out of `self` into `out`, leaving leaves in their place.
    fn take_children(&mut self, out: &mut Vec<Node>) {
        fn take(node: &mut Node) -> Node {
            mem::replace(node, Node::Number(0))
        }

        match self {
            Node::Number(_) | Node::Identifier(_) => {}
            Node::BinaryOp { lhs, rhs, .. } => {
                out.push(take(lhs));
                out.push(take(rhs));
            }
            Node::VarDecl { initializer, .. } => out.extend(initializer.take().map(|init| *init)),
            Node::Assign { value, .. } => out.push(take(value)),
            Node::Return(expr) => out.push(take(expr)),
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => {
                out.push(take(condition));
                out.push(take(then_branch));
                out.extend(else_branch.take().map(|branch| *branch));
            }
            Node::While { condition, body } => {
                out.push(take(condition));
                out.push(take(body));
            }
            Node::FunCall { args, .. } => out.append(args),
            Node::FunDef { body, .. } => out.push(take(body)),
            Node::Compound(stmts) => out.append(stmts),
        }
    }
}

// Deep expression chains would overflow the stack with the default recursive drop.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}
