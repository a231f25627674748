//! The generic parse tree.
//!
//! A [`ParseNode`] is the hand-off format between the parser and the
//! evaluator's reader: a classification tag, the literal text when the
//! node is a leaf, and an ordered list of children when it is a
//! container. Container nodes keep their bracket tokens as [`Punct`]
//! children so the tree stays lossless with respect to the source;
//! consumers that only care about values skip those.
//!
//! [`Punct`]: NodeKind::Punct

use std::fmt;

/// Classification tag for a parse-tree node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Implicit top-level wrapper around one whole input.
    Root,
    /// Numeric literal leaf. The text is kept verbatim; numeric
    /// conversion happens downstream.
    Number,
    /// Symbol leaf: a named operation or a single operator character.
    Symbol,
    /// Evaluable container (s-expression).
    Sexpr,
    /// Literal container (q-expression).
    Qexpr,
    /// Bracket punctuation retained for losslessness.
    Punct,
}

impl NodeKind {
    /// Lowercase label used by the tree printer.
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Number => "number",
            NodeKind::Symbol => "symbol",
            NodeKind::Sexpr => "sexpr",
            NodeKind::Qexpr => "qexpr",
            NodeKind::Punct => "punct",
        }
    }
}

/// A node of the generic parse tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseNode {
    kind: NodeKind,
    text: String,
    children: Vec<ParseNode>,
}

impl ParseNode {
    /// Top-level wrapper node. Holds the input's expressions in order and
    /// carries no punctuation of its own.
    pub fn root(children: Vec<ParseNode>) -> Self {
        ParseNode {
            kind: NodeKind::Root,
            text: String::new(),
            children,
        }
    }

    /// Evaluable container node. `children` includes the bracket
    /// punctuation nodes in source order.
    pub fn sexpr(children: Vec<ParseNode>) -> Self {
        ParseNode {
            kind: NodeKind::Sexpr,
            text: String::new(),
            children,
        }
    }

    /// Literal container node. `children` includes the bracket
    /// punctuation nodes in source order.
    pub fn qexpr(children: Vec<ParseNode>) -> Self {
        ParseNode {
            kind: NodeKind::Qexpr,
            text: String::new(),
            children,
        }
    }

    /// Numeric literal leaf carrying its verbatim text.
    pub fn number(text: impl Into<String>) -> Self {
        ParseNode {
            kind: NodeKind::Number,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Symbol leaf carrying its text.
    pub fn symbol(text: impl Into<String>) -> Self {
        ParseNode {
            kind: NodeKind::Symbol,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Bracket punctuation leaf.
    pub fn punct(text: impl Into<String>) -> Self {
        ParseNode {
            kind: NodeKind::Punct,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// The node's classification tag.
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The node's literal text. Empty for container nodes.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The node's children, in source order.
    #[inline]
    pub fn children(&self) -> &[ParseNode] {
        &self.children
    }

    /// Whether this node is bracket punctuation.
    #[inline]
    pub fn is_punct(&self) -> bool {
        self.kind == NodeKind::Punct
    }

    fn fmt_at(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            write!(f, "  ")?;
        }
        if self.text.is_empty() {
            writeln!(f, "{}", self.kind.label())?;
        } else {
            writeln!(f, "{} '{}'", self.kind.label(), self.text)?;
        }
        for child in &self.children {
            child.fmt_at(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented tree rendering, one node per line.
impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}
