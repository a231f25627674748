//! Shared syntax data for the Lisq interpreter.
//!
//! Holds the two types every stage agrees on: [`Span`], the byte range a
//! token or syntax error points at, and [`ParseNode`], the generic parse
//! tree the parser produces and the evaluator's reader consumes. The tree
//! is deliberately language-agnostic: a classification tag, the literal
//! text for leaves, and ordered children for containers. Nothing in it
//! knows about values or evaluation.

mod node;
mod span;

pub use node::{NodeKind, ParseNode};
pub use span::Span;
