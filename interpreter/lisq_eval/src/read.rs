//! Reading parse trees into values.
//!
//! The only validation here is numeric conversion; every other node maps
//! structurally. A malformed number becomes an error value in place, so
//! reading itself never fails.

use lisq_ast::{NodeKind, ParseNode};

use crate::errors;
use crate::seq;
use crate::value::Value;

/// Convert a parse-tree node into an equivalent value tree.
pub fn read(node: &ParseNode) -> Value {
    match node.kind() {
        NodeKind::Number => read_number(node.text()),
        // Punctuation never appears under a container read (it is
        // skipped below); a bare punctuation node reads as its text.
        NodeKind::Symbol | NodeKind::Punct => Value::symbol(node.text()),
        NodeKind::Root | NodeKind::Sexpr => Value::sexpr(read_children(node)),
        NodeKind::Qexpr => Value::qexpr(read_children(node)),
    }
}

/// Read every non-punctuation child, in order.
fn read_children(node: &ParseNode) -> Vec<Value> {
    let mut cells = Vec::new();
    for child in node.children() {
        if child.is_punct() {
            continue;
        }
        seq::append(&mut cells, read(child));
    }
    cells
}

/// A decimal point selects float, anything else is integer. Bad digits,
/// integer overflow, and non-finite float results all read as the
/// malformed-number error.
fn read_number(text: &str) -> Value {
    if text.contains('.') {
        match text.parse::<f64>() {
            Ok(x) if x.is_finite() => Value::float(x),
            _ => errors::invalid_number(),
        }
    } else {
        match text.parse::<i64>() {
            Ok(n) => Value::int(n),
            Err(_) => errors::invalid_number(),
        }
    }
}
