//! Rendering values back to text.
//!
//! Output is re-parseable for anything the grammar can express: a
//! printed literal container reads back as an equivalent value. Floats
//! use Rust's shortest round-trip formatting, so `3.0` prints as `3`;
//! the float-ness survives in the value, not the text.

use std::fmt;

use crate::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Error(message) => write!(f, "Error: {message}"),
            Value::Symbol(name) => f.write_str(name),
            Value::Sexpr(cells) => write_container(f, cells, '(', ')'),
            Value::Qexpr(cells) => write_container(f, cells, '{', '}'),
        }
    }
}

/// Elements space-separated inside brackets, no trailing space.
fn write_container(
    f: &mut fmt::Formatter<'_>,
    cells: &[Value],
    open: char,
    close: char,
) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{cell}")?;
    }
    write!(f, "{close}")
}
