//! The Lisq value model.
//!
//! One recursive enum covers every piece of data and code: numbers,
//! symbols, errors, and the two container forms. Containers own their
//! elements outright, so taking an element out is a move and dropping a
//! container drops everything under it.

/// A Lisq value. Code and data share this one shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Exact signed integer.
    Int(i64),
    /// Double-precision float.
    Float(f64),
    /// Evaluation error. Terminal: never evaluated further, and it wins
    /// over every sibling during reduction.
    Error(String),
    /// Name of an operation. Only resolved as the first element of an
    /// evaluable container.
    Symbol(String),
    /// Evaluable container (s-expression).
    Sexpr(Vec<Value>),
    /// Literal container (q-expression). Never auto-evaluated.
    Qexpr(Vec<Value>),
}

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value.
    #[inline]
    pub fn float(x: f64) -> Self {
        Value::Float(x)
    }

    /// Create an error value.
    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    /// Create a symbol value.
    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Create an evaluable container.
    #[inline]
    pub fn sexpr(cells: Vec<Value>) -> Self {
        Value::Sexpr(cells)
    }

    /// Create a literal container.
    #[inline]
    pub fn qexpr(cells: Vec<Value>) -> Self {
        Value::Qexpr(cells)
    }

    /// Whether this value is a number (integer or float).
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Whether this value is an error.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}
