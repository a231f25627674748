//! Centralized constructors for evaluation error values.
//!
//! Every user-visible failure during evaluation is built here, so the
//! exact message strings live in one place.

use crate::value::Value;

/// Numeric literal that does not convert (bad digits or overflow).
#[cold]
pub(crate) fn invalid_number() -> Value {
    Value::error("Invalid Number")
}

/// Operation symbol that names no builtin.
#[cold]
pub(crate) fn unknown_function() -> Value {
    Value::error("Unknown function!")
}

/// Evaluable container whose first element is not a symbol.
#[cold]
pub(crate) fn missing_leading_symbol() -> Value {
    Value::error("S-expression does not begin with Symbol")
}

/// Arithmetic over something that is not a number.
#[cold]
pub(crate) fn non_number_operand() -> Value {
    Value::error("Cannot operate on a non-number")
}

#[cold]
pub(crate) fn division_by_zero() -> Value {
    Value::error("Division by Zero!")
}

#[cold]
pub(crate) fn modulus_by_zero() -> Value {
    Value::error("Modulus by Zero!")
}

/// Integer `^` with an exponent below zero.
#[cold]
pub(crate) fn negative_exponent() -> Value {
    Value::error("Negative Exponent!")
}

/// `min`/`max` against a NaN operand.
#[cold]
pub(crate) fn nan_comparison() -> Value {
    Value::error("Comparison with NaN!")
}

/// Builtin called with a different argument count than it takes.
#[cold]
pub(crate) fn too_many_arguments(name: &str) -> Value {
    Value::error(format!("Function '{name}' passed too many arguments"))
}

/// Builtin given an argument of the wrong type.
#[cold]
pub(crate) fn incorrect_types(name: &str) -> Value {
    Value::error(format!("Function '{name}' passed incorrect types"))
}

/// Builtin that needs a non-empty container given `{}`.
#[cold]
pub(crate) fn empty_container(name: &str) -> Value {
    Value::error(format!("Function '{name}' passed {{}}"))
}
