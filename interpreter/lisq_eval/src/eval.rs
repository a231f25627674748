//! The evaluation core.
//!
//! Evaluation rewrites a [`Value`] tree bottom-up. Only s-expressions
//! reduce; every other value is already in normal form. A reduced
//! s-expression goes through a fixed pipeline: evaluate children, stop
//! at the earliest error, promote mixed numerics to floats, collapse
//! the trivial shapes, then dispatch the leading symbol as a builtin.

use crate::builtins;
use crate::errors;
use crate::seq;
use crate::value::Value;

/// Evaluate a value to normal form.
pub fn eval(value: Value) -> Value {
    match value {
        Value::Sexpr(cells) => eval_sexpr(cells),
        other => other,
    }
}

fn eval_sexpr(cells: Vec<Value>) -> Value {
    let mut cells: Vec<Value> = cells.into_iter().map(eval).collect();

    // Earliest error wins, whatever shape the rest of the list has.
    if let Some(index) = cells.iter().position(Value::is_error) {
        return seq::take(cells, index);
    }

    promote_numbers(&mut cells);

    if cells.is_empty() {
        return Value::sexpr(cells);
    }
    if cells.len() == 1 {
        return seq::take(cells, 0);
    }

    match seq::remove_at(&mut cells, 0) {
        Value::Symbol(name) => builtins::dispatch(&name, cells),
        _ => errors::missing_leading_symbol(),
    }
}

/// Rewrite every integer in place as a float when any float is present.
#[expect(
    clippy::cast_precision_loss,
    reason = "intentional int-to-float promotion"
)]
fn promote_numbers(cells: &mut [Value]) {
    if !cells.iter().any(|cell| matches!(cell, Value::Float(_))) {
        return;
    }
    for cell in cells.iter_mut() {
        if let Value::Int(n) = *cell {
            *cell = Value::float(n as f64);
        }
    }
}

#[cfg(test)]
mod tests;
