//! Builtin dispatch: list operations, `eval`, and the arithmetic fold.

use crate::errors;
use crate::eval;
use crate::operators::{self, Op};
use crate::seq;
use crate::value::Value;

/// Route a symbol at the head of an evaluated s-expression to its
/// builtin, handing over the remaining arguments.
pub(crate) fn dispatch(name: &str, args: Vec<Value>) -> Value {
    match name {
        "list" => Value::qexpr(args),
        "head" => head(args),
        "tail" => tail(args),
        "join" => join(args),
        "eval" => eval_arg(args),
        _ => match Op::from_symbol(name) {
            Some(op) => operators::builtin_op(op, args),
            None => errors::unknown_function(),
        },
    }
}

/// Keep only the first element of a q-expression.
fn head(args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return errors::too_many_arguments("head");
    }
    match seq::take(args, 0) {
        Value::Qexpr(cells) if cells.is_empty() => errors::empty_container("head"),
        Value::Qexpr(mut cells) => {
            cells.truncate(1);
            Value::qexpr(cells)
        }
        _ => errors::incorrect_types("head"),
    }
}

/// Drop the first element of a q-expression, keeping the rest.
fn tail(args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return errors::too_many_arguments("tail");
    }
    match seq::take(args, 0) {
        Value::Qexpr(cells) if cells.is_empty() => errors::empty_container("tail"),
        Value::Qexpr(mut cells) => {
            seq::remove_at(&mut cells, 0);
            Value::qexpr(cells)
        }
        _ => errors::incorrect_types("tail"),
    }
}

/// Concatenate q-expressions left to right into one.
fn join(args: Vec<Value>) -> Value {
    let mut joined = Vec::new();
    for arg in args {
        match arg {
            Value::Qexpr(cells) => seq::join(&mut joined, cells),
            _ => return errors::incorrect_types("join"),
        }
    }
    Value::qexpr(joined)
}

/// Unquote a q-expression and evaluate it as an s-expression.
fn eval_arg(args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return errors::too_many_arguments("eval");
    }
    match seq::take(args, 0) {
        Value::Qexpr(cells) => eval::eval(Value::sexpr(cells)),
        _ => errors::incorrect_types("eval"),
    }
}
