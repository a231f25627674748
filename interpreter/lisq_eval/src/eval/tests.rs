use pretty_assertions::assert_eq;

use super::eval;
use crate::value::Value;

fn sym(name: &str) -> Value {
    Value::symbol(name)
}

fn call(name: &str, args: Vec<Value>) -> Value {
    let mut cells = vec![sym(name)];
    cells.extend(args);
    Value::sexpr(cells)
}

#[test]
fn atoms_evaluate_to_themselves() {
    assert_eq!(eval(Value::int(42)), Value::int(42));
    assert_eq!(eval(Value::float(2.5)), Value::float(2.5));
    assert_eq!(eval(sym("x")), sym("x"));
    assert_eq!(eval(Value::error("boom")), Value::error("boom"));
}

#[test]
fn quoted_expressions_do_not_reduce() {
    let quoted = Value::qexpr(vec![sym("+"), Value::int(1), Value::int(2)]);
    assert_eq!(eval(quoted.clone()), quoted);
}

#[test]
fn empty_sexpr_evaluates_to_itself() {
    assert_eq!(eval(Value::sexpr(Vec::new())), Value::sexpr(Vec::new()));
}

#[test]
fn single_element_collapses() {
    assert_eq!(eval(Value::sexpr(vec![Value::int(5)])), Value::int(5));
    assert_eq!(eval(Value::sexpr(vec![sym("foo")])), sym("foo"));
}

#[test]
fn nested_single_elements_collapse_all_the_way() {
    let nested = Value::sexpr(vec![Value::sexpr(vec![Value::int(5)])]);
    assert_eq!(eval(nested), Value::int(5));
}

#[test]
fn arithmetic_reduces() {
    assert_eq!(
        eval(call("+", vec![Value::int(1), Value::int(2)])),
        Value::int(3),
    );
}

#[test]
fn nested_calls_reduce_bottom_up() {
    let inner = call("*", vec![Value::int(2), Value::int(3)]);
    assert_eq!(eval(call("+", vec![Value::int(1), inner])), Value::int(7));
}

#[test]
fn mixed_numbers_promote_to_float() {
    assert_eq!(
        eval(call("+", vec![Value::int(1), Value::float(2.0)])),
        Value::float(3.0),
    );
}

#[test]
fn promotion_covers_every_operand() {
    assert_eq!(
        eval(call(
            "+",
            vec![Value::int(1), Value::int(2), Value::float(0.5)],
        )),
        Value::float(3.5),
    );
}

#[test]
fn promotion_does_not_reach_into_quoted_lists() {
    let quoted = Value::qexpr(vec![Value::int(1)]);
    assert_eq!(
        eval(call("+", vec![Value::float(1.0), quoted])),
        Value::error("Cannot operate on a non-number"),
    );
}

#[test]
fn child_errors_surface_before_anything_else() {
    let failing = call("/", vec![Value::int(1), Value::int(0)]);
    assert_eq!(
        eval(call("+", vec![failing, Value::float(2.0)])),
        Value::error("Division by Zero!"),
    );
}

#[test]
fn earliest_error_wins() {
    let first = call("/", vec![Value::int(1), Value::int(0)]);
    let second = call("%", vec![Value::int(1), Value::int(0)]);
    assert_eq!(
        eval(call("+", vec![first, second])),
        Value::error("Division by Zero!"),
    );
}

#[test]
fn error_in_head_position_still_surfaces() {
    let failing = call("/", vec![Value::int(1), Value::int(0)]);
    assert_eq!(
        eval(Value::sexpr(vec![failing, Value::int(1)])),
        Value::error("Division by Zero!"),
    );
}

#[test]
fn non_symbol_head_is_rejected() {
    assert_eq!(
        eval(Value::sexpr(vec![Value::int(1), Value::int(2)])),
        Value::error("S-expression does not begin with Symbol"),
    );
}

#[test]
fn unknown_function_is_reported() {
    assert_eq!(
        eval(call("foo", vec![Value::int(1), Value::int(2)])),
        Value::error("Unknown function!"),
    );
}

#[test]
fn list_builtins_run_through_eval() {
    let quoted = Value::qexpr(vec![Value::int(1), Value::int(2), Value::int(3)]);
    assert_eq!(
        eval(call("head", vec![quoted])),
        Value::qexpr(vec![Value::int(1)]),
    );
}

#[test]
fn eval_builtin_reduces_quoted_code() {
    let quoted = Value::qexpr(vec![sym("+"), Value::int(1), Value::int(2)]);
    assert_eq!(eval(call("eval", vec![quoted])), Value::int(3));
}
