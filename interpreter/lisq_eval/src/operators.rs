//! The arithmetic builtin: operator table and numeric kernels.
//!
//! The operator set is fixed, so dispatch is a plain enum match split
//! into an integer kernel and a float kernel. By the time a kernel runs,
//! promotion has already made the operands homogeneous.

use crate::errors;
use crate::seq;
use crate::value::Value;

/// The fixed arithmetic operator set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Min,
    Max,
}

impl Op {
    /// Resolve an operator from its symbol text.
    pub(crate) fn from_symbol(name: &str) -> Option<Op> {
        match name {
            "+" => Some(Op::Add),
            "-" => Some(Op::Sub),
            "*" => Some(Op::Mul),
            "/" => Some(Op::Div),
            "%" => Some(Op::Rem),
            "^" => Some(Op::Pow),
            "min" => Some(Op::Min),
            "max" => Some(Op::Max),
            _ => None,
        }
    }
}

/// Fold the argument list with `op`, left to right.
///
/// A lone operand under `-` negates instead of folding. A fold step that
/// fails returns its error; operands not yet consumed drop with the
/// iterator.
pub(crate) fn builtin_op(op: Op, mut args: Vec<Value>) -> Value {
    if args.is_empty() || !args.iter().all(Value::is_number) {
        return errors::non_number_operand();
    }

    let first = seq::remove_at(&mut args, 0);
    if op == Op::Sub && args.is_empty() {
        return negate(first);
    }

    let mut acc = first;
    for operand in args {
        acc = match apply(op, acc, operand) {
            Ok(value) => value,
            Err(error) => return error,
        };
    }
    acc
}

/// Unary minus.
fn negate(value: Value) -> Value {
    match value {
        Value::Int(n) => Value::Int(n.wrapping_neg()),
        Value::Float(x) => Value::Float(-x),
        _ => unreachable!("negate called with a non-number"),
    }
}

/// One fold step. Operands share a numeric kind by the time they get
/// here.
fn apply(op: Op, acc: Value, operand: Value) -> Result<Value, Value> {
    match (acc, operand) {
        (Value::Int(a), Value::Int(b)) => int_op(op, a, b).map(Value::Int),
        (Value::Float(a), Value::Float(b)) => float_op(op, a, b).map(Value::Float),
        _ => unreachable!("arithmetic on mixed operands after promotion"),
    }
}

/// Integer kernel. Wrapping arithmetic keeps every defined case total;
/// zero divisors and negative exponents are reported, not computed.
fn int_op(op: Op, a: i64, b: i64) -> Result<i64, Value> {
    match op {
        Op::Add => Ok(a.wrapping_add(b)),
        Op::Sub => Ok(a.wrapping_sub(b)),
        Op::Mul => Ok(a.wrapping_mul(b)),
        Op::Div => {
            if b == 0 {
                Err(errors::division_by_zero())
            } else {
                Ok(a.wrapping_div(b))
            }
        }
        Op::Rem => {
            if b == 0 {
                Err(errors::modulus_by_zero())
            } else {
                Ok(a.wrapping_rem(b))
            }
        }
        Op::Pow => {
            if b < 0 {
                Err(errors::negative_exponent())
            } else {
                // Exponents beyond u32 saturate; the wrapped result is
                // already degenerate at that magnitude.
                let exp = u32::try_from(b).unwrap_or(u32::MAX);
                Ok(a.wrapping_pow(exp))
            }
        }
        Op::Min => Ok(a.min(b)),
        Op::Max => Ok(a.max(b)),
    }
}

/// Float kernel. Zero divisors report the same errors as the integer
/// kernel, `%` is `f64`'s remainder (fmod), and an unordered `min`/`max`
/// comparison is an error rather than a silent pick.
fn float_op(op: Op, a: f64, b: f64) -> Result<f64, Value> {
    match op {
        Op::Add => Ok(a + b),
        Op::Sub => Ok(a - b),
        Op::Mul => Ok(a * b),
        Op::Div => {
            if b == 0.0 {
                Err(errors::division_by_zero())
            } else {
                Ok(a / b)
            }
        }
        Op::Rem => {
            if b == 0.0 {
                Err(errors::modulus_by_zero())
            } else {
                Ok(a % b)
            }
        }
        Op::Pow => Ok(a.powf(b)),
        Op::Min | Op::Max => min_max(op, a, b),
    }
}

fn min_max(op: Op, a: f64, b: f64) -> Result<f64, Value> {
    let Some(ordering) = a.partial_cmp(&b) else {
        return Err(errors::nan_comparison());
    };
    let keep_first = match op {
        Op::Min => ordering != std::cmp::Ordering::Greater,
        _ => ordering != std::cmp::Ordering::Less,
    };
    Ok(if keep_first { a } else { b })
}
