//! Sequence primitives over container elements.
//!
//! The evaluator and builtins manipulate container contents through
//! these four operations. Each one is an ownership transfer: elements
//! move, never clone, and whatever stays behind keeps its order.

use crate::value::Value;

/// Append `value` as the new last element.
#[inline]
pub(crate) fn append(cells: &mut Vec<Value>, value: Value) {
    cells.push(value);
}

/// Detach and return the element at `index`, closing the gap.
///
/// The index must be in bounds; callers only pass indices they have just
/// checked, and an out-of-range index panics like `Vec::remove`.
#[inline]
pub(crate) fn remove_at(cells: &mut Vec<Value>, index: usize) -> Value {
    cells.remove(index)
}

/// Take the element at `index`, dropping the container and every other
/// element.
#[inline]
pub(crate) fn take(mut cells: Vec<Value>, index: usize) -> Value {
    remove_at(&mut cells, index)
}

/// Move every element of `src` into `dest`, in order, consuming `src`.
#[inline]
pub(crate) fn join(dest: &mut Vec<Value>, src: Vec<Value>) {
    dest.extend(src);
}
