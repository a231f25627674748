//! The Lisq core: value model, reader, printer, and evaluator.
//!
//! Everything observable about the language lives in this crate. It
//! consumes the generic parse tree from `lisq_ast` and exposes two entry
//! points: [`read`], which turns a tree into a [`Value`], and [`eval`],
//! which reduces a value to normal form. Printing is the `Display` impl
//! on [`Value`]; cleanup is `Drop`. Evaluation errors are themselves
//! values, so the evaluation path has no `Result` and never aborts.

mod builtins;
mod errors;
mod eval;
mod operators;
mod print;
mod read;
mod seq;
mod value;

pub use eval::eval;
pub use read::read;
pub use value::Value;
