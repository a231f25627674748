//! Command handlers for the Lisq CLI.
//!
//! Each submodule implements one subcommand; shared helpers live in the
//! module root.

use lisq_eval::Value;
use lisq_parse::ParseError;

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::run_file;

/// Parse one line of source and reduce it to a printable value.
///
/// Syntax errors come back on the `Err` channel; evaluation errors are
/// ordinary values and print like any other result.
pub fn eval_line(line: &str) -> Result<Value, ParseError> {
    let tree = lisq_parse::parse(line)?;
    Ok(lisq_eval::eval(lisq_eval::read(&tree)))
}

/// Render a syntax diagnostic: message, the offending line, and a caret
/// marker under the span.
pub fn render_syntax_error(line: &str, error: &ParseError) -> String {
    let range = error.span().to_range();
    let width = range.len().max(1);
    format!(
        "error: {error}\n  {line}\n  {}{}",
        " ".repeat(range.start),
        "^".repeat(width),
    )
}

/// Read a script from disk, exiting with a friendly message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
