//! The `run` command: evaluate a script file.

use tracing::debug;

use super::{eval_line, read_file, render_syntax_error};

/// Evaluate a script. Each non-blank line is one top-level input and its
/// result prints on its own line, REPL-style. Evaluation errors are
/// ordinary results; a syntax error aborts with the line number.
pub fn run_file(path: &str) {
    let source = read_file(path);
    debug!(path, bytes = source.len(), "running script");

    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match eval_line(line) {
            Ok(value) => println!("{value}"),
            Err(error) => {
                eprintln!(
                    "{path}:{}: {}",
                    index + 1,
                    render_syntax_error(line, &error),
                );
                std::process::exit(1);
            }
        }
    }
}
