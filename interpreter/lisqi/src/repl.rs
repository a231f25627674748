//! Interactive read-eval-print loop.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::{eval_line, render_syntax_error};

/// Run the interactive shell until the user exits with Ctrl+C or Ctrl+D.
///
/// Every non-empty line lands in the in-memory history, is evaluated on
/// its own, and prints one result. Nothing carries over between lines.
pub fn repl() {
    println!("Lisq {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+C to exit");
    println!();

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(error) => {
            eprintln!("cannot start line editor: {error}");
            std::process::exit(1);
        }
    };

    loop {
        match editor.readline("lisq> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                match eval_line(line) {
                    Ok(value) => println!("{value}"),
                    Err(error) => eprintln!("{}", render_syntax_error(line, &error)),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("read error: {error}");
                break;
            }
        }
    }
}
