//! Debug commands: `parse` and `lex` for inspecting pipeline stages.

use super::{read_file, render_syntax_error};

/// Parse a file and display the syntax tree of every non-blank line.
pub fn parse_file(path: &str) {
    let source = read_file(path);

    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match lisq_parse::parse(line) {
            Ok(tree) => {
                println!("{path}:{}:", index + 1);
                print!("{tree}");
            }
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

/// Lex a file and display the token stream of every non-blank line.
pub fn lex_file(path: &str) {
    let source = read_file(path);

    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match lisq_lexer::tokenize(line) {
            Ok(tokens) => {
                println!("{path}:{}: {} tokens", index + 1, tokens.len());
                for token in &tokens {
                    println!("  {:?} @ {}", token.kind, token.span);
                }
            }
            Err(error) => {
                eprintln!(
                    "{path}:{}: {}",
                    index + 1,
                    render_syntax_error(line, &error.into()),
                );
                std::process::exit(1);
            }
        }
    }
}
