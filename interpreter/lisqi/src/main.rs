//! Lisq interpreter CLI.

use lisqi::commands::{lex_file, parse_file, run_file};
use lisqi::repl::repl;

fn main() {
    lisqi::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        repl();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "repl" => {
            repl();
        }
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: lisq run <file.lsq>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: lisq parse <file.lsq>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: lisq lex <file.lsq>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Lisq {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare script path is shorthand for `run`
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("lsq"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Lisq interpreter");
    println!();
    println!("Usage: lisq [command] [arguments]");
    println!();
    println!("Commands:");
    println!("  repl                 Start the interactive shell (default)");
    println!("  run <file.lsq>       Evaluate a script line by line");
    println!("  parse <file.lsq>     Parse and display the syntax tree");
    println!("  lex <file.lsq>       Tokenize and display the token stream");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Examples:");
    println!("  lisq");
    println!("  lisq run scripts/lists.lsq");
    println!("  lisq scripts/lists.lsq          # same as `run`");
    println!("  lisq parse scripts/lists.lsq");
}
