//! Recursive descent parser for Lisq.
//!
//! Produces the generic lossless parse tree consumed by the evaluator's
//! reader. The grammar is the whole language:
//!
//! ```text
//! program : expr* ;
//! expr    : NUMBER | SYMBOL | '(' expr* ')' | '{' expr* '}' ;
//! ```
//!
//! Container nodes keep their bracket tokens as punctuation children, so
//! a printed tree accounts for every token of the source. Nesting depth
//! is bounded only by the host stack.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use lisq_ast::ParseNode;

/// Parse one input (a REPL line or one line of a script) into a tree.
pub fn parse(source: &str) -> Result<ParseNode, ParseError> {
    let tokens = lisq_lexer::tokenize(source)?;
    grammar::Parser::new(source, &tokens).parse_program()
}
