//! Parse error types.

use lisq_ast::Span;
use lisq_lexer::LexError;

/// Syntax error from the lexer or parser.
///
/// These stay on the `Result` channel and are rendered by the shell;
/// they are never turned into language values.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The lexer rejected a character.
    #[error("{0}")]
    Lex(#[from] LexError),

    /// A closing bracket with no matching opener.
    #[error("unexpected closing '{found}'")]
    UnexpectedClose { found: char, span: Span },

    /// An opening bracket never closed before end of input.
    #[error("unclosed '{open}', expected '{expected}' before end of input")]
    Unclosed {
        open: char,
        expected: char,
        span: Span,
    },
}

impl ParseError {
    /// The span this diagnostic points at. For an unclosed bracket that
    /// is the opener, the last place the input was still well formed.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(e) => e.span,
            ParseError::UnexpectedClose { span, .. } | ParseError::Unclosed { span, .. } => *span,
        }
    }
}
