//! Tokenizer for Lisq source text.
//!
//! The token set is tiny: two bracket pairs, numbers, and symbols.
//! Numbers are not converted here; the token only records where the text
//! is, and the reader downstream owns numeric conversion together with
//! its malformed-number policy. Symbols cover both named operations
//! (`head`, `min`, but also unknown names, which must survive all the way
//! to evaluation to produce its unknown-function error) and the
//! single-character arithmetic operators.

use lisq_ast::Span;
use logos::Logos;

/// Lexical classification of one token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // Brackets
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Literals. A leading minus belongs to the number, so `(- 5 -3)`
    // lexes as symbol, number, number.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    // Named symbols and operator characters resolve to the same token;
    // the grammar treats them identically.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    #[regex(r"[+\-*/%^]")]
    Symbol,
}

/// One token: its kind and where it sits in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Lexical error: the first character no token rule accepts.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unexpected character '{found}'")]
pub struct LexError {
    pub found: char,
    pub span: Span,
}

/// Tokenize a full input up front.
///
/// Stops at the first unexpected character; the caller reports it and
/// never sees a partial token stream.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        match result {
            Ok(kind) => tokens.push(Token { kind, span }),
            Err(()) => {
                let found = lexer
                    .slice()
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError { found, span });
            }
        }
    }

    Ok(tokens)
}
