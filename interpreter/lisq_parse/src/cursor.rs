//! Token cursor for navigating the token stream.

use lisq_lexer::{Token, TokenKind};
use tracing::trace;

/// Cursor over a token slice.
///
/// Provides peeking and consumption; all grammar decisions live in the
/// parser. Position only ever moves forward.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current position in the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether every token has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The next unconsumed token, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    /// Kind of the next unconsumed token.
    #[inline]
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// Consume and return the next token.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.peek()?;
        trace!(
            pos = self.pos,
            kind = ?token.kind,
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        self.pos += 1;
        Some(token)
    }
}

#[cfg(test)]
mod tests;
