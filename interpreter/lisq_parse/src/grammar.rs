//! Grammar rules: program, expressions, containers.

use lisq_ast::{NodeKind, ParseNode};
use lisq_lexer::{Token, TokenKind};
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::ParseError;

/// Parser state.
pub(crate) struct Parser<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Parser {
            source,
            cursor: Cursor::new(tokens),
        }
    }

    /// `program : expr* ;`
    pub(crate) fn parse_program(mut self) -> Result<ParseNode, ParseError> {
        let mut children = Vec::new();
        while let Some(token) = self.cursor.advance() {
            children.push(self.parse_expr(token)?);
        }
        Ok(ParseNode::root(children))
    }

    /// `expr : NUMBER | SYMBOL | '(' expr* ')' | '{' expr* '}' ;`
    ///
    /// `token` is the expression's first token, already consumed by the
    /// caller.
    fn parse_expr(&mut self, token: Token) -> Result<ParseNode, ParseError> {
        trace!(pos = self.cursor.position(), kind = ?token.kind, "parse_expr");
        match token.kind {
            TokenKind::Number => Ok(ParseNode::number(self.text(token))),
            TokenKind::Symbol => Ok(ParseNode::symbol(self.text(token))),
            TokenKind::LParen => self.parse_container(token, NodeKind::Sexpr),
            TokenKind::LBrace => self.parse_container(token, NodeKind::Qexpr),
            TokenKind::RParen => Err(ParseError::UnexpectedClose {
                found: ')',
                span: token.span,
            }),
            TokenKind::RBrace => Err(ParseError::UnexpectedClose {
                found: '}',
                span: token.span,
            }),
        }
    }

    /// Parse the remainder of a bracketed container, the opener already
    /// consumed. Both bracket tokens become punctuation children so the
    /// tree stays lossless.
    fn parse_container(&mut self, open: Token, kind: NodeKind) -> Result<ParseNode, ParseError> {
        let (closer, open_ch, close_ch) = match kind {
            NodeKind::Qexpr => (TokenKind::RBrace, '{', '}'),
            _ => (TokenKind::RParen, '(', ')'),
        };

        let mut children = vec![ParseNode::punct(self.text(open))];
        loop {
            let Some(token) = self.cursor.advance() else {
                return Err(ParseError::Unclosed {
                    open: open_ch,
                    expected: close_ch,
                    span: open.span,
                });
            };
            if token.kind == closer {
                children.push(ParseNode::punct(self.text(token)));
                break;
            }
            children.push(self.parse_expr(token)?);
        }

        Ok(match kind {
            NodeKind::Qexpr => ParseNode::qexpr(children),
            _ => ParseNode::sexpr(children),
        })
    }

    #[inline]
    fn text(&self, token: Token) -> &'a str {
        &self.source[token.span.to_range()]
    }
}

#[cfg(test)]
mod tests;
