use super::*;

fn tokens_of(source: &str) -> Vec<Token> {
    match lisq_lexer::tokenize(source) {
        Ok(tokens) => tokens,
        Err(e) => panic!("tokenize failed on {source:?}: {e}"),
    }
}

#[test]
fn cursor_navigation() {
    let tokens = tokens_of("(1)");
    let mut cursor = Cursor::new(&tokens);

    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.peek_kind(), Some(TokenKind::LParen));
    assert!(!cursor.is_at_end());

    cursor.advance();
    assert_eq!(cursor.peek_kind(), Some(TokenKind::Number));

    cursor.advance();
    assert_eq!(cursor.peek_kind(), Some(TokenKind::RParen));

    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 3);
}

#[test]
fn advance_past_end_returns_none() {
    let tokens = tokens_of("1");
    let mut cursor = Cursor::new(&tokens);

    assert!(cursor.advance().is_some());
    assert!(cursor.advance().is_none());
    assert!(cursor.advance().is_none());
    assert_eq!(cursor.position(), 1);
}

#[test]
fn peek_does_not_consume() {
    let tokens = tokens_of("head");
    let cursor = Cursor::new(&tokens);

    assert_eq!(cursor.peek_kind(), Some(TokenKind::Symbol));
    assert_eq!(cursor.peek_kind(), Some(TokenKind::Symbol));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn empty_stream_is_at_end() {
    let tokens = tokens_of("");
    let mut cursor = Cursor::new(&tokens);

    assert!(cursor.is_at_end());
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.advance(), None);
}
