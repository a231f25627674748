use lisq_ast::{NodeKind, ParseNode, Span};
use pretty_assertions::assert_eq;

use crate::{parse, ParseError};

fn parsed(source: &str) -> ParseNode {
    match parse(source) {
        Ok(tree) => tree,
        Err(e) => panic!("parse failed on {source:?}: {e}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    match parse(source) {
        Ok(tree) => panic!("expected parse error on {source:?}, got:\n{tree}"),
        Err(e) => e,
    }
}

#[test]
fn empty_input_is_a_bare_root() {
    let tree = parsed("");
    assert_eq!(tree.kind(), NodeKind::Root);
    assert!(tree.children().is_empty());
}

#[test]
fn atoms_at_top_level() {
    let tree = parsed("42 head");
    let kinds: Vec<NodeKind> = tree.children().iter().map(ParseNode::kind).collect();
    assert_eq!(kinds, vec![NodeKind::Number, NodeKind::Symbol]);
    assert_eq!(tree.children()[0].text(), "42");
    assert_eq!(tree.children()[1].text(), "head");
}

#[test]
fn sexpr_keeps_brackets_as_punctuation() {
    let tree = parsed("(+ 1 2)");
    let expected = ParseNode::root(vec![ParseNode::sexpr(vec![
        ParseNode::punct("("),
        ParseNode::symbol("+"),
        ParseNode::number("1"),
        ParseNode::number("2"),
        ParseNode::punct(")"),
    ])]);
    assert_eq!(tree, expected);
}

#[test]
fn qexpr_and_nesting() {
    let tree = parsed("{1 (head {2})}");
    let expected = ParseNode::root(vec![ParseNode::qexpr(vec![
        ParseNode::punct("{"),
        ParseNode::number("1"),
        ParseNode::sexpr(vec![
            ParseNode::punct("("),
            ParseNode::symbol("head"),
            ParseNode::qexpr(vec![
                ParseNode::punct("{"),
                ParseNode::number("2"),
                ParseNode::punct("}"),
            ]),
            ParseNode::punct(")"),
        ]),
        ParseNode::punct("}"),
    ])]);
    assert_eq!(tree, expected);
}

#[test]
fn empty_containers() {
    let tree = parsed("() {}");
    let expected = ParseNode::root(vec![
        ParseNode::sexpr(vec![ParseNode::punct("("), ParseNode::punct(")")]),
        ParseNode::qexpr(vec![ParseNode::punct("{"), ParseNode::punct("}")]),
    ]);
    assert_eq!(tree, expected);
}

#[test]
fn negative_numbers_are_single_leaves() {
    let tree = parsed("(- -1 -2.5)");
    let texts: Vec<&str> = tree.children()[0]
        .children()
        .iter()
        .map(ParseNode::text)
        .collect();
    assert_eq!(texts, vec!["(", "-", "-1", "-2.5", ")"]);
}

#[test]
fn unexpected_close_at_top_level() {
    let err = parse_err(")");
    assert_eq!(
        err,
        ParseError::UnexpectedClose {
            found: ')',
            span: Span::new(0, 1),
        }
    );
    assert_eq!(err.to_string(), "unexpected closing ')'");
}

#[test]
fn mismatched_close_inside_container() {
    let err = parse_err("(1}");
    assert_eq!(
        err,
        ParseError::UnexpectedClose {
            found: '}',
            span: Span::new(2, 3),
        }
    );
}

#[test]
fn unclosed_sexpr_points_at_the_opener() {
    let err = parse_err("(+ 1 (2 3)");
    assert_eq!(
        err,
        ParseError::Unclosed {
            open: '(',
            expected: ')',
            span: Span::new(0, 1),
        }
    );
    assert_eq!(
        err.to_string(),
        "unclosed '(', expected ')' before end of input"
    );
}

#[test]
fn unclosed_qexpr() {
    let err = parse_err("{1 2");
    assert_eq!(
        err,
        ParseError::Unclosed {
            open: '{',
            expected: '}',
            span: Span::new(0, 1),
        }
    );
}

#[test]
fn lex_errors_pass_through() {
    let err = parse_err("(+ 1 ~)");
    assert_eq!(err.to_string(), "unexpected character '~'");
    assert_eq!(err.span(), Span::new(5, 6));
}

#[test]
fn span_accessor_matches_variant() {
    assert_eq!(parse_err(")").span(), Span::new(0, 1));
    assert_eq!(parse_err("( ").span(), Span::new(0, 1));
}
