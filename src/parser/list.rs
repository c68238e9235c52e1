//! List literals and their rewriting into `cons`/`nil` atoms.
//!
//! ```text
//! []        => nil
//! [a]       => cons a nil
//! [a, b]    => cons a (cons b nil)
//! [a, b|T]  => cons a (cons b T)
//! [a|[b]]   => cons a (cons b nil)
//! ```
//!
//! The rewrite happens while parsing; no list node ever reaches the tree.

use crate::{ast::node::ParseNode, errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    atom::{parse_elem, parse_var},
    parser::Parser,
};

pub const CONS: &str = "cons";
pub const NIL: &str = "nil";

/// `List -> '[' ']' | '[' Elem (',' Elem)* ('|' (Var | List))? ']'`
pub fn parse_list(parser: &mut Parser) -> Result<ParseNode, Error> {
    parser.nested(|p| {
        p.expect(TokenKind::OpenBracket)?;
        if p.eat(TokenKind::CloseBracket) {
            return Ok(desugar(vec![], None));
        }

        let mut elements = vec![parse_elem(p)?];
        while let Some(element) = p.optional(|p| {
            p.expect(TokenKind::Comma)?;
            parse_elem(p)
        })? {
            elements.push(element);
        }

        let tail = if p.eat(TokenKind::Pipe) {
            Some(parse_list_tail(p)?)
        } else {
            None
        };
        p.expect(TokenKind::CloseBracket)?;

        Ok(desugar(elements, tail))
    })
}

fn parse_list_tail(parser: &mut Parser) -> Result<ParseNode, Error> {
    match parser.current_token_kind() {
        TokenKind::Variable => parse_var(parser),
        TokenKind::OpenBracket => parse_list(parser),
        _ => Err(parser.fail(&[TokenKind::Variable, TokenKind::OpenBracket])),
    }
}

/// Folds parsed elements and an optional tail into nested `cons` atoms,
/// ending in `nil` when there is no tail.
pub fn desugar(elements: Vec<ParseNode>, tail: Option<ParseNode>) -> ParseNode {
    let end = tail.unwrap_or_else(|| ParseNode::atom(ParseNode::id(NIL), vec![]));

    elements.into_iter().rev().fold(end, |rest, element| {
        ParseNode::atom(
            ParseNode::id(CONS),
            vec![element.into_argument(), rest.into_argument()],
        )
    })
}
