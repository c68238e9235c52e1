//! Clause bodies: disjunctions, conjunctions and their operands.

use crate::{
    ast::node::{NodeLabel, ParseNode},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    atom::parse_atom,
    parser::{fold_right, Parser},
};

/// `Expression -> Term (';' Expression)?`
///
/// `a ; b ; c` parses as `a ; (b ; c)`.
pub fn parse_expression(parser: &mut Parser) -> Result<ParseNode, Error> {
    let mut terms = vec![parse_term(parser)?];

    while let Some(term) = parser.optional(|p| {
        p.expect(TokenKind::Semicolon)?;
        parse_term(p)
    })? {
        terms.push(term);
    }

    Ok(fold_right(NodeLabel::Expression, terms))
}

/// `Term -> TermAtom (',' Term)?`
///
/// `a , b , c` parses as `a , (b , c)`.
pub fn parse_term(parser: &mut Parser) -> Result<ParseNode, Error> {
    let mut operands = vec![parse_term_atom(parser)?];

    while let Some(operand) = parser.optional(|p| {
        p.expect(TokenKind::Comma)?;
        parse_term_atom(p)
    })? {
        operands.push(operand);
    }

    Ok(fold_right(NodeLabel::Term, operands))
}

/// `TermAtom -> '(' Expression ')' | Atom`
pub fn parse_term_atom(parser: &mut Parser) -> Result<ParseNode, Error> {
    match parser.current_token_kind() {
        TokenKind::OpenParen => parser.nested(|p| {
            p.advance();
            let inner = parse_expression(p)?;
            p.expect(TokenKind::CloseParen)?;
            Ok(ParseNode::transparent(vec![inner]))
        }),
        TokenKind::Identifier => parse_atom(parser),
        _ => Err(parser.fail(&[TokenKind::OpenParen, TokenKind::Identifier])),
    }
}
