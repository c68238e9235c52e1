//! Type expressions of `type` declarations.
//!
//! Only the shape is recognised: an arrow chain over atoms, variables and
//! parenthesised types.

use crate::{
    ast::node::{NodeLabel, ParseNode},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    atom::{parse_atom, parse_var},
    parser::{fold_right, Parser},
};

/// `Type -> TypeAtom ('->' Type)?`
///
/// `a -> b -> c` parses as `a -> (b -> c)`.
pub fn parse_type(parser: &mut Parser) -> Result<ParseNode, Error> {
    let mut operands = vec![parse_type_atom(parser)?];

    while let Some(operand) = parser.optional(|p| {
        p.expect(TokenKind::Arrow)?;
        parse_type_atom(p)
    })? {
        operands.push(operand);
    }

    Ok(fold_right(NodeLabel::Type, operands))
}

/// `TypeAtom -> '(' Type ')' | Atom | Var`
pub fn parse_type_atom(parser: &mut Parser) -> Result<ParseNode, Error> {
    match parser.current_token_kind() {
        TokenKind::OpenParen => parser.nested(|p| {
            p.advance();
            let inner = parse_type(p)?;
            p.expect(TokenKind::CloseParen)?;
            Ok(ParseNode::transparent(vec![inner]))
        }),
        TokenKind::Identifier => parse_atom(parser),
        TokenKind::Variable => parse_var(parser),
        _ => Err(parser.fail(&[
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Variable,
        ])),
    }
}
