//! Atoms and their arguments.
//!
//! An atom is an identifier followed by any number of arguments. Argument
//! parentheses only group a single element (`f (g x)`); they are a
//! different production from the parentheses of a clause body, so
//! `f (a ; b)` is rejected.

use crate::{ast::node::ParseNode, errors::errors::Error, lexer::tokens::TokenKind};

use super::{list::parse_list, parser::Parser};

pub fn parse_id(parser: &mut Parser) -> Result<ParseNode, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    Ok(ParseNode::id(token.value))
}

pub fn parse_var(parser: &mut Parser) -> Result<ParseNode, Error> {
    let token = parser.expect(TokenKind::Variable)?;
    Ok(ParseNode::var(token.value))
}

/// `Atom -> Id Arg*`
pub fn parse_atom(parser: &mut Parser) -> Result<ParseNode, Error> {
    let head = parse_id(parser)?;
    let args = parse_arg_seq(parser)?;

    Ok(ParseNode::atom(head, args))
}

/// Collects arguments until the next token cannot start one. Never fails
/// on its own; only a fatal error is propagated.
pub fn parse_arg_seq(parser: &mut Parser) -> Result<Vec<ParseNode>, Error> {
    parser.repeat(parse_arg)
}

/// `Arg -> Id | Var | List | '(' BracketedArg ')'`
pub fn parse_arg(parser: &mut Parser) -> Result<ParseNode, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => parse_id(parser),
        TokenKind::Variable => parse_var(parser),
        TokenKind::OpenBracket => Ok(parse_list(parser)?.into_argument()),
        TokenKind::OpenParen => parse_parenthesized_arg(parser),
        _ => Err(parser.fail(&[
            TokenKind::Identifier,
            TokenKind::Variable,
            TokenKind::OpenBracket,
            TokenKind::OpenParen,
        ])),
    }
}

/// `BracketedArg -> '(' BracketedArg ')' | Elem`
pub fn parse_bracketed_arg(parser: &mut Parser) -> Result<ParseNode, Error> {
    match parser.current_token_kind() {
        TokenKind::OpenParen => parse_parenthesized_arg(parser),
        TokenKind::Identifier | TokenKind::Variable | TokenKind::OpenBracket => parse_elem(parser),
        _ => Err(parser.fail(&[
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Variable,
            TokenKind::OpenBracket,
        ])),
    }
}

fn parse_parenthesized_arg(parser: &mut Parser) -> Result<ParseNode, Error> {
    parser.nested(|p| {
        p.expect(TokenKind::OpenParen)?;
        let inner = parse_bracketed_arg(p)?;
        p.expect(TokenKind::CloseParen)?;
        Ok(ParseNode::transparent(vec![inner]))
    })
}

/// `Elem -> Atom | Var | List`
pub fn parse_elem(parser: &mut Parser) -> Result<ParseNode, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => parse_atom(parser),
        TokenKind::Variable => parse_var(parser),
        TokenKind::OpenBracket => parse_list(parser),
        _ => Err(parser.fail(&[
            TokenKind::Identifier,
            TokenKind::Variable,
            TokenKind::OpenBracket,
        ])),
    }
}
