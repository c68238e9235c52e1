//! Top-level productions: the program, its module header, type
//! declarations and relations.

use crate::{
    ast::node::{NodeLabel, ParseNode},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{atom::parse_atom, atom::parse_id, expr::parse_expression, parser::Parser, types::parse_type};

/// `Prolog -> Module? TypeDecl* Relation*`
pub fn parse_prolog(parser: &mut Parser) -> Result<ParseNode, Error> {
    let mut children = vec![];

    if let Some(module) = parser.optional(parse_module)? {
        children.push(module);
    }
    children.extend(parser.repeat(parse_type_decl)?);
    children.extend(parser.repeat(parse_relation)?);

    Ok(ParseNode::structural(NodeLabel::Prolog, children))
}

/// `Module -> 'module' Id '.'`
pub fn parse_module(parser: &mut Parser) -> Result<ParseNode, Error> {
    parser.expect(TokenKind::Module)?;
    let name = parse_id(parser)?;
    parser.expect(TokenKind::Dot)?;

    Ok(ParseNode::structural(NodeLabel::Module, vec![name]))
}

/// `TypeDecl -> 'type' Id Type '.'`
pub fn parse_type_decl(parser: &mut Parser) -> Result<ParseNode, Error> {
    parser.expect(TokenKind::Type)?;
    let name = parse_id(parser)?;
    let signature = parse_type(parser)?;
    parser.expect(TokenKind::Dot)?;

    Ok(ParseNode::structural(NodeLabel::TypeDecl, vec![name, signature]))
}

/// `Relation -> Atom ( '.' | ':-' Expression '.' )`
///
/// The token after the head decides between a fact and a rule.
pub fn parse_relation(parser: &mut Parser) -> Result<ParseNode, Error> {
    let head = parse_atom(parser)?;

    match parser.current_token_kind() {
        TokenKind::Dot => {
            parser.advance();
            Ok(ParseNode::structural(NodeLabel::Relation, vec![head]))
        }
        TokenKind::Corkscrew => {
            parser.advance();
            let body = parse_expression(parser)?;
            parser.expect(TokenKind::Dot)?;
            Ok(ParseNode::structural(NodeLabel::Relation, vec![head, body]))
        }
        _ => Err(parser.fail(&[TokenKind::Dot, TokenKind::Corkscrew])),
    }
}
