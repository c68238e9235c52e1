use std::{fmt::Display, str::FromStr};

use crate::{ast::node::ParseNode, errors::errors::Error};

use super::{
    atom::{parse_arg, parse_arg_seq, parse_atom, parse_bracketed_arg, parse_elem},
    expr::{parse_expression, parse_term, parse_term_atom},
    list::parse_list,
    parser::Parser,
    relation::{parse_module, parse_prolog, parse_relation, parse_type_decl},
    types::{parse_type, parse_type_atom},
};

pub type ProductionHandler = fn(&mut Parser) -> Result<ParseNode, Error>;

/// The productions that can be used as the root of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nonterminal {
    #[default]
    Prolog,
    Module,
    TypeDecl,
    Type,
    TypeAtom,
    Relation,
    Expression,
    Term,
    TermAtom,
    Atom,
    ArgSeq,
    Arg,
    BracketedArg,
    Elem,
    List,
}

impl Nonterminal {
    pub const ALL: [Nonterminal; 15] = [
        Nonterminal::Prolog,
        Nonterminal::Module,
        Nonterminal::TypeDecl,
        Nonterminal::Type,
        Nonterminal::TypeAtom,
        Nonterminal::Relation,
        Nonterminal::Expression,
        Nonterminal::Term,
        Nonterminal::TermAtom,
        Nonterminal::Atom,
        Nonterminal::ArgSeq,
        Nonterminal::Arg,
        Nonterminal::BracketedArg,
        Nonterminal::Elem,
        Nonterminal::List,
    ];

    pub fn production(&self) -> ProductionHandler {
        match self {
            Nonterminal::Prolog => parse_prolog,
            Nonterminal::Module => parse_module,
            Nonterminal::TypeDecl => parse_type_decl,
            Nonterminal::Type => parse_type,
            Nonterminal::TypeAtom => parse_type_atom,
            Nonterminal::Relation => parse_relation,
            Nonterminal::Expression => parse_expression,
            Nonterminal::Term => parse_term,
            Nonterminal::TermAtom => parse_term_atom,
            Nonterminal::Atom => parse_atom,
            Nonterminal::ArgSeq => parse_arg_seq_root,
            Nonterminal::Arg => parse_arg,
            Nonterminal::BracketedArg => parse_bracketed_arg,
            Nonterminal::Elem => parse_elem,
            Nonterminal::List => parse_list,
        }
    }
}

/// An argument sequence has no node of its own; as a root it is returned
/// as a transparent node over the arguments.
fn parse_arg_seq_root(parser: &mut Parser) -> Result<ParseNode, Error> {
    Ok(ParseNode::transparent(parse_arg_seq(parser)?))
}

impl Display for Nonterminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for Nonterminal {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let wanted = name.replace(['-', '_'], "").to_lowercase();

        Nonterminal::ALL
            .into_iter()
            .find(|nonterminal| nonterminal.to_string().to_lowercase() == wanted)
            .ok_or_else(|| {
                let names = Nonterminal::ALL
                    .iter()
                    .map(|nonterminal| nonterminal.to_string().to_lowercase())
                    .collect::<Vec<_>>();
                format!("unknown nonterminal `{}`, expected one of: {}", name, names.join(", "))
            })
    }
}
