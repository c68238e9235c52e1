//! Parser module for building the parse tree.
//!
//! This module contains a backtracking recursive-descent parser with one
//! function per grammar production:
//!
//! ```text
//! Prolog       -> Module? TypeDecl* Relation*
//! Module       -> 'module' Id '.'
//! TypeDecl     -> 'type' Id Type '.'
//! Type         -> TypeAtom ('->' Type)?
//! TypeAtom     -> '(' Type ')' | Atom | Var
//! Relation     -> Atom ( '.' | ':-' Expression '.' )
//! Expression   -> Term (';' Expression)?
//! Term         -> TermAtom (',' Term)?
//! TermAtom     -> '(' Expression ')' | Atom
//! Atom         -> Id Arg*
//! Arg          -> Id | Var | List | '(' BracketedArg ')'
//! BracketedArg -> '(' BracketedArg ')' | Elem
//! List         -> '[' ']' | '[' Elem (',' Elem)* ('|' (Var | List))? ']'
//! Elem         -> Atom | Var | List
//! ```
//!
//! Alternatives are chosen by their first token. `;`, `,` and `->` chains
//! are right-associative. List literals are rewritten into `cons`/`nil`
//! atoms as soon as they are parsed.

pub mod atom;
pub mod expr;
pub mod list;
pub mod lookups;
pub mod parser;
pub mod relation;
pub mod types;

#[cfg(test)]
mod tests;
