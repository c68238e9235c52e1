use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("module", TokenKind::Module);
        map.insert("type", TokenKind::Type);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    Variable,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,

    Dot,
    Comma,
    Semicolon,
    Pipe,
    Corkscrew, // :-
    Arrow,     // ->

    // Reserved
    Module,
    Type,
}

impl TokenKind {
    /// The fixed spelling of punctuation and keyword tokens.
    pub fn literal(&self) -> Option<&'static str> {
        match self {
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::OpenBracket => Some("["),
            TokenKind::CloseBracket => Some("]"),
            TokenKind::Dot => Some("."),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Pipe => Some("|"),
            TokenKind::Corkscrew => Some(":-"),
            TokenKind::Arrow => Some("->"),
            TokenKind::Module => Some("module"),
            TokenKind::Type => Some("type"),
            TokenKind::EOF | TokenKind::Identifier | TokenKind::Variable => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::EOF => write!(f, "end of input"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Variable => write!(f, "variable"),
            TokenKind::Module | TokenKind::Type => {
                write!(f, "keyword `{}`", self.literal().unwrap_or_default())
            }
            _ => write!(f, "`{}`", self.literal().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Variable => write!(
                f,
                "{} ({}) at {}:{}",
                self.kind, self.value, self.span.start.line, self.span.start.column
            ),
            _ => write!(
                f,
                "{} at {}:{}",
                self.kind, self.span.start.line, self.span.start.column
            ),
        }
    }
}
