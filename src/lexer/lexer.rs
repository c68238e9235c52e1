use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        // Every pattern is anchored at the cursor.
        regex: Regex::new(&format!("^(?:{})", regex)).expect("lexer pattern must compile"),
        handler,
    }
}

lazy_static! {
    // Tried in order; `:-` and `->` come before anything that could claim
    // one of their characters.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("[ \\t\\r\\n]+", skip_handler),
        pattern("%[^\\n]*", skip_handler),
        pattern("[a-z_][a-zA-Z0-9_]*", symbol_handler),
        pattern("[A-Z][a-zA-Z0-9_]*", variable_handler),
        pattern(":-", MK_DEFAULT_HANDLER!(TokenKind::Corkscrew, ":-")),
        pattern("->", MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->")),
        pattern("\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        pattern(",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern("\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        pattern("\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        pattern("\\|", MK_DEFAULT_HANDLER!(TokenKind::Pipe, "|")),
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves the cursor forward by `n` bytes, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());

        for ch in self.source[self.pos..end].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        log::trace!("token {}", token);
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    if let Some(matched) = regex.find(lexer.remainder()) {
        lexer.advance_n(matched.end());
    }
}

fn push_word(lexer: &mut Lexer, regex: &Regex, kind: TokenKind) {
    let Some(matched) = regex.find(lexer.remainder()) else {
        return;
    };
    let value = matched.as_str();
    let kind = RESERVED_LOOKUP.get(value).copied().unwrap_or(kind);

    let start = lexer.position();
    lexer.advance_n(value.len());
    lexer.push(MK_TOKEN!(
        kind,
        String::from(value),
        Span {
            start,
            end: lexer.position(),
        }
    ));
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    push_word(lexer, regex, TokenKind::Identifier);
}

fn variable_handler(lexer: &mut Lexer, regex: &Regex) {
    push_word(lexer, regex, TokenKind::Variable);
}

/// Splits `source` into tokens, terminated by a single `EOF` token.
///
/// Stops at the first character that starts no token and reports it as
/// `UnrecognisedToken` at its line and column.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let matched = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match matched {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                let token = lex.at().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    lex.position(),
                ));
            }
        }
    }

    let end = lex.position();
    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        Span { start: end, end }
    ));
    Ok(lex.tokens)
}
