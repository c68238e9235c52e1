//! Parser implementation for building the parse tree.
//!
//! This module contains the main Parser struct, the backtracking
//! primitives the productions are composed from, and the entry points.
//!
//! Productions are plain functions `fn(&mut Parser) -> Result<ParseNode, Error>`.
//! A production that fails may leave the cursor anywhere; the combinators
//! that try alternatives (`attempt`, `optional`, `repeat`) restore it to
//! where the alternative started, so a rejected branch never consumes input.
//!
//! Every failed token match is recorded together with its position. The
//! error surfaced to the caller is the one recorded furthest into the
//! input, with all token kinds that were expected there.

use crate::{
    ast::node::{NodeLabel, ParseNode},
    config::ParserConfig,
    errors::errors::{describe_expected, Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::lookups::Nonterminal;

/// Either the tree of the requested production, covering the whole input,
/// or the single best diagnostic.
pub type ParseOutcome = Result<ParseNode, Error>;

/// Token kinds that would have allowed progress at a token index.
#[derive(Debug, Clone)]
struct Expectation {
    pos: usize,
    expected: Vec<TokenKind>,
}

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Current nesting of parenthesised groups and lists
    depth: usize,
    config: ParserConfig,
    /// Furthest failure seen so far
    furthest: Option<Expectation>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended if the stream does not already end with one.
    pub fn new(mut tokens: Vec<Token>, config: ParserConfig) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or_else(Position::start);
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span { start: end, end },
            });
        }

        Parser {
            tokens,
            pos: 0,
            depth: 0,
            config,
            furthest: None,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the one consumed. The cursor
    /// never moves past `EOF`.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    /// Consumes the current token if it is of the given kind. A miss is
    /// recorded as an expectation.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            self.record(&[kind]);
            false
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// Returns the token if it matches, otherwise records the expectation
    /// and returns an `UnexpectedToken`/`UnexpectedEof` error.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.fail(&[kind]))
        }
    }

    /// Records that one of `expected` was required at the current token and
    /// returns the corresponding error.
    pub fn fail(&mut self, expected: &[TokenKind]) -> Error {
        self.record(expected);
        self.error_at(self.pos, expected)
    }

    fn record(&mut self, expected: &[TokenKind]) {
        let pos = self.pos;

        if let Some(furthest) = self.furthest.as_mut() {
            if furthest.pos > pos {
                return;
            }
            if furthest.pos == pos {
                for kind in expected {
                    if !furthest.expected.contains(kind) {
                        furthest.expected.push(*kind);
                    }
                }
                return;
            }
        }

        self.furthest = Some(Expectation {
            pos,
            expected: expected.to_vec(),
        });
    }

    fn error_at(&self, pos: usize, expected: &[TokenKind]) -> Error {
        let token = &self.tokens[pos];
        let expected = describe_expected(expected);

        let error = match token.kind {
            TokenKind::EOF => ErrorImpl::UnexpectedEof { expected },
            _ => ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
                expected,
            },
        };

        Error::new(error, token.span.start)
    }

    /// Runs a production, rewinding the cursor if it fails.
    pub fn attempt<T>(
        &mut self,
        production: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let start = self.pos;
        let result = production(self);

        if result.is_err() && self.pos != start {
            log::trace!("backtrack from token {} to {}", self.pos, start);
            self.pos = start;
        }

        result
    }

    /// Runs a production that may be absent. A non-fatal failure rewinds
    /// and yields `None`.
    pub fn optional<T>(
        &mut self,
        production: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<Option<T>, Error> {
        match self.attempt(production) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.is_fatal() => Err(error),
            Err(_) => Ok(None),
        }
    }

    /// Runs a production zero or more times, stopping at the first failure
    /// or at the first success that consumed nothing.
    pub fn repeat<T>(
        &mut self,
        mut production: impl FnMut(&mut Parser) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        let mut items = vec![];

        loop {
            let start = self.pos;
            match self.optional(&mut production)? {
                Some(item) => items.push(item),
                None => break,
            }
            if self.pos == start {
                break;
            }
        }

        Ok(items)
    }

    /// Runs a production one nesting level deeper, failing fatally once
    /// the configured maximum depth is exceeded.
    pub fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= self.config.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.config.max_depth,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// Returns true once every token but `EOF` has been consumed.
    pub fn at_eof(&self) -> bool {
        self.check(TokenKind::EOF)
    }

    /// Returns the position of the current token in the source.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }

    /// The error recorded furthest into the input.
    pub fn furthest_error(&self) -> Error {
        match &self.furthest {
            Some(furthest) => self.error_at(furthest.pos, &furthest.expected),
            None => self.error_at(self.pos, &[]),
        }
    }

    /// The error for a root production that stopped before the end of the
    /// input. A failure recorded past the stopping point is reported in
    /// place of the leftover token.
    pub fn trailing_input_error(&self) -> Error {
        match &self.furthest {
            Some(furthest) if furthest.pos > self.pos => self.furthest_error(),
            _ => Error::new(
                ErrorImpl::TrailingInput {
                    token: self.current_token().value.clone(),
                },
                self.get_position(),
            ),
        }
    }
}

/// Builds the right-nested chain used by `Expression`, `Term` and `Type`:
/// `[a, b, c]` becomes `label(a, label(b, label(c)))`.
pub fn fold_right(label: NodeLabel, items: Vec<ParseNode>) -> ParseNode {
    items
        .into_iter()
        .rev()
        .fold(None, |rest, item| {
            let children = match rest {
                Some(rest) => vec![item, rest],
                None => vec![item],
            };
            Some(ParseNode::structural(label, children))
        })
        .unwrap_or_else(|| ParseNode::structural(label, vec![]))
}

/// Parses `tokens` as `start`, requiring the production to cover every
/// token before `EOF`.
pub fn parse_tokens(tokens: Vec<Token>, start: Nonterminal, config: &ParserConfig) -> ParseOutcome {
    let mut parser = Parser::new(tokens, *config);
    let production = start.production();

    let outcome = match production(&mut parser) {
        Ok(node) if parser.at_eof() => Ok(node),
        Ok(_) => Err(parser.trailing_input_error()),
        Err(error) if error.is_fatal() => Err(error),
        Err(_) => Err(parser.furthest_error()),
    };

    match &outcome {
        Ok(_) => log::debug!("parsed {} from {} tokens", start, parser.tokens.len()),
        Err(error) => log::debug!(
            "failed to parse {}: {} at {}:{}",
            start,
            error,
            error.get_position().line,
            error.get_position().column
        ),
    }

    outcome
}

/// Parses `source` as `start` with the given configuration.
pub fn parse_with_config(source: &str, start: Nonterminal, config: &ParserConfig) -> ParseOutcome {
    let tokens = tokenize(source)?;
    parse_tokens(tokens, start, config)
}

/// Parses `source` as `start` with the default configuration.
///
/// This is the main entry point. Any nonterminal can be used as the root,
/// which makes single productions testable on their own.
pub fn parse(source: &str, start: Nonterminal) -> ParseOutcome {
    parse_with_config(source, start, &ParserConfig::default())
}

/// Parses a whole program.
pub fn parse_program(source: &str) -> ParseOutcome {
    parse(source, Nonterminal::Prolog)
}
