use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{TokenKind, RESERVED_LOOKUP},
    Position,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEof { .. } => "UnexpectedEof",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    /// Short heading used when the error is rendered for a user.
    pub fn get_category(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "Lexical error",
            ErrorImpl::NestingTooDeep { .. } => "Nesting error",
            _ => "Syntax error",
        }
    }

    /// A hint on how the input might be fixed, when there is a likely one.
    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::Suggestion(String::from(
                "identifiers start with a lowercase letter or `_`, variables with an uppercase letter",
            )),
            ErrorImpl::UnexpectedToken { token, .. } if RESERVED_LOOKUP.contains_key(token.as_str()) => {
                ErrorTip::Suggestion(format!("`{}` is a keyword and cannot be used as a name", token))
            }
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedEof { .. } => ErrorTip::Suggestion(String::from(
                "the input ends inside a clause, is a `.` or `)` missing?",
            )),
            ErrorImpl::TrailingInput { .. } => ErrorTip::Suggestion(String::from(
                "module and type declarations must come before relations",
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "more than {} nested groups, raise the maximum depth to accept this input",
                limit
            )),
        }
    }

    /// Fatal errors abort the parse instead of letting an enclosing
    /// alternative try the next branch.
    pub fn is_fatal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::NestingTooDeep { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal character '{token}'")]
    UnrecognisedToken { token: String },
    #[error("unexpected `{token}`, expected {expected}")]
    UnexpectedToken { token: String, expected: String },
    #[error("expected {expected}")]
    UnexpectedEof { expected: String },
    #[error("unexpected trailing input starting at `{token}`")]
    TrailingInput { token: String },
    #[error("nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Joins a set of expected token kinds into a readable list, e.g.
/// "`.` or `:-`" or "identifier, `(` or `[`".
pub fn describe_expected(expected: &[TokenKind]) -> String {
    let names = expected.iter().map(|kind| kind.to_string()).collect::<Vec<String>>();

    match names.split_last() {
        None => String::from("end of input"),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}
