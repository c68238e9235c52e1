#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorImpl};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use crate::ast::node::{LeafKind, NodeLabel, ParseNode};
pub use crate::config::ParserConfig;
pub use crate::parser::lookups::Nonterminal;
pub use crate::parser::parser::{parse, parse_program, parse_with_config, ParseOutcome};

/// A location in the source text. `line` and `column` are 1-based,
/// `offset` is the byte offset from the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line_at_position(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}


/// Renders an error as a line/column anchored diagnostic.
///
/// ```text
/// Line 1, column 12. Syntax error: unexpected `.`, expected `(` or identifier
///
/// f :- g; h, .
/// -----------^
/// ```
///
/// Errors raised at the end of the input carry no source line to point at
/// and are reported on a single line instead.
pub fn format_error(error: &Error, source: &str) -> String {
    if let ErrorImpl::UnexpectedEof { .. } = error.get_impl() {
        return format!("Unexpected end of file: {}\n", error);
    }

    let position = error.get_position();
    let line_text = get_line_at_position(source, position.line).unwrap_or_default();
    let dashes = position.column.saturating_sub(1);

    format!(
        "Line {}, column {}. {}: {}\n\n{}\n{:->width$}\n",
        position.line,
        position.column,
        error.get_category(),
        error,
        line_text,
        "^",
        width = dashes + 1
    )
}
