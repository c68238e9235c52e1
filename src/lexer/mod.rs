//! Lexical analysis module for the parser.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of the `module`/`type` keywords, identifiers and variables
//! - Line/column tracking for every token, for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
