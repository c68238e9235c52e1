//! Error types and error handling for the parser.
//!
//! This module defines the error types produced while tokenizing and
//! parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexical and syntactic phases
//! - Rendering of an expected-token set for diagnostics

pub mod errors;
