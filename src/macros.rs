//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-spelling tokens

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, "foo".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for punctuation.
///
/// Generates a handler function that pushes a token with the given kind,
/// spanning the literal, and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^:-").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Corkscrew, ":-"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {{
        fn handler(lexer: &mut Lexer, _regex: &Regex) {
            let start = lexer.position();
            lexer.advance_n($value.len());
            lexer.push(MK_TOKEN!(
                $kind,
                String::from($value),
                Span {
                    start,
                    end: lexer.position(),
                }
            ));
        }
        handler
    }};
}
