//! Lexer implementation for bitexpr
//! Converts an expression string into a stream of tokens

use logos::Logos;

use bitexpr_number::ErrorKind;

use crate::token::{Location, Token};
use crate::LogosToken;

/// Input the lexer could not consume.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected input {lexeme:?} at offset {offset}")]
pub struct LexError {
    /// Byte offset of the first unconsumed character
    pub offset: usize,
    /// The rejected slice of input
    pub lexeme: String,
}

impl LexError {
    /// Lexing failures always classify as malformed input.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidExpression
    }
}

impl From<LexError> for ErrorKind {
    fn from(err: LexError) -> Self {
        err.kind()
    }
}

/// Iterator over the tokens of one expression string.
///
/// Yields `Err` once at the first character it cannot consume and then stops.
pub struct Lexer<'a> {
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
    /// Set after the first error so the iterator fuses
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(source),
            failed: false,
        }
    }

    /// Get the next token from the source text
    pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        if self.failed {
            return None;
        }

        let raw = self.inner.next()?;
        let span = self.inner.span();
        let location = Location {
            offset: span.start,
            len: span.len(),
        };

        match raw {
            Ok(logos_token) => {
                let token = Token::new(logos_token.token_type(), location);
                #[cfg(feature = "logging")]
                log::trace!("lexed {:?} at {}", token.token_type, location.offset);
                Some(Ok(token))
            }
            Err(()) => {
                self.failed = true;
                let err = LexError {
                    offset: span.start,
                    lexeme: self.inner.slice().to_string(),
                };
                #[cfg(feature = "logging")]
                log::debug!("lex error: {err}");
                Some(Err(err))
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Lexes `source` into its complete token sequence.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}
