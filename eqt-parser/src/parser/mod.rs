pub mod ast;
pub mod error;
pub mod fmt;
pub mod token;

use eqt_error::{Error, ErrorKind};
use super::tokenizer::{tokenize_complete, Token};
use std::ops::Range;

/// A high-level parser for equations. This is the type to use to parse an arbitrary piece of
/// equation text into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::at(self.span(), kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns every token of the source, including whitespace.
    pub fn tokens(&self) -> &[Token<'source>] {
        &self.tokens
    }

    /// Move the cursor to the previous token. This function is a no-op if the cursor is at the
    /// beginning of the stream.
    pub fn prev(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Returns the previous token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the beginning of the stream.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor.checked_sub(1)?)
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Advances the cursor past any whitespace tokens.
    pub fn skip_whitespace(&mut self) {
        while self.current_token().map_or(false, Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the next non-whitespace token without advancing the cursor.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor.min(self.tokens.len())..]
            .iter()
            .find(|token| !token.is_whitespace())
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(error::UnexpectedEof))
    }

    /// Moves the cursor of this parser to the cursor of the given parser, which must have been
    /// cloned from this one.
    pub fn set_cursor(&mut self, other: &Parser<'source>) {
        self.cursor = other.cursor;
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value. The stream is left unchanged if parsing fails.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser (trailing whitespace aside); if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        self.skip_whitespace();
        match self.current_token() {
            None => Ok(value),
            Some(token) if token.kind == crate::tokenizer::TokenKind::CloseParen => {
                Err(self.error(error::UnclosedParenthesis { opening: false }))
            },
            Some(_) => Err(self.error(error::ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The operation is left-associative: `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The operation is right-associative: `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`, or implicit) and division (`/`), which separate
    /// factors.
    Factor,

    /// Precedence of unary negation (`-`) and unary plus (`+`).
    Neg,

    /// Precedence of exponentiation (`^` or `**`).
    Exp,
}

impl Precedence {
    /// Returns the next higher precedence. The highest precedence is its own successor.
    pub fn next(self) -> Self {
        match self {
            Self::Any => Self::Term,
            Self::Term => Self::Factor,
            Self::Factor => Self::Neg,
            Self::Neg | Self::Exp => Self::Exp,
        }
    }
}
