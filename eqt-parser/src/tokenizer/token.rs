use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[\n\r]+")]
    NewLine,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    /// Multiplication that was not written in the source, but inserted between two adjacent
    /// operands, such as in `2x` or `(a)(b)`. The Unicode "invisible times" character spells it
    /// explicitly.
    #[token("\u{2062}")]
    ImplicitMul,

    #[token("/")]
    Div,

    /// Both the caret `^` and the double star `**` spell exponentiation.
    #[token("^")]
    #[token("**")]
    Exp,

    #[token("=")]
    Equals,

    /// The square root function, written `sqrt(...)`.
    #[token("sqrt")]
    Sqrt,

    /// A run of letters is split into one-letter names by [`split_names`]. Names containing a
    /// digit or underscore, such as `x1` or `x_0`, are kept whole.
    ///
    /// [`split_names`]: super::split_names
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[0-9]+\.[0-9]*|\.[0-9]+")]
    Float,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::NewLine)
    }

    /// Returns true if a token of this kind can end an operand, i.e. an implicit multiplication
    /// may follow it.
    pub fn ends_operand(self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Float | TokenKind::Name | TokenKind::CloseParen)
    }

    /// Returns true if a token of this kind can begin an operand, i.e. an implicit
    /// multiplication may precede it.
    pub fn starts_operand(self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Float | TokenKind::Name | TokenKind::Sqrt | TokenKind::OpenParen
        )
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    ///
    /// Implicit multiplication tokens have an empty span placed between the two operands.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
