//! Structs to help parse binary and unary operators.

use eqt_error::Error;
use crate::{
    parser::{error::UnexpectedToken, Associativity, Parse, Parser, Precedence},
    tokenizer::TokenKind,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Neg,
    Pos,
}

impl UnaryOpKind {
    /// Returns the precedence of the unary operation.
    pub fn precedence(&self) -> Precedence {
        Precedence::Neg
    }

    /// Returns the associativity of the unary operation.
    pub fn associativity(&self) -> Associativity {
        Associativity::Right
    }
}

/// A unary operator that takes one operand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryOp {
    /// The kind of unary operator.
    pub kind: UnaryOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl UnaryOp {
    /// Returns the precedence of the unary operator.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }

    /// Returns the associativity of the unary operator.
    pub fn associativity(&self) -> Associativity {
        self.kind.associativity()
    }
}

impl Parse for UnaryOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = match token.kind {
            TokenKind::Sub => Ok(UnaryOpKind::Neg),
            TokenKind::Add => Ok(UnaryOpKind::Pos),
            _ => Err(Error::at(token.span.clone(), UnexpectedToken {
                expected: &[TokenKind::Sub, TokenKind::Add],
                found: token.kind,
            })),
        }?;

        Ok(Self {
            kind,
            span: token.span,
        })
    }
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Mul | Self::Div | Self::Add | Self::Sub => Associativity::Left,
        }
    }
}

/// A binary operator that takes two operands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// Whether this binary operator was implicitly inserted between two adjacent operands.
    pub implicit: bool,

    /// The region of the source code that this operator was parsed from. Implicit operators
    /// have an empty span.
    pub span: Range<usize>,
}

impl BinOp {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        self.kind.associativity()
    }
}

impl Parse for BinOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let (kind, implicit) = match token.kind {
            TokenKind::Exp => Ok((BinOpKind::Exp, false)),
            TokenKind::Mul => Ok((BinOpKind::Mul, false)),
            TokenKind::ImplicitMul => Ok((BinOpKind::Mul, true)),
            TokenKind::Div => Ok((BinOpKind::Div, false)),
            TokenKind::Add => Ok((BinOpKind::Add, false)),
            TokenKind::Sub => Ok((BinOpKind::Sub, false)),
            _ => Err(Error::at(token.span.clone(), UnexpectedToken {
                expected: &[
                    TokenKind::Exp,
                    TokenKind::Mul,
                    TokenKind::Div,
                    TokenKind::Add,
                    TokenKind::Sub,
                ],
                found: token.kind,
            })),
        }?;

        Ok(Self {
            kind,
            implicit,
            span: token.span,
        })
    }
}
