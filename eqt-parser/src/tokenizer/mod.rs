pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, with implicit
/// multiplication tokens inserted. This allows us to backtrack in case of an error.
///
/// Input the lexer cannot match at all is kept as a [`TokenKind::Symbol`] token, so that the
/// parser can report it.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    insert_implicit_multiplication(split_names(tokens)).into_boxed_slice()
}

/// Splits every [`TokenKind::Name`] made only of letters into one name per letter, so that `xy`
/// reads as `x y`. Names containing a digit or underscore are left alone.
pub fn split_names(tokens: Vec<Token>) -> Vec<Token> {
    let mut result = Vec::with_capacity(tokens.len());
    for token in tokens {
        let splittable = token.kind == TokenKind::Name
            && token.lexeme.len() > 1
            && token.lexeme.bytes().all(|b| b.is_ascii_alphabetic());
        if !splittable {
            result.push(token);
            continue;
        }

        let (start, lexeme) = (token.span.start, token.lexeme);
        result.extend((0..lexeme.len()).map(move |i| Token {
            span: start + i..start + i + 1,
            kind: TokenKind::Name,
            lexeme: &lexeme[i..i + 1],
        }));
    }
    result
}

/// Inserts a [`TokenKind::ImplicitMul`] token between every pair of adjacent operands that are
/// not separated by an operator, such as `2x`, `x y`, `3(x + 1)`, or `(z + 2)(z - 4)`.
/// Whitespace between the operands does not prevent the insertion.
pub fn insert_implicit_multiplication(tokens: Vec<Token>) -> Vec<Token> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut last_significant: Option<TokenKind> = None;

    for token in tokens {
        if token.is_whitespace() {
            result.push(token);
            continue;
        }

        if last_significant.map_or(false, TokenKind::ends_operand) && token.kind.starts_operand() {
            result.push(Token {
                span: token.span.start..token.span.start,
                kind: TokenKind::ImplicitMul,
                lexeme: "",
            });
        }

        last_significant = Some(token.kind);
        result.push(token);
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    /// Returns the kinds of the significant tokens of the complete token stream.
    fn significant_kinds(input: &str) -> Vec<TokenKind> {
        tokenize_complete(input)
            .iter()
            .filter(|token| !token.is_whitespace())
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn equation_with_decimals() {
        compare_tokens(
            "2.5x ** 2 = .5",
            [
                (TokenKind::Float, "2.5"),
                (TokenKind::Name, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Exp, "**"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Equals, "="),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, ".5"),
            ],
        );
    }

    #[test]
    fn unknown_characters() {
        compare_tokens(
            "x $ 3",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "$"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "3"),
            ],
        );
    }

    #[test]
    fn implicit_coefficient() {
        assert_eq!(significant_kinds("2x"), vec![
            TokenKind::Int,
            TokenKind::ImplicitMul,
            TokenKind::Name,
        ]);
    }

    #[test]
    fn implicit_between_groups() {
        assert_eq!(significant_kinds("(z+2)(z-4)"), vec![
            TokenKind::OpenParen,
            TokenKind::Name,
            TokenKind::Add,
            TokenKind::Int,
            TokenKind::CloseParen,
            TokenKind::ImplicitMul,
            TokenKind::OpenParen,
            TokenKind::Name,
            TokenKind::Sub,
            TokenKind::Int,
            TokenKind::CloseParen,
        ]);
    }

    #[test]
    fn implicit_across_whitespace() {
        assert_eq!(significant_kinds("x y"), vec![
            TokenKind::Name,
            TokenKind::ImplicitMul,
            TokenKind::Name,
        ]);
    }

    #[test]
    fn letter_runs_are_split() {
        let names = tokenize_complete("3xy")
            .iter()
            .map(|token| (token.kind, token.lexeme, token.span.clone()))
            .collect::<Vec<_>>();
        assert_eq!(names, vec![
            (TokenKind::Int, "3", 0..1),
            (TokenKind::ImplicitMul, "", 1..1),
            (TokenKind::Name, "x", 1..2),
            (TokenKind::ImplicitMul, "", 2..2),
            (TokenKind::Name, "y", 2..3),
        ]);
    }

    #[test]
    fn names_with_digits_stay_whole() {
        compare_tokens("x1 + x_0", [
            (TokenKind::Name, "x1"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Add, "+"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Name, "x_0"),
        ]);
        assert_eq!(significant_kinds("2x1"), vec![
            TokenKind::Int,
            TokenKind::ImplicitMul,
            TokenKind::Name,
        ]);
    }

    #[test]
    fn square_root_keyword() {
        assert_eq!(significant_kinds("2sqrt(5)"), vec![
            TokenKind::Int,
            TokenKind::ImplicitMul,
            TokenKind::Sqrt,
            TokenKind::OpenParen,
            TokenKind::Int,
            TokenKind::CloseParen,
        ]);
        assert_eq!(significant_kinds("sqrtx"), vec![TokenKind::Name; 5]
            .into_iter()
            .flat_map(|kind| [TokenKind::ImplicitMul, kind])
            .skip(1)
            .collect::<Vec<_>>());
    }

    #[test]
    fn no_implicit_after_operator() {
        assert_eq!(significant_kinds("x^2 - 3"), vec![
            TokenKind::Name,
            TokenKind::Exp,
            TokenKind::Int,
            TokenKind::Sub,
            TokenKind::Int,
        ]);
    }
}
