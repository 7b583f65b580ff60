//! Commands accepted by the interactive prompt.
//!
//! A command names a transformation followed by the equation to transform, such as
//! `simplify 2x + 3x = 25`. Isolating a variable names the variable before a colon:
//! `isolate y: 4y - 8 = 2y`.

use ariadne::Fmt;
use eqt_attrs::ErrorKind;
use eqt_compute::transform::{Engine, TransformKind, TransformationResult};
use eqt_error::{Error, EXPR};
use std::ops::Range;

/// The first word of the command is not a transformation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `{}`", self.name),
    labels = ["this command"],
    help = format!(
        "try {}, {}, {} or {}",
        "simplify".fg(EXPR),
        "expand".fg(EXPR),
        "factorize".fg(EXPR),
        "isolate <var>:".fg(EXPR),
    ),
)]
pub struct UnknownCommand {
    /// The command that was given.
    pub name: String,
}

/// The command has no equation after it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing equation",
    labels = ["add an equation here"],
)]
pub struct MissingEquation;

/// The `isolate` command was not given a variable followed by a colon.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing variable to isolate",
    labels = ["expected a variable name and `:` here"],
    help = format!("write the command as {}", "isolate y: 4y - 8 = 2y".fg(EXPR)),
)]
pub struct MissingVariable;

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    /// The transformation to apply.
    pub kind: TransformKind,

    /// The equation to transform.
    pub equation: &'a str,

    /// The position of the equation in the command line.
    pub offset: usize,
}

/// Splits off the first word of the given text, returning the word, its span, and the rest of
/// the text.
fn first_word(text: &str, start: usize) -> (&str, Range<usize>, &str) {
    let trimmed = text.trim_start();
    let word_start = start + text.len() - trimmed.len();
    let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
    let (word, rest) = trimmed.split_at(end);
    (word, word_start..word_start + end, rest)
}

/// Returns the trimmed equation in the given text along with its position.
fn split_equation<'a>(line: &str, rest: &'a str) -> Result<(&'a str, usize), Error> {
    let equation = rest.trim();
    let offset = line.len() - rest.trim_start().len();
    if equation.is_empty() {
        return Err(Error::at(line.len()..line.len(), MissingEquation));
    }
    Ok((equation, offset))
}

/// Parses a command line.
pub fn parse_command(line: &str) -> Result<Command<'_>, Error> {
    let (name, span, rest) = first_word(line, 0);
    let kind = match name {
        "simplify" => TransformKind::Simplify,
        "expand" => TransformKind::Expand,
        "factor" | "factorize" => TransformKind::Factorize,
        "isolate" | "isolate_variable" => {
            let after_name = line.len() - rest.len();
            let Some((target, rest)) = rest.split_once(':') else {
                return Err(Error::at(after_name..line.len(), MissingVariable));
            };
            let target = target.trim();
            if target.is_empty() || target.contains(char::is_whitespace) {
                return Err(Error::at(after_name..after_name + target.len().max(1), MissingVariable));
            }

            let (equation, offset) = split_equation(line, rest)?;
            return Ok(Command {
                kind: TransformKind::IsolateVariable { target: target.to_string() },
                equation,
                offset,
            });
        },
        _ => return Err(Error::at(span, UnknownCommand { name: name.to_string() })),
    };

    let (equation, offset) = split_equation(line, rest)?;
    Ok(Command { kind, equation, offset })
}

/// Parses and runs a command line. Errors point into the command line.
pub fn execute(engine: &Engine, line: &str) -> Result<TransformationResult, Error> {
    let command = parse_command(line)?;
    engine
        .try_transform("input", command.equation, &command.kind)
        .map_err(|err| {
            let mut err = err.into_inner();
            for span in &mut err.spans {
                *span = span.start + command.offset..span.end + command.offset;
            }
            err
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn transform_commands() {
        assert_eq!(parse_command("simplify 2x + 3x = 25").unwrap(), Command {
            kind: TransformKind::Simplify,
            equation: "2x + 3x = 25",
            offset: 9,
        });
        assert_eq!(parse_command("  factor   10a - 5  ").unwrap(), Command {
            kind: TransformKind::Factorize,
            equation: "10a - 5",
            offset: 11,
        });
    }

    #[test]
    fn isolate_command() {
        assert_eq!(parse_command("isolate y: 4y - 8 = 2y").unwrap(), Command {
            kind: TransformKind::IsolateVariable { target: "y".to_string() },
            equation: "4y - 8 = 2y",
            offset: 11,
        });
    }

    #[test]
    fn command_errors() {
        let err = parse_command("integrate x").unwrap_err();
        assert_eq!(err.to_string(), "unknown command `integrate`");
        assert_eq!(err.spans, vec![0..9]);

        let err = parse_command("expand   ").unwrap_err();
        assert_eq!(err.to_string(), "missing equation");

        let err = parse_command("isolate 4y - 8 = 2y").unwrap_err();
        assert_eq!(err.to_string(), "missing variable to isolate");
    }

    #[test]
    fn execute_shifts_spans() {
        let engine = Engine::default();
        assert_eq!(execute(&engine, "expand (z+2)(z-4)").unwrap().final_result, "z^2 - 2z - 8 = 0");

        let err = execute(&engine, "simplify 2x +* = 5").unwrap_err();
        assert_eq!(err.spans, vec![13..14]);
    }
}
