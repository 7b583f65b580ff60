//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs a kind with the regions of source text it points
//! at.

// lets `#[derive(ErrorKind)]` refer to `eqt_error::EXPR` from inside this crate's tests
extern crate self as eqt_error;

use ariadne::{Color, Report, Source};
use std::{fmt::{self, Debug, Display}, io::{self, Write}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// The one-line message describing the error, without any source context.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that points at a single region of the source code.
    pub fn at(span: Range<usize>, kind: impl ErrorKind + 'static) -> Self {
        Self::new(vec![span], kind)
    }

    /// Build a report from this error kind.
    ///
    /// Errors created without any span (such as errors raised after the source text is gone)
    /// point at the start of the source.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        if self.spans.is_empty() {
            self.kind.build_report(src_id, &[0..0])
        } else {
            self.kind.build_report(src_id, &self.spans)
        }
    }

    /// Writes the report for this error to the given writer, using `input` as the source text.
    pub fn write_report<W: Write>(&self, src_id: &str, input: &str, writer: W) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), writer)
    }

    /// Prints the report for this error to stderr, using `input` as the source text.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}
