//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that ties an error kind to the expression it was raised on.
//!
//! Expressions are never parsed from text, so there is no user-written source to point at when
//! something goes wrong. Instead, every [`Error`] carries the rendered form of the offending
//! expression (such as `1/0` or `0^0`), and its spans index into that rendering. This lets
//! [`ariadne`] draw the usual labelled report:
//!
//! ```text
//! Error: division by zero
//!    ╭─[expr:1:1]
//!    │
//!  1 │ 1/0
//!    · ┬ ┬
//!    · ╰──── this numerator...
//!    ·   │
//!    ·   ╰── ...is divided by zero
//! ───╯
//! ```

extern crate self as symalg_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while building, reducing, or evaluating an
/// expression.
///
/// This trait is usually derived with `symalg_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns this error kind as [`Any`], so that the concrete kind can be recovered.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of a rendered expression that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The rendered expression that this error originated from.
    pub expr: String,

    /// The regions of [`Error::expr`] that this error originated from, measured in characters.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given rendered expression, spans, and kind.
    pub fn new(
        expr: impl Into<String>,
        spans: Vec<Range<usize>>,
        kind: impl ErrorKind + 'static,
    ) -> Self {
        Self { expr: expr.into(), spans, kind: Box::new(kind) }
    }

    /// Returns true if the error is of the given kind.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns a reference to the error kind if it is of the given type.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to the given writer.
    pub fn write_report(&self, src_id: &str, writer: impl io::Write) -> io::Result<()> {
        self.build_report(src_id)
            .write((src_id, Source::from(&self.expr)), writer)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn eprint(&self, src_id: &str) -> io::Result<()> {
        self.build_report(src_id)
            .eprint((src_id, Source::from(&self.expr)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}
