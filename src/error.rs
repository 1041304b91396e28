//! Rendering store parse errors as codespan diagnostics.

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term::{self, Config};
use log::debug;
use pest::error::InputLocation;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::store::parse;

fn diagnostic(error: &parse::Error) -> Diagnostic<()> {
    let range = match error.location {
        InputLocation::Pos(at) => at..at,
        InputLocation::Span((start, end)) => start..end,
    };
    Diagnostic::error()
        .with_message(error.variant.message())
        .with_labels(vec![Label::primary((), range)])
}

fn emit(
    out: &mut dyn WriteColor,
    name: &str,
    source: &str,
    error: &parse::Error,
) -> Result<(), codespan_reporting::files::Error> {
    let file = SimpleFile::new(name, source);
    term::emit(out, &Config::default(), &file, &diagnostic(error))
}

/// Prints `error` to stderr with the offending part of `source` underlined.
/// `name` is shown in place of a file name.
pub fn eprint_parse_error(name: &str, source: &str, error: &parse::Error) {
    let mut out = StandardStream::stderr(ColorChoice::Auto);
    if let Err(e) = emit(&mut out, name, source, error) {
        debug!("event=diagnostic_emit status=failed error={e}");
        eprintln!("{name}: {error}");
    }
}
