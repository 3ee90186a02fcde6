//! Rendering of parse errors with `ariadne`.

use ariadne::{Config, Label, Report, ReportKind, Source};
use lispy_parse::ParseError;
use std::ops::Range;

/// Render `error` against the line it came from.
///
/// Colour is off so the output is stable when piped or captured.
pub fn render_parse_error(error: &ParseError, source_name: &str, source: &str) -> String {
    let span = char_range(source, error.span().to_range());
    let mut report_bytes = Vec::new();
    let written = Report::build(ReportKind::Error, source_name, span.start)
        .with_config(Config::default().with_color(false))
        .with_message(error.to_string())
        .with_label(Label::new((source_name, span)).with_message(error.label()))
        .finish()
        .write((source_name, Source::from(source)), &mut report_bytes);

    match written {
        Ok(()) => String::from_utf8_lossy(&report_bytes).into_owned(),
        Err(_) => format!("Error: {error}\n"),
    }
}

/// `ariadne` counts characters; parser spans count bytes.
fn char_range(source: &str, bytes: Range<usize>) -> Range<usize> {
    let to_char = |offset: usize| {
        source
            .get(..offset)
            .map_or(offset, |prefix| prefix.chars().count())
    };
    to_char(bytes.start)..to_char(bytes.end)
}
