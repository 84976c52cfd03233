// Error reporting with Ariadne for evaluation failures
//
// Syntax errors carry a span into the normalized expression; math and
// validation errors have no location and are reported with a help line.

use crate::CalcError;
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::io;
use std::ops::Range;

/// Print a CalcError as an Ariadne report on stderr
pub fn report_calc_error(filename: &str, source: &str, error: &CalcError) -> io::Result<()> {
    // End-of-input errors point one past the text; give them a column to sit on
    let padded = format!("{} ", source);

    match error {
        CalcError::Syntax { message, span } => {
            let offset = span.as_ref().map(|s| s.start).unwrap_or(0);
            let report = Report::build(ReportKind::Error, filename, offset)
                .with_code("E001")
                .with_message("Syntax Error");

            let report = match span {
                Some(span) => report.with_label(
                    Label::new((filename, clamp(span, padded.len())))
                        .with_message(message)
                        .with_color(Color::Red),
                ),
                None => report.with_help(message),
            };

            report.finish().eprint((filename, Source::from(padded.as_str())))
        }

        CalcError::Math { reason } => {
            Report::<(&str, Range<usize>)>::build(ReportKind::Error, filename, 0)
                .with_code("E002")
                .with_message("Math Error")
                .with_help(reason)
                .finish()
                .eprint((filename, Source::from(padded.as_str())))
        }

        CalcError::Validation { reason } => {
            Report::<(&str, Range<usize>)>::build(ReportKind::Error, filename, 0)
                .with_code("E003")
                .with_message("Invalid Input")
                .with_help(reason)
                .finish()
                .eprint((filename, Source::from(padded.as_str())))
        }
    }
}

fn clamp(span: &Range<usize>, len: usize) -> Range<usize> {
    let end = span.end.min(len);
    span.start.min(end)..end
}
