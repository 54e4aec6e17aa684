//! Handles all user-facing output for the CLI.
//!
//! This module is responsible for verdict lines, rendered documents, and
//! error reports. By centralizing output logic here, we ensure a consistent
//! user experience across all commands: colored status on a terminal, plain
//! text when piped, and miette reports for parse errors on stderr.

use miette::NamedSource;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::ParseError;
use crate::json::Value;

/// Prints the one-line verdict for a valid document.
pub fn print_valid(source_name: &str, value: &Value) {
    let mut stdout = colored_stdout();
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    print!("valid");
    let _ = stdout.reset();
    println!(" {}: top-level {}", source_name, value.type_name());
}

/// Prints a re-rendered document to stdout.
pub fn print_document(value: &Value, compact: bool) {
    if compact {
        println!("{}", value);
    } else {
        println!("{}", value.pretty());
    }
}

/// Renders a parse error as a miette report on stderr, with the source
/// text attached so positional labels can point into it.
pub fn print_error(source_name: &str, text: &str, error: ParseError) {
    let report = miette::Report::new(error)
        .with_source_code(NamedSource::new(source_name, text.to_string()));
    eprintln!("{:?}", report);
}

fn colored_stdout() -> StandardStream {
    let choice = if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}
