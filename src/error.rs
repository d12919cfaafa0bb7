use std::fmt;
use std::fmt::Display;

use thiserror::Error;

/// Lexical errors. Both are local-recovery diagnostics: the scanner reports
/// them through a [`Report`] sink and keeps scanning.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum LexError {
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// Diagnostic sink boundary. The sink must not influence whether scanning
/// continues; it only records or presents what it is given.
pub trait Report {
    fn report(&mut self, line: usize, error: LexError);
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Diagnostic {
    pub line: usize,
    pub error: LexError,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.error)
    }
}

/// Sink that keeps every diagnostic, in report order.
#[derive(Debug, Default)]
pub struct Collector {
    pub diagnostics: Vec<Diagnostic>,
}

impl Report for Collector {
    fn report(&mut self, line: usize, error: LexError) {
        self.diagnostics.push(Diagnostic { line, error });
    }
}

/// Sink that prints to stderr as diagnostics arrive.
#[derive(Debug, Default)]
pub struct LinePrinter {
    reported: bool,
}

impl LinePrinter {
    pub fn had_error(&self) -> bool {
        self.reported
    }
}

impl Report for LinePrinter {
    fn report(&mut self, line: usize, error: LexError) {
        eprintln!("{}", Diagnostic { line, error });
        self.reported = true;
    }
}
