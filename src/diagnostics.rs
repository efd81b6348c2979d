use tracing::debug;

use crate::error::{ParseError, RuntimeError, ScanError};

/// A single reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A scan or parse error.
    Error {
        /// The source line of the problem.
        line:     usize,
        /// Where on the line the problem was found, such as ` at end` or
        /// ` at ';'`. Empty for lexical errors.
        location: String,
        /// The human readable description.
        message:  String,
    },
    /// A runtime error raised by the interpreter.
    Runtime {
        /// The line of the offending operator.
        line:    usize,
        /// The human readable description.
        message: String,
    },
}

impl Diagnostic {
    /// The line the diagnostic refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Error { line, .. } | Self::Runtime { line, .. } => *line,
        }
    }

    /// The message without location information.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Error { message, .. } | Self::Runtime { message, .. } => message,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error { line,
                          location,
                          message, } => write!(f, "[line {line}] Error{location}: {message}"),
            Self::Runtime { line, message } => write!(f, "{message}\n[line {line}]"),
        }
    }
}

/// Receives errors from the scanner, parser and interpreter.
///
/// A sink remembers whether it has seen a static (scan or parse) error and
/// whether it has seen a runtime error. The driver uses those flags to skip
/// execution of a broken program and to pick the process exit code.
pub trait DiagnosticSink {
    /// Records a scan or parse error.
    fn error(&mut self, line: usize, location: &str, message: &str);

    /// Records a runtime error.
    fn runtime_error(&mut self, line: usize, message: &str);

    /// Whether any scan or parse error was recorded since the last
    /// [`clear_error`](Self::clear_error).
    fn had_error(&self) -> bool;

    /// Whether any runtime error was recorded.
    fn had_runtime_error(&self) -> bool;

    /// Forgets previous scan and parse errors. Used between prompt lines.
    fn clear_error(&mut self);

    /// Records a lexical error.
    fn scan_error(&mut self, error: &ScanError) {
        self.error(error.line(), "", &error.to_string());
    }

    /// Records a syntax error together with its location.
    fn parse_error(&mut self, error: &ParseError) {
        self.error(error.line(), &error.location(), &error.to_string());
    }

    /// Records an error raised while interpreting.
    fn report_runtime(&mut self, error: &RuntimeError) {
        self.runtime_error(error.line(), &error.to_string());
    }
}

/// The standard [`DiagnosticSink`].
///
/// Keeps every diagnostic in report order. Sinks built with
/// [`Diagnostics::stderr`] also print each diagnostic to standard error as it
/// arrives.
#[derive(Debug, Default)]
pub struct Diagnostics {
    reported:          Vec<Diagnostic>,
    echo:              bool,
    had_error:         bool,
    had_runtime_error: bool,
}

impl Diagnostics {
    /// Creates a silent sink that only records.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that also writes every diagnostic to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self { echo: true,
               ..Self::default() }
    }

    /// All diagnostics reported so far, oldest first.
    #[must_use]
    pub fn reported(&self) -> &[Diagnostic] {
        &self.reported
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        debug!(line = diagnostic.line(), message = diagnostic.message(), "diagnostic");
        if self.echo {
            eprintln!("{diagnostic}");
        }
        self.reported.push(diagnostic);
    }
}

impl DiagnosticSink for Diagnostics {
    fn error(&mut self, line: usize, location: &str, message: &str) {
        self.had_error = true;
        self.record(Diagnostic::Error { line,
                                        location: location.to_string(),
                                        message: message.to_string() });
    }

    fn runtime_error(&mut self, line: usize, message: &str) {
        self.had_runtime_error = true;
        self.record(Diagnostic::Runtime { line,
                                          message: message.to_string() });
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    fn clear_error(&mut self) {
        self.had_error = false;
    }
}
