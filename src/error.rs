/// Lexical errors.
///
/// Raised by the scanner for input it cannot turn into a token: unterminated
/// string literals and characters outside the language's alphabet. Lexical
/// errors never stop a scan.
pub mod scan_error;
/// Parsing errors.
///
/// Defines the syntax errors the parser reports when the token stream does
/// not match the grammar, such as a missing `;` or a missing operand.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised during evaluation when an operator receives
/// operands of the wrong type. A runtime error aborts the rest of the
/// program being interpreted.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use scan_error::ScanError;

/// Why statement execution stopped early.
///
/// Runtime errors are reported and absorbed at the interpreter boundary;
/// output failures are handed back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// An operator received operands it cannot work with.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Writing a printed value failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
