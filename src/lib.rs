//! # treelox
//!
//! treelox is a scanner and tree-walking interpreter for a small Lox-style
//! language written in Rust. Source text is scanned into tokens, parsed into
//! an abstract syntax tree and executed directly, without bytecode.
//!
//! The language has numbers, strings, booleans and `nill`, the usual
//! arithmetic, comparison and equality operators, string concatenation with
//! `+`, and two statements: expression statements and `print`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::debug;

use crate::{
    ast::Statement,
    diagnostics::DiagnosticSink,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::Scanner,
        parser::core::parse_program,
        token::Token,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps operator tokens on AST nodes for error reporting.
/// - Renders trees in a parenthesized form for debugging.
pub mod ast;
/// Collects and reports diagnostics.
///
/// Scan, parse and runtime errors all end up in a `DiagnosticSink`, which
/// remembers whether errors happened so the driver can react to them.
pub mod diagnostics;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning, parsing
/// or evaluating code. Each error knows the source line it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, parser, evaluator).
/// - Attaches the offending token or line for context.
/// - Integrates with standard error handling traits through `thiserror`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together scanning, parsing, evaluation and value
/// representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data between phases.
pub mod interpreter;
/// Script and prompt sessions with exit code bookkeeping.
pub mod session;

pub use session::Lox;

/// Scans, parses and executes `source`.
///
/// Printed values are written to `out`; errors are reported to `sink`. If
/// scanning or parsing reported any error, nothing is executed. Runtime
/// errors stop execution and are reported, but are not returned.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
///
/// # Examples
/// ```
/// use treelox::{
///     diagnostics::{DiagnosticSink, Diagnostics},
///     run_source,
/// };
///
/// let mut out = Vec::new();
/// let mut diagnostics = Diagnostics::new();
/// run_source("print (1 + 2) * 3;", &mut out, &mut diagnostics).unwrap();
/// assert_eq!(out, b"9\n");
///
/// // A syntax error prevents the whole program from running.
/// let mut out = Vec::new();
/// run_source("print 1; print 2 +;", &mut out, &mut diagnostics).unwrap();
/// assert!(out.is_empty());
/// assert!(diagnostics.had_error());
/// ```
pub fn run_source(source: &str,
                  out: &mut impl Write,
                  sink: &mut impl DiagnosticSink)
                  -> std::io::Result<()> {
    run_source_with_hooks(source, out, sink, |_| {}, |_| {})
}

/// Runs the whole pipeline like [`run_source`], handing the scanned tokens
/// and the parsed statements to the hooks before anything is executed.
pub(crate) fn run_source_with_hooks(source: &str,
                                    out: &mut impl Write,
                                    sink: &mut impl DiagnosticSink,
                                    on_tokens: impl FnOnce(&[Token]),
                                    on_statements: impl FnOnce(&[Statement]))
                                    -> std::io::Result<()> {
    let tokens = Scanner::new(source).scan_tokens(sink);
    on_tokens(&tokens);

    let statements = parse_program(&tokens, sink);
    on_statements(&statements);

    if sink.had_error() {
        debug!("skipping execution after syntax errors");
        return Ok(());
    }

    Interpreter::new(out).interpret(&statements, sink)
}
