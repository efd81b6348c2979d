use std::io::{self, BufRead, Write};

use crate::{
    diagnostics::{DiagnosticSink, Diagnostics},
    run_source_with_hooks,
};

/// Exit status after a scan or parse error.
pub const EXIT_DATA_ERROR: u8 = 65;
/// Exit status after a runtime error.
pub const EXIT_SOFTWARE: u8 = 70;
/// Exit status when the script cannot be read or output cannot be written.
pub const EXIT_IO_ERROR: u8 = 74;

/// A run of the interpreter over one script or one interactive prompt.
///
/// The session owns the output stream and the diagnostics, so the error
/// flags survive across the lines of a prompt and decide the exit code at
/// the end.
pub struct Lox<W: Write> {
    out:         W,
    diagnostics: Diagnostics,
    dump_tokens: bool,
    dump_ast:    bool,
}

impl<W: Write> Lox<W> {
    /// Creates a session printing to `out` and reporting to `diagnostics`.
    #[must_use]
    pub const fn new(out: W, diagnostics: Diagnostics) -> Self {
        Self { out,
               diagnostics,
               dump_tokens: false,
               dump_ast: false }
    }

    /// Writes every scanned token to standard error before execution.
    #[must_use]
    pub const fn with_token_dump(mut self, enabled: bool) -> Self {
        self.dump_tokens = enabled;
        self
    }

    /// Writes every parsed statement to standard error before execution.
    #[must_use]
    pub const fn with_ast_dump(mut self, enabled: bool) -> Self {
        self.dump_ast = enabled;
        self
    }

    /// The diagnostics reported so far.
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Consumes the session and returns the output stream.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs one chunk of source text.
    ///
    /// # Errors
    /// Returns an error only if writing printed values fails.
    pub fn run(&mut self, source: &str) -> io::Result<()> {
        let (dump_tokens, dump_ast) = (self.dump_tokens, self.dump_ast);

        run_source_with_hooks(source,
                              &mut self.out,
                              &mut self.diagnostics,
                              |tokens| {
                                  if dump_tokens {
                                      tokens.iter().for_each(|token| eprintln!("{token}"));
                                  }
                              },
                              |statements| {
                                  if dump_ast {
                                      statements.iter()
                                                .for_each(|statement| eprintln!("{statement}"));
                                  }
                              })
    }

    /// Runs an interactive prompt.
    ///
    /// Each line read from `input` is run on its own after `> ` is written to
    /// `prompt`. A syntax error on one line does not affect the next. The
    /// prompt ends at end of input.
    ///
    /// # Errors
    /// Returns an error if reading input or writing output fails.
    ///
    /// # Example
    /// ```
    /// use treelox::{Lox, diagnostics::Diagnostics};
    ///
    /// let input = "print 1 +;\nprint 1 + 1;\n".as_bytes();
    /// let mut prompt = Vec::new();
    ///
    /// let mut lox = Lox::new(Vec::new(), Diagnostics::new());
    /// lox.run_prompt(input, &mut prompt).unwrap();
    ///
    /// assert_eq!(lox.exit_code(), 0);
    /// assert_eq!(lox.into_output(), b"2\n");
    /// ```
    pub fn run_prompt(&mut self, input: impl BufRead, prompt: &mut impl Write) -> io::Result<()> {
        let mut lines = input.lines();

        loop {
            write!(prompt, "> ")?;
            prompt.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            self.run(&line?)?;
            self.out.flush()?;
            self.diagnostics.clear_error();
        }

        writeln!(prompt)?;
        Ok(())
    }

    /// The process exit status for what happened so far.
    ///
    /// `0` after a clean run, [`EXIT_DATA_ERROR`] if a scan or parse error
    /// is pending and [`EXIT_SOFTWARE`] after a runtime error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.diagnostics.had_error() {
            EXIT_DATA_ERROR
        } else if self.diagnostics.had_runtime_error() {
            EXIT_SOFTWARE
        } else {
            0
        }
    }
}
