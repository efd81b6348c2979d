use std::io::{self, Write};

use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    diagnostics::DiagnosticSink,
    error::{ExecError, RuntimeError},
    interpreter::{
        evaluator::{binary::core::eval_binary, unary::eval_unary},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression and returns the resulting value.
///
/// Evaluation is a pure function of the tree: literals produce their value,
/// groupings are transparent, and operator nodes evaluate their operands
/// (left before right, always both) before applying the operator.
///
/// # Errors
/// The first `RuntimeError` raised anywhere in the tree.
///
/// # Example
/// ```
/// use treelox::{
///     ast::{Expr, UnaryOperator},
///     interpreter::{
///         evaluator::core::evaluate,
///         token::{Token, TokenKind},
///         value::core::Value,
///     },
/// };
///
/// let expr = Expr::Unary { op:       UnaryOperator::Not,
///                          operator: Token::new(TokenKind::Bang, "!", None, 1),
///                          right:    Box::new(Expr::literal(0.0)), };
///
/// assert_eq!(evaluate(&expr).unwrap(), Value::Bool(false));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value } => Ok(value.clone()),
        Expr::Grouping { expression } => evaluate(expression),
        Expr::Unary { op, operator, right } => {
            let right = evaluate(right)?;
            eval_unary(*op, operator, &right)
        },
        Expr::Binary { left,
                       op,
                       operator,
                       right, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, operator, left, right)
        },
    }
}

/// Executes statements and writes printed values to an output stream.
///
/// The interpreter holds no program state between calls; the only thing it
/// owns is the writer that `print` statements write to. The binary uses
/// standard output, tests use a `Vec<u8>`.
pub struct Interpreter<W: Write> {
    out: W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter that prints to `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the output stream.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Executes `statements` in order.
    ///
    /// The first runtime error stops execution: the remaining statements are
    /// skipped and the error is reported to `sink`. The error does not
    /// propagate past this call.
    ///
    /// # Errors
    /// Only failures to write to the output stream are returned.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     diagnostics::{DiagnosticSink, Diagnostics},
    ///     interpreter::{evaluator::core::Interpreter, lexer::Scanner, parser::core::parse_program},
    /// };
    ///
    /// let mut diagnostics = Diagnostics::new();
    /// let tokens = Scanner::new("print 1; print \"x\" + 1; print 2;").scan_tokens(&mut diagnostics);
    /// let statements = parse_program(&tokens, &mut diagnostics);
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// interpreter.interpret(&statements, &mut diagnostics).unwrap();
    ///
    /// assert_eq!(interpreter.output(), b"1\n");
    /// assert!(diagnostics.had_runtime_error());
    /// ```
    pub fn interpret(&mut self,
                     statements: &[Statement],
                     sink: &mut impl DiagnosticSink)
                     -> io::Result<()> {
        match self.execute_all(statements) {
            Ok(()) => Ok(()),
            Err(ExecError::Runtime(e)) => {
                sink.report_runtime(&e);
                Ok(())
            },
            Err(ExecError::Output(e)) => Err(e),
        }
    }

    fn execute_all(&mut self, statements: &[Statement]) -> Result<(), ExecError> {
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// An expression statement evaluates its expression and discards the
    /// value. A print statement writes the value's display form followed by a
    /// newline.
    ///
    /// # Errors
    /// The runtime error raised by the statement's expression, or the output
    /// error if writing failed.
    pub fn execute(&mut self, statement: &Statement) -> Result<(), ExecError> {
        trace!(%statement, "execute");

        match statement {
            Statement::Expression { expr } => {
                evaluate(expr)?;
            },
            Statement::Print { expr } => {
                let value = evaluate(expr)?;
                writeln!(self.out, "{value}")?;
            },
        }
        Ok(())
    }
}
