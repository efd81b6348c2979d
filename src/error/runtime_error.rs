use crate::interpreter::token::Token;

/// Represents all errors that can occur during evaluation.
///
/// Each variant keeps the operator token whose operands were rejected, which
/// supplies the line number for the report.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// Unary `-` applied to something other than a number.
    #[error("Operand must be a number.")]
    OperandMustBeNumber {
        /// The operator token.
        operator: Token,
    },
    /// A comparison or `-`, `*`, `/` applied to a non-number.
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers {
        /// The operator token.
        operator: Token,
    },
    /// `+` applied to anything but two numbers or two strings.
    #[error("Operands must be two numbers or to strings.")]
    OperandsMustBeNumbersOrStrings {
        /// The operator token.
        operator: Token,
    },
}

impl RuntimeError {
    /// The operator whose operands were rejected.
    #[must_use]
    pub const fn operator(&self) -> &Token {
        match self {
            Self::OperandMustBeNumber { operator }
            | Self::OperandsMustBeNumbers { operator }
            | Self::OperandsMustBeNumbersOrStrings { operator } => operator,
        }
    }

    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.operator().line
    }
}
