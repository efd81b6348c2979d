use crate::interpreter::token::{Token, TokenKind};

/// Represents all errors that can occur during parsing.
///
/// Every variant carries the token at which parsing failed, so the report can
/// point at the offending lexeme.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A token that cannot start an expression.
    #[error("Expect expression.")]
    ExpectedExpression {
        /// The token found instead.
        token: Token,
    },
    /// A grouping was opened but not closed.
    #[error("Expect ')' after expression.")]
    ExpectedClosingParen {
        /// The token found instead.
        token: Token,
    },
    /// A print statement is missing its terminating `;`.
    #[error("Expect ';' after value.")]
    ExpectedSemicolonAfterValue {
        /// The token found instead.
        token: Token,
    },
    /// An expression statement is missing its terminating `;`.
    #[error("Expect ';' after expression.")]
    ExpectedSemicolonAfterExpression {
        /// The token found instead.
        token: Token,
    },
}

impl ParseError {
    /// The token at which parsing failed.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::ExpectedExpression { token }
            | Self::ExpectedClosingParen { token }
            | Self::ExpectedSemicolonAfterValue { token }
            | Self::ExpectedSemicolonAfterExpression { token } => token,
        }
    }

    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.token().line
    }

    /// Describes where on the line the error was found.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     error::ParseError,
    ///     interpreter::token::{Token, TokenKind},
    /// };
    ///
    /// let at_end = ParseError::ExpectedExpression { token: Token::eof(1) };
    /// assert_eq!(at_end.location(), " at end");
    ///
    /// let token = Token::new(TokenKind::Semicolon, ";", None, 1);
    /// let at_semicolon = ParseError::ExpectedExpression { token };
    /// assert_eq!(at_semicolon.location(), " at ';'");
    /// ```
    #[must_use]
    pub fn location(&self) -> String {
        let token = self.token();
        match token.kind {
            TokenKind::Eof => " at end".to_string(),
            _ => format!(" at '{}'", token.lexeme()),
        }
    }
}
