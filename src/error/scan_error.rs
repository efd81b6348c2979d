/// Represents all errors that can occur while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    /// A string literal was still open at the end of the input.
    #[error("Unterminated string.")]
    UnterminatedString {
        /// The line where the input ran out.
        line: usize,
    },
    /// A character that cannot start any token.
    #[error("Unexpected character.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl ScanError {
    /// The source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line } | Self::UnexpectedCharacter { line, .. } => *line,
        }
    }
}
