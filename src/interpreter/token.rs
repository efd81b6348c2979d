use crate::interpreter::value::core::Value;

/// The closed set of token categories produced by the scanner.
///
/// Single and double character operators, literals, keywords and the
/// synthesized end-of-file marker all have their own kind. The parser matches
/// on kinds only; lexemes and literals are carried by [`Token`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// A name that is not a reserved keyword.
    Identifier,
    /// A double quoted string literal.
    String,
    /// A decimal number literal.
    Number,
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nill`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,
    /// End of input. Always the last token of a scan.
    Eof,
}

impl TokenKind {
    /// Looks up a reserved word.
    ///
    /// Returns the keyword kind for an exact match and `None` for any other
    /// identifier text. The nil literal is spelled `nill`; the three letter
    /// `nil` is an ordinary identifier.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::keyword("print"), Some(TokenKind::Print));
    /// assert_eq!(TokenKind::keyword("nill"), Some(TokenKind::Nil));
    /// assert_eq!(TokenKind::keyword("nil"), None);
    /// ```
    #[must_use]
    pub fn keyword(text: &str) -> Option<Self> {
        let kind = match text {
            "and" => Self::And,
            "class" => Self::Class,
            "else" => Self::Else,
            "false" => Self::False,
            "fun" => Self::Fun,
            "for" => Self::For,
            "if" => Self::If,
            "nill" => Self::Nil,
            "or" => Self::Or,
            "print" => Self::Print,
            "return" => Self::Return,
            "super" => Self::Super,
            "this" => Self::This,
            "true" => Self::True,
            "var" => Self::Var,
            "while" => Self::While,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether a token of this kind starts a declaration or statement.
    ///
    /// The parser stops discarding tokens at these kinds while recovering
    /// from a syntax error.
    #[must_use]
    pub const fn begins_statement(self) -> bool {
        matches!(self,
                 Self::Class
                 | Self::Fun
                 | Self::Var
                 | Self::For
                 | Self::If
                 | Self::While
                 | Self::Print
                 | Self::Return)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// A classified lexical unit.
///
/// Tokens are created once by the scanner, in source order, and never change
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token category.
    pub kind:    TokenKind,
    /// The raw source slice. `None` only for the synthesized end-of-file
    /// token.
    pub lexeme:  Option<String>,
    /// The decoded value of a `NUMBER` or `STRING` token.
    pub literal: Option<Value>,
    /// The 1-based line on which the token starts.
    pub line:    usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind,
               lexeme: impl Into<String>,
               literal: Option<Value>,
               line: usize)
               -> Self {
        Self { kind,
               lexeme: Some(lexeme.into()),
               literal,
               line }
    }

    /// Creates the end-of-file token for the given final line.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self { kind: TokenKind::Eof,
               lexeme: None,
               literal: None,
               line }
    }

    /// The lexeme, or an empty string for synthesized tokens.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        self.lexeme.as_deref().unwrap_or("")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme())?;
        match &self.literal {
            Some(Value::String(s)) => write!(f, " \"{s}\""),
            Some(value) => write!(f, " {value}"),
            None => Ok(()),
        }
    }
}
