use logos::Logos;
use tracing::debug;

use crate::{
    diagnostics::DiagnosticSink,
    error::ScanError,
    interpreter::{
        token::{Token, TokenKind},
        value::core::Value,
    },
};

/// Raw lexical units recognised by the generated tokenizer.
///
/// This enum only describes the shapes of the input. Keyword resolution,
/// literal payloads and error reporting happen in [`Scanner`], which turns
/// each raw unit into a [`Token`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r]+")]
pub enum RawToken {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// Number literals such as `12` or `3.25`. A trailing `.` without a digit
    /// after it is not part of the number.
    #[regex(r"[0-9]+", parse_number)]
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    Number(f64),
    /// A closed string literal. No escape sequences are processed.
    #[regex(r#""[^"]*""#, quoted, allow_greedy = true)]
    String(StringLiteral),
    /// A string literal that runs to the end of the input. Carries the last
    /// line of the input.
    #[regex(r#""[^"]*"#, unterminated, allow_greedy = true)]
    UnterminatedString(usize),
    /// Identifiers and keywords.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    Newline,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics. Newlines inside string
/// literals are counted as well.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The payload of a closed string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// The text strictly between the quotes.
    pub value: String,
    /// The line of the opening quote.
    pub line:  usize,
}

fn parse_number(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

fn quoted(lex: &mut logos::Lexer<RawToken>) -> StringLiteral {
    let slice = lex.slice();
    let line = lex.extras.line;
    lex.extras.line += count_newlines(slice);

    StringLiteral { value: slice[1..slice.len() - 1].to_string(),
                    line }
}

fn unterminated(lex: &mut logos::Lexer<RawToken>) -> usize {
    lex.extras.line += count_newlines(lex.slice());
    lex.extras.line
}

/// Converts source text into a token sequence.
///
/// The scanner is tolerant: lexical errors are reported to the diagnostic
/// sink and scanning carries on, so one pass surfaces every lexical error in
/// the input. The returned sequence always ends with exactly one
/// [`TokenKind::Eof`] token.
pub struct Scanner<'src> {
    lexer:  logos::Lexer<'src, RawToken>,
    tokens: Vec<Token>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:  RawToken::lexer_with_extras(source, LexerExtras { line: 1 }),
               tokens: Vec::new(), }
    }

    /// Scans the whole input.
    ///
    /// # Example
    /// ```
    /// use treelox::{
    ///     diagnostics::Diagnostics,
    ///     interpreter::{lexer::Scanner, token::TokenKind},
    /// };
    ///
    /// let mut diagnostics = Diagnostics::new();
    /// let tokens = Scanner::new("print 1 + 2;").scan_tokens(&mut diagnostics);
    /// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    ///
    /// assert_eq!(kinds,
    ///            [TokenKind::Print,
    ///             TokenKind::Number,
    ///             TokenKind::Plus,
    ///             TokenKind::Number,
    ///             TokenKind::Semicolon,
    ///             TokenKind::Eof]);
    /// ```
    pub fn scan_tokens(mut self, sink: &mut impl DiagnosticSink) -> Vec<Token> {
        while let Some(raw) = self.lexer.next() {
            let lexeme = self.lexer.slice();
            let line = self.lexer.extras.line;

            let kind = match raw {
                Ok(RawToken::Number(value)) => {
                    self.tokens
                        .push(Token::new(TokenKind::Number, lexeme, Some(Value::Number(value)), line));
                    continue;
                },
                Ok(RawToken::String(literal)) => {
                    self.tokens.push(Token::new(TokenKind::String,
                                                lexeme,
                                                Some(Value::String(literal.value)),
                                                literal.line));
                    continue;
                },
                Ok(RawToken::UnterminatedString(line)) => {
                    sink.scan_error(&ScanError::UnterminatedString { line });
                    continue;
                },
                Ok(RawToken::Identifier) => {
                    TokenKind::keyword(lexeme).unwrap_or(TokenKind::Identifier)
                },
                Ok(RawToken::LeftParen) => TokenKind::LeftParen,
                Ok(RawToken::RightParen) => TokenKind::RightParen,
                Ok(RawToken::LeftBrace) => TokenKind::LeftBrace,
                Ok(RawToken::RightBrace) => TokenKind::RightBrace,
                Ok(RawToken::Comma) => TokenKind::Comma,
                Ok(RawToken::Dot) => TokenKind::Dot,
                Ok(RawToken::Minus) => TokenKind::Minus,
                Ok(RawToken::Plus) => TokenKind::Plus,
                Ok(RawToken::Semicolon) => TokenKind::Semicolon,
                Ok(RawToken::Slash) => TokenKind::Slash,
                Ok(RawToken::Star) => TokenKind::Star,
                Ok(RawToken::Bang) => TokenKind::Bang,
                Ok(RawToken::BangEqual) => TokenKind::BangEqual,
                Ok(RawToken::Equal) => TokenKind::Equal,
                Ok(RawToken::EqualEqual) => TokenKind::EqualEqual,
                Ok(RawToken::Greater) => TokenKind::Greater,
                Ok(RawToken::GreaterEqual) => TokenKind::GreaterEqual,
                Ok(RawToken::Less) => TokenKind::Less,
                Ok(RawToken::LessEqual) => TokenKind::LessEqual,
                // Skipped inside the tokenizer.
                Ok(RawToken::Comment | RawToken::Newline) => continue,
                Err(()) => {
                    let character = lexeme.chars().next().unwrap_or_default();
                    sink.scan_error(&ScanError::UnexpectedCharacter { character, line });
                    continue;
                },
            };

            self.tokens.push(Token::new(kind, lexeme, None, line));
        }

        self.tokens.push(Token::eof(self.lexer.extras.line));
        debug!(tokens = self.tokens.len(), "scanned source");
        self.tokens
    }
}
