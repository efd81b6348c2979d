use crate::interpreter::{
    token::{Token, TokenKind},
    value::core::Value,
};

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each node owns its children; trees are acyclic and never modified after
/// the parser builds them. Operator nodes keep the operator token so runtime
/// errors can name the offending line.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or `nill`).
    Literal {
        /// The constant value.
        value: Value,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expression: Box<Self>,
    },
    /// A prefix operation such as `-x` or `!x`.
    Unary {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operator token.
        operator: Token,
        /// The operand expression.
        right:    Box<Self>,
    },
    /// An infix operation such as `a + b`.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal { value: value.into() }
    }
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated only for its effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// `print <expr>;` writes the value of the expression on its own line.
    Print {
        /// The expression to print.
        expr: Expr,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparison and equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Maps a token kind to the binary operator it spells, if any.
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Star => Self::Mul,
            TokenKind::Slash => Self::Div,
            TokenKind::Less => Self::Less,
            TokenKind::Greater => Self::Greater,
            TokenKind::LessEqual => Self::LessEqual,
            TokenKind::GreaterEqual => Self::GreaterEqual,
            TokenKind::EqualEqual => Self::Equal,
            TokenKind::BangEqual => Self::NotEqual,
            _ => return None,
        };
        Some(op)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl UnaryOperator {
    /// Maps a token kind to the unary operator it spells, if any.
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Minus => Some(Self::Negate),
            TokenKind::Bang => Some(Self::Not),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

/// Prints the tree in a fully parenthesized prefix form.
///
/// ```
/// use treelox::{
///     ast::{BinaryOperator, Expr},
///     interpreter::token::{Token, TokenKind},
/// };
///
/// let sum = Expr::Binary { left:     Box::new(Expr::literal(1.0)),
///                          op:       BinaryOperator::Add,
///                          operator: Token::new(TokenKind::Plus, "+", None, 1),
///                          right:    Box::new(Expr::literal(2.5)), };
///
/// assert_eq!(sum.to_string(), "(+ 1 2.5)");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value: Value::String(s) } => write!(f, "\"{s}\""),
            Self::Literal { value } => write!(f, "{value}"),
            Self::Grouping { expression } => write!(f, "(group {expression})"),
            Self::Unary { op, right, .. } => write!(f, "({op} {right})"),
            Self::Binary { left, op, right, .. } => write!(f, "({op} {left} {right})"),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expression { expr } => write!(f, "(expr {expr})"),
            Self::Print { expr } => write!(f, "(print {expr})"),
        }
    }
}
