/// Core expression parsing and program-level entry points.
///
/// Contains the parse result type, the whole-program parser with its error
/// recovery, and helpers shared by the other parser modules.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals and parenthesized groupings.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels for equality,
/// comparison, additive and multiplicative operators.
pub mod binary;

/// Statement parsing.
///
/// Implements `print` statements and expression statements.
pub mod statement;
