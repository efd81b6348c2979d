/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, executes
/// statements and writes printed values. It is the core execution engine of
/// the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions with dynamically checked operand types.
/// - Executes `print` and expression statements in order.
/// - Stops at the first runtime error and reports it.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (scanner) reads the raw source text and produces a stream of
/// tokens, each corresponding to a meaningful language element such as a
/// number, string, identifier, operator or keyword. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source line.
/// - Decodes number and string literals and resolves keywords.
/// - Reports lexical errors for invalid input without stopping.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statements and expressions the evaluator executes.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Applies operator precedence and associativity.
/// - Reports syntax errors with location info and recovers at statement
///   boundaries.
pub mod parser;
/// Token types shared by the lexer and the parser.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: nil, booleans, numbers and strings.
/// - Implements equality, truthiness and the display form used by `print`.
pub mod value;
