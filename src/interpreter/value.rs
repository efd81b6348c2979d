/// Runtime values.
///
/// Defines the `Value` enum, the tagged union every expression evaluates to,
/// along with the language's equality, truthiness and display rules.
pub mod core;
