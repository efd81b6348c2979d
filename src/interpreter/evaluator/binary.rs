/// Dispatch of binary operators to their implementations.
pub mod core;

/// Relational comparison of numbers.
pub mod comparison;

/// Arithmetic and string concatenation.
pub mod arithmetic;
