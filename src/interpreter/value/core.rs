/// Represents a runtime value in the interpreter.
///
/// The language is dynamically typed: every expression evaluates to one of
/// these four variants and operators check the variants they receive.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value, written `nill` in source.
    Nil,
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and equality operators and by `!`.
    Bool(bool),
    /// A double precision floating-point number. All numbers are `f64`.
    Number(f64),
    /// An immutable string.
    String(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl Value {
    /// Returns the truthiness of the value.
    ///
    /// `nill` and `false` are falsy. Every other value is truthy, including
    /// `0` and the empty string.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Number(_) | Self::String(_) => true,
        }
    }

    /// Returns the number inside the value, if it is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Compares two numbers the way the language's `==` does.
///
/// Identical bit patterns are equal and every `NaN` equals every other `NaN`,
/// so `0 / 0 == 0 / 0` holds while `0` and `-0` differ.
fn numbers_equal(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

impl PartialEq for Value {
    /// Structural equality over the whole value domain.
    ///
    /// Values of different variants are never equal and nothing is coerced.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => numbers_equal(*a, *b),
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let text = format!("{n:?}");
    match text.strip_suffix(".0") {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

impl std::fmt::Display for Value {
    /// Renders the value the way `print` shows it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stringify_strips_only_a_trailing_zero_fraction() {
        assert_eq!(Value::Number(2.0).to_string(), "2");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(-3.0).to_string(), "-3");
        assert_eq!(Value::Number(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(Value::Number(10.05).to_string(), "10.05");
    }

    #[test]
    fn stringify_uses_exponents_for_extreme_magnitudes() {
        assert_eq!(Value::Number(1e20).to_string(), "1e20");
        assert_eq!(Value::Number(1e-7).to_string(), "1e-7");
        assert_eq!(Value::Number(-2.5e-8).to_string(), "-2.5e-8");
        assert_eq!(Value::Number(1e15).to_string(), "1000000000000000");
    }

    #[test]
    fn stringify_non_finite_numbers() {
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn stringify_other_variants() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::from("raw \"text\"").to_string(), "raw \"text\"");
    }

    #[test]
    fn equality_never_crosses_variants() {
        assert_eq!(Value::Nil, Value::Nil);
        assert_ne!(Value::Bool(false), Value::Nil);
        assert_ne!(Value::Number(1.0), Value::from("1"));
        assert_ne!(Value::Number(0.0), Value::Bool(false));
        assert_eq!(Value::from("a"), Value::from("a"));
    }

    #[test]
    fn nan_equals_nan_but_zeros_differ_by_sign() {
        assert_eq!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_ne!(Value::Number(0.0), Value::Number(-0.0));
    }
}
