use core::fmt;

/// Errors reported by checked arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticError {
  /// The exact result is above the representable maximum.
  Overflow,
  /// The exact result is below the representable minimum.
  Underflow,
}

impl fmt::Display for ArithmeticError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | ArithmeticError::Overflow => write!(f, "integer overflow"),
      | ArithmeticError::Underflow => write!(f, "integer underflow"),
    }
  }
}

impl core::error::Error for ArithmeticError {}
