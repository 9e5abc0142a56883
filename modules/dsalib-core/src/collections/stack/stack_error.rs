use core::fmt;


/// Errors that may arise while operating on a [`DynamicStack`](super::DynamicStack).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
  /// The stack contains no elements.
  Empty,
  /// The stack is full and its overflow policy refuses to grow.
  Full,
  /// Storage could not be obtained or grown. The stack, if one exists, is left unchanged.
  AllocError,
}

impl fmt::Display for StackError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackError::Empty => write!(f, "stack is empty"),
      | StackError::Full => write!(f, "stack is full"),
      | StackError::AllocError => write!(f, "stack storage allocation failed"),
    }
  }
}

impl core::error::Error for StackError {}
