use core::fmt;

use crate::Element;

/// Errors that occur during queue operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueError {
  /// The queue is full. Contains the element that was refused.
  Full(Element),
  /// The queue has no elements to consume.
  Empty,
}

impl QueueError {
  /// Extracts the element carried by variants that hand it back on failure.
  #[must_use]
  pub const fn into_item(self) -> Option<Element> {
    match self {
      | Self::Full(item) => Some(item),
      | Self::Empty => None,
    }
  }
}

impl fmt::Display for QueueError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | QueueError::Full(item) => write!(f, "queue overflow: rejected {item}"),
      | QueueError::Empty => write!(f, "queue underflow"),
    }
  }
}

impl core::error::Error for QueueError {}

#[cfg(test)]
mod tests {
  use alloc::format;

  use super::*;

  #[test]
  fn queue_error_full_variant() {
    let error = QueueError::Full(42);
    assert_eq!(error.into_item(), Some(42));
  }

  #[test]
  fn queue_error_empty_variant() {
    assert_eq!(QueueError::Empty.into_item(), None);
  }

  #[test]
  fn queue_error_display() {
    assert_eq!(format!("{}", QueueError::Full(7)), "queue overflow: rejected 7");
    assert_eq!(format!("{}", QueueError::Empty), "queue underflow");
  }

  #[test]
  fn queue_error_partial_eq() {
    assert_eq!(QueueError::Full(1), QueueError::Full(1));
    assert_ne!(QueueError::Full(1), QueueError::Full(2));
    assert_ne!(QueueError::Full(1), QueueError::Empty);
  }
}
