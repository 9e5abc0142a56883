use tracing::warn;

use super::{DEFAULT_QUEUE_CAPACITY, QueueError};
use crate::Element;


const LOG_TARGET: &str = "dsalib::collections::queue";

/// Fixed-capacity FIFO queue over an inline ring of `CAPACITY` slots.
///
/// One slot always stays unused so that `front == tail` can only mean "empty" and
/// `(tail + 1) % CAPACITY == front` can only mean "full". The queue therefore holds at most
/// `CAPACITY - 1` elements and never allocates.
#[derive(Debug, Clone)]
pub struct CircularQueue<const CAPACITY: usize = DEFAULT_QUEUE_CAPACITY> {
  slots: [Element; CAPACITY],
  front: usize,
  tail:  usize,
}

impl<const CAPACITY: usize> CircularQueue<CAPACITY> {
  /// Target name used in emitted `tracing` events.
  pub const LOG_TARGET: &'static str = LOG_TARGET;

  /// Creates an empty queue.
  ///
  /// A ring of fewer than two slots cannot hold an element and is rejected at compile time.
  #[must_use]
  pub const fn new() -> Self {
    const { assert!(CAPACITY >= 2, "a circular queue needs at least two slots") };
    Self { slots: [0; CAPACITY], front: 0, tail: 0 }
  }

  /// Resets both indices, discarding every queued element.
  pub const fn init(&mut self) {
    self.front = 0;
    self.tail = 0;
  }

  /// Indicates whether the queue holds no elements.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.front == self.tail
  }

  /// Indicates whether the queue holds `CAPACITY - 1` elements.
  #[must_use]
  pub const fn is_full(&self) -> bool {
    Self::advance(self.tail) == self.front
  }

  /// Appends `value` at the tail.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] carrying `value` when the queue is full. The queue is unchanged.
  pub fn enqueue(&mut self, value: Element) -> Result<(), QueueError> {
    if self.is_full() {
      warn!(target: LOG_TARGET, value, capacity = CAPACITY, "queue overflow");
      return Err(QueueError::Full(value));
    }
    self.slots[self.tail] = value;
    self.tail = Self::advance(self.tail);
    Ok(())
  }

  /// Removes and returns the element at the front.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when there is nothing to dequeue.
  pub fn dequeue(&mut self) -> Result<Element, QueueError> {
    if self.is_empty() {
      warn!(target: LOG_TARGET, "queue underflow");
      return Err(QueueError::Empty);
    }
    let value = self.slots[self.front];
    self.front = Self::advance(self.front);
    Ok(value)
  }

  /// Returns the element at the front without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue is empty.
  pub const fn peek(&self) -> Result<Element, QueueError> {
    if self.is_empty() {
      return Err(QueueError::Empty);
    }
    Ok(self.slots[self.front])
  }

  /// Returns the number of live elements, correct across wrap-around.
  #[must_use]
  pub const fn len(&self) -> usize {
    if self.tail >= self.front { self.tail - self.front } else { (self.tail + CAPACITY - self.front) % CAPACITY }
  }

  /// Returns the number of ring slots, reserved slot included.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    CAPACITY
  }

  /// Returns the maximum number of live elements, `CAPACITY - 1`.
  #[must_use]
  pub const fn max_len(&self) -> usize {
    CAPACITY - 1
  }

  const fn advance(index: usize) -> usize {
    (index + 1) % CAPACITY
  }
}

impl<const CAPACITY: usize> Default for CircularQueue<CAPACITY> {
  fn default() -> Self {
    Self::new()
  }
}
