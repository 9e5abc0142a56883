use tracing::{debug, error};

use super::{GROWTH_FACTOR, PushOutcome, StackConfig, StackError, StackOverflowPolicy, VecStackStorage};
use crate::Element;

#[cfg(test)]
mod tests;

/// Owning LIFO stack that doubles its storage whenever a push finds it full.
///
/// The top element is always the most recently pushed one. Capacity only grows: popping or clearing never
/// releases storage. Dropping the stack releases its buffer.
#[derive(Debug, Clone)]
pub struct DynamicStack {
  storage: VecStackStorage,
  policy:  StackOverflowPolicy,
}

impl DynamicStack {
  /// Target name used in emitted `tracing` events.
  pub const LOG_TARGET: &'static str = "dsalib::collections::stack";

  /// Creates an empty stack with room for `initial_capacity` elements.
  ///
  /// Zero selects [`DEFAULT_STACK_CAPACITY`](super::DEFAULT_STACK_CAPACITY).
  ///
  /// # Errors
  ///
  /// Returns [`StackError::AllocError`] when the initial buffer cannot be allocated.
  pub fn new(initial_capacity: usize) -> Result<Self, StackError> {
    Self::with_config(&StackConfig::new(initial_capacity))
  }

  /// Creates an empty stack from an explicit configuration.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::AllocError`] when the initial buffer cannot be allocated.
  pub fn with_config(config: &StackConfig) -> Result<Self, StackError> {
    let capacity = config.effective_capacity();
    let storage = VecStackStorage::try_with_capacity(capacity).map_err(|err| {
      error!(target: DynamicStack::LOG_TARGET, capacity, %err, "failed to allocate stack storage");
      StackError::AllocError
    })?;
    Ok(Self { storage, policy: config.overflow_policy() })
  }

  /// Pushes `value` on top of the stack, growing the storage first when it is full.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::AllocError`] when growth is required but fails, and [`StackError::Full`] when the
  /// stack is full under [`StackOverflowPolicy::Reject`]. The stack is unchanged in both cases.
  pub fn push(&mut self, value: Element) -> Result<PushOutcome, StackError> {
    if !self.storage.is_full() {
      self.storage.push(value);
      return Ok(PushOutcome::Pushed);
    }

    match self.policy {
      | StackOverflowPolicy::Reject => Err(StackError::Full),
      | StackOverflowPolicy::Grow => {
        let capacity = self.grow()?;
        self.storage.push(value);
        Ok(PushOutcome::GrewTo { capacity })
      },
    }
  }

  /// Removes and returns the top element.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when there is nothing to pop.
  pub fn pop(&mut self) -> Result<Element, StackError> {
    self.storage.pop().ok_or(StackError::Empty)
  }

  /// Returns the top element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::Empty`] when there is nothing to peek at.
  pub fn peek(&self) -> Result<Element, StackError> {
    self.storage.peek().ok_or(StackError::Empty)
  }

  /// Indicates whether the stack holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.storage.is_empty()
  }

  /// Returns the number of live elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.storage.len()
  }

  /// Returns the number of elements the stack can hold before it has to grow.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.storage.capacity()
  }

  /// Returns the configured overflow policy.
  #[must_use]
  pub const fn overflow_policy(&self) -> StackOverflowPolicy {
    self.policy
  }

  /// Removes every element. The capacity is retained.
  pub fn clear(&mut self) {
    self.storage.clear();
  }

  fn grow(&mut self) -> Result<usize, StackError> {
    let current = self.storage.capacity();
    let Some(next) = current.checked_mul(GROWTH_FACTOR) else {
      error!(target: DynamicStack::LOG_TARGET, current, "stack capacity cannot be doubled");
      return Err(StackError::AllocError);
    };
    self.storage.try_grow(next).map_err(|err| {
      error!(target: DynamicStack::LOG_TARGET, current, requested = next, %err, "failed to grow stack storage");
      StackError::AllocError
    })?;
    debug!(target: DynamicStack::LOG_TARGET, from = current, to = next, "stack storage grew");
    Ok(next)
  }
}
