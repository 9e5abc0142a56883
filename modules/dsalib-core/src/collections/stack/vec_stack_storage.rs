use alloc::{collections::TryReserveError, vec::Vec};

use crate::Element;


/// Contiguous stack storage backed by `alloc::vec::Vec`.
///
/// `limit` is the logical capacity seen by the stack. It only changes through [`try_grow`](Self::try_grow),
/// so the amortised doubling contract does not depend on how the allocator rounds `Vec` capacities.
#[derive(Debug, Clone)]
pub struct VecStackStorage {
  data:  Vec<Element>,
  limit: usize,
}

impl VecStackStorage {
  /// Allocates storage for exactly `capacity` elements.
  ///
  /// # Errors
  ///
  /// Returns the allocator error when the buffer cannot be reserved.
  pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
    let mut data = Vec::new();
    data.try_reserve_exact(capacity)?;
    Ok(Self { data, limit: capacity })
  }

  /// Returns the number of initialized elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.data.len()
  }

  /// Returns whether the storage currently holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  /// Returns whether every slot up to the limit is occupied.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.data.len() >= self.limit
  }

  /// Returns the configured capacity limit.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.limit
  }

  /// Pushes an element onto the end of the storage without additional checks.
  pub fn push(&mut self, value: Element) {
    debug_assert!(self.len() < self.limit);
    self.data.push(value);
  }

  /// Pops the last element from storage.
  pub fn pop(&mut self) -> Option<Element> {
    self.data.pop()
  }

  /// Returns the last element if it exists.
  #[must_use]
  pub fn peek(&self) -> Option<Element> {
    self.data.last().copied()
  }

  /// Drops every element while keeping the reserved buffer.
  pub fn clear(&mut self) {
    self.data.clear();
  }

  /// Attempts to grow the capacity limit to `new_capacity`.
  ///
  /// Growing to the current limit or below is a no-op. The existing elements and the previous limit are
  /// untouched when the reservation fails.
  ///
  /// # Errors
  ///
  /// Returns the allocator error when the larger buffer cannot be reserved.
  pub fn try_grow(&mut self, new_capacity: usize) -> Result<(), TryReserveError> {
    if new_capacity <= self.limit {
      return Ok(());
    }
    let additional = new_capacity - self.data.len();
    self.data.try_reserve_exact(additional)?;
    self.limit = new_capacity;
    Ok(())
  }
}
