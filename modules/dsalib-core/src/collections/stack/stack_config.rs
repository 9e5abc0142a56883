use super::{DEFAULT_STACK_CAPACITY, StackOverflowPolicy};


/// Configuration object consumed by [`DynamicStack::with_config`](super::DynamicStack::with_config).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackConfig {
  initial_capacity: usize,
  overflow_policy:  StackOverflowPolicy,
}

impl StackConfig {
  /// Creates a configuration requesting `initial_capacity` slots with the growing overflow policy.
  ///
  /// An `initial_capacity` of zero selects [`DEFAULT_STACK_CAPACITY`].
  #[must_use]
  pub const fn new(initial_capacity: usize) -> Self {
    Self { initial_capacity, overflow_policy: StackOverflowPolicy::Grow }
  }

  /// Returns a copy of this configuration using the provided overflow policy.
  #[must_use]
  pub const fn with_overflow_policy(mut self, overflow_policy: StackOverflowPolicy) -> Self {
    self.overflow_policy = overflow_policy;
    self
  }

  /// Returns the capacity as requested, zero included.
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }

  /// Returns the capacity that will actually be allocated.
  #[must_use]
  pub const fn effective_capacity(&self) -> usize {
    if self.initial_capacity == 0 { DEFAULT_STACK_CAPACITY } else { self.initial_capacity }
  }

  /// Returns the configured overflow policy.
  #[must_use]
  pub const fn overflow_policy(&self) -> StackOverflowPolicy {
    self.overflow_policy
  }
}

impl Default for StackConfig {
  fn default() -> Self {
    Self::new(0)
  }
}
