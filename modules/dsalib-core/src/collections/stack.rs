//! Growable LIFO stack backed by a contiguous buffer.

mod dynamic_stack;
mod push_outcome;
mod stack_config;
mod stack_error;
mod stack_overflow_policy;
mod vec_stack_storage;

pub use dynamic_stack::DynamicStack;
pub use push_outcome::PushOutcome;
pub use stack_config::StackConfig;
pub use stack_error::StackError;
pub use stack_overflow_policy::StackOverflowPolicy;
pub use vec_stack_storage::VecStackStorage;

/// Capacity used when a stack is requested with an initial capacity of zero.
pub const DEFAULT_STACK_CAPACITY: usize = 4;

/// Factor applied to the capacity each time a full stack grows.
pub const GROWTH_FACTOR: usize = 2;
