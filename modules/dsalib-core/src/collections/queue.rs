//! Fixed-capacity FIFO queue over an inline ring buffer.

mod circular_queue;
mod queue_error;

pub use circular_queue::CircularQueue;
pub use queue_error::QueueError;

/// Ring slot count used by [`CircularQueue`] when no capacity is named.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;
