//! Owning container primitives.

pub mod queue;
pub mod stack;
