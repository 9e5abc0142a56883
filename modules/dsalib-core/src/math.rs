//! Overflow-aware integer arithmetic.

mod add;
mod arithmetic_error;

pub use add::{checked_add, safe_add, wrapping_add};
pub use arithmetic_error::ArithmeticError;
