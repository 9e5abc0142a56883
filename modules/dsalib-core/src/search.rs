//! Stateless search helpers over `Element` slices.
//!
//! An empty slice is always a valid input and yields the "not found" (or insertion point `0`) result.

mod binary_search;
mod linear_search;

pub use binary_search::{binary_search, binary_search_recursive, lower_bound};
pub use linear_search::linear_search;
