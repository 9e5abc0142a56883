#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![cfg_attr(not(test), deny(clippy::redundant_clone))]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::missing_const_for_fn)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![no_std]

//! Container primitives and small algorithmic utilities.
//!
//! The centrepiece is [`collections`]: a growable LIFO [`DynamicStack`](collections::stack::DynamicStack)
//! that doubles its storage on overflow, and a fixed-capacity FIFO
//! [`CircularQueue`](collections::queue::CircularQueue) that keeps one ring slot free to tell
//! "empty" apart from "full". [`search`] and [`math`] hold stateless helpers that share nothing with
//! the containers beyond the [`Element`] type.
//!
//! Failures never panic. Every fallible operation reports back to its caller through a typed error, and
//! noteworthy conditions (growth, overflow, underflow, saturation) are emitted as `tracing` events.

extern crate alloc;

pub mod collections;
mod element;
pub mod math;
pub mod search;

pub use element::Element;
