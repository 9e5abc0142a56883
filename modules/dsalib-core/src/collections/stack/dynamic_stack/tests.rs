use alloc::vec::Vec;

use super::*;
use crate::collections::stack::DEFAULT_STACK_CAPACITY;

#[test]
fn new_with_zero_uses_default_capacity() {
  let stack = DynamicStack::new(0).unwrap();
  assert_eq!(stack.len(), 0);
  assert_eq!(stack.capacity(), DEFAULT_STACK_CAPACITY);
  assert!(stack.is_empty());
}

#[test]
fn new_with_explicit_capacity() {
  let stack = DynamicStack::new(10).unwrap();
  assert_eq!(stack.len(), 0);
  assert_eq!(stack.capacity(), 10);
  assert_eq!(stack.overflow_policy(), StackOverflowPolicy::Grow);
}

#[test]
fn new_reports_allocation_failure() {
  assert_eq!(DynamicStack::new(usize::MAX).unwrap_err(), StackError::AllocError);
}

#[test]
fn push_grows_by_doubling() {
  let mut stack = DynamicStack::new(2).unwrap();

  assert_eq!(stack.push(10).unwrap(), PushOutcome::Pushed);
  assert_eq!(stack.push(20).unwrap(), PushOutcome::Pushed);
  assert_eq!(stack.push(30).unwrap(), PushOutcome::GrewTo { capacity: 4 });
  assert_eq!(stack.len(), 3);
  assert_eq!(stack.capacity(), 4);

  for value in 0..100 {
    stack.push(value).unwrap();
  }
  assert_eq!(stack.len(), 103);
  assert_eq!(stack.capacity(), 128);
}

#[test]
fn pop_maintains_lifo() {
  let mut stack = DynamicStack::new(0).unwrap();

  stack.push(10).unwrap();
  stack.push(20).unwrap();
  stack.push(30).unwrap();

  assert_eq!(stack.pop().unwrap(), 30);
  assert_eq!(stack.pop().unwrap(), 20);
  assert_eq!(stack.pop().unwrap(), 10);
  assert!(stack.is_empty());
  assert_eq!(stack.pop(), Err(StackError::Empty));
}

#[test]
fn pop_does_not_shrink_capacity() {
  let mut stack = DynamicStack::new(1).unwrap();
  for value in 0..9 {
    stack.push(value).unwrap();
  }
  let grown = stack.capacity();
  while stack.pop().is_ok() {}
  assert_eq!(stack.capacity(), grown);
}

#[test]
fn peek_does_not_remove() {
  let mut stack = DynamicStack::new(0).unwrap();
  assert_eq!(stack.peek(), Err(StackError::Empty));

  stack.push(100).unwrap();
  assert_eq!(stack.peek().unwrap(), 100);
  assert_eq!(stack.len(), 1);
  assert_eq!(stack.peek().unwrap(), 100);

  stack.push(200).unwrap();
  stack.push(300).unwrap();
  assert_eq!(stack.peek().unwrap(), 300);
}

#[test]
fn clear_keeps_capacity() {
  let mut stack = DynamicStack::new(0).unwrap();
  stack.push(10).unwrap();
  stack.push(20).unwrap();
  stack.push(30).unwrap();
  let capacity = stack.capacity();

  stack.clear();
  assert_eq!(stack.len(), 0);
  assert!(stack.is_empty());
  assert_eq!(stack.capacity(), capacity);

  stack.clear();
  assert_eq!(stack.capacity(), capacity);
}

#[test]
fn reject_policy_reports_full_without_mutation() {
  let config = StackConfig::new(2).with_overflow_policy(StackOverflowPolicy::Reject);
  let mut stack = DynamicStack::with_config(&config).unwrap();

  stack.push(1).unwrap();
  stack.push(2).unwrap();
  assert_eq!(stack.push(3), Err(StackError::Full));
  assert_eq!(stack.capacity(), 2);
  assert_eq!(stack.len(), 2);
  assert_eq!(stack.peek().unwrap(), 2);
}

#[test]
fn alternating_push_pop_keeps_count() {
  let mut stack = DynamicStack::new(2).unwrap();
  for value in 0..1000 {
    stack.push(value).unwrap();
    stack.push(value + 1).unwrap();
    stack.pop().unwrap();
  }
  assert_eq!(stack.len(), 1000);
}

#[test]
fn negative_values_round_trip() {
  let mut stack = DynamicStack::new(0).unwrap();
  for value in [-100, -50, 0, 50] {
    stack.push(value).unwrap();
  }
  let popped: Vec<Element> = core::iter::from_fn(|| stack.pop().ok()).collect();
  assert_eq!(popped, [50, 0, -50, -100]);
}
