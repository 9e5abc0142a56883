use core::cmp::Ordering;

use crate::Element;


/// Returns the index of an element equal to `target` in an ascending slice.
///
/// When the target occurs several times any of the matching indices may be returned.
#[must_use]
pub fn binary_search(values: &[Element], target: Element) -> Option<usize> {
  let mut left = 0;
  let mut right = values.len();
  while left < right {
    let mid = left + (right - left) / 2;
    match values[mid].cmp(&target) {
      | Ordering::Equal => return Some(mid),
      | Ordering::Less => left = mid + 1,
      | Ordering::Greater => right = mid,
    }
  }
  None
}

/// Returns the smallest index `i` with `values[i] >= target` in an ascending slice.
///
/// Yields `values.len()` when every element is smaller than `target`, which is also the insertion point
/// that keeps the slice sorted.
#[must_use]
pub fn lower_bound(values: &[Element], target: Element) -> usize {
  let mut left = 0;
  let mut right = values.len();
  while left < right {
    let mid = left + (right - left) / 2;
    if values[mid] < target {
      left = mid + 1;
    } else {
      right = mid;
    }
  }
  left
}

/// Recursive binary search restricted to the inclusive index range `[left, right]`.
///
/// `left > right` is the empty range. A range reaching past the end of `values` is treated as
/// not found.
#[must_use]
pub fn binary_search_recursive(values: &[Element], left: usize, right: usize, target: Element) -> Option<usize> {
  if left > right || right >= values.len() {
    return None;
  }
  let mid = left + (right - left) / 2;
  match values[mid].cmp(&target) {
    | Ordering::Equal => Some(mid),
    | Ordering::Less => binary_search_recursive(values, mid + 1, right, target),
    | Ordering::Greater => binary_search_recursive(values, left, mid.checked_sub(1)?, target),
  }
}
