use crate::Element;


/// Returns the index of the first element equal to `target` in an unsorted slice.
#[must_use]
pub fn linear_search(values: &[Element], target: Element) -> Option<usize> {
  values.iter().position(|&value| value == target)
}
