use tracing::warn;

use super::ArithmeticError;
use crate::Element;


const LOG_TARGET: &str = "dsalib::math";

/// Adds two values, reporting which bound the exact sum would cross.
///
/// # Errors
///
/// Returns [`ArithmeticError::Overflow`] when the sum exceeds [`i32::MAX`] and
/// [`ArithmeticError::Underflow`] when it falls below [`i32::MIN`].
pub const fn checked_add(a: Element, b: Element) -> Result<Element, ArithmeticError> {
  match a.checked_add(b) {
    | Some(sum) => Ok(sum),
    | None if b > 0 => Err(ArithmeticError::Overflow),
    | None => Err(ArithmeticError::Underflow),
  }
}

/// Adds two values, clamping to [`i32::MAX`] or [`i32::MIN`] instead of wrapping.
#[must_use]
pub fn safe_add(a: Element, b: Element) -> Element {
  match checked_add(a, b) {
    | Ok(sum) => sum,
    | Err(err) => {
      warn!(target: LOG_TARGET, a, b, %err, "addition saturated");
      match err {
        | ArithmeticError::Overflow => Element::MAX,
        | ArithmeticError::Underflow => Element::MIN,
      }
    },
  }
}

/// Adds two values with two's-complement wrap-around.
#[must_use]
pub const fn wrapping_add(a: Element, b: Element) -> Element {
  a.wrapping_add(b)
}
