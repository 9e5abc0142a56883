/// Policy describing how a full stack reacts to another push.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StackOverflowPolicy {
  /// Double the underlying storage capacity, then push.
  #[default]
  Grow,
  /// Refuse the push and report [`StackError::Full`](super::StackError::Full).
  Reject,
}
