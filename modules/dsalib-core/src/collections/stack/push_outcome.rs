/// Outcome produced by a successful stack push.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
  /// The element was stored without touching the storage capacity.
  Pushed,
  /// The storage grew to the specified capacity before the element was stored.
  GrewTo {
    /// Capacity after the storage has grown.
    capacity: usize,
  },
}

impl From<&PushOutcome> for &'static str {
  fn from(outcome: &PushOutcome) -> Self {
    match outcome {
      | PushOutcome::Pushed => "push",
      | PushOutcome::GrewTo { .. } => "grow",
    }
  }
}
