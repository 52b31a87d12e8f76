/// Absolute end of a wait, resolved once when a blocking call starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deadline<I> {
  /// The caller must not park.
  Immediate,
  /// The wait ends at the given instant.
  At(I),
  /// The wait only ends when the caller is woken.
  Never,
}

impl<I: Copy + Ord> Deadline<I> {
  /// Returns `true` once `now` has reached the deadline.
  #[must_use]
  pub fn has_passed(self, now: I) -> bool {
    match self {
      | Self::Immediate => true,
      | Self::At(instant) => now >= instant,
      | Self::Never => false,
    }
  }
}
