/// Raw value meaning "do not wait".
pub const TIME_IMMEDIATE: u32 = 0;
/// Raw value meaning "wait until woken".
pub const TIME_INFINITE: u32 = u32::MAX;

/// How long a blocking mailbox operation may park its caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timeout {
  /// Fail with [`MailboxError::Timeout`](crate::MailboxError::Timeout) instead of parking.
  Immediate,
  /// Park for at most the given number of scheduler ticks.
  Ticks(u32),
  /// Park until woken by the opposite side or by a reset.
  Infinite,
}

impl Timeout {
  /// Decodes the raw tick encoding where `0` is immediate and `u32::MAX` is infinite.
  #[must_use]
  pub const fn from_raw(raw: u32) -> Self {
    match raw {
      | TIME_IMMEDIATE => Self::Immediate,
      | TIME_INFINITE => Self::Infinite,
      | ticks => Self::Ticks(ticks),
    }
  }

  /// Encodes the timeout back into its raw tick value.
  #[must_use]
  pub const fn as_raw(self) -> u32 {
    match self {
      | Self::Immediate => TIME_IMMEDIATE,
      | Self::Ticks(ticks) => ticks,
      | Self::Infinite => TIME_INFINITE,
    }
  }

  /// Returns `true` when the caller must not park at all.
  #[must_use]
  pub const fn is_immediate(self) -> bool {
    matches!(self, Self::Immediate | Self::Ticks(0))
  }
}

impl From<u32> for Timeout {
  fn from(raw: u32) -> Self {
    Self::from_raw(raw)
  }
}
