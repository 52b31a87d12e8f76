use std::time::Duration;

/// Default length of one scheduler tick.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(1);

/// Runtime configuration of a [`ThreadScheduler`](super::ThreadScheduler).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThreadSchedulerConfig {
  tick_period:         Duration,
  yield_on_reschedule: bool,
}

impl ThreadSchedulerConfig {
  /// Creates the default configuration: 1 ms ticks, no yield after waking a waiter.
  #[must_use]
  pub const fn new() -> Self {
    Self { tick_period: DEFAULT_TICK_PERIOD, yield_on_reschedule: false }
  }

  /// Sets the wall-clock length of one `Timeout::Ticks` unit.
  #[must_use]
  pub const fn with_tick_period(mut self, tick_period: Duration) -> Self {
    self.tick_period = tick_period;
    self
  }

  /// Makes the thread yield after it woke a parked caller, approximating a reschedule point.
  #[must_use]
  pub const fn with_yield_on_reschedule(mut self, yield_on_reschedule: bool) -> Self {
    self.yield_on_reschedule = yield_on_reschedule;
    self
  }

  /// Length of one tick.
  #[must_use]
  pub const fn tick_period(&self) -> Duration {
    self.tick_period
  }

  /// Whether the thread yields after waking a caller.
  #[must_use]
  pub const fn yield_on_reschedule(&self) -> bool {
    self.yield_on_reschedule
  }
}

impl Default for ThreadSchedulerConfig {
  fn default() -> Self {
    Self::new()
  }
}
