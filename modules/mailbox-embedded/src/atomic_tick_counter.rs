use portable_atomic::{AtomicU64, Ordering};
use rtmbox_core_rs::TickSource;

#[cfg(test)]
mod tests;

/// Monotonic tick counter advanced from a periodic timer interrupt.
///
/// ```ignore
/// static TICKS: AtomicTickCounter = AtomicTickCounter::new();
///
/// #[interrupt]
/// fn SysTick() {
///   TICKS.tick();
/// }
/// ```
#[derive(Debug, Default)]
pub struct AtomicTickCounter {
  ticks: AtomicU64,
}

impl AtomicTickCounter {
  /// Creates a counter starting at zero.
  #[must_use]
  pub const fn new() -> Self {
    Self { ticks: AtomicU64::new(0) }
  }

  /// Advances the counter by one tick.
  pub fn tick(&self) {
    self.advance(1);
  }

  /// Advances the counter by `ticks`, for tickless timers catching up after sleep.
  pub fn advance(&self, ticks: u64) {
    self.ticks.fetch_add(ticks, Ordering::Release);
  }

  /// Ticks counted so far.
  #[must_use]
  pub fn now(&self) -> u64 {
    self.ticks.load(Ordering::Acquire)
  }
}

impl TickSource for AtomicTickCounter {
  fn now_ticks(&self) -> u64 {
    self.now()
  }
}
