/// Monotonic tick counter, typically advanced by a periodic timer interrupt.
pub trait TickSource {
  /// Ticks elapsed since an arbitrary epoch.
  fn now_ticks(&self) -> u64;
}

impl<T: TickSource + ?Sized> TickSource for &T {
  fn now_ticks(&self) -> u64 {
    (**self).now_ticks()
  }
}
