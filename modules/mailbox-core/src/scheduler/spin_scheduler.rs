use core::task::{Context, Poll};

use super::{noop_waker::noop_waker, Scheduler, TickSource};
use crate::{timing::Deadline, wait::WaitHandle};


/// Scheduler that busy-polls the waiter until it is completed or the tick source reaches the deadline.
///
/// Suited to single-core targets where the opposite side of the mailbox runs in an interrupt handler:
/// the critical section is released while spinning, so the handler can complete the waiter.
pub struct SpinScheduler<T> {
  ticks: T,
}

impl<T: TickSource> SpinScheduler<T> {
  /// Creates a scheduler reading time from `ticks`.
  pub const fn new(ticks: T) -> Self {
    Self { ticks }
  }

  /// Borrows the tick source.
  #[must_use]
  pub const fn ticks(&self) -> &T {
    &self.ticks
  }
}

impl<T: TickSource> Scheduler for SpinScheduler<T> {
  type Instant = u64;

  fn now(&self) -> Self::Instant {
    self.ticks.now_ticks()
  }

  fn instant_after(&self, from: Self::Instant, ticks: u32) -> Self::Instant {
    from.saturating_add(u64::from(ticks))
  }

  fn park<E: Copy>(&self, handle: &WaitHandle<E>, deadline: Deadline<Self::Instant>) -> Option<Result<(), E>> {
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    loop {
      if let Poll::Ready(result) = handle.poll_wake(&mut cx) {
        return Some(result);
      }
      if deadline.has_passed(self.now()) {
        return None;
      }
      core::hint::spin_loop();
    }
  }
}
