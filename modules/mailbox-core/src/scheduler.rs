mod noop_waker;
mod spin_scheduler;
mod tick_source;

pub use spin_scheduler::SpinScheduler;
pub use tick_source::TickSource;

use crate::{
  timing::{Deadline, Timeout},
  wait::WaitHandle,
};

/// Host scheduler hooks consumed by the mailbox.
///
/// The mailbox registers a waiter on one of its wait-queues while inside its critical section, leaves the
/// critical section, then asks the scheduler to park the caller until the waiter is completed or the
/// deadline passes. The scheduler never touches mailbox state.
pub trait Scheduler {
  /// Clock reading used to express deadlines.
  type Instant: Copy + Ord;

  /// Current time.
  fn now(&self) -> Self::Instant;

  /// Instant lying `ticks` scheduler ticks after `from`.
  fn instant_after(&self, from: Self::Instant, ticks: u32) -> Self::Instant;

  /// Resolves a relative timeout into an absolute deadline, starting now.
  fn deadline(&self, timeout: Timeout) -> Deadline<Self::Instant> {
    match timeout {
      | Timeout::Infinite => Deadline::Never,
      | Timeout::Immediate | Timeout::Ticks(0) => Deadline::Immediate,
      | Timeout::Ticks(ticks) => Deadline::At(self.instant_after(self.now(), ticks)),
    }
  }

  /// Suspends the caller until `handle` is completed or `deadline` passes.
  ///
  /// Returns the wake result, or `None` when the deadline passed first. A `None` does not cancel the
  /// waiter: the caller re-enters its critical section and cancels it there.
  fn park<E: Copy>(&self, handle: &WaitHandle<E>, deadline: Deadline<Self::Instant>) -> Option<Result<(), E>>;

  /// Gives the host a chance to run a caller that was just woken.
  fn reschedule(&self) {}
}
