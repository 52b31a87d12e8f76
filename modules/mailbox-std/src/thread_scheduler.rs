//! Scheduler parking OS threads.

mod thread_scheduler_config;
mod thread_waker;

use std::{
  task::{Context, Poll, Waker},
  thread,
  time::{Duration, Instant},
};

use rtmbox_core_rs::{Deadline, Scheduler, WaitHandle};
pub use thread_scheduler_config::{ThreadSchedulerConfig, DEFAULT_TICK_PERIOD};
use thread_waker::ThreadWaker;


/// Scheduler that parks the calling thread until its waiter is completed or the deadline passes.
///
/// Instants are measured as the time elapsed since the scheduler was created, so deadline arithmetic
/// saturates instead of overflowing for very long timeouts.
#[derive(Debug, Clone)]
pub struct ThreadScheduler {
  epoch:  Instant,
  config: ThreadSchedulerConfig,
}

impl ThreadScheduler {
  /// Creates a scheduler with the default configuration.
  #[must_use]
  pub fn new() -> Self {
    Self::with_config(ThreadSchedulerConfig::default())
  }

  /// Creates a scheduler with the provided configuration.
  #[must_use]
  pub fn with_config(config: ThreadSchedulerConfig) -> Self {
    Self { epoch: Instant::now(), config }
  }

  /// Returns the active configuration.
  #[must_use]
  pub const fn config(&self) -> &ThreadSchedulerConfig {
    &self.config
  }
}

impl Default for ThreadScheduler {
  fn default() -> Self {
    Self::new()
  }
}

impl Scheduler for ThreadScheduler {
  type Instant = Duration;

  fn now(&self) -> Self::Instant {
    self.epoch.elapsed()
  }

  fn instant_after(&self, from: Self::Instant, ticks: u32) -> Self::Instant {
    from.saturating_add(self.config.tick_period().saturating_mul(ticks))
  }

  fn park<E: Copy>(&self, handle: &WaitHandle<E>, deadline: Deadline<Self::Instant>) -> Option<Result<(), E>> {
    let waker = Waker::from(ThreadWaker::current());
    let mut cx = Context::from_waker(&waker);
    loop {
      if let Poll::Ready(result) = handle.poll_wake(&mut cx) {
        return Some(result);
      }
      match deadline {
        | Deadline::Never => thread::park(),
        | Deadline::Immediate => return None,
        | Deadline::At(at) => {
          let now = self.now();
          if now >= at {
            tracing::trace!(overshoot = ?(now - at), "thread park timed out");
            return None;
          }
          thread::park_timeout(at - now);
        },
      }
    }
  }

  fn reschedule(&self) {
    if self.config.yield_on_reschedule() {
      thread::yield_now();
    }
  }
}
