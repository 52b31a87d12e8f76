use std::{
  sync::Arc,
  task::Wake,
  thread::{self, Thread},
};

/// Waker that unparks the thread which created it.
pub(super) struct ThreadWaker(Thread);

impl ThreadWaker {
  pub(super) fn current() -> Arc<Self> {
    Arc::new(Self(thread::current()))
  }
}

impl Wake for ThreadWaker {
  fn wake(self: Arc<Self>) {
    self.0.unpark();
  }

  fn wake_by_ref(self: &Arc<Self>) {
    self.0.unpark();
  }
}
