use core::{
  future::Future,
  marker::PhantomData,
  pin::Pin,
  task::{Context, Poll},
};

use super::{
  mailbox_error::MailboxError,
  state::{MailboxState, WaitSide},
  storage::MailboxStorage,
};
use crate::{sync::CriticalSection, wait::WaitHandle};

/// Future returned by the async mailbox operations; waits without a timeout.
///
/// Dropping the future withdraws its waiter. If the waiter had already been handed a slot (or a message)
/// that it never used, the wake-up is passed on to the next waiter of the same kind.
#[must_use = "futures do nothing unless polled"]
pub struct MailboxWait<'a, M, S, C, R, F>
where
  M: Copy,
  S: MailboxStorage<M>,
  C: CriticalSection<MailboxState<M, S>>, {
  state:   &'a C,
  side:    WaitSide,
  attempt: F,
  handle:  Option<WaitHandle<MailboxError>>,
  _pd:     PhantomData<fn() -> (M, S, R)>,
}

impl<'a, M, S, C, R, F> MailboxWait<'a, M, S, C, R, F>
where
  M: Copy,
  S: MailboxStorage<M>,
  C: CriticalSection<MailboxState<M, S>>,
  F: FnMut(&mut MailboxState<M, S>) -> Result<R, MailboxError>,
{
  pub(crate) const fn new(state: &'a C, side: WaitSide, attempt: F) -> Self {
    Self { state, side, attempt, handle: None, _pd: PhantomData }
  }
}

// No field is structurally pinned.
impl<M, S, C, R, F> Unpin for MailboxWait<'_, M, S, C, R, F>
where
  M: Copy,
  S: MailboxStorage<M>,
  C: CriticalSection<MailboxState<M, S>>,
{
}

impl<M, S, C, R, F> Future for MailboxWait<'_, M, S, C, R, F>
where
  M: Copy,
  S: MailboxStorage<M>,
  C: CriticalSection<MailboxState<M, S>>,
  F: FnMut(&mut MailboxState<M, S>) -> Result<R, MailboxError>,
{
  type Output = Result<R, MailboxError>;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    let this = self.get_mut();
    loop {
      if let Some(handle) = this.handle.as_ref() {
        match handle.poll_wake(cx) {
          | Poll::Pending => return Poll::Pending,
          | Poll::Ready(Ok(())) => this.handle = None,
          | Poll::Ready(Err(error)) => {
            this.handle = None;
            return Poll::Ready(Err(error));
          },
        }
      }

      let mut state = this.state.enter();
      match (this.attempt)(&mut *state) {
        | Err(MailboxError::Timeout) => this.handle = Some(state.queue_mut(this.side).enqueue()),
        | outcome => return Poll::Ready(outcome),
      }
    }
  }
}

impl<M, S, C, R, F> Drop for MailboxWait<'_, M, S, C, R, F>
where
  M: Copy,
  S: MailboxStorage<M>,
  C: CriticalSection<MailboxState<M, S>>,
{
  fn drop(&mut self) {
    let Some(handle) = self.handle.take() else {
      return;
    };
    let mut state = self.state.enter();
    let queue = state.queue_mut(self.side);
    if handle.cancel() {
      queue.remove(&handle);
    } else if matches!(handle.result(), Some(Ok(()))) {
      queue.dequeue_next(Ok(()));
    }
  }
}
