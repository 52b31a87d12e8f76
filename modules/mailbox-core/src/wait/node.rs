use core::task::{Context, Poll, Waker};

use portable_atomic::{AtomicU8, Ordering};
use spin::Mutex;

const STATE_PENDING: u8 = 0;
const STATE_COMPLETED: u8 = 1;
const STATE_CANCELLED: u8 = 2;

/// A single parked caller.
///
/// The node is shared between the wait-queue that will wake it and the [`WaitHandle`](super::WaitHandle)
/// held by the parked caller. It leaves the pending state exactly once, either completed with a wake
/// result or cancelled by its owner.
pub struct WaitNode<E> {
  state:  AtomicU8,
  waker:  Mutex<Option<Waker>>,
  result: Mutex<Option<Result<(), E>>>,
}

impl<E: Copy> WaitNode<E> {
  /// Creates a new pending waiter node.
  #[must_use]
  pub const fn new() -> Self {
    Self { state: AtomicU8::new(STATE_PENDING), waker: Mutex::new(None), result: Mutex::new(None) }
  }

  /// Completes the waiter with the provided result and wakes its owner.
  ///
  /// Returns `false` when the node already left the pending state.
  pub fn complete(&self, value: Result<(), E>) -> bool {
    let mut result_guard = self.result.lock();
    if self.state.compare_exchange(STATE_PENDING, STATE_COMPLETED, Ordering::AcqRel, Ordering::Acquire).is_err() {
      return false;
    }

    *result_guard = Some(value);
    drop(result_guard);

    if let Some(waker) = self.waker.lock().take() {
      waker.wake();
    }

    true
  }

  /// Marks the waiter as cancelled.
  ///
  /// Returns `false` when the node had already been completed, in which case its result stays available
  /// through [`WaitNode::result`].
  pub fn cancel(&self) -> bool {
    if self.state.compare_exchange(STATE_PENDING, STATE_CANCELLED, Ordering::AcqRel, Ordering::Acquire).is_ok() {
      self.waker.lock().take();
      true
    } else {
      false
    }
  }

  /// Returns `true` while the node waits for completion.
  #[must_use]
  pub fn is_pending(&self) -> bool {
    self.state.load(Ordering::Acquire) == STATE_PENDING
  }

  /// Result delivered by [`WaitNode::complete`], if any.
  #[must_use]
  pub fn result(&self) -> Option<Result<(), E>> {
    if self.state.load(Ordering::Acquire) == STATE_COMPLETED {
      *self.result.lock()
    } else {
      None
    }
  }

  /// Polls the waiter for completion, registering the context's waker while pending.
  pub fn poll(&self, cx: &mut Context<'_>) -> Poll<Result<(), E>> {
    match self.state.load(Ordering::Acquire) {
      | STATE_COMPLETED => self.ready_result(),
      | STATE_CANCELLED => Poll::Pending,
      | _ => {
        *self.waker.lock() = Some(cx.waker().clone());

        if self.state.load(Ordering::Acquire) == STATE_COMPLETED {
          self.ready_result()
        } else {
          Poll::Pending
        }
      },
    }
  }

  fn ready_result(&self) -> Poll<Result<(), E>> {
    match *self.result.lock() {
      | Some(result) => Poll::Ready(result),
      | None => Poll::Pending,
    }
  }
}

impl<E: Copy> Default for WaitNode<E> {
  fn default() -> Self {
    Self::new()
  }
}
