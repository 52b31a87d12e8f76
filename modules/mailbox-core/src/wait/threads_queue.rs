use alloc::collections::VecDeque;

use super::{handle::WaitHandle, node::WaitNode};
use crate::sync::ArcShared;

/// FIFO of callers parked on one wait condition (space available, data available).
///
/// Every method must be called from inside the critical section that guards the condition, so
/// that registering and waking never race with the state change they depend on.
pub struct ThreadsQueue<E: Copy> {
  waiters: VecDeque<ArcShared<WaitNode<E>>>,
}

impl<E: Copy> ThreadsQueue<E> {
  /// Creates an empty queue.
  #[must_use]
  pub const fn new() -> Self {
    Self { waiters: VecDeque::new() }
  }

  /// Registers a new waiter at the back of the queue.
  pub fn enqueue(&mut self) -> WaitHandle<E> {
    let node = ArcShared::new(WaitNode::new());
    self.waiters.push_back(node.clone());
    WaitHandle::new(node)
  }

  /// Wakes the oldest pending waiter with `result`.
  ///
  /// Cancelled waiters met on the way are discarded. Returns `false` when nobody was woken.
  pub fn dequeue_next(&mut self, result: Result<(), E>) -> bool {
    while let Some(node) = self.waiters.pop_front() {
      if node.complete(result) {
        return true;
      }
    }
    false
  }

  /// Wakes every pending waiter with `result` and returns how many were woken.
  pub fn dequeue_all(&mut self, result: Result<(), E>) -> usize {
    self.waiters.drain(..).filter(|node| node.complete(result)).count()
  }

  /// Unlinks the waiter bound to `handle`, typically after it timed out.
  pub fn remove(&mut self, handle: &WaitHandle<E>) -> bool {
    match self.waiters.iter().position(|node| handle.is_bound_to(node)) {
      | Some(index) => self.waiters.remove(index).is_some(),
      | None => false,
    }
  }

  /// Number of waiters still pending.
  #[must_use]
  pub fn len(&self) -> usize {
    self.waiters.iter().filter(|node| node.is_pending()).count()
  }

  /// Returns `true` when nobody is waiting.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    !self.waiters.iter().any(|node| node.is_pending())
  }
}

impl<E: Copy> Default for ThreadsQueue<E> {
  fn default() -> Self {
    Self::new()
  }
}
