use super::{mailbox_error::MailboxError, ring::MailboxRing, storage::MailboxStorage};
use crate::wait::ThreadsQueue;


/// Which wait-queue a blocked caller parks on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WaitSide {
  /// Producers waiting for a free slot.
  Producers,
  /// Consumers waiting for a message.
  Consumers,
}

/// Mailbox contents plus the callers parked on it.
///
/// Only reachable through the mailbox's critical section, so the `_i` methods are the API for interrupt
/// handlers and for code that already holds the lock: they never block and never reschedule. A full
/// mailbox (post) or an empty one (fetch) is reported as [`MailboxError::Timeout`].
pub struct MailboxState<M, S> {
  ring:      MailboxRing<M, S>,
  reset:     bool,
  producers: ThreadsQueue<MailboxError>,
  consumers: ThreadsQueue<MailboxError>,
}

impl<M: Copy, S: MailboxStorage<M>> MailboxState<M, S> {
  /// Creates an empty, usable mailbox state over `storage`.
  ///
  /// # Panics
  ///
  /// Panics when `storage` has no slots.
  pub fn new(storage: S) -> Self {
    Self::from_ring(MailboxRing::new(storage))
  }

  /// Wraps an already built ring.
  #[must_use]
  pub const fn from_ring(ring: MailboxRing<M, S>) -> Self {
    Self { ring, reset: false, producers: ThreadsQueue::new(), consumers: ThreadsQueue::new() }
  }

  /// Posts `message` behind the queued messages.
  ///
  /// # Errors
  ///
  /// [`MailboxError::Reset`] while reset, [`MailboxError::Timeout`] when full.
  pub fn post_i(&mut self, message: M) -> Result<(), MailboxError> {
    self.ensure_usable()?;
    self.ring.push_back(message).map_err(|_| MailboxError::Timeout)?;
    self.consumers.dequeue_next(Ok(()));
    Ok(())
  }

  /// Posts `message` ahead of the queued messages so that it is fetched next.
  ///
  /// # Errors
  ///
  /// [`MailboxError::Reset`] while reset, [`MailboxError::Timeout`] when full.
  pub fn post_ahead_i(&mut self, message: M) -> Result<(), MailboxError> {
    self.ensure_usable()?;
    self.ring.push_front(message).map_err(|_| MailboxError::Timeout)?;
    self.consumers.dequeue_next(Ok(()));
    Ok(())
  }

  /// Takes the front message.
  ///
  /// # Errors
  ///
  /// [`MailboxError::Reset`] while reset, [`MailboxError::Timeout`] when empty.
  pub fn fetch_i(&mut self) -> Result<M, MailboxError> {
    self.ensure_usable()?;
    let message = self.ring.pop_front().ok_or(MailboxError::Timeout)?;
    self.producers.dequeue_next(Ok(()));
    Ok(message)
  }

  /// Empties the mailbox, enters the reset state and wakes every parked caller with
  /// [`MailboxError::Reset`]. Returns the number of callers woken.
  pub fn reset_i(&mut self) -> usize {
    self.ring.clear();
    self.reset = true;
    let woken = self.producers.dequeue_all(Err(MailboxError::Reset));
    let woken = woken + self.consumers.dequeue_all(Err(MailboxError::Reset));
    #[cfg(feature = "tracing")]
    tracing::trace!(woken, "mailbox reset");
    woken
  }

  /// Leaves the reset state. Contents and wait-queues are already empty after a reset.
  pub fn resume_x(&mut self) {
    self.reset = false;
  }

  /// Returns `true` while the mailbox is in the reset state.
  #[must_use]
  pub const fn is_reset(&self) -> bool {
    self.reset
  }

  /// Number of slots.
  #[must_use]
  pub const fn size_i(&self) -> usize {
    self.ring.capacity()
  }

  /// Number of queued messages.
  #[must_use]
  pub const fn used_count_i(&self) -> usize {
    self.ring.len()
  }

  /// Number of free slots.
  #[must_use]
  pub const fn free_count_i(&self) -> usize {
    self.ring.free()
  }

  /// Next message that [`fetch_i`](Self::fetch_i) would return.
  #[must_use]
  pub fn peek_i(&self) -> Option<M> {
    self.ring.peek_front()
  }

  /// Producers parked waiting for a free slot.
  #[must_use]
  pub fn waiting_producers(&self) -> usize {
    self.producers.len()
  }

  /// Consumers parked waiting for a message.
  #[must_use]
  pub fn waiting_consumers(&self) -> usize {
    self.consumers.len()
  }

  /// Read access to the underlying ring.
  #[must_use]
  pub const fn ring(&self) -> &MailboxRing<M, S> {
    &self.ring
  }

  /// Gives the slot buffer back to its owner.
  pub fn into_storage(self) -> S {
    self.ring.into_storage()
  }

  pub(crate) fn queue_mut(&mut self, side: WaitSide) -> &mut ThreadsQueue<MailboxError> {
    match side {
      | WaitSide::Producers => &mut self.producers,
      | WaitSide::Consumers => &mut self.consumers,
    }
  }

  const fn ensure_usable(&self) -> Result<(), MailboxError> {
    if self.reset {
      Err(MailboxError::Reset)
    } else {
      Ok(())
    }
  }
}

impl<M: Copy, const N: usize> MailboxState<M, [M; N]> {
  /// Builds the state over an inline array; usable in `static` initializers.
  #[must_use]
  pub const fn from_array(storage: [M; N]) -> Self {
    Self::from_ring(MailboxRing::from_array(storage))
  }
}
