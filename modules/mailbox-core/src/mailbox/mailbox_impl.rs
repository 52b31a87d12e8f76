use core::marker::PhantomData;

use super::{
  mailbox_error::MailboxError,
  mailbox_wait::MailboxWait,
  state::{MailboxState, WaitSide},
  storage::MailboxStorage,
};
use crate::{
  scheduler::Scheduler,
  sync::{CriticalSection, CriticalSectionGuard},
  timing::Timeout,
};


/// Bounded mailbox of word-sized messages.
///
/// Every access to the state goes through the critical section `C`. Blocking calls register on the
/// matching wait-queue inside the critical section, leave it, and let the scheduler `P` park them until
/// the opposite side wakes them, the timeout expires, or the mailbox is reset. Each successful transfer
/// wakes at most one caller of the opposite kind; only [`reset`](Self::reset) wakes everybody.
pub struct Mailbox<M, S, P, C = spin::Mutex<MailboxState<M, S>>>
where
  M: Copy,
  S: MailboxStorage<M>,
  P: Scheduler,
  C: CriticalSection<MailboxState<M, S>>, {
  state:     C,
  scheduler: P,
  _pd:       PhantomData<fn() -> (M, S)>,
}

impl<M, S, P, C> Mailbox<M, S, P, C>
where
  M: Copy,
  S: MailboxStorage<M>,
  P: Scheduler,
  C: CriticalSection<MailboxState<M, S>>,
{
  /// Creates an empty mailbox over `storage`.
  ///
  /// # Panics
  ///
  /// Panics when `storage` has no slots.
  pub fn new(storage: S, scheduler: P) -> Self {
    Self::from_parts(C::new(MailboxState::new(storage)), scheduler)
  }

  /// Assembles a mailbox from an already guarded state; usable in `static` initializers.
  pub const fn from_parts(state: C, scheduler: P) -> Self {
    Self { state, scheduler, _pd: PhantomData }
  }

  /// Enters the critical section, exposing the non-blocking `_i` API of [`MailboxState`].
  pub fn enter(&self) -> CriticalSectionGuard<'_, C, MailboxState<M, S>> {
    self.state.enter()
  }

  /// Scheduler used to park blocked callers.
  #[must_use]
  pub const fn scheduler(&self) -> &P {
    &self.scheduler
  }

  /// Posts `message` behind the queued messages, parking while the mailbox is full.
  ///
  /// # Errors
  ///
  /// [`MailboxError::Timeout`] when no slot freed up in time, [`MailboxError::Reset`] when the mailbox was
  /// reset before or during the call.
  pub fn post_timeout(&self, message: M, timeout: Timeout) -> Result<(), MailboxError> {
    self.wait_until(WaitSide::Producers, timeout, |state| state.post_i(message))
  }

  /// Posts `message` ahead of the queued messages, parking while the mailbox is full.
  ///
  /// # Errors
  ///
  /// Same as [`post_timeout`](Self::post_timeout).
  pub fn post_ahead_timeout(&self, message: M, timeout: Timeout) -> Result<(), MailboxError> {
    self.wait_until(WaitSide::Producers, timeout, |state| state.post_ahead_i(message))
  }

  /// Fetches the front message, parking while the mailbox is empty.
  ///
  /// # Errors
  ///
  /// [`MailboxError::Timeout`] when no message arrived in time, [`MailboxError::Reset`] when the mailbox
  /// was reset before or during the call.
  pub fn fetch_timeout(&self, timeout: Timeout) -> Result<M, MailboxError> {
    self.wait_until(WaitSide::Consumers, timeout, MailboxState::<M, S>::fetch_i)
  }

  /// Non-blocking post for interrupt handlers; does not reschedule.
  ///
  /// # Errors
  ///
  /// [`MailboxError::Timeout`] when full, [`MailboxError::Reset`] while reset.
  pub fn try_post(&self, message: M) -> Result<(), MailboxError> {
    self.enter().post_i(message)
  }

  /// Non-blocking post-ahead for interrupt handlers; does not reschedule.
  ///
  /// # Errors
  ///
  /// [`MailboxError::Timeout`] when full, [`MailboxError::Reset`] while reset.
  pub fn try_post_ahead(&self, message: M) -> Result<(), MailboxError> {
    self.enter().post_ahead_i(message)
  }

  /// Non-blocking fetch for interrupt handlers; does not reschedule.
  ///
  /// # Errors
  ///
  /// [`MailboxError::Timeout`] when empty, [`MailboxError::Reset`] while reset.
  pub fn try_fetch(&self) -> Result<M, MailboxError> {
    self.enter().fetch_i()
  }

  /// Posts `message`, waiting as long as it takes for a free slot.
  pub fn post(
    &self,
    message: M,
  ) -> MailboxWait<'_, M, S, C, (), impl FnMut(&mut MailboxState<M, S>) -> Result<(), MailboxError>> {
    MailboxWait::new(&self.state, WaitSide::Producers, move |state: &mut MailboxState<M, S>| state.post_i(message))
  }

  /// Posts `message` ahead of the queue, waiting as long as it takes for a free slot.
  pub fn post_ahead(
    &self,
    message: M,
  ) -> MailboxWait<'_, M, S, C, (), impl FnMut(&mut MailboxState<M, S>) -> Result<(), MailboxError>> {
    MailboxWait::new(&self.state, WaitSide::Producers, move |state: &mut MailboxState<M, S>| state.post_ahead_i(message))
  }

  /// Fetches the front message, waiting as long as it takes for one to arrive.
  pub fn fetch(
    &self,
  ) -> MailboxWait<'_, M, S, C, M, impl FnMut(&mut MailboxState<M, S>) -> Result<M, MailboxError>> {
    MailboxWait::new(&self.state, WaitSide::Consumers, MailboxState::<M, S>::fetch_i)
  }

  /// Empties the mailbox and wakes every parked caller with [`MailboxError::Reset`].
  ///
  /// The mailbox rejects every operation with [`MailboxError::Reset`] until [`resume`](Self::resume).
  pub fn reset(&self) {
    let woken = self.enter().reset_i();
    if woken > 0 {
      self.scheduler.reschedule();
    }
  }

  /// Leaves the reset state, making the (empty) mailbox usable again.
  pub fn resume(&self) {
    self.enter().resume_x();
  }

  /// Returns `true` while the mailbox is in the reset state.
  #[must_use]
  pub fn is_reset(&self) -> bool {
    self.enter().is_reset()
  }

  /// Number of slots.
  #[must_use]
  pub fn size(&self) -> usize {
    self.enter().size_i()
  }

  /// Number of queued messages. May be stale as soon as it is returned.
  #[must_use]
  pub fn used_count(&self) -> usize {
    self.enter().used_count_i()
  }

  /// Number of free slots. May be stale as soon as it is returned.
  #[must_use]
  pub fn free_count(&self) -> usize {
    self.enter().free_count_i()
  }

  /// Next message a fetch would return, without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<M> {
    self.enter().peek_i()
  }

  /// Consumes the mailbox and gives the slot buffer back.
  pub fn into_storage(self) -> S {
    self.state.into_inner().into_storage()
  }

  fn wait_until<R>(
    &self,
    side: WaitSide,
    timeout: Timeout,
    mut attempt: impl FnMut(&mut MailboxState<M, S>) -> Result<R, MailboxError>,
  ) -> Result<R, MailboxError> {
    let deadline = self.scheduler.deadline(timeout);
    loop {
      let handle = {
        let mut state = self.state.enter();
        match attempt(&mut *state) {
          | Err(MailboxError::Timeout) => {},
          | outcome => {
            drop(state);
            if outcome.is_ok() {
              self.scheduler.reschedule();
            }
            return outcome;
          },
        }
        if deadline.has_passed(self.scheduler.now()) {
          return Err(MailboxError::Timeout);
        }
        state.queue_mut(side).enqueue()
      };

      match self.scheduler.park(&handle, deadline) {
        | Some(Ok(())) => {},
        | Some(Err(error)) => return Err(error),
        | None => {
          let mut state = self.state.enter();
          if handle.cancel() {
            state.queue_mut(side).remove(&handle);
            #[cfg(feature = "tracing")]
            tracing::trace!(?side, "mailbox wait timed out");
            return Err(MailboxError::Timeout);
          }
          // Woken between the deadline and re-entering: honour the wake.
          match handle.result() {
            | Some(Ok(())) => {},
            | Some(Err(error)) => return Err(error),
            | None => return Err(MailboxError::Timeout),
          }
        },
      }
    }
  }
}
