use rtmbox_core_rs::{Mailbox, MailboxState};

use crate::{StdCriticalSection, ThreadScheduler, ThreadSchedulerConfig};


/// Mailbox state guarded by a [`StdCriticalSection`], with a heap-allocated slot buffer.
pub type StdMailboxState<M> = MailboxState<M, Vec<M>>;

/// Mailbox for std hosts: `Vec` slot buffer, `std::sync::Mutex` critical section, thread parking.
pub type StdMailbox<M> = Mailbox<M, Vec<M>, ThreadScheduler, StdCriticalSection<StdMailboxState<M>>>;

/// Creates an empty mailbox with `capacity` slots and the default scheduler configuration.
///
/// # Panics
///
/// Panics when `capacity` is zero.
#[must_use]
pub fn make_std_mailbox<M: Copy + Default>(capacity: usize) -> StdMailbox<M> {
  make_std_mailbox_with_config(capacity, ThreadSchedulerConfig::default())
}

/// Creates an empty mailbox with `capacity` slots, parking threads according to `config`.
///
/// # Panics
///
/// Panics when `capacity` is zero.
#[must_use]
pub fn make_std_mailbox_with_config<M: Copy + Default>(capacity: usize, config: ThreadSchedulerConfig) -> StdMailbox<M> {
  assert!(capacity > 0, "mailbox capacity must be at least one slot");
  tracing::debug!(capacity, tick_period = ?config.tick_period(), "creating std mailbox");
  Mailbox::new(vec![M::default(); capacity], ThreadScheduler::with_config(config))
}
