use rtmbox_core_rs::{Mailbox, MailboxState, SpinScheduler, TickSource};

use crate::CriticalSectionCell;

#[cfg(test)]
mod tests;

/// Mailbox for embedded targets: `critical-section` lock, callers spin on the tick source `T`.
pub type EmbeddedMailbox<M, S, T> = Mailbox<M, S, SpinScheduler<T>, CriticalSectionCell<MailboxState<M, S>>>;

/// Declares a mailbox over inline storage; usable in `static` initializers.
///
/// ```ignore
/// static TICKS: AtomicTickCounter = AtomicTickCounter::new();
/// static EVENTS: EmbeddedMailbox<u32, [u32; 8], &AtomicTickCounter> = make_embedded_mailbox([0; 8], &TICKS);
/// ```
///
/// # Panics
///
/// Fails to evaluate when `N` is zero.
#[must_use]
pub const fn make_embedded_mailbox<M: Copy, const N: usize, T: TickSource>(
  storage: [M; N],
  ticks: T,
) -> EmbeddedMailbox<M, [M; N], T> {
  Mailbox::from_parts(CriticalSectionCell::new(MailboxState::from_array(storage)), SpinScheduler::new(ticks))
}
