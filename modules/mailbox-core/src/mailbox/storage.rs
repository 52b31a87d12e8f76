use alloc::{boxed::Box, vec::Vec};

/// Caller-supplied slot buffer backing a mailbox.
///
/// The mailbox never allocates or frees its buffer; ownership stays with whatever `S` is.
pub trait MailboxStorage<M> {
  /// Borrows the slots.
  fn slots(&self) -> &[M];

  /// Mutably borrows the slots.
  fn slots_mut(&mut self) -> &mut [M];
}

impl<M, const N: usize> MailboxStorage<M> for [M; N] {
  fn slots(&self) -> &[M] {
    self
  }

  fn slots_mut(&mut self) -> &mut [M] {
    self
  }
}

impl<M> MailboxStorage<M> for &mut [M] {
  fn slots(&self) -> &[M] {
    self
  }

  fn slots_mut(&mut self) -> &mut [M] {
    self
  }
}

impl<M> MailboxStorage<M> for Vec<M> {
  fn slots(&self) -> &[M] {
    self
  }

  fn slots_mut(&mut self) -> &mut [M] {
    self
  }
}

impl<M> MailboxStorage<M> for Box<[M]> {
  fn slots(&self) -> &[M] {
    self
  }

  fn slots_mut(&mut self) -> &mut [M] {
    self
  }
}
