use core::marker::PhantomData;

use super::{message::WordSized, storage::MailboxStorage};


/// Circular slot buffer with head/tail cursors and a message count.
///
/// `tail` is the next slot written by [`push_back`](Self::push_back); `head` is the next slot read by
/// [`pop_front`](Self::pop_front) and, once moved back one slot, the slot written by
/// [`push_front`](Self::push_front). Both cursors stay in `0..capacity`.
pub struct MailboxRing<M, S> {
  storage:  S,
  capacity: usize,
  head:     usize,
  tail:     usize,
  count:    usize,
  _pd:      PhantomData<M>,
}

impl<M: Copy, S: MailboxStorage<M>> MailboxRing<M, S> {
  /// Wraps `storage`, using every slot it exposes.
  ///
  /// # Panics
  ///
  /// Panics when `storage` has no slots.
  pub fn new(storage: S) -> Self {
    let capacity = storage.slots().len();
    Self::with_capacity(storage, capacity)
  }

  fn with_capacity(storage: S, capacity: usize) -> Self {
    let () = WordSized::<M>::ASSERT;
    assert!(capacity >= 1, "mailbox capacity must be at least one slot");
    Self { storage, capacity, head: 0, tail: 0, count: 0, _pd: PhantomData }
  }

  /// Number of slots.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Number of stored messages.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.count
  }

  /// Number of free slots.
  #[must_use]
  pub const fn free(&self) -> usize {
    self.capacity - self.count
  }

  /// Returns `true` when no message is stored.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.count == 0
  }

  /// Returns `true` when every slot holds a message.
  #[must_use]
  pub const fn is_full(&self) -> bool {
    self.count == self.capacity
  }

  /// Next read slot.
  #[must_use]
  pub const fn head(&self) -> usize {
    self.head
  }

  /// Next FIFO write slot.
  #[must_use]
  pub const fn tail(&self) -> usize {
    self.tail
  }

  /// Appends `message` behind every stored message.
  ///
  /// # Errors
  ///
  /// Hands `message` back when the ring is full.
  pub fn push_back(&mut self, message: M) -> Result<(), M> {
    if self.is_full() {
      return Err(message);
    }
    self.storage.slots_mut()[self.tail] = message;
    self.tail = self.advance(self.tail);
    self.count += 1;
    debug_assert!(self.count <= self.capacity);
    Ok(())
  }

  /// Stores `message` in front of every stored message.
  ///
  /// # Errors
  ///
  /// Hands `message` back when the ring is full.
  pub fn push_front(&mut self, message: M) -> Result<(), M> {
    if self.is_full() {
      return Err(message);
    }
    self.head = self.retreat(self.head);
    self.storage.slots_mut()[self.head] = message;
    self.count += 1;
    debug_assert!(self.count <= self.capacity);
    Ok(())
  }

  /// Removes the front message.
  pub fn pop_front(&mut self) -> Option<M> {
    if self.is_empty() {
      return None;
    }
    let message = self.storage.slots()[self.head];
    self.head = self.advance(self.head);
    self.count -= 1;
    Some(message)
  }

  /// Reads the front message without removing it.
  #[must_use]
  pub fn peek_front(&self) -> Option<M> {
    if self.is_empty() {
      None
    } else {
      Some(self.storage.slots()[self.head])
    }
  }

  /// Drops every stored message and rewinds both cursors to the first slot.
  pub fn clear(&mut self) {
    self.head = 0;
    self.tail = 0;
    self.count = 0;
  }

  /// Iterates over the stored messages in fetch order.
  pub fn iter(&self) -> impl Iterator<Item = M> + '_ {
    let slots = self.storage.slots();
    (0..self.count).map(move |offset| slots[(self.head + offset) % self.capacity])
  }

  /// Gives the slot buffer back to its owner.
  pub fn into_storage(self) -> S {
    self.storage
  }

  const fn advance(&self, index: usize) -> usize {
    if index + 1 == self.capacity {
      0
    } else {
      index + 1
    }
  }

  const fn retreat(&self, index: usize) -> usize {
    if index == 0 {
      self.capacity - 1
    } else {
      index - 1
    }
  }
}

impl<M: Copy, const N: usize> MailboxRing<M, [M; N]> {
  /// Builds a ring over an inline array; usable in `static` initializers.
  ///
  /// # Panics
  ///
  /// Fails to evaluate when `N` is zero.
  #[must_use]
  pub const fn from_array(storage: [M; N]) -> Self {
    let () = WordSized::<M>::ASSERT;
    assert!(N >= 1, "mailbox capacity must be at least one slot");
    Self { storage, capacity: N, head: 0, tail: 0, count: 0, _pd: PhantomData }
  }
}
