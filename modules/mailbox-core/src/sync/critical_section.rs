use core::ops::{Deref, DerefMut};

/// Lock discipline guarding a mailbox's state.
///
/// Entering yields a guard; the region ends when the guard is dropped, on every exit path. Implementations
/// must exclude every other context touching the same value, interrupt handlers included when the value is
/// shared with them. The region must never be held across a suspension: callers release the guard before
/// parking and enter again afterwards.
pub trait CriticalSection<T> {
  /// Guard type returned by [`CriticalSection::enter`].
  type Guard<'a>: Deref<Target = T> + DerefMut
  where
    Self: 'a,
    T: 'a;

  /// Creates a new critical section protecting the provided value.
  fn new(value: T) -> Self;

  /// Consumes the critical section and returns the protected value.
  fn into_inner(self) -> T;

  /// Enters the critical section.
  fn enter(&self) -> Self::Guard<'_>;
}

impl<T> CriticalSection<T> for spin::Mutex<T> {
  type Guard<'a>
    = spin::MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    Self::new(value)
  }

  fn into_inner(self) -> T {
    self.into_inner()
  }

  fn enter(&self) -> Self::Guard<'_> {
    self.lock()
  }
}

/// Convenience alias for guards produced by [`CriticalSection`].
pub type CriticalSectionGuard<'a, C, T> = <C as CriticalSection<T>>::Guard<'a>;
