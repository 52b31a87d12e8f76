//! Critical section backed by `std::sync::Mutex`.

use rtmbox_core_rs::CriticalSection;

#[cfg(test)]
mod tests;

/// Thin wrapper over [`std::sync::Mutex`] acting as the mailbox critical section.
///
/// Lock poisoning is ignored: mailbox state is consistent at every point where the guard can be dropped.
pub struct StdCriticalSection<T>(std::sync::Mutex<T>);

impl<T> StdCriticalSection<T> {
  /// Creates a new critical section guarding the provided value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(std::sync::Mutex::new(value))
  }

  /// Consumes the critical section and returns the inner value.
  pub fn into_inner(self) -> T {
    self.0.into_inner().unwrap_or_else(|err| err.into_inner())
  }

  /// Enters the critical section.
  pub fn enter(&self) -> StdCriticalSectionGuard<'_, T> {
    self.0.lock().unwrap_or_else(|err| err.into_inner())
  }
}

impl<T> CriticalSection<T> for StdCriticalSection<T> {
  type Guard<'a>
    = std::sync::MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    StdCriticalSection::new(value)
  }

  fn into_inner(self) -> T {
    StdCriticalSection::into_inner(self)
  }

  fn enter(&self) -> Self::Guard<'_> {
    StdCriticalSection::enter(self)
  }
}

/// Convenience alias for guards produced by [`StdCriticalSection`].
pub type StdCriticalSectionGuard<'a, T> = std::sync::MutexGuard<'a, T>;
