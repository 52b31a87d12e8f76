use alloc::sync::Arc;
use core::ops::Deref;

/// Shared handle backed by [`alloc::sync::Arc`].
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T> ArcShared<T> {
  /// Wraps the provided value into a new shared handle.
  pub fn new(value: T) -> Self {
    Self(Arc::new(value))
  }
}

impl<T: ?Sized> ArcShared<T> {
  /// Returns `true` when both handles point at the same allocation.
  #[must_use]
  pub fn ptr_eq(this: &Self, other: &Self) -> bool {
    Arc::ptr_eq(&this.0, &other.0)
  }

  /// Number of live handles sharing the allocation.
  #[must_use]
  pub fn strong_count(this: &Self) -> usize {
    Arc::strong_count(&this.0)
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T: ?Sized + core::fmt::Debug> core::fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("ArcShared").field(&&*self.0).finish()
  }
}
