use core::{
  cell::{Cell, UnsafeCell},
  marker::PhantomData,
  ops::{Deref, DerefMut},
};

use critical_section::RestoreState;
use rtmbox_core_rs::CriticalSection;

#[cfg(test)]
mod tests;

/// Value only reachable inside a global critical section.
///
/// Entering acquires the `critical-section` implementation of the target (interrupts masked on
/// single-core MCUs) for as long as the guard lives. Guards of different cells may nest but must be
/// dropped in reverse order of creation.
pub struct CriticalSectionCell<T> {
  entered: Cell<bool>,
  value:   UnsafeCell<T>,
}

// SAFETY: `entered` and `value` are only accessed while the critical section is held.
unsafe impl<T: Send> Sync for CriticalSectionCell<T> {}

impl<T> CriticalSectionCell<T> {
  /// Creates a cell guarding `value`.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self { entered: Cell::new(false), value: UnsafeCell::new(value) }
  }

  /// Consumes the cell and returns the value.
  pub fn into_inner(self) -> T {
    self.value.into_inner()
  }

  /// Enters the critical section and borrows the value mutably.
  ///
  /// # Panics
  ///
  /// Panics when the same cell is already entered by the current context.
  pub fn enter(&self) -> CriticalSectionCellGuard<'_, T> {
    // SAFETY: released exactly once, by the guard or right below.
    let restore = unsafe { critical_section::acquire() };
    if self.entered.replace(true) {
      // SAFETY: pairs with the acquire above.
      unsafe { critical_section::release(restore) };
      panic!("critical section cell entered re-entrantly");
    }
    CriticalSectionCellGuard { cell: self, restore, _not_send: PhantomData }
  }
}

impl<T> CriticalSection<T> for CriticalSectionCell<T> {
  type Guard<'a>
    = CriticalSectionCellGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    CriticalSectionCell::new(value)
  }

  fn into_inner(self) -> T {
    CriticalSectionCell::into_inner(self)
  }

  fn enter(&self) -> Self::Guard<'_> {
    CriticalSectionCell::enter(self)
  }
}

/// Guard returned by [`CriticalSectionCell::enter`]; leaves the critical section on drop.
pub struct CriticalSectionCellGuard<'a, T> {
  cell:      &'a CriticalSectionCell<T>,
  restore:   RestoreState,
  _not_send: PhantomData<*const ()>,
}

impl<T> Deref for CriticalSectionCellGuard<'_, T> {
  type Target = T;

  fn deref(&self) -> &T {
    // SAFETY: the guard is the only borrower while the critical section is held.
    unsafe { &*self.cell.value.get() }
  }
}

impl<T> DerefMut for CriticalSectionCellGuard<'_, T> {
  fn deref_mut(&mut self) -> &mut T {
    // SAFETY: the guard is the only borrower while the critical section is held.
    unsafe { &mut *self.cell.value.get() }
  }
}

impl<T> Drop for CriticalSectionCellGuard<'_, T> {
  fn drop(&mut self) {
    self.cell.entered.set(false);
    // SAFETY: pairs with the acquire in `CriticalSectionCell::enter`.
    unsafe { critical_section::release(self.restore) };
  }
}
