use core::sync::atomic::{AtomicBool, Ordering};

use critical_section::{Impl, RawRestoreState};

struct TestCriticalSection;

static CS_LOCK: AtomicBool = AtomicBool::new(false);
static CS_INIT: AtomicBool = AtomicBool::new(false);

// SAFETY: a global spin lock excludes every other context between acquire and release.
unsafe impl Impl for TestCriticalSection {
  unsafe fn acquire() -> RawRestoreState {
    while CS_LOCK.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_err() {
      core::hint::spin_loop();
    }
  }

  unsafe fn release(_: RawRestoreState) {
    CS_LOCK.store(false, Ordering::SeqCst);
  }
}

pub(crate) fn init_critical_section() {
  if CS_INIT.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_ok() {
    critical_section::set_impl!(TestCriticalSection);
  }
}
