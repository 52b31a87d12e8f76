use core::{
  ptr,
  task::{RawWaker, RawWakerVTable, Waker},
};

fn raw_waker() -> RawWaker {
  fn clone(_: *const ()) -> RawWaker {
    raw_waker()
  }
  fn wake(_: *const ()) {}
  fn wake_by_ref(_: *const ()) {}
  fn drop(_: *const ()) {}
  static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, wake, wake_by_ref, drop);
  RawWaker::new(ptr::null(), &VTABLE)
}

/// Waker for pollers that spin instead of sleeping.
pub(crate) fn noop_waker() -> Waker {
  // SAFETY: every vtable entry ignores the data pointer, so a null pointer is valid.
  unsafe { Waker::from_raw(raw_waker()) }
}
