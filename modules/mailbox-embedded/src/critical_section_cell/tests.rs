extern crate std;

use std::thread;

use rtmbox_core_rs::CriticalSection;

use super::CriticalSectionCell;
use crate::tests::init_critical_section;

#[test]
fn guard_gives_exclusive_access() {
  init_critical_section();
  let cell = CriticalSectionCell::new([0_u8; 4]);

  {
    let mut guard = cell.enter();
    guard[1] = 7;
  }
  assert_eq!(cell.enter()[1], 7);
  assert_eq!(cell.into_inner(), [0, 7, 0, 0]);
}

#[test]
fn serializes_concurrent_contexts() {
  init_critical_section();
  let cell = CriticalSectionCell::new(0_u32);

  thread::scope(|scope| {
    for _ in 0..4 {
      scope.spawn(|| {
        for _ in 0..500 {
          *cell.enter() += 1;
        }
      });
    }
  });

  assert_eq!(cell.into_inner(), 2_000);
}

#[test]
fn usable_through_the_critical_section_trait() {
  init_critical_section();
  let cell = <CriticalSectionCell<u16> as CriticalSection<u16>>::new(3);
  *CriticalSection::enter(&cell) *= 5;
  assert_eq!(CriticalSection::into_inner(cell), 15);
}
