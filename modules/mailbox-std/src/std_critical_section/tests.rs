use std::{sync::Arc, thread};

use super::StdCriticalSection;

#[test]
fn serializes_updates_from_many_threads() {
  let section = StdCriticalSection::new(0_usize);

  thread::scope(|scope| {
    for _ in 0..4 {
      scope.spawn(|| {
        for _ in 0..1_000 {
          *section.enter() += 1;
        }
      });
    }
  });

  assert_eq!(section.into_inner(), 4_000);
}

#[test]
fn recovers_from_poisoned_lock() {
  let section = Arc::new(StdCriticalSection::new(vec![1_u32]));
  let poisoner = Arc::clone(&section);

  let outcome = thread::spawn(move || {
    let mut guard = poisoner.enter();
    guard.push(2);
    panic!("poison the lock");
  })
  .join();
  assert!(outcome.is_err());

  section.enter().push(3);
  let section = Arc::try_unwrap(section).ok().expect("last reference");
  assert_eq!(section.into_inner(), vec![1, 2, 3]);
}
