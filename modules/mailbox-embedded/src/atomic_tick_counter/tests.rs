use rtmbox_core_rs::TickSource;

use super::AtomicTickCounter;

#[test]
fn counts_ticks_and_catches_up() {
  let counter = AtomicTickCounter::new();
  assert_eq!(counter.now(), 0);

  counter.tick();
  counter.tick();
  counter.advance(10);
  assert_eq!(counter.now(), 12);
  assert_eq!((&counter).now_ticks(), 12);
}
