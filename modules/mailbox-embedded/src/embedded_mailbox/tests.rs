extern crate std;

use std::{thread, time::Duration};

use rtmbox_core_rs::{MailboxError, Timeout};

use super::{make_embedded_mailbox, EmbeddedMailbox};
use crate::{tests::init_critical_section, AtomicTickCounter};

#[test]
fn static_mailbox_accepts_isr_posts() {
  static TICKS: AtomicTickCounter = AtomicTickCounter::new();
  static EVENTS: EmbeddedMailbox<u32, [u32; 3], &AtomicTickCounter> = make_embedded_mailbox([0; 3], &TICKS);
  init_critical_section();

  assert_eq!(EVENTS.try_post(1), Ok(()));
  assert_eq!(EVENTS.try_post(2), Ok(()));
  assert_eq!(EVENTS.try_post_ahead(0), Ok(()));
  assert_eq!(EVENTS.try_post(3), Err(MailboxError::Timeout));

  assert_eq!(EVENTS.size(), 3);
  assert_eq!(EVENTS.peek(), Some(0));
  assert_eq!(EVENTS.fetch_timeout(Timeout::Immediate), Ok(0));
  assert_eq!(EVENTS.fetch_timeout(Timeout::Immediate), Ok(1));
  assert_eq!(EVENTS.fetch_timeout(Timeout::Immediate), Ok(2));
  assert_eq!(EVENTS.try_fetch(), Err(MailboxError::Timeout));
}

#[test]
fn fetch_times_out_when_timer_interrupt_advances_ticks() {
  static TICKS: AtomicTickCounter = AtomicTickCounter::new();
  static EVENTS: EmbeddedMailbox<u8, [u8; 1], &AtomicTickCounter> = make_embedded_mailbox([0; 1], &TICKS);
  init_critical_section();

  thread::scope(|scope| {
    scope.spawn(|| {
      for _ in 0..20 {
        thread::sleep(Duration::from_millis(1));
        TICKS.tick();
      }
    });
    assert_eq!(EVENTS.fetch_timeout(Timeout::Ticks(5)), Err(MailboxError::Timeout));
  });

  assert!(TICKS.now() >= 5);
  assert_eq!(EVENTS.enter().waiting_consumers(), 0);
}

#[test]
fn spinning_consumer_receives_message_from_interrupt_context() {
  static TICKS: AtomicTickCounter = AtomicTickCounter::new();
  static EVENTS: EmbeddedMailbox<u16, [u16; 2], &AtomicTickCounter> = make_embedded_mailbox([0; 2], &TICKS);
  init_critical_section();

  thread::scope(|scope| {
    scope.spawn(|| {
      while EVENTS.enter().waiting_consumers() == 0 {
        thread::yield_now();
      }
      EVENTS.try_post(0x5a5a).unwrap();
    });
    assert_eq!(EVENTS.fetch_timeout(Timeout::Infinite), Ok(0x5a5a));
  });
}

#[test]
fn reset_from_interrupt_releases_spinning_producer() {
  static TICKS: AtomicTickCounter = AtomicTickCounter::new();
  static EVENTS: EmbeddedMailbox<u8, [u8; 1], &AtomicTickCounter> = make_embedded_mailbox([0; 1], &TICKS);
  init_critical_section();

  EVENTS.try_post(1).unwrap();
  thread::scope(|scope| {
    scope.spawn(|| {
      while EVENTS.enter().waiting_producers() == 0 {
        thread::yield_now();
      }
      assert_eq!(EVENTS.enter().reset_i(), 1);
    });
    assert_eq!(EVENTS.post_timeout(2, Timeout::Infinite), Err(MailboxError::Reset));
  });

  assert!(EVENTS.is_reset());
  EVENTS.resume();
  assert_eq!(EVENTS.free_count(), 1);
}

#[test]
fn async_fetch_completes_under_block_on() {
  static TICKS: AtomicTickCounter = AtomicTickCounter::new();
  static EVENTS: EmbeddedMailbox<u32, [u32; 2], &AtomicTickCounter> = make_embedded_mailbox([0; 2], &TICKS);
  init_critical_section();

  thread::scope(|scope| {
    scope.spawn(|| {
      while EVENTS.enter().waiting_consumers() == 0 {
        thread::yield_now();
      }
      EVENTS.try_post(42).unwrap();
    });
    assert_eq!(embassy_futures::block_on(EVENTS.fetch()), Ok(42));
  });

  embassy_futures::block_on(async {
    EVENTS.post_ahead(2).await.unwrap();
    EVENTS.post_ahead(1).await.unwrap();
    assert_eq!(EVENTS.fetch().await, Ok(1));
    assert_eq!(EVENTS.fetch().await, Ok(2));
  });
}
