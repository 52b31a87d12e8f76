use alloc::{collections::VecDeque, vec, vec::Vec};
use core::{
  future::Future,
  pin::Pin,
  ptr,
  task::{Context, Poll, RawWaker, RawWakerVTable, Waker},
};

use proptest::{collection::vec as vec_of, prelude::*, sample::Index};

use super::{Mailbox, MailboxError};
use crate::scheduler::{SpinScheduler, TickSource};

struct FrozenClock;

impl TickSource for FrozenClock {
  fn now_ticks(&self) -> u64 {
    0
  }
}

type TestMailbox = Mailbox<usize, Vec<usize>, SpinScheduler<FrozenClock>>;

fn mailbox_with_capacity(capacity: usize) -> TestMailbox {
  Mailbox::new(vec![0; capacity], SpinScheduler::new(FrozenClock))
}

fn noop_waker() -> Waker {
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

  unsafe { Waker::from_raw(raw_waker()) }
}

fn poll_once<F: Future + Unpin>(future: &mut F) -> Poll<F::Output> {
  let waker = noop_waker();
  let mut context = Context::from_waker(&waker);
  Pin::new(future).poll(&mut context)
}

#[derive(Clone, Copy, Debug)]
enum Op {
  Post(usize),
  PostAhead(usize),
  Fetch,
  Reset,
  Resume,
}

fn op_strategy() -> impl Strategy<Value = Op> {
  prop_oneof![
    4 => any::<usize>().prop_map(Op::Post),
    2 => any::<usize>().prop_map(Op::PostAhead),
    4 => Just(Op::Fetch),
    1 => Just(Op::Reset),
    1 => Just(Op::Resume),
  ]
}

struct Producer<F> {
  sent:    usize,
  pending: Option<F>,
}

struct Consumer<F> {
  quota:   usize,
  pending: Option<F>,
}

proptest! {
  #[test]
  fn non_blocking_operations_follow_deque_model(
    capacity in 1_usize..8,
    ops in vec_of(op_strategy(), 0..96),
  ) {
    let mailbox = mailbox_with_capacity(capacity);
    let mut model: VecDeque<usize> = VecDeque::new();
    let mut reset = false;

    for op in ops {
      match op {
        | Op::Post(message) | Op::PostAhead(message) => {
          let expected = if reset {
            Err(MailboxError::Reset)
          } else if model.len() == capacity {
            Err(MailboxError::Timeout)
          } else {
            if matches!(op, Op::Post(_)) {
              model.push_back(message);
            } else {
              model.push_front(message);
            }
            Ok(())
          };
          let outcome = if matches!(op, Op::Post(_)) {
            mailbox.try_post(message)
          } else {
            mailbox.try_post_ahead(message)
          };
          prop_assert_eq!(outcome, expected);
        },
        | Op::Fetch => {
          let expected = if reset { Err(MailboxError::Reset) } else { model.pop_front().ok_or(MailboxError::Timeout) };
          prop_assert_eq!(mailbox.try_fetch(), expected);
        },
        | Op::Reset => {
          mailbox.reset();
          model.clear();
          reset = true;
        },
        | Op::Resume => {
          mailbox.resume();
          reset = false;
        },
      }

      let state = mailbox.enter();
      prop_assert!(state.used_count_i() <= capacity);
      prop_assert_eq!(state.used_count_i() + state.free_count_i(), capacity);
      prop_assert!(state.ring().head() < capacity && state.ring().tail() < capacity);
      prop_assert_eq!(state.ring().iter().collect::<Vec<_>>(), model.iter().copied().collect::<Vec<_>>());
    }
  }

  #[test]
  fn simulated_threads_deliver_every_message_once(
    capacity in 1_usize..4,
    producer_count in 1_usize..4,
    consumer_count in 1_usize..4,
    per_producer in 1_usize..6,
    schedule in vec_of(any::<Index>(), 0..256),
  ) {
    let mailbox = mailbox_with_capacity(capacity);
    let total = producer_count * per_producer;
    let threads = producer_count + consumer_count;

    let mut producers: Vec<Producer<_>> = (0..producer_count).map(|_| Producer { sent: 0, pending: None }).collect();
    let mut consumers: Vec<Consumer<_>> = (0..consumer_count)
      .map(|index| Consumer {
        quota:   total / consumer_count + usize::from(index < total % consumer_count),
        pending: None,
      })
      .collect();
    let mut log: Vec<usize> = Vec::new();
    let mut sent = 0;

    let mut step = |thread: usize| -> bool {
      if thread < producer_count {
        let producer = &mut producers[thread];
        if producer.pending.is_none() && producer.sent < per_producer {
          producer.pending = Some(mailbox.post(thread * 1000 + producer.sent));
        }
        if let Some(future) = producer.pending.as_mut() {
          if let Poll::Ready(outcome) = poll_once(future) {
            assert_eq!(outcome, Ok(()));
            producer.pending = None;
            producer.sent += 1;
            sent += 1;
          }
        }
      } else {
        let consumer = &mut consumers[thread - producer_count];
        if consumer.pending.is_none() && consumer.quota > 0 {
          consumer.pending = Some(mailbox.fetch());
        }
        if let Some(future) = consumer.pending.as_mut() {
          if let Poll::Ready(outcome) = poll_once(future) {
            let message = outcome.expect("mailbox is never reset here");
            consumer.pending = None;
            consumer.quota -= 1;
            log.push(message);
          }
        }
      }
      assert!(mailbox.used_count() <= capacity);
      sent == total && log.len() == total
    };

    for index in &schedule {
      step(index.index(threads));
    }
    let mut finished = false;
    for _ in 0..10_000 {
      if (0..threads).fold(false, |done, thread| step(thread) || done) {
        finished = true;
        break;
      }
    }
    prop_assert!(finished);

    let mut delivered = log.clone();
    delivered.sort_unstable();
    let mut expected: Vec<usize> =
      (0..producer_count).flat_map(|producer| (0..per_producer).map(move |seq| producer * 1000 + seq)).collect();
    expected.sort_unstable();
    prop_assert_eq!(delivered, expected);

    for producer in 0..producer_count {
      let order: Vec<usize> = log.iter().filter(|id| **id / 1000 == producer).map(|id| id % 1000).collect();
      prop_assert_eq!(order, (0..per_producer).collect::<Vec<_>>());
    }
    prop_assert_eq!(mailbox.used_count(), 0);
  }
}
