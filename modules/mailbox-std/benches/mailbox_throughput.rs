//! Mailbox throughput benchmark.
//!
//! Scenarios:
//! - single thread, non-blocking post/fetch pairs
//! - one producer thread and one consumer thread over capacities 1, 8 and 64

use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rtmbox_std_rs::{make_std_mailbox, StdMailbox, Timeout};

const MESSAGES: usize = 10_000;

/// Uncontended post/fetch cost.
fn bench_single_thread_round_trip(c: &mut Criterion) {
  let mut group = c.benchmark_group("single_thread_round_trip");
  group.throughput(Throughput::Elements(MESSAGES as u64));

  group.bench_function("try_post_try_fetch", |b| {
    let mailbox: StdMailbox<usize> = make_std_mailbox(1);
    b.iter(|| {
      for message in 0..MESSAGES {
        mailbox.try_post(message).ok();
        black_box(mailbox.try_fetch().ok());
      }
    });
  });

  group.finish();
}

/// Blocking handoff between two threads; small capacities force parking.
fn bench_producer_consumer(c: &mut Criterion) {
  let mut group = c.benchmark_group("producer_consumer");
  group.throughput(Throughput::Elements(MESSAGES as u64));

  for capacity in [1_usize, 8, 64] {
    group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &capacity| {
      let mailbox: StdMailbox<usize> = make_std_mailbox(capacity);
      let shared = &mailbox;
      b.iter(|| {
        thread::scope(|scope| {
          scope.spawn(move || {
            for message in 0..MESSAGES {
              shared.post_timeout(message, Timeout::Infinite).ok();
            }
          });
          let mut sum = 0_usize;
          for _ in 0..MESSAGES {
            sum = sum.wrapping_add(shared.fetch_timeout(Timeout::Infinite).unwrap_or_default());
          }
          black_box(sum);
        });
      });
    });
  }

  group.finish();
}

criterion_group!(benches, bench_single_thread_round_trip, bench_producer_consumer);
criterion_main!(benches);
