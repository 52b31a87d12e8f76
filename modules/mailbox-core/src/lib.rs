#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unreachable)]
#![deny(clippy::no_effect)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![no_std]

//! Runtime-agnostic mailbox primitives.
//!
//! A [`Mailbox`](mailbox::Mailbox) is a fixed-capacity circular buffer of word-sized messages. Producers
//! append with `post`, jump the queue with `post_ahead`, and consumers take from the front with `fetch`.
//! When the mailbox is full (or empty) the caller parks on a [`ThreadsQueue`](wait::ThreadsQueue) until
//! the opposite side frees a slot (or delivers a message), the timeout expires, or the mailbox is reset.
//!
//! The crate only depends on two host capabilities:
//!
//! - a [`CriticalSection`](sync::CriticalSection) guarding the mailbox state, and
//! - a [`Scheduler`](scheduler::Scheduler) that parks the calling context outside of that critical section.
//!
//! `rtmbox-std-rs` binds them to `std::sync::Mutex` and OS threads, `rtmbox-embedded-rs` to the
//! `critical-section` crate and a tick counter driven by a timer interrupt.

extern crate alloc;
#[cfg(test)]
extern crate std;

/// Mailbox ring, locked state and the blocking/non-blocking API.
pub mod mailbox;
/// Scheduler abstraction used to suspend a caller until it is woken or times out.
pub mod scheduler;
/// Critical section abstraction and shared ownership helpers.
pub mod sync;
/// Timeout and deadline types.
pub mod timing;
/// Wait-queue of parked callers.
pub mod wait;

pub use mailbox::{Mailbox, MailboxError, MailboxRing, MailboxState, MailboxStorage};
pub use scheduler::{Scheduler, SpinScheduler, TickSource};
pub use sync::{ArcShared, CriticalSection};
pub use timing::{Deadline, Timeout};
pub use wait::{ThreadsQueue, WaitHandle, WaitNode};
