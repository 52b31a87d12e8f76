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
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::no_effect)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone, clippy::panic))]

//! Mailbox bindings for std hosts.
//!
//! Binds the abstractions of `rtmbox_core_rs` to `std::sync::Mutex` (critical section) and to OS thread
//! parking (scheduler). Blocking calls park the calling thread; the async operations work with any
//! executor since wake-ups go through the registered [`core::task::Waker`].

mod std_critical_section;
mod std_mailbox;
mod thread_scheduler;

pub use rtmbox_core_rs::{Mailbox, MailboxError, MailboxState, Timeout};
pub use std_critical_section::{StdCriticalSection, StdCriticalSectionGuard};
pub use std_mailbox::{make_std_mailbox, make_std_mailbox_with_config, StdMailbox, StdMailboxState};
pub use thread_scheduler::{ThreadScheduler, ThreadSchedulerConfig, DEFAULT_TICK_PERIOD};

/// Prelude module that re-exports commonly used types.
pub mod prelude {
  pub use rtmbox_core_rs::{CriticalSection, Mailbox, MailboxError, Scheduler, Timeout};

  pub use crate::{make_std_mailbox, StdCriticalSection, StdMailbox, ThreadScheduler, ThreadSchedulerConfig};
}
