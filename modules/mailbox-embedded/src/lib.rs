#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![no_std]

//! Mailbox bindings for embedded targets.
//!
//! The mailbox state is guarded by the `critical-section` crate (interrupt masking on single-core
//! targets), callers spin on an [`AtomicTickCounter`] advanced from a timer interrupt, and mailboxes with
//! inline storage can be declared as `static` items.

mod atomic_tick_counter;
mod critical_section_cell;
mod embedded_mailbox;

#[cfg(test)]
mod tests;

pub use atomic_tick_counter::AtomicTickCounter;
pub use critical_section_cell::{CriticalSectionCell, CriticalSectionCellGuard};
pub use embedded_mailbox::{make_embedded_mailbox, EmbeddedMailbox};
pub use rtmbox_core_rs::{Mailbox, MailboxError, SpinScheduler, Timeout};
