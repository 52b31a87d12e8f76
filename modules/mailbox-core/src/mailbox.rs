mod mailbox_error;
mod mailbox_impl;
mod mailbox_wait;
mod message;
mod ring;
mod state;
mod storage;

pub use mailbox_error::MailboxError;
pub use mailbox_impl::Mailbox;
pub use mailbox_wait::MailboxWait;
pub use ring::MailboxRing;
pub use state::MailboxState;
pub use storage::MailboxStorage;

#[cfg(test)]
mod tests;
