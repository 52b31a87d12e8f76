use core::fmt;

/// Reasons a mailbox operation did not transfer a message.
///
/// Neither variant is a fault: both are ordinary flow-control outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MailboxError {
  /// No slot (post) or no message (fetch) became available within the timeout. The mailbox is unchanged.
  Timeout,
  /// The mailbox was reset before or during the call and stays unusable until resumed.
  Reset,
}

impl fmt::Display for MailboxError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Timeout => f.write_str("mailbox operation timed out"),
      | Self::Reset => f.write_str("mailbox has been reset"),
    }
  }
}

impl core::error::Error for MailboxError {}
