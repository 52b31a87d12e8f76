use core::{
  future::Future,
  pin::Pin,
  task::{Context, Poll},
};

use super::node::WaitNode;
use crate::sync::ArcShared;

/// Owner side of a [`WaitNode`], returned when a caller registers on a [`ThreadsQueue`](super::ThreadsQueue).
///
/// Resolves to the wake result. Dropping the handle cancels the node if it is still pending.
pub struct WaitHandle<E: Copy> {
  node: ArcShared<WaitNode<E>>,
}

impl<E: Copy> WaitHandle<E> {
  /// Creates a wait handle bound to the supplied waiter node.
  #[must_use]
  pub fn new(node: ArcShared<WaitNode<E>>) -> Self {
    Self { node }
  }

  /// Polls the underlying node without requiring a pinned handle.
  pub fn poll_wake(&self, cx: &mut Context<'_>) -> Poll<Result<(), E>> {
    self.node.poll(cx)
  }

  /// Cancels the wait. Returns `false` when a wake result was delivered first.
  pub fn cancel(&self) -> bool {
    self.node.cancel()
  }

  /// Wake result, once delivered.
  #[must_use]
  pub fn result(&self) -> Option<Result<(), E>> {
    self.node.result()
  }

  /// Returns `true` while no wake result has been delivered and the wait is not cancelled.
  #[must_use]
  pub fn is_pending(&self) -> bool {
    self.node.is_pending()
  }

  pub(crate) fn is_bound_to(&self, node: &ArcShared<WaitNode<E>>) -> bool {
    ArcShared::ptr_eq(&self.node, node)
  }
}

impl<E: Copy> Future for WaitHandle<E> {
  type Output = Result<(), E>;

  fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
    self.node.poll(cx)
  }
}

impl<E: Copy> Drop for WaitHandle<E> {
  fn drop(&mut self) {
    self.node.cancel();
  }
}
