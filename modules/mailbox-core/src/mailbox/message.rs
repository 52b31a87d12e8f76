use core::{marker::PhantomData, mem::size_of};

/// Compile-time check that a message type fits in a machine word.
pub(crate) struct WordSized<M>(PhantomData<M>);

impl<M> WordSized<M> {
  pub(crate) const ASSERT: () =
    assert!(size_of::<M>() <= size_of::<usize>(), "mailbox messages must not be larger than a machine word");
}
