mod handle;
mod node;
mod threads_queue;

pub use handle::WaitHandle;
pub use node::WaitNode;
pub use threads_queue::ThreadsQueue;
