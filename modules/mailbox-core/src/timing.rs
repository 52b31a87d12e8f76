mod deadline;
mod timeout;

pub use deadline::Deadline;
pub use timeout::{Timeout, TIME_IMMEDIATE, TIME_INFINITE};
