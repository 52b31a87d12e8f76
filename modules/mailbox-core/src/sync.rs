#[allow(clippy::disallowed_types)]
mod arc_shared;
mod critical_section;

pub use arc_shared::ArcShared;
pub use critical_section::{CriticalSection, CriticalSectionGuard};
