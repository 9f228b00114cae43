//! Browser Adapters
//!
//! Implementations of the presentation boundary for a real page.

mod dialogs;
mod dom;
mod haptics;
mod scheduler;

pub use dialogs::HostDialogs;
pub use dom::{ids, DomHandle, DomPresentation};
pub use haptics::NavigatorHaptics;
pub use scheduler::TimeoutScheduler;
