pub mod session_context;
pub mod use_entries;
pub mod use_mounted;

pub use session_context::{use_session, SessionHandle, SessionProvider};
pub use use_entries::{use_entries, DashboardKeys, UseEntriesHandle};
pub use use_mounted::use_mounted;
