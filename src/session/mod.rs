// ABOUTME: Session module: locating the active log file and appending records to it.
// ABOUTME: The session pointer names the log file; the log itself is append-only text.

pub mod log;
pub mod pointer;

pub use log::append_to_log;
pub use pointer::{DEFAULT_POINTER_FILE, SessionPointer};
