pub mod repository;

use repository::record_internal;

/// Record an audit event in the background.
///
/// Fire-and-forget: a failed insert is reported to the server log and
/// never fails the admin action that triggered it.
pub fn record(actor: &str, action: &str, detail: &str) {
    record_internal(actor, action, detail);
}

pub use repository::list_recent;
