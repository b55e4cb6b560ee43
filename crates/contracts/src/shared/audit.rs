use serde::{Deserialize, Serialize};

/// One audit-log row: who did what on which record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: i64,
    pub timestamp: String,
    /// Username of the acting admin, or "system"
    pub actor: String,
    /// e.g. "page.create", "page.delete", "user.update"
    pub action: String,
    pub detail: String,
}
