use axum::extract::Query;
use axum::Json;
use contracts::shared::audit::AuditEntry;
use serde::Deserialize;

use crate::shared::audit;
use crate::shared::error::CmsError;
use crate::system::auth::extractor::CurrentUser;

const DEFAULT_LIMIT: u64 = 200;

#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    pub limit: Option<u64>,
}

/// GET /api/system/audit (admin only)
pub async fn list_recent(
    CurrentUser(_claims): CurrentUser,
    Query(query): Query<AuditQuery>,
) -> Result<Json<Vec<AuditEntry>>, CmsError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(1000);
    let entries = audit::list_recent(limit).await?;
    Ok(Json(entries))
}
