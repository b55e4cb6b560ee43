use axum::extract::Path;
use axum::Json;
use contracts::domain::a006_complaint::aggregate::{Complaint, ComplaintStatusDto};
use serde_json::json;

use crate::domain::a006_complaint;
use crate::shared::error::CmsError;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/complaints (admin inbox, newest first)
pub async fn list_all(CurrentUser(_claims): CurrentUser) -> Result<Json<Vec<Complaint>>, CmsError> {
    let complaints = a006_complaint::service::list_all().await?;
    Ok(Json(complaints))
}

/// GET /api/complaints/:id
pub async fn get_by_id(
    CurrentUser(_claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Complaint>, CmsError> {
    let complaint = a006_complaint::service::get_by_id(&id).await?;
    Ok(Json(complaint))
}

/// POST /api/complaints/status
pub async fn set_status(
    CurrentUser(claims): CurrentUser,
    Json(dto): Json<ComplaintStatusDto>,
) -> Result<Json<serde_json::Value>, CmsError> {
    a006_complaint::service::set_status(dto, &claims.username).await?;
    Ok(Json(json!({"success": true})))
}

/// DELETE /api/complaints/:id
pub async fn delete(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, CmsError> {
    a006_complaint::service::delete(Some(&id), &claims.username).await?;
    Ok(Json(json!({"success": true})))
}
