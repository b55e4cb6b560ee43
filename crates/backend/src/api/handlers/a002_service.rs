use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_service::aggregate::{UtilityService, UtilityServiceDto};
use serde_json::json;

use crate::domain::a002_service;
use crate::shared::error::CmsError;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/services
pub async fn list_all(
    CurrentUser(_claims): CurrentUser,
) -> Result<Json<Vec<UtilityService>>, CmsError> {
    let services = a002_service::service::list_all().await?;
    Ok(Json(services))
}

/// GET /api/services/:id
pub async fn get_by_id(
    CurrentUser(_claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<UtilityService>, CmsError> {
    let service = a002_service::service::get_by_id(Some(&id)).await?;
    Ok(Json(service))
}

/// POST /api/services (create or update depending on id presence)
pub async fn upsert(
    CurrentUser(claims): CurrentUser,
    Json(dto): Json<UtilityServiceDto>,
) -> Result<(StatusCode, Json<serde_json::Value>), CmsError> {
    if dto.id.is_some() {
        let id = dto.id.clone().unwrap_or_default();
        a002_service::service::update(dto, &claims.username).await?;
        Ok((StatusCode::OK, Json(json!({"id": id}))))
    } else {
        let id = a002_service::service::create(dto, &claims.username).await?;
        Ok((StatusCode::CREATED, Json(json!({"id": id.to_string()}))))
    }
}

/// DELETE /api/services/:id
pub async fn delete(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, CmsError> {
    a002_service::service::delete(Some(&id), &claims.username).await?;
    Ok(Json(json!({"success": true})))
}
