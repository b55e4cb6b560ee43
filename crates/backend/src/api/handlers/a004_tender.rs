use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a004_tender::aggregate::{Tender, TenderDto};
use serde_json::json;

use crate::domain::a004_tender;
use crate::shared::error::CmsError;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/tenders
pub async fn list_all(CurrentUser(_claims): CurrentUser) -> Result<Json<Vec<Tender>>, CmsError> {
    let tenders = a004_tender::service::list_all().await?;
    Ok(Json(tenders))
}

/// GET /api/tenders/:id
pub async fn get_by_id(
    CurrentUser(_claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Tender>, CmsError> {
    let tender = a004_tender::service::get_by_id(Some(&id)).await?;
    Ok(Json(tender))
}

/// POST /api/tenders (create or update depending on id presence)
pub async fn upsert(
    CurrentUser(claims): CurrentUser,
    Json(dto): Json<TenderDto>,
) -> Result<(StatusCode, Json<serde_json::Value>), CmsError> {
    if dto.id.is_some() {
        let id = dto.id.clone().unwrap_or_default();
        a004_tender::service::update(dto, &claims.username).await?;
        Ok((StatusCode::OK, Json(json!({"id": id}))))
    } else {
        let id = a004_tender::service::create(dto, &claims.username).await?;
        Ok((StatusCode::CREATED, Json(json!({"id": id.to_string()}))))
    }
}

/// DELETE /api/tenders/:id
pub async fn delete(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, CmsError> {
    a004_tender::service::delete(Some(&id), &claims.username).await?;
    Ok(Json(json!({"success": true})))
}
