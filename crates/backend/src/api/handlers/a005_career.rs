use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a005_career::aggregate::{CareerOpening, CareerOpeningDto};
use serde_json::json;

use crate::domain::a005_career;
use crate::shared::error::CmsError;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/careers
pub async fn list_all(
    CurrentUser(_claims): CurrentUser,
) -> Result<Json<Vec<CareerOpening>>, CmsError> {
    let openings = a005_career::service::list_all().await?;
    Ok(Json(openings))
}

/// GET /api/careers/:id
pub async fn get_by_id(
    CurrentUser(_claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<CareerOpening>, CmsError> {
    let opening = a005_career::service::get_by_id(Some(&id)).await?;
    Ok(Json(opening))
}

/// POST /api/careers (create or update depending on id presence)
pub async fn upsert(
    CurrentUser(claims): CurrentUser,
    Json(dto): Json<CareerOpeningDto>,
) -> Result<(StatusCode, Json<serde_json::Value>), CmsError> {
    if dto.id.is_some() {
        let id = dto.id.clone().unwrap_or_default();
        a005_career::service::update(dto, &claims.username).await?;
        Ok((StatusCode::OK, Json(json!({"id": id}))))
    } else {
        let id = a005_career::service::create(dto, &claims.username).await?;
        Ok((StatusCode::CREATED, Json(json!({"id": id.to_string()}))))
    }
}

/// DELETE /api/careers/:id
pub async fn delete(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, CmsError> {
    a005_career::service::delete(Some(&id), &claims.username).await?;
    Ok(Json(json!({"success": true})))
}
