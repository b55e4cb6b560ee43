use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_page::aggregate::{Page, PageDto};
use serde::Deserialize;
use serde_json::json;

use crate::domain::a001_page;
use crate::shared::error::CmsError;
use crate::system::auth::extractor::CurrentUser;

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub id: String,
}

/// GET /api/pages
pub async fn list_all(_user: CurrentUser) -> Result<Json<Vec<Page>>, CmsError> {
    let pages = a001_page::service::list_all().await?;
    Ok(Json(pages))
}

/// GET /api/pages/:id
pub async fn get_by_id(
    _user: CurrentUser,
    axum::extract::Path(id): axum::extract::Path<String>,
) -> Result<Json<Page>, CmsError> {
    let page = a001_page::service::get_by_id(Some(&id)).await?;
    Ok(Json(page))
}

/// POST /api/pages
pub async fn create(
    user: CurrentUser,
    Json(dto): Json<PageDto>,
) -> Result<(StatusCode, Json<Page>), CmsError> {
    let page = a001_page::service::create(dto, user.actor()).await?;
    Ok((StatusCode::CREATED, Json(page)))
}

/// PATCH /api/pages (body carries the id)
pub async fn update(
    user: CurrentUser,
    Json(dto): Json<PageDto>,
) -> Result<Json<Page>, CmsError> {
    let page = a001_page::service::update(dto, user.actor()).await?;
    Ok(Json(page))
}

/// DELETE /api/pages (body: {"id": ...})
pub async fn delete(
    user: CurrentUser,
    Json(request): Json<DeleteRequest>,
) -> Result<Json<serde_json::Value>, CmsError> {
    a001_page::service::delete(Some(&request.id), user.actor()).await?;
    Ok(Json(json!({"success": true})))
}
