use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a003_news::aggregate::{NewsPost, NewsPostDto};
use serde_json::json;

use crate::domain::a003_news;
use crate::shared::error::CmsError;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/news
pub async fn list_all(CurrentUser(_claims): CurrentUser) -> Result<Json<Vec<NewsPost>>, CmsError> {
    let posts = a003_news::service::list_all().await?;
    Ok(Json(posts))
}

/// GET /api/news/:id
pub async fn get_by_id(
    CurrentUser(_claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<NewsPost>, CmsError> {
    let post = a003_news::service::get_by_id(Some(&id)).await?;
    Ok(Json(post))
}

/// POST /api/news (create or update depending on id presence)
pub async fn upsert(
    CurrentUser(claims): CurrentUser,
    Json(dto): Json<NewsPostDto>,
) -> Result<(StatusCode, Json<serde_json::Value>), CmsError> {
    if dto.id.is_some() {
        let id = dto.id.clone().unwrap_or_default();
        a003_news::service::update(dto, &claims.username).await?;
        Ok((StatusCode::OK, Json(json!({"id": id}))))
    } else {
        let id = a003_news::service::create(dto, &claims.username).await?;
        Ok((StatusCode::CREATED, Json(json!({"id": id.to_string()}))))
    }
}

/// DELETE /api/news/:id
pub async fn delete(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, CmsError> {
    a003_news::service::delete(Some(&id), &claims.username).await?;
    Ok(Json(json!({"success": true})))
}
