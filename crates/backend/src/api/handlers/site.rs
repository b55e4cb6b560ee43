use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use contracts::domain::a006_complaint::aggregate::ComplaintDto;
use contracts::shared::navigation::{self, NavTree};
use serde_json::json;

use crate::domain::{a001_page, a002_service, a003_news, a004_tender, a005_career, a006_complaint};
use crate::shared::error::CmsError;

/// GET /api/site/pages/:slug
pub async fn page_by_slug(Path(slug): Path<String>) -> Result<Json<serde_json::Value>, CmsError> {
    let view = a001_page::service::compose_public(&slug).await?;
    Ok(Json(view))
}

/// GET /api/site/navigation
///
/// Resolved over the published pages plus the built-in routes; the same
/// input always yields the same tree.
pub async fn navigation() -> Result<Json<NavTree>, CmsError> {
    let pages: Vec<_> = a001_page::service::list_all()
        .await?
        .into_iter()
        .filter(|p| p.is_published)
        .collect();
    Ok(Json(navigation::resolve(&pages)))
}

/// GET /api/site/services
pub async fn services() -> Result<Json<serde_json::Value>, CmsError> {
    let services = a002_service::service::list_active().await?;
    Ok(Json(serde_json::to_value(services)?))
}

/// GET /api/site/news
pub async fn news() -> Result<Json<serde_json::Value>, CmsError> {
    let posts = a003_news::service::list_published().await?;
    Ok(Json(serde_json::to_value(posts)?))
}

/// GET /api/site/tenders (each entry carries its clock-derived status)
pub async fn tenders() -> Result<Json<serde_json::Value>, CmsError> {
    let now = Utc::now();
    let mut entries = Vec::new();
    for tender in a004_tender::service::list_all().await? {
        let mut entry = serde_json::to_value(&tender)?;
        entry["status"] = serde_json::to_value(tender.status_at(now))?;
        entries.push(entry);
    }
    Ok(Json(serde_json::Value::Array(entries)))
}

/// GET /api/site/careers
pub async fn careers() -> Result<Json<serde_json::Value>, CmsError> {
    let openings = a005_career::service::list_open().await?;
    Ok(Json(serde_json::to_value(openings)?))
}

/// POST /api/site/complaints (public, unauthenticated)
pub async fn submit_complaint(
    Json(dto): Json<ComplaintDto>,
) -> Result<(StatusCode, Json<serde_json::Value>), CmsError> {
    let id = a006_complaint::service::submit(dto).await?;
    Ok((StatusCode::CREATED, Json(json!({"id": id.to_string()}))))
}
