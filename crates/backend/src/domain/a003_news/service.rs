use contracts::domain::a003_news::aggregate::{NewsPost, NewsPostDto};
use uuid::Uuid;

use super::repository;
use crate::shared::{audit, error::CmsError, sanitize};

fn parse_id(id: Option<&str>) -> Result<Uuid, CmsError> {
    id.and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| CmsError::Validation("invalid news post id".into()))
}

pub async fn create(mut dto: NewsPostDto, actor: &str) -> Result<Uuid, CmsError> {
    dto.body = sanitize::clean_html(&dto.body);
    let mut post = NewsPost::new_for_insert(dto).map_err(CmsError::Validation)?;
    post.before_write();

    let id = repository::insert(&post).await?;
    audit::record(actor, "news.create", &post.headline);
    Ok(id)
}

pub async fn update(mut dto: NewsPostDto, actor: &str) -> Result<(), CmsError> {
    let id = parse_id(dto.id.as_deref())?;
    dto.body = sanitize::clean_html(&dto.body);

    let mut post = repository::get_by_id(id)
        .await?
        .ok_or(CmsError::NotFound("news post"))?;
    post.update(dto).map_err(CmsError::Validation)?;
    post.before_write();

    repository::update(&post).await?;
    audit::record(actor, "news.update", &post.headline);
    Ok(())
}

pub async fn delete(id: Option<&str>, actor: &str) -> Result<(), CmsError> {
    let id = parse_id(id)?;
    if !repository::soft_delete(id).await? {
        return Err(CmsError::NotFound("news post"));
    }
    audit::record(actor, "news.delete", &id.to_string());
    Ok(())
}

pub async fn get_by_id(id: Option<&str>) -> Result<NewsPost, CmsError> {
    let id = parse_id(id)?;
    repository::get_by_id(id)
        .await?
        .ok_or(CmsError::NotFound("news post"))
}

pub async fn list_all() -> Result<Vec<NewsPost>, CmsError> {
    Ok(repository::list_all().await?)
}

pub async fn list_published() -> Result<Vec<NewsPost>, CmsError> {
    Ok(repository::list_published().await?)
}
