use contracts::domain::a002_service::aggregate::{UtilityService, UtilityServiceDto};
use uuid::Uuid;

use super::repository;
use crate::shared::{audit, error::CmsError, sanitize};

fn parse_id(id: Option<&str>) -> Result<Uuid, CmsError> {
    id.and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| CmsError::Validation("invalid service id".into()))
}

pub async fn create(mut dto: UtilityServiceDto, actor: &str) -> Result<Uuid, CmsError> {
    dto.body = dto.body.map(|b| sanitize::clean_html(&b));
    let mut aggregate = UtilityService::new_for_insert(dto).map_err(CmsError::Validation)?;
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    audit::record(actor, "service.create", &aggregate.name);
    Ok(id)
}

pub async fn update(mut dto: UtilityServiceDto, actor: &str) -> Result<(), CmsError> {
    let id = parse_id(dto.id.as_deref())?;
    dto.body = dto.body.map(|b| sanitize::clean_html(&b));

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(CmsError::NotFound("service"))?;
    aggregate.update(dto).map_err(CmsError::Validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    audit::record(actor, "service.update", &aggregate.name);
    Ok(())
}

pub async fn delete(id: Option<&str>, actor: &str) -> Result<(), CmsError> {
    let id = parse_id(id)?;
    if !repository::soft_delete(id).await? {
        return Err(CmsError::NotFound("service"));
    }
    audit::record(actor, "service.delete", &id.to_string());
    Ok(())
}

pub async fn get_by_id(id: Option<&str>) -> Result<UtilityService, CmsError> {
    let id = parse_id(id)?;
    repository::get_by_id(id)
        .await?
        .ok_or(CmsError::NotFound("service"))
}

pub async fn list_all() -> Result<Vec<UtilityService>, CmsError> {
    Ok(repository::list_all().await?)
}

/// Active catalogue entries, for the public endpoint and SERVICES sections
pub async fn list_active() -> Result<Vec<UtilityService>, CmsError> {
    Ok(repository::list_active().await?)
}
