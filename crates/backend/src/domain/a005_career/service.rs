use chrono::Utc;
use contracts::domain::a005_career::aggregate::{CareerOpening, CareerOpeningDto};
use uuid::Uuid;

use super::repository;
use crate::shared::{audit, error::CmsError, sanitize};

fn parse_id(id: Option<&str>) -> Result<Uuid, CmsError> {
    id.and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| CmsError::Validation("invalid career opening id".into()))
}

pub async fn create(mut dto: CareerOpeningDto, actor: &str) -> Result<Uuid, CmsError> {
    dto.description = sanitize::clean_html(&dto.description);
    let mut opening = CareerOpening::new_for_insert(dto).map_err(CmsError::Validation)?;
    opening.before_write();

    let id = repository::insert(&opening).await?;
    audit::record(actor, "career.create", &opening.title);
    Ok(id)
}

pub async fn update(mut dto: CareerOpeningDto, actor: &str) -> Result<(), CmsError> {
    let id = parse_id(dto.id.as_deref())?;
    dto.description = sanitize::clean_html(&dto.description);

    let mut opening = repository::get_by_id(id)
        .await?
        .ok_or(CmsError::NotFound("career opening"))?;
    opening.update(dto).map_err(CmsError::Validation)?;
    opening.before_write();

    repository::update(&opening).await?;
    audit::record(actor, "career.update", &opening.title);
    Ok(())
}

pub async fn delete(id: Option<&str>, actor: &str) -> Result<(), CmsError> {
    let id = parse_id(id)?;
    if !repository::soft_delete(id).await? {
        return Err(CmsError::NotFound("career opening"));
    }
    audit::record(actor, "career.delete", &id.to_string());
    Ok(())
}

pub async fn get_by_id(id: Option<&str>) -> Result<CareerOpening, CmsError> {
    let id = parse_id(id)?;
    repository::get_by_id(id)
        .await?
        .ok_or(CmsError::NotFound("career opening"))
}

pub async fn list_all() -> Result<Vec<CareerOpening>, CmsError> {
    Ok(repository::list_all().await?)
}

/// Openings currently accepting applications
pub async fn list_open() -> Result<Vec<CareerOpening>, CmsError> {
    let now = Utc::now();
    let openings = repository::list_all()
        .await?
        .into_iter()
        .filter(|o| o.accepts_applications_at(now))
        .collect();
    Ok(openings)
}
