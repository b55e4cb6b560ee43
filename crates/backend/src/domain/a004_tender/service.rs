use contracts::domain::a004_tender::aggregate::{Tender, TenderDto};
use uuid::Uuid;

use super::repository;
use crate::shared::{audit, error::CmsError, sanitize};

fn parse_id(id: Option<&str>) -> Result<Uuid, CmsError> {
    id.and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| CmsError::Validation("invalid tender id".into()))
}

pub async fn create(mut dto: TenderDto, actor: &str) -> Result<Uuid, CmsError> {
    dto.description = sanitize::clean_html(&dto.description);
    let mut tender = Tender::new_for_insert(dto).map_err(CmsError::Validation)?;

    if repository::reference_exists(&tender.reference_no, None).await? {
        return Err(CmsError::Validation(format!(
            "tender reference '{}' is already in use",
            tender.reference_no
        )));
    }
    tender.before_write();

    let id = repository::insert(&tender).await?;
    audit::record(actor, "tender.create", &tender.reference_no);
    Ok(id)
}

pub async fn update(mut dto: TenderDto, actor: &str) -> Result<(), CmsError> {
    let id = parse_id(dto.id.as_deref())?;
    dto.description = sanitize::clean_html(&dto.description);

    let mut tender = repository::get_by_id(id)
        .await?
        .ok_or(CmsError::NotFound("tender"))?;
    tender.update(dto).map_err(CmsError::Validation)?;

    if repository::reference_exists(&tender.reference_no, Some(id)).await? {
        return Err(CmsError::Validation(format!(
            "tender reference '{}' is already in use",
            tender.reference_no
        )));
    }
    tender.before_write();

    repository::update(&tender).await?;
    audit::record(actor, "tender.update", &tender.reference_no);
    Ok(())
}

pub async fn delete(id: Option<&str>, actor: &str) -> Result<(), CmsError> {
    let id = parse_id(id)?;
    if !repository::soft_delete(id).await? {
        return Err(CmsError::NotFound("tender"));
    }
    audit::record(actor, "tender.delete", &id.to_string());
    Ok(())
}

pub async fn get_by_id(id: Option<&str>) -> Result<Tender, CmsError> {
    let id = parse_id(id)?;
    repository::get_by_id(id)
        .await?
        .ok_or(CmsError::NotFound("tender"))
}

pub async fn list_all() -> Result<Vec<Tender>, CmsError> {
    Ok(repository::list_all().await?)
}
