use contracts::domain::a006_complaint::aggregate::{
    Complaint, ComplaintDto, ComplaintStatusDto,
};
use uuid::Uuid;

use super::repository;
use crate::shared::{audit, error::CmsError};

fn parse_id(id: &str) -> Result<Uuid, CmsError> {
    Uuid::parse_str(id).map_err(|_| CmsError::Validation("invalid complaint id".into()))
}

/// Public form submission, no authentication
pub async fn submit(dto: ComplaintDto) -> Result<Uuid, CmsError> {
    let mut complaint = Complaint::new_for_insert(dto).map_err(CmsError::Validation)?;
    complaint.before_write();

    let id = repository::insert(&complaint).await?;
    audit::record("public", "complaint.submit", &id.to_string());
    Ok(id)
}

pub async fn set_status(dto: ComplaintStatusDto, actor: &str) -> Result<(), CmsError> {
    let id = parse_id(&dto.id)?;
    if !repository::set_status(id, dto.status).await? {
        return Err(CmsError::NotFound("complaint"));
    }
    audit::record(actor, "complaint.status", &dto.id);
    Ok(())
}

pub async fn delete(id: Option<&str>, actor: &str) -> Result<(), CmsError> {
    let id = id
        .ok_or_else(|| CmsError::Validation("invalid complaint id".into()))
        .and_then(parse_id)?;
    if !repository::soft_delete(id).await? {
        return Err(CmsError::NotFound("complaint"));
    }
    audit::record(actor, "complaint.delete", &id.to_string());
    Ok(())
}

pub async fn get_by_id(id: &str) -> Result<Complaint, CmsError> {
    let id = parse_id(id)?;
    repository::get_by_id(id)
        .await?
        .ok_or(CmsError::NotFound("complaint"))
}

pub async fn list_all() -> Result<Vec<Complaint>, CmsError> {
    Ok(repository::list_all().await?)
}
