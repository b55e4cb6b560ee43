use contracts::domain::a001_page::aggregate::{Page, PageDto, SectionContent};
use contracts::shared::navigation::is_builtin_slug;
use serde_json::json;
use uuid::Uuid;

use super::repository;
use crate::domain::a002_service;
use crate::shared::{audit, cache, error::CmsError, sanitize};

fn parse_id(id: Option<&str>) -> Result<Uuid, CmsError> {
    id.and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| CmsError::Validation("invalid page id".into()))
}

/// Rich-text section bodies are sanitized before they enter the store
fn sanitize_sections(page: &mut Page) {
    for section in &mut page.sections {
        if let SectionContent::TextBlock(ref mut block) = section.content {
            block.body = sanitize::clean_html(&block.body);
        }
    }
}

/// Create a page with its sections and SEO record.
///
/// Fails with `Validation` on a missing/short title, `DuplicateSlug` when
/// the computed slug collides with an existing page.
pub async fn create(dto: PageDto, actor: &str) -> Result<Page, CmsError> {
    let mut page = Page::new_for_insert(dto).map_err(CmsError::Validation)?;
    sanitize_sections(&mut page);

    if repository::slug_exists(&page.slug, None).await? {
        return Err(CmsError::DuplicateSlug(page.slug));
    }

    page.before_write();
    repository::insert(&page).await?;

    cache::invalidate_for_mutation(&page.slug, None);
    audit::record(actor, "page.create", &page.slug);

    repository::get_by_id(page.id.value())
        .await?
        .ok_or(CmsError::NotFound("page"))
}

/// Partial update. A `sections` array in the DTO replaces the entire
/// previous section set (fresh ids, last writer wins).
pub async fn update(dto: PageDto, actor: &str) -> Result<Page, CmsError> {
    let id = parse_id(dto.id.as_deref())?;

    let mut page = repository::get_by_id(id)
        .await?
        .ok_or(CmsError::NotFound("page"))?;
    let old_slug = page.slug.clone();

    // Built-in routes have a fixed navigation placement. An attempt to move
    // or hide one is rejected outright rather than silently dropped.
    if is_builtin_slug(&old_slug) {
        let moves_bucket = dto
            .nav_group
            .as_deref()
            .map(|g| {
                let normalized = g.trim();
                page.nav_group.as_deref().unwrap_or("") != normalized
            })
            .unwrap_or(false);
        let hides = dto
            .show_in_navbar
            .map(|v| v != page.show_in_navbar)
            .unwrap_or(false);
        if moves_bucket || hides {
            return Err(CmsError::Validation(format!(
                "route '{}' is locked and cannot be moved or hidden",
                old_slug
            )));
        }
    }

    let replace_sections = dto.sections.is_some();
    page.apply(dto).map_err(CmsError::Validation)?;
    sanitize_sections(&mut page);

    if page.slug != old_slug && repository::slug_exists(&page.slug, Some(id)).await? {
        return Err(CmsError::DuplicateSlug(page.slug));
    }

    page.before_write();
    repository::update(&page, replace_sections).await?;

    cache::invalidate_for_mutation(&old_slug, Some(&page.slug));
    audit::record(actor, "page.update", &page.slug);

    repository::get_by_id(id)
        .await?
        .ok_or(CmsError::NotFound("page"))
}

/// Hard delete, cascading sections and SEO
pub async fn delete(id: Option<&str>, actor: &str) -> Result<(), CmsError> {
    let id = parse_id(id)?;

    let page = repository::get_by_id(id)
        .await?
        .ok_or(CmsError::NotFound("page"))?;

    if !repository::delete(id).await? {
        return Err(CmsError::NotFound("page"));
    }

    cache::invalidate_for_mutation(&page.slug, None);
    audit::record(actor, "page.delete", &page.slug);
    Ok(())
}

pub async fn get_by_id(id: Option<&str>) -> Result<Page, CmsError> {
    let id = parse_id(id)?;
    repository::get_by_id(id)
        .await?
        .ok_or(CmsError::NotFound("page"))
}

/// Admin listing, most recently updated first
pub async fn list_all() -> Result<Vec<Page>, CmsError> {
    Ok(repository::list_all().await?)
}

/// Compose a published page for public rendering, serving the snapshot
/// cache when warm. Dynamic SERVICES sections hydrate from the live
/// catalogue; other dynamic types render from their own public endpoints.
pub async fn compose_public(slug: &str) -> Result<serde_json::Value, CmsError> {
    if let Some(snapshot) = cache::get(slug) {
        return Ok(snapshot);
    }

    let page = repository::get_by_slug(slug)
        .await?
        .filter(|p| p.is_published)
        .ok_or(CmsError::NotFound("page"))?;

    let mut sections = Vec::with_capacity(page.sections.len());
    for section in page.ordered_sections() {
        let mut entry = serde_json::to_value(section)?;
        if section.content == SectionContent::Services {
            let services = a002_service::service::list_active().await?;
            entry["data"] = serde_json::to_value(services)?;
        }
        sections.push(entry);
    }

    let view = json!({
        "slug": page.slug,
        "title": page.title,
        "seo": page.seo,
        "sections": sections,
    });

    cache::put(slug, view.clone());
    Ok(view)
}
