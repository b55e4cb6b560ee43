use chrono::Utc;
use contracts::domain::a001_page::aggregate::{
    Page, PageId, Section, SectionContent, SectionId, SeoMeta,
};
use contracts::domain::common::EntityMetadata;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::shared::data::db::get_connection;

pub mod page_entity {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "a001_page")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub slug: String,
        pub title: String,
        pub is_published: bool,
        pub show_in_navbar: bool,
        pub nav_label: Option<String>,
        pub nav_group: Option<String>,
        pub created_at: Option<chrono::DateTime<chrono::Utc>>,
        pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
        pub version: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod section_entity {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "a001_page_section")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub page_id: String,
        pub sort_order: i32,
        /// Insertion sequence within the page, tie-break for equal sort_order
        pub seq: i32,
        /// Tagged JSON payload (`{"type": ..., "content": ...}`)
        pub content: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod seo_entity {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "a001_page_seo")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub page_id: String,
        pub title: Option<String>,
        pub description: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn assemble(
    model: page_entity::Model,
    sections: Vec<section_entity::Model>,
    seo: Option<seo_entity::Model>,
) -> anyhow::Result<Page> {
    let metadata = EntityMetadata {
        created_at: model.created_at.unwrap_or_else(Utc::now),
        updated_at: model.updated_at.unwrap_or_else(Utc::now),
        is_deleted: false,
        version: model.version,
    };
    let uuid = Uuid::parse_str(&model.id)?;

    let mut section_rows = sections;
    // render order: sort_order, insertion sequence breaks ties
    section_rows.sort_by_key(|s| (s.sort_order, s.seq));

    let mut sections = Vec::with_capacity(section_rows.len());
    for row in section_rows {
        let content: SectionContent = serde_json::from_str(&row.content)?;
        sections.push(Section {
            id: SectionId(Uuid::parse_str(&row.id)?),
            order: row.sort_order,
            content,
        });
    }

    Ok(Page {
        id: PageId(uuid),
        slug: model.slug,
        title: model.title,
        is_published: model.is_published,
        show_in_navbar: model.show_in_navbar,
        nav_label: model.nav_label,
        nav_group: model.nav_group,
        seo: seo.map(|s| SeoMeta {
            title: s.title,
            description: s.description,
        }),
        sections,
        metadata,
    })
}

/// All pages with nested sections and SEO, most recently updated first
pub async fn list_all() -> anyhow::Result<Vec<Page>> {
    let page_models = page_entity::Entity::find()
        .order_by_desc(page_entity::Column::UpdatedAt)
        .all(conn())
        .await?;

    let mut sections_by_page: HashMap<String, Vec<section_entity::Model>> = HashMap::new();
    for section in section_entity::Entity::find().all(conn()).await? {
        sections_by_page
            .entry(section.page_id.clone())
            .or_default()
            .push(section);
    }

    let mut seo_by_page: HashMap<String, seo_entity::Model> = HashMap::new();
    for seo in seo_entity::Entity::find().all(conn()).await? {
        seo_by_page.insert(seo.page_id.clone(), seo);
    }

    let mut pages = Vec::with_capacity(page_models.len());
    for model in page_models {
        let sections = sections_by_page.remove(&model.id).unwrap_or_default();
        let seo = seo_by_page.remove(&model.id);
        pages.push(assemble(model, sections, seo)?);
    }
    Ok(pages)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Page>> {
    let Some(model) = page_entity::Entity::find_by_id(id.to_string())
        .one(conn())
        .await?
    else {
        return Ok(None);
    };
    load_children(model).await.map(Some)
}

pub async fn get_by_slug(slug: &str) -> anyhow::Result<Option<Page>> {
    let Some(model) = page_entity::Entity::find()
        .filter(page_entity::Column::Slug.eq(slug))
        .one(conn())
        .await?
    else {
        return Ok(None);
    };
    load_children(model).await.map(Some)
}

async fn load_children(model: page_entity::Model) -> anyhow::Result<Page> {
    let sections = section_entity::Entity::find()
        .filter(section_entity::Column::PageId.eq(model.id.clone()))
        .all(conn())
        .await?;
    let seo = seo_entity::Entity::find_by_id(model.id.clone())
        .one(conn())
        .await?;
    assemble(model, sections, seo)
}

/// Uniqueness check; `exclude_id` skips the page being updated
pub async fn slug_exists(slug: &str, exclude_id: Option<Uuid>) -> anyhow::Result<bool> {
    let mut query = page_entity::Entity::find().filter(page_entity::Column::Slug.eq(slug));
    if let Some(id) = exclude_id {
        query = query.filter(page_entity::Column::Id.ne(id.to_string()));
    }
    Ok(query.one(conn()).await?.is_some())
}

fn page_active_model(page: &Page) -> page_entity::ActiveModel {
    page_entity::ActiveModel {
        id: Set(page.id.value().to_string()),
        slug: Set(page.slug.clone()),
        title: Set(page.title.clone()),
        is_published: Set(page.is_published),
        show_in_navbar: Set(page.show_in_navbar),
        nav_label: Set(page.nav_label.clone()),
        nav_group: Set(page.nav_group.clone()),
        created_at: Set(Some(page.metadata.created_at)),
        updated_at: Set(Some(page.metadata.updated_at)),
        version: Set(page.metadata.version),
    }
}

async fn insert_sections<C: ConnectionTrait>(
    txn: &C,
    page_id: &str,
    sections: &[Section],
) -> anyhow::Result<()> {
    for (seq, section) in sections.iter().enumerate() {
        let active = section_entity::ActiveModel {
            id: Set(section.id.value().to_string()),
            page_id: Set(page_id.to_string()),
            sort_order: Set(section.order),
            seq: Set(seq as i32),
            content: Set(serde_json::to_string(&section.content)?),
        };
        active.insert(txn).await?;
    }
    Ok(())
}

async fn upsert_seo<C: ConnectionTrait>(
    txn: &C,
    page_id: &str,
    seo: Option<&SeoMeta>,
) -> anyhow::Result<()> {
    seo_entity::Entity::delete_by_id(page_id.to_string())
        .exec(txn)
        .await?;
    if let Some(seo) = seo {
        let active = seo_entity::ActiveModel {
            page_id: Set(page_id.to_string()),
            title: Set(seo.title.clone()),
            description: Set(seo.description.clone()),
        };
        active.insert(txn).await?;
    }
    Ok(())
}

/// Persist a new page with its sections and SEO record as one transaction
pub async fn insert(page: &Page) -> anyhow::Result<()> {
    let txn = conn().begin().await?;
    let page_id = page.id.value().to_string();

    page_active_model(page).insert(&txn).await?;
    insert_sections(&txn, &page_id, &page.sections).await?;
    upsert_seo(&txn, &page_id, page.seo.as_ref()).await?;

    txn.commit().await?;
    Ok(())
}

/// Persist field changes; when `replace_sections` the whole previous
/// section set is dropped and the page's current set written in its place
pub async fn update(page: &Page, replace_sections: bool) -> anyhow::Result<()> {
    let txn = conn().begin().await?;
    let page_id = page.id.value().to_string();

    page_active_model(page).update(&txn).await?;

    if replace_sections {
        section_entity::Entity::delete_many()
            .filter(section_entity::Column::PageId.eq(page_id.clone()))
            .exec(&txn)
            .await?;
        insert_sections(&txn, &page_id, &page.sections).await?;
    }
    upsert_seo(&txn, &page_id, page.seo.as_ref()).await?;

    txn.commit().await?;
    Ok(())
}

/// Hard delete; cascades sections and SEO. Returns false when unknown.
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let txn = conn().begin().await?;
    let page_id = id.to_string();

    section_entity::Entity::delete_many()
        .filter(section_entity::Column::PageId.eq(page_id.clone()))
        .exec(&txn)
        .await?;
    seo_entity::Entity::delete_by_id(page_id.clone())
        .exec(&txn)
        .await?;
    let result = page_entity::Entity::delete_by_id(page_id).exec(&txn).await?;

    txn.commit().await?;
    Ok(result.rows_affected > 0)
}
