use chrono::Utc;
use contracts::domain::a004_tender::aggregate::{Tender, TenderId};
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_tender")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub reference_no: String,
    pub title: String,
    pub description: String,
    pub opens_at: chrono::DateTime<chrono::Utc>,
    pub closes_at: chrono::DateTime<chrono::Utc>,
    pub document_path: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Tender {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Tender {
            id: TenderId(uuid),
            reference_no: m.reference_no,
            title: m.title,
            description: m.description,
            opens_at: m.opens_at,
            closes_at: m.closes_at,
            document_path: m.document_path,
            metadata,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn active_model(aggregate: &Tender) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        reference_no: Set(aggregate.reference_no.clone()),
        title: Set(aggregate.title.clone()),
        description: Set(aggregate.description.clone()),
        opens_at: Set(aggregate.opens_at),
        closes_at: Set(aggregate.closes_at),
        document_path: Set(aggregate.document_path.clone()),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Tender>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::OpensAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Tender>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Reference number collision check, optionally ignoring one tender.
///
/// Soft-deleted rows count as collisions: the reference_no column carries a
/// UNIQUE constraint, so a reused reference would otherwise pass the check
/// and then fail the insert.
pub async fn reference_exists(reference_no: &str, exclude_id: Option<Uuid>) -> anyhow::Result<bool> {
    let query = reference_query(reference_no, exclude_id);
    Ok(query.one(conn()).await?.is_some())
}

fn reference_query(reference_no: &str, exclude_id: Option<Uuid>) -> Select<Entity> {
    let mut query = Entity::find().filter(Column::ReferenceNo.eq(reference_no));
    if let Some(id) = exclude_id {
        query = query.filter(Column::Id.ne(id.to_string()));
    }
    query
}

pub async fn insert(aggregate: &Tender) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    active_model(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Tender) -> anyhow::Result<()> {
    let mut active = active_model(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn test_reference_check_counts_soft_deleted_rows() {
        // A deleted tender still occupies its reference_no (UNIQUE column),
        // so the collision query must not filter on is_deleted.
        let sql = reference_query("PT/2024/017", None)
            .build(DbBackend::Sqlite)
            .to_string();
        let where_clause = sql.split("WHERE").nth(1).expect("query has a filter");
        assert!(where_clause.contains("reference_no"));
        assert!(!where_clause.contains("is_deleted"));
    }

    #[test]
    fn test_reference_check_skips_the_tender_being_updated() {
        let id = Uuid::new_v4();
        let sql = reference_query("PT/2024/017", Some(id))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains(&id.to_string()));
    }
}
