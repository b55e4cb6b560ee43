use chrono::Utc;
use contracts::domain::a006_complaint::aggregate::{
    Complaint, ComplaintCategory, ComplaintId, ComplaintStatus,
};
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a006_complaint")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub consumer_no: Option<String>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub category: String,
    pub message: String,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn category_to_str(category: ComplaintCategory) -> &'static str {
    match category {
        ComplaintCategory::Complaint => "COMPLAINT",
        ComplaintCategory::NewConnection => "NEW_CONNECTION",
    }
}

fn category_from_str(s: &str) -> ComplaintCategory {
    match s {
        "NEW_CONNECTION" => ComplaintCategory::NewConnection,
        _ => ComplaintCategory::Complaint,
    }
}

fn status_to_str(status: ComplaintStatus) -> &'static str {
    match status {
        ComplaintStatus::Received => "RECEIVED",
        ComplaintStatus::InProgress => "IN_PROGRESS",
        ComplaintStatus::Resolved => "RESOLVED",
    }
}

fn status_from_str(s: &str) -> ComplaintStatus {
    match s {
        "IN_PROGRESS" => ComplaintStatus::InProgress,
        "RESOLVED" => ComplaintStatus::Resolved,
        _ => ComplaintStatus::Received,
    }
}

impl From<Model> for Complaint {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Complaint {
            id: ComplaintId(uuid),
            consumer_no: m.consumer_no,
            name: m.name,
            phone: m.phone,
            email: m.email,
            category: category_from_str(&m.category),
            message: m.message,
            status: status_from_str(&m.status),
            metadata,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn active_model(aggregate: &Complaint) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        consumer_no: Set(aggregate.consumer_no.clone()),
        name: Set(aggregate.name.clone()),
        phone: Set(aggregate.phone.clone()),
        email: Set(aggregate.email.clone()),
        category: Set(category_to_str(aggregate.category).to_string()),
        message: Set(aggregate.message.clone()),
        status: Set(status_to_str(aggregate.status).to_string()),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Complaint>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Complaint>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Complaint) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    active_model(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn set_status(id: Uuid, status: ComplaintStatus) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::Status, Expr::value(status_to_str(status)))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
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

    #[test]
    fn test_category_round_trip() {
        for category in [ComplaintCategory::Complaint, ComplaintCategory::NewConnection] {
            assert_eq!(category_from_str(category_to_str(category)), category);
        }
    }

    #[test]
    fn test_unknown_status_defaults_to_received() {
        assert_eq!(status_from_str("UNKNOWN"), ComplaintStatus::Received);
    }
}
