use chrono::Utc;
use contracts::shared::audit::AuditEntry;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sys_audit_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub timestamp: String,
    pub actor: String,
    pub action: String,
    pub detail: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AuditEntry {
    fn from(m: Model) -> Self {
        AuditEntry {
            id: m.id,
            timestamp: m.timestamp,
            actor: m.actor,
            action: m.action,
            detail: m.detail,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Spawn the insert so the calling mutation never waits on the audit log
pub fn record_internal(actor: &str, action: &str, detail: &str) {
    let actor = actor.to_string();
    let action = action.to_string();
    let detail = detail.to_string();

    tokio::spawn(async move {
        if let Err(e) = insert(&actor, &action, &detail).await {
            tracing::warn!("failed to record audit event '{}': {}", action, e);
        }
    });
}

pub async fn insert(actor: &str, action: &str, detail: &str) -> anyhow::Result<()> {
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();

    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        timestamp: Set(now),
        actor: Set(actor.to_string()),
        action: Set(action.to_string()),
        detail: Set(detail.to_string()),
    };
    active.insert(conn()).await?;
    Ok(())
}

/// Most recent entries first, for the admin audit view
pub async fn list_recent(limit: u64) -> anyhow::Result<Vec<AuditEntry>> {
    let entries = Entity::find()
        .order_by_desc(Column::Id)
        .limit(limit)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(entries)
}
