use anyhow::Result;
use contracts::system::users::User;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sys_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(m: Model) -> Self {
        User {
            id: m.id,
            username: m.username,
            email: m.email,
            full_name: m.full_name,
            is_active: m.is_active,
            is_admin: m.is_admin,
            created_at: m.created_at,
            updated_at: m.updated_at,
            last_login_at: m.last_login_at,
            created_by: m.created_by,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn create_with_password(user: &User, password_hash: &str) -> Result<()> {
    ActiveModel {
        id: Set(user.id.clone()),
        username: Set(user.username.clone()),
        email: Set(user.email.clone()),
        password_hash: Set(password_hash.to_string()),
        full_name: Set(user.full_name.clone()),
        is_active: Set(user.is_active),
        is_admin: Set(user.is_admin),
        created_at: Set(user.created_at.clone()),
        updated_at: Set(user.updated_at.clone()),
        last_login_at: Set(user.last_login_at.clone()),
        created_by: Set(user.created_by.clone()),
    }
    .insert(conn())
    .await?;
    Ok(())
}

pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_username(username: &str) -> Result<Option<User>> {
    let result = Entity::find()
        .filter(Column::Username.eq(username))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn get_password_hash(user_id: &str) -> Result<Option<String>> {
    let result = Entity::find_by_id(user_id.to_string()).one(conn()).await?;
    Ok(result.map(|m| m.password_hash))
}

pub async fn list_all() -> Result<Vec<User>> {
    let users = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(users)
}

pub async fn update(user: &User) -> Result<()> {
    use sea_orm::sea_query::Expr;
    Entity::update_many()
        .col_expr(Column::Email, Expr::value(user.email.clone()))
        .col_expr(Column::FullName, Expr::value(user.full_name.clone()))
        .col_expr(Column::IsActive, Expr::value(user.is_active))
        .col_expr(Column::IsAdmin, Expr::value(user.is_admin))
        .col_expr(Column::UpdatedAt, Expr::value(user.updated_at.clone()))
        .filter(Column::Id.eq(user.id.clone()))
        .exec(conn())
        .await?;
    Ok(())
}

/// Hard delete, accounts are not soft-deleted
pub async fn delete(id: &str) -> Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}

pub async fn update_last_login(id: &str) -> Result<()> {
    use sea_orm::sea_query::Expr;
    Entity::update_many()
        .col_expr(
            Column::LastLoginAt,
            Expr::value(Some(chrono::Utc::now().to_rfc3339())),
        )
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(())
}

pub async fn count_users() -> Result<usize> {
    let count = Entity::find().count(conn()).await?;
    Ok(count as usize)
}

pub async fn update_password(id: &str, password_hash: &str) -> Result<()> {
    use sea_orm::sea_query::Expr;
    Entity::update_many()
        .col_expr(Column::PasswordHash, Expr::value(password_hash))
        .col_expr(
            Column::UpdatedAt,
            Expr::value(chrono::Utc::now().to_rfc3339()),
        )
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(())
}
