use serde::{Deserialize, Serialize};

/// An admin/editor account for the content-management backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
    pub created_by: Option<String>,
}

impl User {
    /// Human-readable name, falling back to the username.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_admin: bool,
}

/// Profile/role update; password changes go through [`ChangePasswordDto`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordDto {
    pub user_id: String,
    pub old_password: Option<String>, // None if admin changing someone else's password
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(full_name: Option<&str>) -> User {
        User {
            id: "u1".to_string(),
            username: "jsmith".to_string(),
            email: None,
            full_name: full_name.map(|s| s.to_string()),
            is_active: true,
            is_admin: false,
            created_at: String::new(),
            updated_at: String::new(),
            last_login_at: None,
            created_by: None,
        }
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        assert_eq!(user(Some("J. Smith")).display_name(), "J. Smith");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        assert_eq!(user(None).display_name(), "jsmith");
        assert_eq!(user(Some("   ")).display_name(), "jsmith");
    }
}
