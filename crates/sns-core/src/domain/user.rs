use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SoftDelete, UserId};

/// Authority level of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(UserRole::User),
            "ADMIN" => Ok(UserRole::Admin),
            other => Err(format!("unknown user role: {other}")),
        }
    }
}

/// User entity - an account that can sign in and own content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub user_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl SoftDelete for User {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.deleted_at = Some(at);
        self.updated_at = at;
    }
}

/// A user that has not been stored yet. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub registered_at: DateTime<Utc>,
}

impl NewUser {
    /// Create a regular account from an already hashed password.
    pub fn new(user_name: impl Into<String>, password_hash: String) -> Self {
        Self {
            user_name: user_name.into(),
            password_hash,
            role: UserRole::User,
            registered_at: Utc::now(),
        }
    }

    /// Attach the store-assigned id.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            user_name: self.user_name,
            password_hash: self.password_hash,
            role: self.role,
            registered_at: self.registered_at,
            updated_at: self.registered_at,
            deleted_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults_to_user_role() {
        let user = NewUser::new("alice", "hash".to_string()).into_user(UserId(1));

        assert_eq!(user.role, UserRole::User);
        assert!(user.is_active());
        assert_eq!(user.registered_at, user.updated_at);
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = NewUser::new("alice", "secret-hash".to_string()).into_user(UserId(1));
        let json = serde_json::to_string(&user).unwrap();

        assert!(!json.contains("secret-hash"));
        assert!(json.contains("\"role\":\"USER\""));
    }

    #[test]
    fn test_role_parses_from_column_value() {
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("root".parse::<UserRole>().is_err());
    }
}
