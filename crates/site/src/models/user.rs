//! User domain types.

use core::fmt;

use serde::Serialize;

use mn_roasters_core::{Password, UserId};

/// A site account.
///
/// Email addresses are not unique; two accounts may share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Plaintext password, never serialized.
    #[serde(skip_serializing)]
    pub password: Password,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<User user_id={} name={} {}>",
            self.user_id, self.first_name, self.last_name
        )
    }
}

/// Parameters for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Password,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn admin() -> User {
        User {
            user_id: UserId::new(1),
            first_name: "Admin".to_owned(),
            last_name: "Admin".to_owned(),
            email: "admin@admin.com".to_owned(),
            password: Password::new("admin"),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(admin().to_string(), "<User user_id=1 name=Admin Admin>");
    }

    #[test]
    fn test_serialize_skips_password() {
        let json = serde_json::to_value(admin()).unwrap();
        assert_eq!(json["email"], "admin@admin.com");
        assert_eq!(json["user_id"], 1);
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", admin());
        assert!(debug.contains("admin@admin.com"));
        assert!(debug.contains("[REDACTED]"));
    }
}
