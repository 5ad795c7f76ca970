//! Form payloads for login and signup.
//!
//! These are the `application/x-www-form-urlencoded` bodies posted by the
//! login and signup pages. The request layer decodes them with its form
//! extractor; nothing here validates field contents.

use serde::Deserialize;

use mn_roasters_core::Password;

use crate::models::NewUser;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: Password,
}

/// Signup form data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUserForm {
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub password: Password,
}

impl NewUserForm {
    /// Map the signup fields onto the insert parameters for a user.
    #[must_use]
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            first_name: self.fname,
            last_name: self.lname,
            email: self.email,
            password: self.password,
        }
    }
}

impl From<NewUserForm> for NewUser {
    fn from(form: NewUserForm) -> Self {
        form.into_new_user()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_deserializes() {
        let form: LoginForm =
            serde_json::from_str(r#"{"email": "admin@admin.com", "password": "admin"}"#).unwrap();
        assert_eq!(form.email, "admin@admin.com");
        assert!(form.password.matches("admin"));
    }

    #[test]
    fn test_login_form_debug_redacts_password() {
        let form: LoginForm =
            serde_json::from_str(r#"{"email": "a@b.c", "password": "hunter2"}"#).unwrap();
        assert!(!format!("{form:?}").contains("hunter2"));
    }

    #[test]
    fn test_login_form_requires_password_field() {
        let result = serde_json::from_str::<LoginForm>(r#"{"email": "a@b.c"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_user_form_into_new_user() {
        let form: NewUserForm = serde_json::from_str(
            r#"{"fname": "Ada", "lname": "Lovelace", "email": "ada@example.com", "password": "pw"}"#,
        )
        .unwrap();

        let user = NewUser::from(form);
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.password.expose(), "pw");
    }

    #[test]
    fn test_new_user_form_accepts_unvalidated_values() {
        // Field contents are the request layer's concern.
        let form: NewUserForm = serde_json::from_str(
            r#"{"fname": "", "lname": "", "email": "not-an-email", "password": ""}"#,
        )
        .unwrap();
        assert_eq!(form.email, "not-an-email");
    }
}
