// 👤 User - shared identity record for every role
//
// Contributor, Editor and Accountant each embed a `User` rather than
// inheriting from it. Role-specific operations live on the role structs.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ============================================================================
// ROLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Contributor,
    Editor,
    Accountant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Contributor => "Contributor",
            Role::Editor => "Editor",
            Role::Accountant => "Accountant",
        }
    }
}

// ============================================================================
// USER
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Caller-assigned id ("C001", "E002", ...), fixed at construction
    user_id: String,
    pub name: String,
    /// Stored and compared as plain text
    pub password: String,
    /// Fixed at construction
    role: Role,
    pub email: String,
}

impl User {
    pub fn new(user_id: &str, name: &str, password: &str, role: Role, email: &str) -> Self {
        User {
            user_id: user_id.to_string(),
            name: name.to_string(),
            password: password.to_string(),
            role,
            email: email.to_string(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// True only when both id and password match exactly
    pub fn login(&self, user_id: &str, password: &str) -> bool {
        if self.user_id == user_id && self.password == password {
            info!(user = %self.user_id, "{} logged in", self.name);
            true
        } else {
            warn!(user = %user_id, "Login failed");
            false
        }
    }

    pub fn logout(&self) {
        info!(user = %self.user_id, "{} logged out", self.name);
    }

    pub fn view_details(&self) -> String {
        format!(
            "User ID: {}, Name: {}, Role: {}, Email: {}",
            self.user_id,
            self.name,
            self.role.as_str(),
            self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> User {
        User::new("E001", "Editor John", "pass123", Role::Editor, "editor.john@example.com")
    }

    #[test]
    fn test_login_requires_exact_match() {
        let user = editor();

        assert!(user.login("E001", "pass123"));
        assert!(!user.login("E001", "wrongpass"));
        assert!(!user.login("E002", "pass123"));
        assert!(!user.login("e001", "pass123")); // Case sensitive
        assert!(!user.login("E001", "PASS123"));
        assert!(!user.login("", ""));
    }

    #[test]
    fn test_login_does_not_mutate() {
        let user = editor();
        let before = user.clone();

        user.login("E001", "nope");
        user.login("E001", "pass123");
        user.logout();

        assert_eq!(user, before);
    }

    #[test]
    fn test_view_details() {
        let details = editor().view_details();
        assert_eq!(
            details,
            "User ID: E001, Name: Editor John, Role: Editor, Email: editor.john@example.com"
        );
    }
}
