//! User models and DTOs.
//!
//! Screens never receive free-form objects: the session layer hands them a
//! [`User`], and anything a screen sends back goes through a validated DTO.

use crate::ids::UserId;
use eduflow_core::Role;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A signed-in user as the application sees it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub role: Role,
}

impl User {
    /// Same user under a different role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// Credentials submitted from the login screen.
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(url)]
    pub avatar: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub department: Option<String>,
}

impl UpdateProfileDto {
    /// Copy every provided field onto `user`.
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(avatar) = self.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(department) = self.department {
            user.department = Some(department);
        }
    }
}
