//! Profile payloads returned by `/auth/info` and sent to `/auth/setup-password`.
//! Passwords travel only in `SetupPasswordRequest` and must never be logged.

use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};

/// Minimum length accepted for a new password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// The signed-in user's Alenna profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    /// `None` when the backend omits the flag or sends `null`.
    #[serde(default)]
    pub created_password: Option<bool>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub school_id: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
}

impl UserProfile {
    /// `false`, `null` and a missing flag all mean the password is still pending.
    pub fn has_created_password(&self) -> bool {
        self.created_password == Some(true)
    }

    pub fn display_name(&self) -> String {
        let full_name = self.full_name.as_deref().map(str::trim).unwrap_or_default();
        if !full_name.is_empty() {
            return full_name.to_string();
        }
        let joined = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let joined = joined.trim();
        if joined.is_empty() {
            self.email.clone()
        } else {
            joined.to_string()
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SetupPasswordRequest {
    pub password: String,
}

impl SetupPasswordRequest {
    /// Checks the form locally before anything is sent. The API validates again.
    pub fn from_form(password: &str, confirm: &str) -> Result<Self, AppError> {
        if password.trim().is_empty() || confirm.trim().is_empty() {
            return Err(AppError::Validation(
                "Both password fields are required.".to_string(),
            ));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters."
            )));
        }
        if password != confirm {
            return Err(AppError::Validation("Passwords do not match.".to_string()));
        }
        Ok(Self {
            password: password.to_string(),
        })
    }
}
