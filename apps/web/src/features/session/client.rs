//! HTTP implementation of the account endpoints. Tokens are passed straight to
//! the request helpers and never logged.

use super::{
    resolver::AccountApi,
    types::{SetupPasswordRequest, UserProfile},
};
use crate::app_lib::{AppError, get_json_with_bearer, post_json_with_bearer};

/// Account endpoints of the Alenna API.
#[derive(Clone, Copy, Default)]
pub struct HttpAccountApi;

impl AccountApi for HttpAccountApi {
    async fn fetch_user_info(&self, token: &str) -> Result<UserProfile, AppError> {
        get_json_with_bearer("/auth/info", token).await
    }
}

/// Sets the first password for an account created by an administrator.
/// The password must never be logged.
pub async fn setup_password(request: &SetupPasswordRequest, token: &str) -> Result<(), AppError> {
    post_json_with_bearer("/auth/setup-password", request, token).await
}
