//! HTTP implementation of the module grant endpoint.

use super::access::{ModuleApi, ModuleGrant};
use crate::app_lib::{AppError, get_json_with_bearer};

#[derive(Clone, Copy, Default)]
pub struct HttpModuleApi;

impl ModuleApi for HttpModuleApi {
    async fn fetch_user_modules(&self, token: &str) -> Result<Vec<ModuleGrant>, AppError> {
        get_json_with_bearer("/modules/user", token).await
    }
}
