//! Client helpers for student endpoints. Authorization is enforced by the API.

use super::types::Student;
use crate::{
    app_lib::{AppError, get_json_with_bearer},
    features::session::{identity::BrowserIdentity, resolver::session_token},
};

/// Fetches the students of the signed-in user's school.
pub async fn list_students() -> Result<Vec<Student>, AppError> {
    let token = session_token(&BrowserIdentity).await?;
    get_json_with_bearer("/students", &token).await
}
