//! HTTP helpers for the Alenna REST API with consistent timeouts and error
//! handling. Every backend call is authorized with a bearer token obtained from
//! the identity provider; these helpers only attach the token they are given and
//! never log it.

#[cfg(target_arch = "wasm32")]
use super::{config::AppConfig, errors::AppError};
#[cfg(target_arch = "wasm32")]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
#[cfg(target_arch = "wasm32")]
use serde::{Serialize, de::DeserializeOwned};
#[cfg(target_arch = "wasm32")]
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches JSON from an authenticated endpoint.
#[cfg(target_arch = "wasm32")]
pub async fn get_json_with_bearer<T: DeserializeOwned>(
    path: &str,
    token: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        with_bearer(Request::get(&url), token)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON to an authenticated endpoint and expects an empty response body.
#[cfg(target_arch = "wasm32")]
pub async fn post_json_with_bearer<B: Serialize>(
    path: &str,
    body: &B,
    token: &str,
) -> Result<(), AppError> {
    let url = build_url(path);
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        with_bearer(Request::post(&url), token)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

#[cfg(target_arch = "wasm32")]
fn with_bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder
        .header("Authorization", &bearer_header(token))
        .header("Accept", "application/json")
}

/// Formats the `Authorization` header value for a session token.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token.trim())
}

/// Builds a URL from the configured API base URL and the provided path.
#[cfg(target_arch = "wasm32")]
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

#[cfg(target_arch = "wasm32")]
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

#[cfg(target_arch = "wasm32")]
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

#[cfg(target_arch = "wasm32")]
async fn http_error(response: Response) -> AppError {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: error_message(&status_text, body),
    }
}

/// Prefers the HTTP status text; HTTP/2 responses carry none, so the body is
/// used instead.
pub fn error_message(status_text: &str, body: String) -> String {
    let status_text = status_text.trim();
    if status_text.is_empty() {
        sanitize_body(body)
    } else {
        status_text.to_string()
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_ERROR_CHARS, bearer_header, build_url_with_base, error_message};

    #[test]
    fn build_url_joins_without_duplicate_slashes() {
        assert_eq!(
            build_url_with_base("http://localhost:3000/api/v1/", "/auth/info"),
            "http://localhost:3000/api/v1/auth/info"
        );
        assert_eq!(
            build_url_with_base(" http://localhost:3000/api/v1", "students"),
            "http://localhost:3000/api/v1/students"
        );
    }

    #[test]
    fn build_url_keeps_relative_path_without_base() {
        assert_eq!(build_url_with_base("  ", "/auth/info"), "/auth/info");
    }

    #[test]
    fn bearer_header_trims_token() {
        assert_eq!(bearer_header(" abc.def "), "Bearer abc.def");
    }

    #[test]
    fn error_message_prefers_status_text() {
        assert_eq!(
            error_message("Unauthorized", "{\"error\":\"nope\"}".to_string()),
            "Unauthorized"
        );
    }

    #[test]
    fn error_message_falls_back_to_truncated_body() {
        assert_eq!(error_message("", "   ".to_string()), "Request failed.");

        let long = "x".repeat(MAX_ERROR_CHARS + 50);
        assert_eq!(error_message(" ", long).chars().count(), MAX_ERROR_CHARS);
    }
}
