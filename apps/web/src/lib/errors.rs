use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    /// Identity provider could not produce a session token.
    Auth(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    Storage(String),
    /// Form input rejected before any request was made.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Auth(message) => write!(formatter, "Authentication error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::Storage(message) => write!(formatter, "Storage error: {message}"),
            AppError::Validation(message) => formatter.write_str(message),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_error_display_includes_status_text() {
        let err = AppError::Http {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (404): Not Found");
    }

    #[test]
    fn auth_error_display_is_prefixed() {
        let err = AppError::Auth("No session token available.".to_string());
        assert_eq!(
            err.to_string(),
            "Authentication error: No session token available."
        );
    }

    #[test]
    fn validation_errors_display_the_bare_message() {
        let err = AppError::Validation("Passwords do not match.".to_string());
        assert_eq!(err.to_string(), "Passwords do not match.");
    }
}
