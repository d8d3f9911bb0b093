//! Build-time configuration for the backend API with an optional runtime
//! override. The runtime config is read from `window.ALENNA_CONFIG` (if
//! present) so static deployments can point at another API without
//! rebuilding. Configuration values are public; do not store secrets here.

/// API base used when neither the build nor the page provides one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";
/// Log level used when `ALENNA_LOG_LEVEL` is unset or unparseable.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env(
            option_env!("ALENNA_API_BASE_URL"),
            option_env!("ALENNA_LOG_LEVEL"),
        );

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base_url: api_base_url
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            log_level: log_level
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Parses the configured log level, falling back to `info`.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("ALENNA_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_API_BASE_URL, RuntimeConfig, apply_runtime_overrides,
        normalize_runtime_value,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.alenna.io/api/v1 "),
            Some("https://api.alenna.io/api/v1".to_string())
        );
    }

    #[test]
    fn build_env_defaults_to_local_api() {
        let config = AppConfig::from_build_env(None, Some("  "));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }

    #[test]
    fn build_env_values_are_used_when_present() {
        let config = AppConfig::from_build_env(Some("https://api.alenna.io/api/v1"), Some("debug"));
        assert_eq!(config.api_base_url, "https://api.alenna.io/api/v1");
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn unparseable_log_level_falls_back_to_info() {
        let config = AppConfig::from_build_env(None, Some("chatty"));
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig::from_build_env(Some("https://api.default"), None);
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("  "),
            log_level: normalize_runtime_value(""),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::from_build_env(Some("https://api.default"), None);
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            log_level: normalize_runtime_value("warn"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.tracing_level(), tracing::Level::WARN);
    }
}
