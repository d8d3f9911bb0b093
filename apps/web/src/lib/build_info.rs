//! Build metadata stamped by `build.rs`, shown on the health page.

pub fn git_commit_hash() -> &'static str {
    match option_env!("ALENNA_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

pub fn build_profile() -> &'static str {
    option_env!("ALENNA_WEB_BUILD_PROFILE").unwrap_or("unknown")
}

pub fn package_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
