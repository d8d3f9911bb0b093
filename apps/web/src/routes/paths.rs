//! Route paths used by guards, navigation and redirects.

pub const DASHBOARD: &str = "/dashboard";
pub const SETUP_PASSWORD: &str = "/setup-password";

/// Compares paths ignoring a trailing slash, so `/setup-password/` matches.
pub fn same_path(current: &str, target: &str) -> bool {
    fn trim(path: &str) -> &str {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() { "/" } else { trimmed }
    }
    trim(current) == trim(target)
}

#[cfg(test)]
mod tests {
    use super::{SETUP_PASSWORD, same_path};

    #[test]
    fn trailing_slash_is_ignored() {
        assert!(same_path("/setup-password/", SETUP_PASSWORD));
        assert!(same_path("//", "/"));
        assert!(!same_path("/setup-password/extra", SETUP_PASSWORD));
    }

    #[test]
    fn root_and_empty_paths_match() {
        assert!(same_path("", "/"));
        assert!(same_path("///", "/"));
        assert!(!same_path("/dashboard", "/"));
    }
}
