//! Render decisions for the two route guards, as pure functions of the session
//! and module access states. The components in `guards` only map a decision to
//! markup. Both are UX gates; the API enforces access on every request.

use crate::{
    app_lib::resolve::LoadPhase,
    features::{
        modules::{ModuleName, access::ModuleAccess},
        session::{resolver::SessionState, types::UserProfile},
    },
    routes::paths,
};

/// What a module-gated route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Identity is still unknown: show only a spinner.
    Loading,
    /// Render the protected page (it shows its own placeholders while grants load).
    Children,
    /// The module is not granted and the caller supplied a fallback.
    Fallback,
    /// The module is not granted: generic not-found page.
    Unauthorized,
}

/// Rules apply in order; the first match wins.
pub fn route_decision(
    session: &SessionState,
    modules: &ModuleAccess,
    required: ModuleName,
    has_fallback: bool,
) -> RouteDecision {
    if session.is_loading() || session.value().is_none() {
        return RouteDecision::Loading;
    }
    match modules.phase() {
        LoadPhase::Loading => RouteDecision::Children,
        LoadPhase::Ready if modules.has_module(required) => RouteDecision::Children,
        LoadPhase::Ready | LoadPhase::Error(_) if has_fallback => RouteDecision::Fallback,
        LoadPhase::Ready | LoadPhase::Error(_) => RouteDecision::Unauthorized,
    }
}

/// What the password setup guard does on the current path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordGate {
    Loading,
    Render,
    Redirect(&'static str),
}

/// Sends users without a password to the setup page and keeps everyone else
/// away from it. An unresolved profile is left to the other guards.
pub fn password_setup_decision(
    is_loading: bool,
    user: Option<&UserProfile>,
    path: &str,
) -> PasswordGate {
    if is_loading {
        return PasswordGate::Loading;
    }
    let Some(user) = user else {
        return PasswordGate::Render;
    };

    let on_setup_page = paths::same_path(path, paths::SETUP_PASSWORD);
    match (user.has_created_password(), on_setup_page) {
        (false, true) | (true, false) => PasswordGate::Render,
        (false, false) => PasswordGate::Redirect(paths::SETUP_PASSWORD),
        (true, true) => PasswordGate::Redirect(paths::DASHBOARD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app_lib::AppError,
        features::{
            modules::access::fakes::ready,
            session::resolver::fakes::profile,
        },
    };

    fn ready_session(created_password: Option<bool>) -> SessionState {
        let mut session = SessionState::default();
        let ticket = session.begin();
        session.settle(ticket, Ok(profile("u1", created_password)));
        session
    }

    #[test]
    fn loading_session_shows_only_spinner_whatever_modules_say() {
        let session = SessionState::default();
        for modules in [ModuleAccess::default(), ready(&[ModuleName::Students]), ready(&[])] {
            assert_eq!(
                route_decision(&session, &modules, ModuleName::Students, true),
                RouteDecision::Loading
            );
        }
    }

    #[test]
    fn refetching_session_shows_spinner() {
        let mut session = ready_session(Some(true));
        session.begin();
        assert_eq!(
            route_decision(&session, &ready(&[ModuleName::Students]), ModuleName::Students, false),
            RouteDecision::Loading
        );
    }

    #[test]
    fn absent_profile_shows_spinner() {
        let mut session = SessionState::default();
        let ticket = session.begin();
        session.settle(ticket, Err(AppError::Auth("No session token available.".to_string())));

        assert_eq!(
            route_decision(&session, &ready(&[ModuleName::Students]), ModuleName::Students, false),
            RouteDecision::Loading
        );
    }

    #[test]
    fn modules_loading_renders_children() {
        let session = ready_session(Some(true));
        assert_eq!(
            route_decision(&session, &ModuleAccess::default(), ModuleName::Billing, false),
            RouteDecision::Children
        );
    }

    #[test]
    fn ungranted_modules_never_render_children() {
        let session = ready_session(Some(true));
        let modules = ready(&[ModuleName::Students]);

        for module in ModuleName::ALL.into_iter().filter(|m| *m != ModuleName::Students) {
            assert_eq!(
                route_decision(&session, &modules, module, false),
                RouteDecision::Unauthorized
            );
            assert_eq!(
                route_decision(&session, &modules, module, true),
                RouteDecision::Fallback
            );
        }
    }

    #[test]
    fn granted_module_renders_children() {
        let session = ready_session(Some(true));
        let modules = ready(&[ModuleName::Projections]);
        assert_eq!(
            route_decision(&session, &modules, ModuleName::Projections, true),
            RouteDecision::Children
        );
    }

    #[test]
    fn failed_module_load_is_unauthorized() {
        let session = ready_session(Some(true));
        let mut modules = ModuleAccess::default();
        let ticket = modules.resolved.begin();
        modules
            .resolved
            .settle(ticket, Err(AppError::Network("offline".to_string())));

        assert_eq!(
            route_decision(&session, &modules, ModuleName::Students, false),
            RouteDecision::Unauthorized
        );
    }

    #[test]
    fn failed_module_load_uses_fallback_when_given() {
        let session = ready_session(Some(true));
        let mut modules = ModuleAccess::default();
        let ticket = modules.resolved.begin();
        modules
            .resolved
            .settle(ticket, Err(AppError::Network("offline".to_string())));

        assert_eq!(
            route_decision(&session, &modules, ModuleName::Students, true),
            RouteDecision::Fallback
        );
    }

    #[test]
    fn stale_profile_after_failed_refetch_keeps_access() {
        let mut session = ready_session(Some(true));
        let ticket = session.begin();
        session.settle(ticket, Err(AppError::Timeout("slow".to_string())));

        assert_eq!(
            route_decision(&session, &ready(&[ModuleName::Groups]), ModuleName::Groups, false),
            RouteDecision::Children
        );
    }

    #[test]
    fn password_guard_waits_while_loading() {
        let user = profile("u1", Some(true));
        assert_eq!(
            password_setup_decision(true, Some(&user), paths::DASHBOARD),
            PasswordGate::Loading
        );
    }

    #[test]
    fn password_guard_defers_without_profile() {
        assert_eq!(
            password_setup_decision(false, None, paths::DASHBOARD),
            PasswordGate::Render
        );
        assert_eq!(
            password_setup_decision(false, None, paths::SETUP_PASSWORD),
            PasswordGate::Render
        );
    }

    #[test]
    fn missing_password_redirects_to_setup() {
        for flag in [None, Some(false)] {
            let user = profile("u1", flag);
            assert_eq!(
                password_setup_decision(false, Some(&user), paths::DASHBOARD),
                PasswordGate::Redirect(paths::SETUP_PASSWORD)
            );
            assert_eq!(
                password_setup_decision(false, Some(&user), "/students/42"),
                PasswordGate::Redirect(paths::SETUP_PASSWORD)
            );
        }
    }

    #[test]
    fn missing_password_may_stay_on_setup_page() {
        let user = profile("u1", None);
        assert_eq!(
            password_setup_decision(false, Some(&user), paths::SETUP_PASSWORD),
            PasswordGate::Render
        );
    }

    #[test]
    fn created_password_leaves_setup_page() {
        let user = profile("u1", Some(true));
        assert_eq!(
            password_setup_decision(false, Some(&user), "/setup-password"),
            PasswordGate::Redirect(paths::DASHBOARD)
        );
        assert_eq!(
            password_setup_decision(false, Some(&user), paths::DASHBOARD),
            PasswordGate::Render
        );
    }
}
