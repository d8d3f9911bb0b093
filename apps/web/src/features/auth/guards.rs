use super::decision::{PasswordGate, RouteDecision, password_setup_decision, route_decision};
use crate::{
    components::ui::PageSpinner,
    features::{
        modules::{ModuleName, state::use_modules},
        session::state::use_user,
    },
    routes::NotFoundContent,
};
use leptos::prelude::*;
use leptos_router::{
    NavigateOptions,
    hooks::{use_location, use_navigate},
};

/// Renders `children` only when the signed-in user is granted `module`.
/// UX-only guard; real access control must live on the API.
#[component]
pub fn RequireModule(
    module: ModuleName,
    children: ChildrenFn,
    #[prop(optional, into)] fallback: Option<ViewFn>,
) -> impl IntoView {
    let user = use_user();
    let modules = use_modules();
    let has_fallback = fallback.is_some();

    let decision = Memo::new(move |_| {
        user.state.with(|session| {
            modules
                .access
                .with(|access| route_decision(session, access, module, has_fallback))
        })
    });

    move || match decision.get() {
        RouteDecision::Loading => view! { <PageSpinner /> }.into_any(),
        RouteDecision::Children => children().into_any(),
        RouteDecision::Fallback => match &fallback {
            Some(fallback) => fallback.run(),
            None => view! { <NotFoundContent /> }.into_any(),
        },
        RouteDecision::Unauthorized => view! { <NotFoundContent /> }.into_any(),
    }
}

/// Keeps users without a password on `/setup-password` and users with one off it.
#[component]
pub fn PasswordSetupGuard(children: ChildrenFn) -> impl IntoView {
    let user = use_user();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        user.state
            .with(|session| password_setup_decision(session.is_loading(), session.value(), &path))
    });

    Effect::new(move |_| {
        if let PasswordGate::Redirect(target) = decision.get() {
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || match decision.get() {
        PasswordGate::Render => children().into_any(),
        PasswordGate::Loading | PasswordGate::Redirect(_) => view! { <PageSpinner /> }.into_any(),
    }
}
