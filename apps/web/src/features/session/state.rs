//! Session context for the frontend. The provider resolves the Alenna profile
//! whenever the identity provider reports a sign-in and drops it on sign-out.
//! Every page and both guards read the same context.

use super::{
    client::HttpAccountApi,
    identity::{IdentityContext, use_identity},
    resolver::{SessionState, load_profile},
    types::UserProfile,
};
use leptos::{prelude::*, task::spawn_local};
use tracing::{debug, error};

/// Session context shared through Leptos.
#[derive(Clone, Copy)]
pub struct UserContext {
    pub state: RwSignal<SessionState>,
    pub user_info: Signal<Option<UserProfile>>,
    pub is_loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    identity: IdentityContext,
}

impl UserContext {
    fn new(identity: IdentityContext) -> Self {
        let state = RwSignal::new(SessionState::default());
        Self {
            state,
            user_info: Signal::derive(move || state.with(|s| s.value().cloned())),
            is_loading: Signal::derive(move || state.with(|s| s.is_loading())),
            error: Signal::derive(move || state.with(|s| s.error().map(str::to_string))),
            identity,
        }
    }

    /// Fetches the profile again, e.g. after the password has been set.
    /// Only the newest fetch is applied; a failure keeps the current profile.
    pub fn refetch(&self) {
        let Some(ticket) = self.state.try_update(|s| s.begin()) else {
            return;
        };
        let state = self.state;
        let provider = self.identity.provider;

        spawn_local(async move {
            let result = load_profile(&provider, &HttpAccountApi).await;
            if let Err(err) = &result {
                error!("Failed to load user profile: {err}");
            }
            state.maybe_update(|s| {
                let applied = s.settle(ticket, result);
                if !applied {
                    debug!("discarding superseded profile response");
                }
                applied
            });
        });
    }

    /// Forgets the profile and ignores any fetch still in flight.
    pub fn clear(&self) {
        self.state.update(|s| s.clear());
    }

    pub fn sign_out(&self) {
        self.clear();
        self.identity.sign_out();
    }
}

/// Provides the session context and keeps it in step with the identity provider.
#[component]
pub fn UserProvider(children: Children) -> impl IntoView {
    let identity = use_identity();
    let user = UserContext::new(identity);
    provide_context(user);

    // Keyed on the user id so a switch between two polls still refetches.
    Effect::new(move |_| {
        if !identity.is_loaded.get() {
            return;
        }
        if identity.user_id.with(Option::is_some) {
            user.refetch();
        } else {
            user.clear();
        }
    });

    view! { {children()} }
}

/// Returns the session context or a fallback that stays loading.
pub fn use_user() -> UserContext {
    use_context::<UserContext>().unwrap_or_else(|| UserContext::new(use_identity()))
}
