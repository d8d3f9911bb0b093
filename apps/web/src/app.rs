use crate::{
    features::{
        modules::state::ModulesProvider,
        session::{identity::AuthProvider, state::UserProvider},
    },
    routes::AppRoutes,
};
use leptos::prelude::*;
use leptos_router::components::Router;

/// Providers nest outermost-first: identity, then the profile it unlocks, then
/// the module grants keyed by that profile.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <UserProvider>
                <ModulesProvider>
                    <Router>
                        <AppRoutes />
                    </Router>
                </ModulesProvider>
            </UserProvider>
        </AuthProvider>
    }
}
