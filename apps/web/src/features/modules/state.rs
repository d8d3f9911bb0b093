//! Module access context. Grants are fetched once per signed-in user (keyed by
//! profile id, so a profile refetch does not refetch grants) and cleared when
//! the profile goes away.

use super::{
    access::{ModuleAccess, load_modules},
    client::HttpModuleApi,
    registry::ModuleName,
};
use crate::features::session::{identity::use_identity, state::use_user};
use leptos::{prelude::*, task::spawn_local};
use tracing::{debug, error};

#[derive(Clone, Copy)]
pub struct ModulesContext {
    pub access: RwSignal<ModuleAccess>,
}

impl ModulesContext {
    fn new() -> Self {
        Self {
            access: RwSignal::new(ModuleAccess::default()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.access.with(ModuleAccess::is_loading)
    }

    /// Granted modules in registry order; empty until grants are loaded.
    pub fn granted(&self) -> Vec<ModuleName> {
        self.access.with(ModuleAccess::granted)
    }
}

/// Provides module access and refreshes it when the signed-in user changes.
#[component]
pub fn ModulesProvider(children: Children) -> impl IntoView {
    let identity = use_identity();
    let user = use_user();
    let modules = ModulesContext::new();
    provide_context(modules);

    let user_id = Memo::new(move |_| user.user_info.with(|u| u.as_ref().map(|u| u.id.clone())));

    Effect::new(move |_| {
        if user_id.get().is_none() {
            modules.access.update(ModuleAccess::clear);
            return;
        }

        let Some(ticket) = modules.access.try_update(|access| access.resolved.begin()) else {
            return;
        };
        let provider = identity.provider;
        spawn_local(async move {
            let result = load_modules(&provider, &HttpModuleApi).await;
            if let Err(err) = &result {
                error!("Failed to load module access: {err}");
            }
            modules.access.maybe_update(|access| {
                let applied = access.resolved.settle(ticket, result);
                if !applied {
                    debug!("discarding superseded module response");
                }
                applied
            });
        });
    });

    view! { {children()} }
}

pub fn use_modules() -> ModulesContext {
    use_context::<ModulesContext>().unwrap_or_else(ModulesContext::new)
}
