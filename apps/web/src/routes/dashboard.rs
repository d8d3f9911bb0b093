//! Landing page after sign-in: greeting plus a tile per granted module.

use crate::{
    components::{AppShell, InitialsAvatar, Spinner},
    features::{
        modules::{ModuleName, state::use_modules},
        session::state::use_user,
    },
};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <DashboardContent />
        </AppShell>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let user = use_user();
    let modules = use_modules();
    let granted = Memo::new(move |_| modules.granted());

    view! {
        <div class="space-y-8">
            {move || {
                user.user_info
                    .get()
                    .map(|profile| {
                        let name = profile.display_name();
                        view! {
                            <div class="flex items-center gap-4">
                                <InitialsAvatar name=name.clone() />
                                <div>
                                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                        {format!("Welcome, {name}")}
                                    </h1>
                                    <p class="text-sm text-gray-500 dark:text-gray-400">
                                        {profile.school_name.unwrap_or_else(|| profile.email.clone())}
                                    </p>
                                </div>
                            </div>
                        }
                    })
            }}

            <Show
                when=move || !modules.is_loading()
                fallback=|| view! {
                    <div class="flex justify-center py-12">
                        <Spinner />
                    </div>
                }
            >
                <Show
                    when=move || !granted.with(Vec::is_empty)
                    fallback=|| view! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            "No modules are enabled for your account yet."
                        </p>
                    }
                >
                    <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        <For
                            each=move || granted.get()
                            key=|module| *module
                            children=|module: ModuleName| view! { <ModuleTile module=module /> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn ModuleTile(module: ModuleName) -> impl IntoView {
    view! {
        <A
            href=module.path()
            {..}
            attr:class="group flex items-center gap-4 rounded-lg border border-gray-200 bg-white p-5 shadow-sm transition-colors hover:border-indigo-300 hover:bg-indigo-50 dark:border-gray-700 dark:bg-gray-800 dark:hover:bg-gray-700"
        >
            <span class="material-symbols-outlined text-3xl text-indigo-600 dark:text-indigo-300">
                {module.icon()}
            </span>
            <span class="text-base font-medium text-gray-900 dark:text-white">{module.label()}</span>
        </A>
    }
}
