//! Shared layout for every signed-in page: header, module sidebar, session
//! notice and the password setup gate. Signed-out visitors get the sign-in
//! prompt instead of any page content. Navigation is client-side only; the API
//! must enforce access control.

use super::{LanguageSelect, Sidebar};
use crate::{
    components::ui::{Alert, AlertKind, Button, ButtonVariant, InitialsAvatar, PageSpinner},
    features::{
        auth::PasswordSetupGuard,
        session::{identity::use_identity, state::use_user},
    },
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps a page with the dashboard chrome once the user is signed in.
#[component]
pub fn AppShell(children: ChildrenFn) -> impl IntoView {
    let identity = use_identity();

    move || {
        if !identity.is_loaded.get() {
            view! { <PageSpinner /> }.into_any()
        } else if !identity.is_signed_in.get() {
            view! { <SignInPrompt /> }.into_any()
        } else {
            let children = children.clone();
            view! { <SignedInShell children=children /> }.into_any()
        }
    }
}

#[component]
fn SignedInShell(children: ChildrenFn) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let user = use_user();
    let display_name =
        Signal::derive(move || user.user_info.get().map(|u| u.display_name()).unwrap_or_default());
    let school_name =
        Signal::derive(move || user.user_info.get().and_then(|u| u.school_name).unwrap_or_default());

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-950">
            <header class="border-b border-gray-200 bg-white dark:border-gray-800 dark:bg-gray-900">
                <div class="flex items-center justify-between px-4 py-3">
                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            class="inline-flex items-center p-2 text-gray-500 rounded-lg md:hidden hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-700"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <span class="sr-only">"Open main menu"</span>
                            <span class="material-symbols-outlined">"menu"</span>
                        </button>
                        <A href=paths::DASHBOARD {..} attr:class="flex items-center gap-2">
                            <img src="/logo.svg" class="h-8" alt="Alenna" />
                            <span class="font-semibold dark:text-white">"Alenna"</span>
                        </A>
                        <span class="hidden sm:inline text-sm text-gray-500 dark:text-gray-400">
                            {move || school_name.get()}
                        </span>
                    </div>
                    <div class="flex items-center gap-3">
                        <LanguageSelect />
                        {move || {
                            let name = display_name.get();
                            (!name.is_empty()).then(|| view! {
                                <span class="hidden sm:inline text-sm font-medium text-gray-700 dark:text-gray-200">
                                    {name.clone()}
                                </span>
                                <InitialsAvatar name=name />
                            })
                        }}
                        <Button
                            variant=ButtonVariant::Secondary
                            on_click=Callback::new(move |_: ()| user.sign_out())
                        >
                            "Sign Out"
                        </Button>
                    </div>
                </div>
            </header>
            <div class="flex flex-1">
                <div class="md:block" class:hidden=move || !menu_open.get()>
                    <Sidebar />
                </div>
                <main class="flex-1 p-4 md:p-8 space-y-4">
                    <SessionNotice />
                    <PasswordSetupGuard children=children />
                </main>
            </div>
        </div>
    }
}

/// Shown when the profile could not be resolved for a signed-in identity.
#[component]
fn SessionNotice() -> impl IntoView {
    let user = use_user();

    move || {
        user.error.get().map(|_| {
            view! {
                <Alert
                    kind=AlertKind::Warning
                    title="Account not found"
                    message="We couldn't load your Alenna account. Please contact your administrator."
                        .to_string()
                />
            }
        })
    }
}

#[component]
fn SignInPrompt() -> impl IntoView {
    let identity = use_identity();

    view! {
        <div class="flex min-h-screen items-center justify-center bg-gray-50 dark:bg-gray-950 px-4">
            <div class="max-w-sm w-full text-center space-y-6 rounded-xl border border-gray-200 bg-white p-8 shadow-sm dark:border-gray-700 dark:bg-gray-900">
                <img src="/logo.svg" class="h-12 mx-auto" alt="Alenna" />
                <div class="space-y-2">
                    <h1 class="text-xl font-bold text-gray-900 dark:text-white">"Welcome to Alenna"</h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Sign in with the account your school administrator created for you."
                    </p>
                </div>
                <Button on_click=Callback::new(move |_: ()| identity.open_sign_in())>"Sign In"</Button>
            </div>
        </div>
    }
}
