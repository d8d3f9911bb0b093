//! Not-found page. Module routes the user is not granted render the same
//! content, so an ungranted module looks exactly like a missing one.

use crate::{components::AppShell, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;
use tracing::warn;

/// Top-level fallback for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <NotFoundContent />
        </AppShell>
    }
}

/// Inner content without the shell, for guards inside a page that already has one.
#[component]
pub fn NotFoundContent() -> impl IntoView {
    let go_back = move |_| {
        let history = web_sys::window().and_then(|window| window.history().ok());
        match history {
            Some(history) => {
                if history.back().is_err() {
                    warn!("history.back() failed");
                }
            }
            None => warn!("browser history is unavailable"),
        }
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <div class="relative">
                <h1 class="text-9xl font-black text-gray-100 dark:text-gray-800 select-none">
                    "404"
                </h1>
                <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-gray-900 dark:text-white whitespace-nowrap">
                    "Page not found"
                </p>
            </div>

            <div class="mt-4 space-y-6">
                <p class="text-gray-500 dark:text-gray-400 max-w-sm mx-auto">
                    "This page doesn't exist or isn't part of your school's plan."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href=paths::DASHBOARD
                        {..}
                        attr:class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-indigo-700 rounded-lg hover:bg-indigo-800 focus:ring-4 focus:outline-none focus:ring-indigo-300 dark:bg-indigo-600 dark:hover:bg-indigo-700 transition-all"
                    >
                        <span class="material-symbols-outlined mr-2 text-base">"home"</span>
                        "Go to Dashboard"
                    </A>
                    <button
                        type="button"
                        on:click=go_back
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 hover:text-indigo-700 focus:ring-4 focus:ring-gray-100 dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600 dark:hover:text-white dark:hover:bg-gray-700 transition-all"
                    >
                        <span class="material-symbols-outlined mr-2 text-base">"arrow_back"</span>
                        "Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}
