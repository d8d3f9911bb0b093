//! Landing page for modules without a dedicated screen yet. It still goes
//! through the module gate so ungranted users see the not-found page.

use crate::{
    components::AppShell,
    features::{auth::RequireModule, modules::ModuleName},
};
use leptos::prelude::*;

#[component]
pub fn ModulePage(module: ModuleName) -> impl IntoView {
    view! {
        <AppShell>
            <RequireModule module=module>
                <div class="space-y-6">
                    <div class="flex items-center gap-3">
                        <span class="material-symbols-outlined text-3xl text-indigo-600 dark:text-indigo-300">
                            {module.icon()}
                        </span>
                        <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            {module.label()}
                        </h1>
                    </div>
                    <div class="rounded-lg border border-dashed border-gray-300 bg-white p-10 text-center text-sm text-gray-500 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-400">
                        {format!("{} is enabled for your school.", module.label())}
                    </div>
                </div>
            </RequireModule>
        </AppShell>
    }
}
