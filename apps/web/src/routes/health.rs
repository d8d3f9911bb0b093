use crate::{app_lib::build_info, components::AppShell};
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let rows = [
        ("Version", build_info::package_version()),
        ("Commit", build_info::git_commit_hash()),
        ("Profile", build_info::build_profile()),
    ];

    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="block w-full max-w-[38rem] rounded-lg border border-gray-200 bg-white dark:border-gray-700 dark:bg-gray-800">
                    <div class="border-b border-gray-200 dark:border-gray-700 px-6 py-3 text-gray-600 dark:text-gray-100 font-semibold">
                        "Build Version"
                    </div>
                    <dl class="p-6 grid grid-cols-[auto_1fr] gap-x-6 gap-y-2 text-sm">
                        {rows
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <dt class="text-gray-500 dark:text-gray-400">{label}</dt>
                                    <dd class="font-mono text-gray-900 dark:text-white">{value}</dd>
                                }
                            })
                            .collect_view()}
                    </dl>
                </div>
            </div>
        </AppShell>
    }
}
