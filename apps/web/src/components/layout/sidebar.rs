//! Side navigation for signed-in users.
//!
//! The dashboard link is always present; module links appear only once the
//! module is granted. Hiding a link is cosmetic; the route guard and the API
//! still decide access.

use crate::{
    app_lib::build_info,
    features::modules::{ModuleName, state::use_modules},
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar() -> impl IntoView {
    let modules = use_modules();
    let location = use_location();
    let pathname = Signal::derive(move || location.pathname.get());
    let granted = Memo::new(move |_| modules.granted());

    view! {
        <aside class="w-64 h-full flex-shrink-0 flex flex-col border-r border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-900 overflow-y-auto">
            <nav class="flex-1 px-4 py-6 space-y-8">
                <div class="space-y-1">
                    <SidebarLink
                        target=paths::DASHBOARD
                        icon="dashboard"
                        label="Dashboard"
                        active=Signal::derive(move || paths::same_path(&pathname.get(), paths::DASHBOARD))
                    />
                </div>

                <div>
                    <h3 class="px-2 text-xs font-semibold text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                        "Modules"
                    </h3>
                    <div class="mt-2 space-y-1">
                        <Show
                            when=move || !modules.is_loading()
                            fallback=|| view! {
                                <p class="px-2 py-2 text-sm text-gray-400">"Loading modules..."</p>
                            }
                        >
                            <For
                                each=move || granted.get()
                                key=|module| *module
                                children=move |module: ModuleName| {
                                    view! {
                                        <SidebarLink
                                            target=module.path()
                                            icon=module.icon()
                                            label=module.label()
                                            active=Signal::derive(move || {
                                                ModuleName::from_path(&pathname.get()) == Some(module)
                                            })
                                        />
                                    }
                                }
                            />
                        </Show>
                    </div>
                </div>
            </nav>

            <div class="p-4 border-t border-gray-100 dark:border-gray-800">
                <p class="text-[10px] text-gray-400 font-mono text-center uppercase tracking-tighter">
                    {format!("Alenna v{}", build_info::package_version())}
                </p>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(
    target: &'static str,
    icon: &'static str,
    label: &'static str,
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <A
            href=target
            {..}
            attr:class="group flex items-center px-2 py-2 text-sm font-medium rounded-md transition-colors"
            class:text-indigo-600=move || active.get()
            class:bg-indigo-50=move || active.get()
            class:dark:bg-indigo-900=move || active.get()
            class:dark:text-indigo-300=move || active.get()
            class:text-gray-600=move || !active.get()
            class:dark:text-gray-300=move || !active.get()
            class:hover:bg-gray-50=move || !active.get()
            class:dark:hover:bg-gray-800=move || !active.get()
        >
            <span
                class="material-symbols-outlined mr-3 text-xl transition-colors"
                class:text-indigo-600=move || active.get()
                class:text-gray-400=move || !active.get()
            >
                {icon}
            </span>
            {label}
        </A>
    }
}
