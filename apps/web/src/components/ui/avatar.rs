use crate::app_lib::text::get_initials;
use leptos::prelude::*;

/// Round badge with a person's initials.
#[component]
pub fn InitialsAvatar(#[prop(into)] name: String) -> impl IntoView {
    let initials = get_initials(&name);

    view! {
        <span
            class="inline-flex h-9 w-9 flex-shrink-0 items-center justify-center rounded-full bg-indigo-100 text-sm font-semibold text-indigo-700 dark:bg-indigo-900/40 dark:text-indigo-300"
            title=name
        >
            {initials}
        </span>
    }
}
