use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-indigo-200 border-t-indigo-600"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}

/// Spinner centered in the content area; used while identity is unresolved.
#[component]
pub fn PageSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center min-h-[50vh]">
            <Spinner />
        </div>
    }
}
