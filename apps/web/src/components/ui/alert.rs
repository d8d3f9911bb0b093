//! Alert banners for status messages. Messages must be safe to render and
//! should never include tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Warning,
}

impl AlertKind {
    fn classes(self) -> &'static str {
        match self {
            AlertKind::Error => {
                "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
            }
            AlertKind::Warning => {
                "rounded-lg border border-amber-200 bg-amber-50 px-4 py-3 text-sm text-amber-800 dark:border-amber-400 dark:bg-amber-900/30 dark:text-amber-200"
            }
        }
    }
}

/// Renders a styled alert banner with an optional bold title.
#[component]
pub fn Alert(
    kind: AlertKind,
    message: String,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    view! {
        <div class=kind.classes() role="alert">
            {title.map(|title| view! { <p class="font-semibold mb-1">{title}</p> })}
            <p>{message}</p>
        </div>
    }
}
