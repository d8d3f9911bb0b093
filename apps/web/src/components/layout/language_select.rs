//! Interface language picker. The choice is remembered under
//! `alenna-language` and mirrored on `<html lang>`.

use crate::app_lib::storage::{BrowserStore, Language, load_language, save_language};
use leptos::prelude::*;
use tracing::{debug, warn};

fn apply_document_language(language: Language) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    match root {
        Some(root) => {
            if root.set_attribute("lang", language.code()).is_err() {
                warn!("Unable to set document language");
            }
        }
        None => debug!("no document element to tag with a language"),
    }
}

#[component]
pub fn LanguageSelect() -> impl IntoView {
    let language = RwSignal::new(load_language(&*BrowserStore::open_or_memory()));

    Effect::new(move |_| apply_document_language(language.get()));

    let on_change = move |event: leptos::ev::Event| {
        let selected = match event_target_value(&event).as_str() {
            "en" => Language::En,
            _ => Language::Es,
        };
        save_language(&*BrowserStore::open_or_memory(), selected);
        language.set(selected);
    };

    view! {
        <label class="sr-only" for="language">"Language"</label>
        <select
            id="language"
            class="rounded-lg border border-gray-200 bg-white px-2 py-1.5 text-sm text-gray-700 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-200"
            on:change=on_change
            prop:value=move || language.get().code()
        >
            <option value="es">"Español"</option>
            <option value="en">"English"</option>
        </select>
    }
}
