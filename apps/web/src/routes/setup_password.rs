//! First-password page for accounts created by a school administrator. The
//! password guard keeps such users here until the profile reports a created
//! password; afterwards it sends them away.
//!
//! Flow: validate locally, post the password with the session token, refetch
//! the profile and continue to the dashboard.

use crate::{
    app_lib::AppError,
    components::{Alert, AlertKind, AppShell, Button, Spinner},
    features::session::{
        client::setup_password,
        identity::BrowserIdentity,
        resolver::session_token,
        state::use_user,
        types::{MIN_PASSWORD_LENGTH, SetupPasswordRequest},
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{NavigateOptions, hooks::use_navigate};
use tracing::{error, info};

#[component]
pub fn SetupPasswordPage() -> impl IntoView {
    view! {
        <AppShell>
            <SetupPasswordForm />
        </AppShell>
    }
}

#[component]
fn SetupPasswordForm() -> impl IntoView {
    let user = use_user();
    let navigate = use_navigate();
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let setup_action = Action::new_local(move |request: &SetupPasswordRequest| {
        let request = request.clone();
        async move {
            let token = session_token(&BrowserIdentity).await?;
            setup_password(&request, &token).await
        }
    });
    let pending = setup_action.pending();

    Effect::new(move |_| {
        if let Some(result) = setup_action.value().get() {
            match result {
                Ok(()) => {
                    info!("password created");
                    user.refetch();
                    navigate(
                        paths::DASHBOARD,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => {
                    error!("Password setup failed: {err}");
                    set_error.set(Some(err));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        match SetupPasswordRequest::from_form(
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(request) => {
                setup_action.dispatch(request);
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    view! {
        <div class="min-h-[60vh] flex items-center justify-center px-6 py-10">
            <form
                class="w-full max-w-md rounded-2xl border border-gray-200 bg-white p-6 shadow-sm sm:p-8 dark:border-gray-700 dark:bg-gray-800"
                on:submit=on_submit
            >
                <div class="space-y-2">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Create your password"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        {format!(
                            "Your account was created by your school. Choose a password with at least {MIN_PASSWORD_LENGTH} characters to continue."
                        )}
                    </p>
                </div>

                <div class="mt-6 space-y-4">
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-gray-700 dark:text-gray-200"
                            for="password"
                        >
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            autofocus
                            class="w-full rounded-xl border border-gray-200 bg-gray-50 px-3 py-2.5 text-sm text-gray-900 focus:border-indigo-400 focus:ring-2 focus:ring-indigo-200 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                            autocomplete="new-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label
                            class="block mb-2 text-sm font-medium text-gray-700 dark:text-gray-200"
                            for="confirm-password"
                        >
                            "Confirm password"
                        </label>
                        <input
                            id="confirm-password"
                            type="password"
                            class="w-full rounded-xl border border-gray-200 bg-gray-50 px-3 py-2.5 text-sm text-gray-900 focus:border-indigo-400 focus:ring-2 focus:ring-indigo-200 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                            autocomplete="new-password"
                            required
                            on:input=move |event| set_confirm_password.set(event_target_value(&event))
                        />
                    </div>
                </div>

                {move || {
                    error.get().map(|err| view! {
                        <div class="mt-4">
                            <Alert kind=AlertKind::Error message=err.to_string() />
                        </div>
                    })
                }}

                <div class="mt-6 flex items-center gap-3">
                    <Button button_type="submit" disabled=pending>
                        "Save password"
                    </Button>
                    <Show when=move || pending.get()>
                        <Spinner />
                    </Show>
                </div>
            </form>
        </div>
    }
}
