//! Bridge to the hosted identity provider. Sign-in, MFA and token issuance
//! live in the provider's browser SDK (`window.Clerk`); this module only asks
//! it which user is signed in and for a short-lived session token. Tokens
//! are returned to the caller and never logged.

use crate::app_lib::AppError;
use std::future::Future;

/// What the session resolver needs from an identity provider.
pub(crate) trait IdentityProvider {
    /// Id of the signed-in identity, `None` when signed out.
    fn current_user_id(&self) -> Option<String>;

    /// Returns a bearer token for the API, or `None` when there is no session.
    fn get_token(&self) -> impl Future<Output = Result<Option<String>, AppError>>;
}

/// How the sampled identity differs from the last one seen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum IdentityChange {
    Unchanged,
    /// A user signed in, or a different user replaced the previous one.
    SignedIn(String),
    SignedOut,
}

pub(crate) fn identity_change(previous: Option<&str>, current: Option<&str>) -> IdentityChange {
    match (previous, current) {
        (previous, Some(current)) if previous != Some(current) => {
            IdentityChange::SignedIn(current.to_string())
        }
        (Some(_), None) => IdentityChange::SignedOut,
        _ => IdentityChange::Unchanged,
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use browser::{AuthProvider, BrowserIdentity, IdentityContext, use_identity};

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{IdentityChange, IdentityProvider as _, identity_change};
    use crate::app_lib::AppError;
    use gloo_timers::callback::Interval;
    use js_sys::{Function, Promise, Reflect};
    use leptos::{prelude::*, task::spawn_local};
    use tracing::{debug, error, info};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    /// How often the SDK's signed-in flag is sampled.
    const POLL_INTERVAL_MS: u32 = 500;

    /// `window.Clerk`, looked up on every call so a late-loading script is picked up.
    #[derive(Clone, Copy, Default)]
    pub struct BrowserIdentity;

    impl BrowserIdentity {
        fn sdk() -> Result<JsValue, AppError> {
            let window =
                web_sys::window().ok_or_else(|| AppError::Config("Window not found".into()))?;
            let sdk = Reflect::get(&window, &JsValue::from_str("Clerk"))
                .map_err(|_| AppError::Auth("Identity SDK is not accessible.".into()))?;
            if sdk.is_null() || sdk.is_undefined() {
                return Err(AppError::Auth("Identity SDK is not loaded.".into()));
            }
            Ok(sdk)
        }

        fn property(target: &JsValue, name: &str) -> Option<JsValue> {
            Reflect::get(target, &JsValue::from_str(name))
                .ok()
                .filter(|value| !value.is_null() && !value.is_undefined())
        }

        async fn call_async(target: &JsValue, method: &str) -> Result<JsValue, AppError> {
            let function = Self::property(target, method)
                .and_then(|value| value.dyn_into::<Function>().ok())
                .ok_or_else(|| AppError::Auth(format!("Identity SDK has no {method}()")))?;
            let result = function
                .call0(target)
                .map_err(|_| AppError::Auth(format!("Identity SDK {method}() failed")))?;
            match result.dyn_into::<Promise>() {
                Ok(promise) => JsFuture::from(promise)
                    .await
                    .map_err(|_| AppError::Auth(format!("Identity SDK {method}() was rejected"))),
                Err(value) => Ok(value),
            }
        }

        /// Initializes the SDK (`Clerk.load()`).
        pub async fn load(self) -> Result<(), AppError> {
            let sdk = Self::sdk()?;
            Self::call_async(&sdk, "load").await.map(|_| ())
        }

        pub async fn open_sign_in(self) -> Result<(), AppError> {
            let sdk = Self::sdk()?;
            Self::call_async(&sdk, "openSignIn").await.map(|_| ())
        }

        pub async fn sign_out(self) -> Result<(), AppError> {
            let sdk = Self::sdk()?;
            Self::call_async(&sdk, "signOut").await.map(|_| ())
        }
    }

    impl super::IdentityProvider for BrowserIdentity {
        fn current_user_id(&self) -> Option<String> {
            let user = Self::property(&Self::sdk().ok()?, "user")?;
            Self::property(&user, "id")?
                .as_string()
                .filter(|id| !id.is_empty())
        }

        async fn get_token(&self) -> Result<Option<String>, AppError> {
            let sdk = Self::sdk()?;
            let Some(session) = Self::property(&sdk, "session") else {
                return Ok(None);
            };
            let token = Self::call_async(&session, "getToken").await?;
            Ok(token.as_string().filter(|token| !token.trim().is_empty()))
        }
    }

    /// Identity state shared through Leptos.
    #[derive(Clone, Copy)]
    pub struct IdentityContext {
        /// The SDK finished loading; before that nothing is known about the user.
        pub is_loaded: RwSignal<bool>,
        /// Changes on sign-in, sign-out and when one user replaces another.
        pub user_id: RwSignal<Option<String>>,
        pub is_signed_in: Signal<bool>,
        pub provider: BrowserIdentity,
    }

    impl IdentityContext {
        fn new() -> Self {
            let user_id = RwSignal::new(None::<String>);
            Self {
                is_loaded: RwSignal::new(false),
                user_id,
                is_signed_in: Signal::derive(move || user_id.with(Option::is_some)),
                provider: BrowserIdentity,
            }
        }

        fn sample(&self) {
            let current = self.provider.current_user_id();
            let change = self
                .user_id
                .with_untracked(|previous| identity_change(previous.as_deref(), current.as_deref()));
            match change {
                IdentityChange::Unchanged => return,
                IdentityChange::SignedIn(user_id) => debug!(%user_id, "identity signed in"),
                IdentityChange::SignedOut => debug!("identity signed out"),
            }
            self.user_id.set(current);
        }

        pub fn sign_out(&self) {
            let identity = *self;
            spawn_local(async move {
                if let Err(err) = identity.provider.sign_out().await {
                    error!("Sign-out failed: {err}");
                }
                identity.sample();
            });
        }

        pub fn open_sign_in(&self) {
            let provider = self.provider;
            spawn_local(async move {
                if let Err(err) = provider.open_sign_in().await {
                    error!("Unable to open sign-in: {err}");
                }
            });
        }
    }

    /// Loads the identity SDK and tracks its signed-in flag.
    #[component]
    pub fn AuthProvider(children: Children) -> impl IntoView {
        let identity = IdentityContext::new();
        provide_context(identity);

        spawn_local(async move {
            if let Err(err) = identity.provider.load().await {
                error!("Identity SDK failed to load: {err}");
            }
            identity.sample();
            identity.is_loaded.set(true);
            info!("identity SDK ready");

            Interval::new(POLL_INTERVAL_MS, move || identity.sample()).forget();
        });

        view! { {children()} }
    }

    /// Returns the identity context or a fresh, never-loaded one.
    pub fn use_identity() -> IdentityContext {
        use_context::<IdentityContext>().unwrap_or_else(IdentityContext::new)
    }
}

#[cfg(test)]
mod tests {
    use super::{IdentityChange, identity_change};

    #[test]
    fn sign_in_and_sign_out_are_reported() {
        assert_eq!(
            identity_change(None, Some("user_1")),
            IdentityChange::SignedIn("user_1".to_string())
        );
        assert_eq!(identity_change(Some("user_1"), None), IdentityChange::SignedOut);
    }

    #[test]
    fn switching_users_counts_as_a_new_sign_in() {
        assert_eq!(
            identity_change(Some("user_1"), Some("user_2")),
            IdentityChange::SignedIn("user_2".to_string())
        );
    }

    #[test]
    fn same_user_or_still_signed_out_is_unchanged() {
        assert_eq!(
            identity_change(Some("user_1"), Some("user_1")),
            IdentityChange::Unchanged
        );
        assert_eq!(identity_change(None, None), IdentityChange::Unchanged);
    }
}
