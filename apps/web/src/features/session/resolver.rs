//! Exchange of an identity token for the Alenna profile. The fetch itself is a
//! plain async function over two seams (identity provider, account API) so the
//! failure handling is testable without a browser.

use super::{identity::IdentityProvider, types::UserProfile};
use crate::app_lib::{AppError, resolve::Resolved};
use std::future::Future;

/// Session state: the resolved profile plus its load bookkeeping.
pub(crate) type SessionState = Resolved<UserProfile>;

/// Backend endpoints that take a session token.
pub(crate) trait AccountApi {
    fn fetch_user_info(&self, token: &str) -> impl Future<Output = Result<UserProfile, AppError>>;
}

/// Obtains a token from the identity provider and fetches the profile with it.
pub(crate) async fn load_profile(
    identity: &impl IdentityProvider,
    api: &impl AccountApi,
) -> Result<UserProfile, AppError> {
    let token = session_token(identity).await?;
    api.fetch_user_info(&token).await
}

/// A token is required for every API call; a signed-out provider is an error.
pub(crate) async fn session_token(identity: &impl IdentityProvider) -> Result<String, AppError> {
    identity
        .get_token()
        .await?
        .ok_or_else(|| AppError::Auth("No session token available.".to_string()))
}


#[cfg(test)]
mod tests {
    use super::fakes::{FakeAccountApi, FakeIdentity, profile};
    use super::{SessionState, load_profile};
    use crate::app_lib::{AppError, resolve::LoadPhase};

    #[tokio::test]
    async fn token_is_forwarded_to_profile_fetch() {
        let identity = FakeIdentity::signed_in("tok-123");
        let api = FakeAccountApi::replying(Ok(profile("u1", Some(true))));

        let loaded = load_profile(&identity, &api).await.unwrap();

        assert_eq!(loaded.id, "u1");
        assert_eq!(api.seen_tokens.borrow().as_slice(), ["tok-123"]);
    }

    #[tokio::test]
    async fn missing_token_fails_without_calling_api() {
        let identity = FakeIdentity::signed_out();
        let api = FakeAccountApi::replying(Ok(profile("u1", None)));

        let err = load_profile(&identity, &api).await.unwrap_err();

        assert!(matches!(err, AppError::Auth(_)));
        assert!(api.seen_tokens.borrow().is_empty());
    }

    #[tokio::test]
    async fn identity_errors_propagate() {
        let identity = FakeIdentity {
            token: Err(AppError::Auth("Identity SDK is not loaded.".to_string())),
        };
        let api = FakeAccountApi::replying(Ok(profile("u1", None)));

        let err = load_profile(&identity, &api).await.unwrap_err();
        assert_eq!(err.to_string(), "Authentication error: Identity SDK is not loaded.");
    }

    #[tokio::test]
    async fn http_failure_on_refetch_keeps_profile() {
        let identity = FakeIdentity::signed_in("tok");
        let mut session = SessionState::default();

        let ticket = session.begin();
        let ok = FakeAccountApi::replying(Ok(profile("u1", Some(false))));
        session.settle(ticket, load_profile(&identity, &ok).await);

        let ticket = session.begin();
        let failing = FakeAccountApi::replying(Err(AppError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        }));
        session.settle(ticket, load_profile(&identity, &failing).await);

        assert_eq!(
            session.phase(),
            LoadPhase::Error("Request failed (500): Internal Server Error".to_string())
        );
        assert_eq!(session.value().map(|p| p.id.as_str()), Some("u1"));
    }

    #[tokio::test]
    async fn refetch_replaces_profile_wholesale() {
        let identity = FakeIdentity::signed_in("tok");
        let mut session = SessionState::default();

        let ticket = session.begin();
        let before = FakeAccountApi::replying(Ok(profile("u1", None)));
        session.settle(ticket, load_profile(&identity, &before).await);

        let ticket = session.begin();
        let after = FakeAccountApi::replying(Ok(profile("u1", Some(true))));
        session.settle(ticket, load_profile(&identity, &after).await);

        assert_eq!(
            session.value().and_then(|p| p.created_password),
            Some(true)
        );
    }
}
