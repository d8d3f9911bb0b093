//! Session feature: identity provider bridge, profile resolution, and the
//! context every guard and page reads. This module touches the auth boundary
//! and must not log tokens or passwords.
//!
//! Flow Overview: the identity SDK reports a sign-in, the provider asks it for
//! a session token, and `GET /auth/info` turns the token into a `UserProfile`.
//! Sign-out clears the profile; `refetch()` replaces it wholesale.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod identity;
pub(crate) mod resolver;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;
