//! Shared frontend utilities for API access, configuration, errors, logging,
//! persisted UI state, and build metadata.
//!
//! ## Request flow
//!
//! 1. **Token:** The identity provider issues a short-lived session token for the
//!    signed-in user (see `features::session::identity`).
//! 2. **Profile:** The token is exchanged for the Alenna profile with
//!    `GET {API_BASE_URL}/auth/info` and an `Authorization: Bearer` header.
//! 3. **Modules:** The same token authorizes `GET {API_BASE_URL}/modules/user`,
//!    which lists the feature areas the user's school plan and role grant.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Tokens are passed through, never
//! stored or logged here.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod logging;
pub(crate) mod resolve;
pub(crate) mod storage;
pub(crate) mod text;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{get_json_with_bearer, post_json_with_bearer};
pub(crate) use errors::AppError;
