//! Route guards. `decision` holds the rules as pure functions of the session
//! and module access states; `guards` renders them as Leptos components. Both
//! are UX-only and never replace authorization on the API.
//!
//! Composition: `PasswordSetupGuard` and `RequireModule` are independent and
//! may wrap a page in either order; both read the same session context.

pub(crate) mod decision;
#[cfg(target_arch = "wasm32")]
mod guards;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::{PasswordSetupGuard, RequireModule};
