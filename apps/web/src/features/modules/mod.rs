//! Module entitlements: the registry of feature areas and the per-user access
//! resolver that backs `has_module`.

pub(crate) mod access;
#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod registry;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;

pub(crate) use registry::ModuleName;
