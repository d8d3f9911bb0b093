//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while session, entitlement and API handling
//! live in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod modules;
pub(crate) mod session;
pub(crate) mod students;
