//! Which modules the signed-in user may open. The backend decides from the
//! user's role and the school's plan; the frontend only mirrors the answer to
//! pick what to render. Real enforcement stays on the API.

use super::registry::ModuleName;
use crate::{
    app_lib::{
        AppError,
        resolve::{LoadPhase, Resolved},
    },
    features::session::{identity::IdentityProvider, resolver::session_token},
};
use serde::Deserialize;
use std::{collections::BTreeSet, future::Future};
use tracing::warn;

/// Module grants as returned by `/modules/user`: bare keys or objects with a key.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ModuleGrant {
    Key(String),
    Entry { key: String },
}

impl ModuleGrant {
    fn key(&self) -> &str {
        match self {
            ModuleGrant::Key(key) | ModuleGrant::Entry { key } => key,
        }
    }
}

/// Converts backend grants into known modules, skipping keys this build
/// doesn't know about.
pub fn granted_modules(grants: &[ModuleGrant]) -> BTreeSet<ModuleName> {
    grants
        .iter()
        .filter_map(|grant| {
            let module = ModuleName::from_key(grant.key());
            if module.is_none() {
                warn!("Ignoring unknown module grant: {}", grant.key());
            }
            module
        })
        .collect()
}

/// Resolver state for the granted module set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModuleAccess {
    pub resolved: Resolved<BTreeSet<ModuleName>>,
}

impl ModuleAccess {
    pub fn is_loading(&self) -> bool {
        self.resolved.is_loading()
    }

    pub fn phase(&self) -> LoadPhase {
        self.resolved.phase()
    }

    /// `false` for everything until a grant list has been loaded.
    pub fn has_module(&self, module: ModuleName) -> bool {
        self.resolved
            .value()
            .is_some_and(|granted| granted.contains(&module))
    }

    /// Settles with nothing granted and ignores any fetch still in flight.
    pub fn clear(&mut self) {
        self.resolved.clear();
    }

    /// Granted modules in registry order.
    pub fn granted(&self) -> Vec<ModuleName> {
        ModuleName::ALL
            .into_iter()
            .filter(|module| self.has_module(*module))
            .collect()
    }
}

/// Backend endpoint listing the caller's module grants.
pub(crate) trait ModuleApi {
    fn fetch_user_modules(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Vec<ModuleGrant>, AppError>>;
}

pub(crate) async fn load_modules(
    identity: &impl IdentityProvider,
    api: &impl ModuleApi,
) -> Result<BTreeSet<ModuleName>, AppError> {
    let token = session_token(identity).await?;
    let grants = api.fetch_user_modules(&token).await?;
    Ok(granted_modules(&grants))
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::{AppError, ModuleAccess, ModuleApi, ModuleGrant, ModuleName};

    pub(crate) struct FakeModuleApi {
        pub reply: Result<Vec<ModuleGrant>, AppError>,
    }

    impl ModuleApi for FakeModuleApi {
        async fn fetch_user_modules(&self, _token: &str) -> Result<Vec<ModuleGrant>, AppError> {
            self.reply.clone()
        }
    }

    /// A settled access state granting exactly `modules`.
    pub(crate) fn ready(modules: &[ModuleName]) -> ModuleAccess {
        let mut access = ModuleAccess::default();
        let ticket = access.resolved.begin();
        access
            .resolved
            .settle(ticket, Ok(modules.iter().copied().collect()));
        access
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::{FakeModuleApi, ready};
    use super::*;
    use crate::features::session::resolver::fakes::FakeIdentity;

    #[test]
    fn grants_accept_keys_and_objects() {
        let grants: Vec<ModuleGrant> = serde_json::from_str(
            r#"["students", {"key": "reportCards", "name": "Boletas"}, "library"]"#,
        )
        .unwrap();

        let modules = granted_modules(&grants);

        assert_eq!(
            modules.into_iter().collect::<Vec<_>>(),
            vec![ModuleName::Students, ModuleName::ReportCards]
        );
    }

    #[test]
    fn nothing_is_granted_while_loading() {
        let access = ModuleAccess::default();
        assert!(access.is_loading());
        assert!(ModuleName::ALL.iter().all(|m| !access.has_module(*m)));
    }

    #[test]
    fn has_module_reflects_grants() {
        let access = ready(&[ModuleName::Paces, ModuleName::Students]);
        assert!(access.has_module(ModuleName::Paces));
        assert!(!access.has_module(ModuleName::Billing));
        assert_eq!(access.granted(), vec![ModuleName::Students, ModuleName::Paces]);
    }

    #[test]
    fn cleared_access_is_settled_and_empty() {
        let mut access = ready(&[ModuleName::Students]);
        let in_flight = access.resolved.begin();
        access.clear();

        assert!(!access.is_loading());
        assert_eq!(access.phase(), LoadPhase::Ready);
        assert!(access.granted().is_empty());

        let late = Ok([ModuleName::Billing].into_iter().collect());
        assert!(!access.resolved.settle(in_flight, late));
        assert!(!access.has_module(ModuleName::Billing));
    }

    #[tokio::test]
    async fn load_modules_uses_session_token() {
        let identity = FakeIdentity::signed_in("tok");
        let api = FakeModuleApi {
            reply: Ok(vec![ModuleGrant::Key("groups".to_string())]),
        };

        let modules = load_modules(&identity, &api).await.unwrap();
        assert!(modules.contains(&ModuleName::Groups));
    }

    #[tokio::test]
    async fn failed_load_grants_nothing() {
        let identity = FakeIdentity::signed_in("tok");
        let api = FakeModuleApi {
            reply: Err(AppError::Http {
                status: 403,
                message: "Forbidden".to_string(),
            }),
        };

        let mut access = ModuleAccess::default();
        let ticket = access.resolved.begin();
        access.resolved.settle(ticket, load_modules(&identity, &api).await);

        assert_eq!(
            access.phase(),
            LoadPhase::Error("Request failed (403): Forbidden".to_string())
        );
        assert!(!access.has_module(ModuleName::Students));
    }
}
