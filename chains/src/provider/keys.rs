//! Per-provider API credentials.

use std::env;

use serde::{Deserialize, Serialize};

use super::Provider;

/// Environment variable read by [`ApiKeys::from_env`] for each credential.
pub const ALCHEMY_API_KEY_ENV: &str = "ALCHEMY_API_KEY";
/// Ankr credential variable.
pub const ANKR_API_KEY_ENV: &str = "ANKR_API_KEY";
/// Infura (`MetaMask`) credential variable.
pub const INFURA_API_KEY_ENV: &str = "INFURA_API_KEY";
/// `QuickNode` credential variable, `subdomain:token`.
pub const QUICKNODE_API_KEY_ENV: &str = "QUICKNODE_API_KEY";
/// Etherscan-family explorer API key variable.
pub const ETHERSCAN_API_KEY_ENV: &str = "ETHERSCAN_API_KEY";

/// Credentials for each RPC provider and for explorer APIs.
///
/// Empty strings are treated the same as missing ones. Contents are
/// otherwise opaque.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiKeys {
    /// Alchemy API key.
    pub alchemy: Option<String>,
    /// Ankr API key.
    pub ankr: Option<String>,
    /// Infura project id, used for [`Provider::Metamask`].
    #[serde(alias = "infura")]
    pub metamask: Option<String>,
    /// `QuickNode` endpoint as `subdomain:token`.
    pub quicknode: Option<String>,
    /// Etherscan-family explorer API key.
    pub explorer: Option<String>,
}

impl ApiKeys {
    /// Reads credentials from the conventional environment variables.
    ///
    /// Unset and empty variables both leave the field `None`.
    #[must_use]
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            alchemy: var(ALCHEMY_API_KEY_ENV),
            ankr: var(ANKR_API_KEY_ENV),
            metamask: var(INFURA_API_KEY_ENV),
            quicknode: var(QUICKNODE_API_KEY_ENV),
            explorer: var(ETHERSCAN_API_KEY_ENV),
        }
    }

    /// Non-empty credential for `provider`.
    #[must_use]
    pub fn credential(&self, provider: Provider) -> Option<&str> {
        let value = match provider {
            Provider::Alchemy => &self.alchemy,
            Provider::Ankr => &self.ankr,
            Provider::Metamask => &self.metamask,
            Provider::QuickNode => &self.quicknode,
        };
        non_empty(value.as_deref())
    }

    /// Non-empty explorer API key.
    #[must_use]
    pub fn explorer_key(&self) -> Option<&str> {
        non_empty(self.explorer.as_deref())
    }

    /// Providers that have a non-empty credential.
    #[must_use]
    pub fn configured(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|p| self.credential(*p).is_some())
            .collect()
    }

    /// Sets the credential for `provider`.
    #[must_use]
    pub fn with(mut self, provider: Provider, credential: impl Into<String>) -> Self {
        let slot = match provider {
            Provider::Alchemy => &mut self.alchemy,
            Provider::Ankr => &mut self.ankr,
            Provider::Metamask => &mut self.metamask,
            Provider::QuickNode => &mut self.quicknode,
        };
        *slot = Some(credential.into());
        self
    }

    /// Sets the explorer API key.
    #[must_use]
    pub fn with_explorer(mut self, key: impl Into<String>) -> Self {
        self.explorer = Some(key.into());
        self
    }
}

// Credentials never reach logs.
impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |v: &Option<String>| non_empty(v.as_deref()).map(|_| "***");
        f.debug_struct("ApiKeys")
            .field("alchemy", &mask(&self.alchemy))
            .field("ankr", &mask(&self.ankr))
            .field("metamask", &mask(&self.metamask))
            .field("quicknode", &mask(&self.quicknode))
            .field("explorer", &mask(&self.explorer))
            .finish()
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
