//! URL templates for RPC providers and block explorers.
//!
//! Every builder returns `None` for an empty credential or for a chain the
//! provider (or explorer) does not serve. None of them fail.

use super::keys::non_empty;
use super::{ApiKeys, Provider};
use crate::chain::{ChainId, chain_info};

impl Provider {
    /// RPC URL for `chain` authenticated with a raw `credential`.
    ///
    /// | Provider | Template |
    /// |----------|----------|
    /// | Alchemy | `https://{slug}.g.alchemy.com/v2/{credential}` |
    /// | Ankr | `https://rpc.ankr.com/{slug}/{credential}` |
    /// | Metamask | `https://{slug}.infura.io/v3/{credential}` |
    /// | `QuickNode` | `https://{subdomain}.{slug}.quiknode.pro/{token}/` |
    ///
    /// The `QuickNode` credential must be `subdomain:token` with both parts
    /// non-empty.
    #[must_use]
    pub fn rpc_url(self, chain: ChainId, credential: &str) -> Option<String> {
        let credential = non_empty(Some(credential))?;
        let slug = chain_info(chain).providers.get(self)?;
        let url = match self {
            Self::Alchemy => format!("https://{slug}.g.alchemy.com/v2/{credential}"),
            Self::Ankr => format!("https://rpc.ankr.com/{slug}/{credential}"),
            Self::Metamask => format!("https://{slug}.infura.io/v3/{credential}"),
            Self::QuickNode => {
                let (subdomain, token) = split_quicknode(credential)?;
                format!("https://{subdomain}.{slug}.quiknode.pro/{token}/")
            }
        };
        Some(url)
    }

    /// Returns `true` if this provider has a network slug for `chain`.
    #[must_use]
    pub const fn supports(self, chain: ChainId) -> bool {
        chain_info(chain).providers.get(self).is_some()
    }
}

impl ApiKeys {
    /// RPC URL for `chain` via `provider`, using this bundle's credential.
    #[must_use]
    pub fn provider_url(&self, provider: Provider, chain: ChainId) -> Option<String> {
        provider.rpc_url(chain, self.credential(provider)?)
    }

    /// Explorer API URL for `chain`, using this bundle's explorer key.
    #[must_use]
    pub fn explorer_api_url(&self, chain: ChainId) -> Option<String> {
        explorer_api_url(chain, self.explorer_key()?)
    }
}

/// Alchemy RPC URL for `chain`.
#[must_use]
pub fn alchemy_url(chain: ChainId, credential: &str) -> Option<String> {
    Provider::Alchemy.rpc_url(chain, credential)
}

/// Ankr RPC URL for `chain`.
#[must_use]
pub fn ankr_url(chain: ChainId, credential: &str) -> Option<String> {
    Provider::Ankr.rpc_url(chain, credential)
}

/// Infura RPC URL for `chain`.
#[must_use]
pub fn metamask_url(chain: ChainId, credential: &str) -> Option<String> {
    Provider::Metamask.rpc_url(chain, credential)
}

/// `QuickNode` RPC URL for `chain`; `credential` is `subdomain:token`.
#[must_use]
pub fn quicknode_url(chain: ChainId, credential: &str) -> Option<String> {
    Provider::QuickNode.rpc_url(chain, credential)
}

/// Etherscan-compatible API URL for `chain`.
///
/// `None` for Solana clusters and for EVM chains without an explorer API.
#[must_use]
pub fn explorer_api_url(chain: ChainId, credential: &str) -> Option<String> {
    let credential = non_empty(Some(credential))?;
    let info = chain_info(chain);
    if info.is_solana() {
        return None;
    }
    let domain = info.explorer_api_domain?;
    Some(format!("https://{domain}/api?apikey={credential}"))
}

/// Browser URL of the block explorer for `chain`.
#[must_use]
pub fn block_explorer_url(chain: ChainId) -> Option<String> {
    let domain = chain_info(chain).explorer_browser_domain?;
    Some(format!("https://{domain}"))
}

fn split_quicknode(credential: &str) -> Option<(&str, &str)> {
    let (subdomain, token) = credential.split_once(':')?;
    if subdomain.is_empty() || token.is_empty() || token.contains(':') {
        return None;
    }
    Some((subdomain, token))
}
