//! Static metadata record types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ChainId;
use crate::error::Error;
use crate::provider::Provider;

/// Chain family, selecting which address and explorer conventions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
    /// EVM-compatible (EIP-155) chain.
    Evm,
    /// Solana cluster.
    Solana,
}

impl ChainFamily {
    /// Lowercase name, identical to the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Evm => "evm",
            Self::Solana => "solana",
        }
    }
}

impl fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "evm" | "eip155" => Ok(Self::Evm),
            "solana" | "svm" => Ok(Self::Solana),
            _ => Err(Error::UnknownFamily(s.to_owned())),
        }
    }
}

/// Network slug each RPC provider uses for a chain.
///
/// `None` means the provider does not serve the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProviderSlugs {
    /// Alchemy subdomain, e.g. `eth-mainnet`.
    pub alchemy: Option<&'static str>,
    /// Ankr path segment, e.g. `eth`.
    pub ankr: Option<&'static str>,
    /// Infura subdomain, e.g. `mainnet`.
    pub metamask: Option<&'static str>,
    /// `QuickNode` network label, e.g. `base-mainnet`.
    pub quicknode: Option<&'static str>,
}

impl ProviderSlugs {
    /// Slug for `provider`, if it serves this chain.
    #[must_use]
    pub const fn get(&self, provider: Provider) -> Option<&'static str> {
        match provider {
            Provider::Alchemy => self.alchemy,
            Provider::Ankr => self.ankr,
            Provider::Metamask => self.metamask,
            Provider::QuickNode => self.quicknode,
        }
    }
}

/// Immutable metadata for one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainInfo {
    /// Identifier this record belongs to.
    pub id: ChainId,
    /// Chain family.
    pub family: ChainFamily,
    /// EIP-155 chain id for EVM chains; a negative synthetic id for Solana.
    pub numeric_id: i64,
    /// Human readable name.
    pub display_name: &'static str,
    /// Per-provider network slugs.
    pub providers: ProviderSlugs,
    /// Etherscan-compatible API host. Always `None` for Solana.
    pub explorer_api_domain: Option<&'static str>,
    /// Block explorer host for browsers.
    pub explorer_browser_domain: Option<&'static str>,
    /// USDC token contract (EVM) or mint (Solana).
    pub usdc_address: Option<&'static str>,
    /// Whether this is a test network.
    pub is_testnet: bool,
    /// Mailer contract/program address; presence marks the chain as visible.
    pub mailer_address: Option<&'static str>,
    /// First block to index the mailer from.
    pub deployment_start_block: Option<u64>,
}

impl ChainInfo {
    /// Returns `true` for EVM chains.
    #[must_use]
    pub const fn is_evm(&self) -> bool {
        matches!(self.family, ChainFamily::Evm)
    }

    /// Returns `true` for Solana clusters.
    #[must_use]
    pub const fn is_solana(&self) -> bool {
        matches!(self.family, ChainFamily::Solana)
    }

    /// Returns `true` when the mailer is deployed on this chain.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.mailer_address.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_names_and_aliases() {
        assert_eq!("EVM".parse::<ChainFamily>().unwrap(), ChainFamily::Evm);
        assert_eq!("eip155".parse::<ChainFamily>().unwrap(), ChainFamily::Evm);
        assert_eq!(" Solana ".parse::<ChainFamily>().unwrap(), ChainFamily::Solana);
        assert_eq!("svm".parse::<ChainFamily>().unwrap(), ChainFamily::Solana);
    }

    #[test]
    fn unknown_family_is_its_own_error() {
        let err = "cosmos".parse::<ChainFamily>().unwrap_err();
        assert!(matches!(&err, Error::UnknownFamily(name) if name == "cosmos"));
        assert_eq!(err.to_string(), "unknown chain family 'cosmos'");
    }
}
