//! RPC providers, credentials, and URL resolution.
//!
//! - [`Provider`] — the supported RPC gateways and their name parsing.
//! - [`ApiKeys`] — one optional credential per provider plus an explorer key.
//! - [`Provider::rpc_url`], [`explorer_api_url`] — per-provider and explorer
//!   URL templates.
//! - [`rpc_url`] — cascade over [`PROVIDER_PRIORITY`].

mod endpoint;
mod keys;
mod resolve;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

pub use self::endpoint::*;
pub use self::keys::*;
pub use self::resolve::*;

/// Third-party RPC gateway.
///
/// Serializes in lowercase; deserializes through [`FromStr`], so config files
/// accept the same spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Alchemy (`*.g.alchemy.com`).
    Alchemy,
    /// Ankr (`rpc.ankr.com`).
    Ankr,
    /// `MetaMask` developer RPC, served by Infura (`*.infura.io`).
    Metamask,
    /// `QuickNode` (`*.quiknode.pro`).
    QuickNode,
}

impl Provider {
    /// Every provider, in declaration order.
    pub const ALL: [Self; 4] = [Self::Alchemy, Self::Ankr, Self::Metamask, Self::QuickNode];

    /// Lowercase name, identical to the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alchemy => "alchemy",
            Self::Ankr => "ankr",
            Self::Metamask => "metamask",
            Self::QuickNode => "quicknode",
        }
    }

    /// Parses an optional preference, treating unknown names as no preference.
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Option<Self> {
        let name = name?;
        match name.parse() {
            Ok(provider) => Some(provider),
            Err(err) => {
                tracing::debug!(%err, "ignoring provider preference");
                None
            }
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = Error;

    /// Case-insensitive; accepts `infura` for [`Provider::Metamask`] and
    /// `quiknode` for [`Provider::QuickNode`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alchemy" => Ok(Self::Alchemy),
            "ankr" => Ok(Self::Ankr),
            "metamask" | "infura" => Ok(Self::Metamask),
            "quicknode" | "quiknode" => Ok(Self::QuickNode),
            _ => Err(Error::UnknownProvider(s.to_owned())),
        }
    }
}

impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Alchemy".parse::<Provider>().unwrap(), Provider::Alchemy);
        assert_eq!("ANKR".parse::<Provider>().unwrap(), Provider::Ankr);
        assert_eq!("Infura".parse::<Provider>().unwrap(), Provider::Metamask);
        assert_eq!("QuickNode".parse::<Provider>().unwrap(), Provider::QuickNode);
        for provider in Provider::ALL {
            assert_eq!(provider.as_str().parse::<Provider>().unwrap(), provider);
        }
    }

    #[test]
    fn unknown_name_is_an_error_or_no_preference() {
        assert!(matches!(
            "chainstack".parse::<Provider>(),
            Err(Error::UnknownProvider(_))
        ));
        assert_eq!(Provider::from_name(Some("chainstack")), None);
        assert_eq!(Provider::from_name(None), None);
        assert_eq!(Provider::from_name(Some("ankr")), Some(Provider::Ankr));
    }

    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&Provider::QuickNode).unwrap();
        assert_eq!(json, "\"quicknode\"");
        let parsed: Provider = serde_json::from_str("\"infura\"").unwrap();
        assert_eq!(parsed, Provider::Metamask);
        let parsed: Provider = serde_json::from_str("\"QuickNode\"").unwrap();
        assert_eq!(parsed, Provider::QuickNode);
        let err = serde_json::from_str::<Provider>("\"chainstack\"").unwrap_err();
        assert!(err.to_string().contains("unknown provider 'chainstack'"));
    }
}
