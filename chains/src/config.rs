//! Credential configuration loading and default template generation.
//!
//! This module provides:
//!
//! - [`Config`] — provider credentials and an optional preferred provider.
//! - [`load_config`] — reads and parses a TOML configuration file.
//! - [`generate_default_config`] — produces a commented TOML template.
//!
//! # Configuration File Format
//!
//! ```toml
//! preferred_provider = "alchemy"
//!
//! [api_keys]
//! alchemy = "$ALCHEMY_API_KEY"
//! ankr = "${ANKR_API_KEY}"
//! quicknode = "my-endpoint:token"
//! explorer = "$ETHERSCAN_API_KEY"
//! ```
//!
//! Values of the form `$VAR` or `${VAR}` are replaced by the named
//! environment variable; anything else is taken literally.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chain::ChainId;
use crate::derive::ChainConfig;
use crate::error::Error;
use crate::provider::{ApiKeys, Provider};

/// Credentials and provider preference shared by every chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Provider tried before the priority cascade.
    pub preferred_provider: Option<Provider>,
    /// Provider and explorer credentials.
    pub api_keys: ApiKeys,
}

impl Config {
    /// Configuration built from the conventional environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            preferred_provider: None,
            api_keys: ApiKeys::from_env(),
        }
    }

    /// Parses TOML text and resolves environment references.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid configuration or a
    /// referenced environment variable is unset.
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::config(format!("invalid TOML: {e}")))?;
        config.resolve_env_refs()
    }

    /// [`ChainConfig`] for `chain` carrying these credentials.
    #[must_use]
    pub fn chain_config(&self, chain: ChainId) -> ChainConfig {
        ChainConfig {
            chain,
            api_keys: self.api_keys.clone(),
            preferred_provider: self.preferred_provider,
        }
    }

    fn resolve_env_refs(mut self) -> Result<Self, Error> {
        let keys = &mut self.api_keys;
        for slot in [
            &mut keys.alchemy,
            &mut keys.ankr,
            &mut keys.metamask,
            &mut keys.quicknode,
            &mut keys.explorer,
        ] {
            if let Some(value) = slot.take() {
                *slot = Some(resolve_env(&value)?);
            }
        }
        Ok(self)
    }
}

/// Load configuration from a TOML file at the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be resolved, read, or parsed, or if
/// it references an unset environment variable.
pub fn load_config(path: &Path) -> Result<Config, Error> {
    let config_path = path.canonicalize().map_err(|e| {
        Error::io(format!("failed to resolve config path '{}'", path.display()), e)
    })?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::io(
            format!("failed to read config file '{}'", config_path.display()),
            e,
        )
    })?;
    let config = Config::from_toml_str(&content)
        .map_err(|e| Error::config(format!("'{}': {e}", config_path.display())))?;
    tracing::debug!(
        path = %config_path.display(),
        providers = ?config.api_keys.configured(),
        "loaded config"
    );
    Ok(config)
}

/// Resolve an environment-variable reference (`$VAR` or `${VAR}`), returning
/// the literal string unchanged if it does not match either pattern.
fn resolve_env(value: &str) -> Result<String, Error> {
    let var_name = value
        .strip_prefix("${")
        .and_then(|v| v.strip_suffix('}'))
        .or_else(|| {
            value.strip_prefix('$').filter(|name| {
                !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
            })
        });

    match var_name {
        Some(name) => std::env::var(name).map_err(|_| {
            Error::config(format!(
                "env var '{name}' not found (referenced as '{value}')"
            ))
        }),
        None => Ok(value.to_owned()),
    }
}

/// Generate a default TOML configuration template.
#[must_use]
pub fn generate_default_config() -> String {
    String::from(
        r#"# Chain registry credentials
#
# Values support environment variable references: "$VAR" or "${VAR}".
# A referenced variable must be set when the file is loaded.
# Uncomment the providers you use; missing keys disable the provider.

# Provider tried first when resolving an RPC URL.
# One of: alchemy, ankr, metamask (infura), quicknode.
# Without it, providers are tried in order: quicknode, ankr, metamask, alchemy.
# preferred_provider = "alchemy"

[api_keys]
# alchemy = "$ALCHEMY_API_KEY"
# ankr = "$ANKR_API_KEY"
# metamask = "$INFURA_API_KEY"

# QuickNode endpoints are written as "<subdomain>:<token>".
# quicknode = "$QUICKNODE_API_KEY"

# Etherscan-family explorer API key.
# explorer = "$ETHERSCAN_API_KEY"
"#,
    )
}
