//! CLI definitions and command implementations.

use std::path::PathBuf;

use chains::config::{Config, load_config};
use chains::{ChainFamily, ChainId, Error, Provider};
use clap::{Args, Parser, Subcommand};

pub mod info;
pub mod init;
pub mod list;
pub mod rpc;

/// Chain registry — chain metadata and RPC endpoint resolution.
#[derive(Debug, Parser)]
#[command(name = "chains")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, global = true, env = "CHAINS_LOG", default_value = "warn")]
    pub log_level: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a default TOML credentials file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = "chains.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// List chains where the mailer is deployed.
    List {
        /// Only chains of this family (`evm` or `solana`).
        #[arg(long)]
        family: Option<ChainFamily>,

        /// Leave out test networks.
        #[arg(long, default_value_t = false)]
        mainnet_only: bool,

        /// Include chains without a mailer deployment.
        #[arg(long, default_value_t = false)]
        all: bool,

        /// Print JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show everything derivable for a chain.
    Info {
        /// Chain identifier, e.g. `ethereum-mainnet`.
        chain: ChainId,

        #[command(flatten)]
        credentials: CredentialArgs,

        /// Print JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the RPC URL selected for a chain.
    Rpc {
        /// Chain identifier, e.g. `base-sepolia`.
        chain: ChainId,

        #[command(flatten)]
        credentials: CredentialArgs,
    },
}

/// Where credentials come from and which provider to try first.
#[derive(Debug, Args)]
pub struct CredentialArgs {
    /// TOML credentials file. Without it, keys are read from the environment.
    #[arg(short, long, env = "CHAINS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Provider to try before the priority order.
    #[arg(short, long)]
    pub provider: Option<Provider>,
}

impl CredentialArgs {
    /// Loads credentials and applies the `--provider` override.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded.
    pub fn load(&self) -> Result<Config, Error> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => Config::from_env(),
        };
        if self.provider.is_some() {
            config.preferred_provider = self.provider;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_rpc_with_provider() {
        let cli = Cli::try_parse_from(["chains", "rpc", "base-mainnet", "-p", "Infura"]).unwrap();
        let Commands::Rpc { chain, credentials } = cli.command else {
            panic!("expected rpc command");
        };
        assert_eq!(chain, ChainId::BaseMainnet);
        assert_eq!(credentials.provider, Some(Provider::Metamask));
    }

    #[test]
    fn rejects_unknown_chain() {
        assert!(Cli::try_parse_from(["chains", "info", "goerli"]).is_err());
    }

    #[test]
    fn parses_list_filters() {
        let cli =
            Cli::try_parse_from(["chains", "list", "--family", "solana", "--mainnet-only"]).unwrap();
        let Commands::List {
            family,
            mainnet_only,
            all,
            json,
        } = cli.command
        else {
            panic!("expected list command");
        };
        assert_eq!(family, Some(ChainFamily::Solana));
        assert!(mainnet_only);
        assert!(!all);
        assert!(!json);
    }
}
