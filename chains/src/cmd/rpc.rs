//! `chains rpc` command — print the selected RPC URL.

use chains::{ChainId, resolve_rpc};

use super::CredentialArgs;

/// Execute the `rpc` command.
///
/// # Errors
///
/// Returns an error if credentials cannot be loaded or no configured
/// provider serves `chain`.
#[allow(clippy::print_stdout)]
pub fn run(chain: ChainId, credentials: &CredentialArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = credentials.load()?;
    let resolved = resolve_rpc(&config.api_keys, chain, config.preferred_provider)
        .ok_or_else(|| format!("no configured provider serves {chain}"))?;

    tracing::info!(%chain, provider = %resolved.provider, "resolved RPC endpoint");
    println!("{}", resolved.url);
    Ok(())
}
