//! `chains list` command — print registry entries.

use chains::{ChainFamily, ChainInfo, all_chains, visible_chains};

/// Execute the `list` command.
///
/// Without `all`, only chains with a mailer deployment are listed.
///
/// # Errors
///
/// Returns an error if JSON serialisation fails.
#[allow(clippy::print_stdout, clippy::fn_params_excessive_bools)]
pub fn run(
    family: Option<ChainFamily>,
    mainnet_only: bool,
    all: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let chains: Vec<&ChainInfo> = if all {
        all_chains()
            .iter()
            .copied()
            .filter(|info| family.is_none_or(|f| info.family == f))
            .filter(|info| !mainnet_only || !info.is_testnet)
            .collect()
    } else {
        visible_chains(family, !mainnet_only)
    };
    tracing::debug!(count = chains.len(), all, "listing chains");

    if json {
        println!("{}", serde_json::to_string_pretty(&chains)?);
        return Ok(());
    }

    for info in chains {
        println!(
            "{:<20} {:>10}  {:<7} {:<8} {}",
            info.id.as_str(),
            info.numeric_id,
            info.family.as_str(),
            if info.is_testnet { "testnet" } else { "mainnet" },
            info.display_name,
        );
    }
    Ok(())
}
