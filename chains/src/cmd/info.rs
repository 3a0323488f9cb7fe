//! `chains info` command — print everything derivable for a chain.

use chains::{ChainId, derive_chain_info};

use super::CredentialArgs;

/// Execute the `info` command.
///
/// # Errors
///
/// Returns an error if credentials cannot be loaded or JSON serialisation
/// fails.
#[allow(clippy::print_stdout)]
pub fn run(
    chain: ChainId,
    credentials: &CredentialArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = credentials.load()?;
    let derived = derive_chain_info(&config.chain_config(chain));

    if json {
        println!("{}", serde_json::to_string_pretty(&derived)?);
        return Ok(());
    }

    let or_dash = |v: Option<&str>| v.unwrap_or("-").to_owned();
    println!("chain           {}", derived.chain);
    println!("name            {}", derived.name);
    println!("chain id        {}", derived.chain_id);
    println!("family          {}", derived.family);
    println!("testnet         {}", derived.is_testnet);
    println!(
        "rpc             {}{}",
        or_dash(derived.rpc_url.as_deref()),
        derived
            .rpc_provider
            .map(|p| format!(" ({p})"))
            .unwrap_or_default()
    );
    println!("explorer api    {}", or_dash(derived.explorer_api_url.as_deref()));
    println!("block explorer  {}", or_dash(derived.block_explorer_url.as_deref()));
    println!("usdc            {}", or_dash(derived.usdc_address));
    Ok(())
}
