//! Chain registry command-line tool.
//!
//! ```sh
//! chains init                         # Generate default chains.toml
//! chains list --family evm            # Chains with a mailer deployment
//! chains info base-mainnet -c chains.toml
//! chains rpc solana-devnet -p alchemy
//! ```

mod cmd;
mod telemetry;

use clap::Parser;
use cmd::{Cli, Commands};
use dotenvy::dotenv;
use telemetry::Telemetry;

#[allow(clippy::print_stderr)]
fn main() {
    // Load .env variables before clap reads env-backed arguments.
    dotenv().ok();

    let cli = Cli::parse();
    Telemetry::new().with_log_level(&cli.log_level).register();

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Init { output, force } => cmd::init::run(&output, force).map_err(Into::into),
        Commands::List {
            family,
            mainnet_only,
            all,
            json,
        } => cmd::list::run(family, mainnet_only, all, json),
        Commands::Info {
            chain,
            credentials,
            json,
        } => cmd::info::run(chain, &credentials, json),
        Commands::Rpc { chain, credentials } => cmd::rpc::run(chain, &credentials),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
