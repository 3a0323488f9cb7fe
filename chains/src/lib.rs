//! Static chain registry and RPC provider URL resolution.
//!
//! A fixed table of EVM networks and Solana clusters, each described by a
//! `'static` [`ChainInfo`] record, plus pure functions that turn provider
//! credentials into RPC, explorer API and block explorer URLs.
//!
//! ```
//! use chains::{ApiKeys, ChainId, Provider, rpc_url};
//!
//! let keys = ApiKeys::default().with(Provider::Alchemy, "test-api-key");
//! assert_eq!(
//!     rpc_url(&keys, ChainId::EthereumMainnet, None).as_deref(),
//!     Some("https://eth-mainnet.g.alchemy.com/v2/test-api-key"),
//! );
//! assert_eq!(ChainId::SolanaMainnet.numeric_id(), -101);
//! ```
//!
//! Nothing here performs I/O except [`config::load_config`]. Lookups keyed by
//! [`ChainId`] are total; text that names no chain is rejected when parsed.
//! A chain or credential a provider cannot serve yields `None`.

pub mod chain;
pub mod config;
pub mod derive;
pub mod error;
pub mod provider;

pub use self::chain::*;
pub use self::derive::*;
pub use self::error::Error;
pub use self::provider::*;
