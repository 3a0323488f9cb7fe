//! The static chain table and read-only accessors over it.
//!
//! Every [`ChainId`] resolves to exactly one `'static` [`ChainInfo`] through
//! an exhaustive `match`, so typed lookups cannot miss. Text lookups go
//! through [`ChainId::from_str`](std::str::FromStr) and fail with
//! [`Error::UnknownChain`].
//!
//! Source for USDC deployments:
//! <https://developers.circle.com/stablecoins/usdc-contract-addresses>

use super::{ChainFamily, ChainId, ChainInfo, ProviderSlugs};
use crate::error::Error;

// Mailer addresses are placeholders until the contracts are deployed. They
// only mark which chains are visible; nothing should be sent to them. EVM
// placeholders are lowercase, i.e. carry no EIP-55 checksum.

/// Placeholder mailer address for EVM mainnets.
const EVM_MAILER: &str = "0x7fb4d7e3a2c1f6b0c9e58d3a41e2f6b9d0c8a513";
/// Placeholder mailer address for EVM testnets.
const EVM_MAILER_TESTNET: &str = "0x3a9c5e2b71d04f8e6a1b3c7d95e0f2a4b6c8d1e7";
/// Placeholder mailer program id for Solana clusters.
const SOLANA_MAILER: &str = "MaiLr9kQ2vX4nP7tB3cR8sW5yH6jD1fG2eA9zU4oK3m";

// Mainnets and testnets are paired per network.

static ETHEREUM_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::EthereumMainnet,
    family: ChainFamily::Evm,
    numeric_id: 1,
    display_name: "Ethereum",
    providers: ProviderSlugs {
        alchemy: Some("eth-mainnet"),
        ankr: Some("eth"),
        metamask: Some("mainnet"),
        quicknode: None,
    },
    explorer_api_domain: Some("api.etherscan.io"),
    explorer_browser_domain: Some("etherscan.io"),
    usdc_address: Some("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
    is_testnet: false,
    mailer_address: Some(EVM_MAILER),
    deployment_start_block: None,
};

static ETHEREUM_SEPOLIA: ChainInfo = ChainInfo {
    id: ChainId::EthereumSepolia,
    family: ChainFamily::Evm,
    numeric_id: 11_155_111,
    display_name: "Ethereum Sepolia",
    providers: ProviderSlugs {
        alchemy: Some("eth-sepolia"),
        ankr: Some("eth_sepolia"),
        metamask: Some("sepolia"),
        quicknode: Some("ethereum-sepolia"),
    },
    explorer_api_domain: Some("api-sepolia.etherscan.io"),
    explorer_browser_domain: Some("sepolia.etherscan.io"),
    usdc_address: Some("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238"),
    is_testnet: true,
    mailer_address: Some(EVM_MAILER_TESTNET),
    deployment_start_block: None,
};

static POLYGON_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::PolygonMainnet,
    family: ChainFamily::Evm,
    numeric_id: 137,
    display_name: "Polygon",
    providers: ProviderSlugs {
        alchemy: Some("polygon-mainnet"),
        ankr: Some("polygon"),
        metamask: Some("polygon-mainnet"),
        quicknode: Some("matic"),
    },
    explorer_api_domain: Some("api.polygonscan.com"),
    explorer_browser_domain: Some("polygonscan.com"),
    usdc_address: Some("0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359"),
    is_testnet: false,
    mailer_address: Some(EVM_MAILER),
    deployment_start_block: None,
};

static POLYGON_AMOY: ChainInfo = ChainInfo {
    id: ChainId::PolygonAmoy,
    family: ChainFamily::Evm,
    numeric_id: 80_002,
    display_name: "Polygon Amoy",
    providers: ProviderSlugs {
        alchemy: Some("polygon-amoy"),
        ankr: Some("polygon_amoy"),
        metamask: Some("polygon-amoy"),
        quicknode: Some("matic-amoy"),
    },
    explorer_api_domain: Some("api-amoy.polygonscan.com"),
    explorer_browser_domain: Some("amoy.polygonscan.com"),
    usdc_address: Some("0x41E94Eb019C0762f9Bfcf9Fb1E58725BfB0e7582"),
    is_testnet: true,
    mailer_address: None,
    deployment_start_block: None,
};

static ARBITRUM_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::ArbitrumMainnet,
    family: ChainFamily::Evm,
    numeric_id: 42_161,
    display_name: "Arbitrum One",
    providers: ProviderSlugs {
        alchemy: Some("arb-mainnet"),
        ankr: Some("arbitrum"),
        metamask: Some("arbitrum-mainnet"),
        quicknode: Some("arbitrum-mainnet"),
    },
    explorer_api_domain: Some("api.arbiscan.io"),
    explorer_browser_domain: Some("arbiscan.io"),
    usdc_address: Some("0xaf88d065e77c8cC2239327C5EDb3A432268e5831"),
    is_testnet: false,
    mailer_address: Some(EVM_MAILER),
    deployment_start_block: None,
};

static ARBITRUM_SEPOLIA: ChainInfo = ChainInfo {
    id: ChainId::ArbitrumSepolia,
    family: ChainFamily::Evm,
    numeric_id: 421_614,
    display_name: "Arbitrum Sepolia",
    providers: ProviderSlugs {
        alchemy: Some("arb-sepolia"),
        ankr: Some("arbitrum_sepolia"),
        metamask: Some("arbitrum-sepolia"),
        quicknode: Some("arbitrum-sepolia"),
    },
    explorer_api_domain: Some("api-sepolia.arbiscan.io"),
    explorer_browser_domain: Some("sepolia.arbiscan.io"),
    usdc_address: Some("0x75faf114eafb1BDbe2F0316DF893fd58CE46AA4d"),
    is_testnet: true,
    mailer_address: None,
    deployment_start_block: None,
};

static OPTIMISM_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::OptimismMainnet,
    family: ChainFamily::Evm,
    numeric_id: 10,
    display_name: "OP Mainnet",
    providers: ProviderSlugs {
        alchemy: Some("opt-mainnet"),
        ankr: Some("optimism"),
        metamask: Some("optimism-mainnet"),
        quicknode: Some("optimism"),
    },
    explorer_api_domain: Some("api-optimistic.etherscan.io"),
    explorer_browser_domain: Some("optimistic.etherscan.io"),
    usdc_address: Some("0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85"),
    is_testnet: false,
    mailer_address: Some(EVM_MAILER),
    deployment_start_block: None,
};

static OPTIMISM_SEPOLIA: ChainInfo = ChainInfo {
    id: ChainId::OptimismSepolia,
    family: ChainFamily::Evm,
    numeric_id: 11_155_420,
    display_name: "OP Sepolia",
    providers: ProviderSlugs {
        alchemy: Some("opt-sepolia"),
        ankr: Some("optimism_sepolia"),
        metamask: Some("optimism-sepolia"),
        quicknode: Some("optimism-sepolia"),
    },
    explorer_api_domain: Some("api-sepolia-optimistic.etherscan.io"),
    explorer_browser_domain: Some("sepolia-optimism.etherscan.io"),
    usdc_address: Some("0x5fd84259d66Cd46123540766Be93DFE6D43130D7"),
    is_testnet: true,
    mailer_address: None,
    deployment_start_block: None,
};

static BASE_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::BaseMainnet,
    family: ChainFamily::Evm,
    numeric_id: 8453,
    display_name: "Base",
    providers: ProviderSlugs {
        alchemy: Some("base-mainnet"),
        ankr: Some("base"),
        metamask: Some("base-mainnet"),
        quicknode: Some("base-mainnet"),
    },
    explorer_api_domain: Some("api.basescan.org"),
    explorer_browser_domain: Some("basescan.org"),
    usdc_address: Some("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
    is_testnet: false,
    mailer_address: Some(EVM_MAILER),
    deployment_start_block: None,
};

static BASE_SEPOLIA: ChainInfo = ChainInfo {
    id: ChainId::BaseSepolia,
    family: ChainFamily::Evm,
    numeric_id: 84_532,
    display_name: "Base Sepolia",
    providers: ProviderSlugs {
        alchemy: Some("base-sepolia"),
        ankr: Some("base_sepolia"),
        metamask: Some("base-sepolia"),
        quicknode: Some("base-sepolia"),
    },
    explorer_api_domain: Some("api-sepolia.basescan.org"),
    explorer_browser_domain: Some("sepolia.basescan.org"),
    usdc_address: Some("0x036CbD53842c5426634e7929541eC2318f3dCF7e"),
    is_testnet: true,
    mailer_address: Some(EVM_MAILER_TESTNET),
    deployment_start_block: None,
};

static AVALANCHE_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::AvalancheMainnet,
    family: ChainFamily::Evm,
    numeric_id: 43_114,
    display_name: "Avalanche C-Chain",
    providers: ProviderSlugs {
        alchemy: Some("avax-mainnet"),
        ankr: Some("avalanche"),
        metamask: Some("avalanche-mainnet"),
        quicknode: Some("avalanche-mainnet"),
    },
    explorer_api_domain: Some("api.snowscan.xyz"),
    explorer_browser_domain: Some("snowscan.xyz"),
    usdc_address: Some("0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E"),
    is_testnet: false,
    mailer_address: None,
    deployment_start_block: None,
};

static AVALANCHE_FUJI: ChainInfo = ChainInfo {
    id: ChainId::AvalancheFuji,
    family: ChainFamily::Evm,
    numeric_id: 43_113,
    display_name: "Avalanche Fuji",
    providers: ProviderSlugs {
        alchemy: Some("avax-fuji"),
        ankr: Some("avalanche_fuji"),
        metamask: Some("avalanche-fuji"),
        quicknode: Some("avalanche-testnet"),
    },
    explorer_api_domain: Some("api-testnet.snowscan.xyz"),
    explorer_browser_domain: Some("testnet.snowscan.xyz"),
    usdc_address: Some("0x5425890298aed601595a70AB815c96711a31Bc65"),
    is_testnet: true,
    mailer_address: None,
    deployment_start_block: None,
};

static BSC_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::BscMainnet,
    family: ChainFamily::Evm,
    numeric_id: 56,
    display_name: "BNB Smart Chain",
    providers: ProviderSlugs {
        alchemy: Some("bnb-mainnet"),
        ankr: Some("bsc"),
        metamask: Some("bsc-mainnet"),
        quicknode: Some("bsc"),
    },
    explorer_api_domain: Some("api.bscscan.com"),
    explorer_browser_domain: Some("bscscan.com"),
    usdc_address: Some("0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d"),
    is_testnet: false,
    mailer_address: None,
    deployment_start_block: None,
};

static BSC_TESTNET: ChainInfo = ChainInfo {
    id: ChainId::BscTestnet,
    family: ChainFamily::Evm,
    numeric_id: 97,
    display_name: "BNB Smart Chain Testnet",
    providers: ProviderSlugs {
        alchemy: Some("bnb-testnet"),
        ankr: Some("bsc_testnet_chapel"),
        metamask: Some("bsc-testnet"),
        quicknode: Some("bsc-testnet"),
    },
    explorer_api_domain: Some("api-testnet.bscscan.com"),
    explorer_browser_domain: Some("testnet.bscscan.com"),
    usdc_address: None,
    is_testnet: true,
    mailer_address: None,
    deployment_start_block: None,
};

static LINEA_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::LineaMainnet,
    family: ChainFamily::Evm,
    numeric_id: 59_144,
    display_name: "Linea",
    providers: ProviderSlugs {
        alchemy: Some("linea-mainnet"),
        ankr: Some("linea"),
        metamask: Some("linea-mainnet"),
        quicknode: Some("linea-mainnet"),
    },
    explorer_api_domain: Some("api.lineascan.build"),
    explorer_browser_domain: Some("lineascan.build"),
    usdc_address: Some("0x176211869cA2b568f2A7D4EE941E073a821EE1ff"),
    is_testnet: false,
    mailer_address: None,
    deployment_start_block: None,
};

static LINEA_SEPOLIA: ChainInfo = ChainInfo {
    id: ChainId::LineaSepolia,
    family: ChainFamily::Evm,
    numeric_id: 59_141,
    display_name: "Linea Sepolia",
    providers: ProviderSlugs {
        alchemy: Some("linea-sepolia"),
        ankr: None,
        metamask: Some("linea-sepolia"),
        quicknode: None,
    },
    explorer_api_domain: Some("api-sepolia.lineascan.build"),
    explorer_browser_domain: Some("sepolia.lineascan.build"),
    usdc_address: Some("0xFEce4462D57bD51A6A552365A011b95f0E16d9B7"),
    is_testnet: true,
    mailer_address: None,
    deployment_start_block: None,
};

static SCROLL_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::ScrollMainnet,
    family: ChainFamily::Evm,
    numeric_id: 534_352,
    display_name: "Scroll",
    providers: ProviderSlugs {
        alchemy: Some("scroll-mainnet"),
        ankr: Some("scroll"),
        metamask: Some("scroll-mainnet"),
        quicknode: Some("scroll-mainnet"),
    },
    explorer_api_domain: Some("api.scrollscan.com"),
    explorer_browser_domain: Some("scrollscan.com"),
    usdc_address: Some("0x06eFdBFf2a14a7c8E15944D1F4A48F9F95F663A4"),
    is_testnet: false,
    mailer_address: None,
    deployment_start_block: None,
};

static SCROLL_SEPOLIA: ChainInfo = ChainInfo {
    id: ChainId::ScrollSepolia,
    family: ChainFamily::Evm,
    numeric_id: 534_351,
    display_name: "Scroll Sepolia",
    providers: ProviderSlugs {
        alchemy: Some("scroll-sepolia"),
        ankr: Some("scroll_sepolia_testnet"),
        metamask: Some("scroll-sepolia"),
        quicknode: None,
    },
    explorer_api_domain: Some("api-sepolia.scrollscan.com"),
    explorer_browser_domain: Some("sepolia.scrollscan.com"),
    usdc_address: None,
    is_testnet: true,
    mailer_address: None,
    deployment_start_block: None,
};

static ZKSYNC_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::ZksyncMainnet,
    family: ChainFamily::Evm,
    numeric_id: 324,
    display_name: "ZKsync Era",
    providers: ProviderSlugs {
        alchemy: Some("zksync-mainnet"),
        ankr: Some("zksync_era"),
        metamask: Some("zksync-mainnet"),
        quicknode: Some("zksync-mainnet"),
    },
    explorer_api_domain: Some("api-era.zksync.network"),
    explorer_browser_domain: Some("era.zksync.network"),
    usdc_address: Some("0x1d17CBcF0D6D143135aE902365D2E5e2A16538D4"),
    is_testnet: false,
    mailer_address: None,
    deployment_start_block: None,
};

static ZKSYNC_SEPOLIA: ChainInfo = ChainInfo {
    id: ChainId::ZksyncSepolia,
    family: ChainFamily::Evm,
    numeric_id: 300,
    display_name: "ZKsync Era Sepolia",
    providers: ProviderSlugs {
        alchemy: Some("zksync-sepolia"),
        ankr: Some("zksync_era_sepolia"),
        metamask: Some("zksync-sepolia"),
        quicknode: None,
    },
    explorer_api_domain: Some("api-sepolia-era.zksync.network"),
    explorer_browser_domain: Some("sepolia-era.zksync.network"),
    usdc_address: Some("0xAe045DE5638162fa134807Cb558E15A3F5A7F853"),
    is_testnet: true,
    mailer_address: None,
    deployment_start_block: None,
};

static GNOSIS_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::GnosisMainnet,
    family: ChainFamily::Evm,
    numeric_id: 100,
    display_name: "Gnosis",
    providers: ProviderSlugs {
        alchemy: Some("gnosis-mainnet"),
        ankr: Some("gnosis"),
        metamask: None,
        quicknode: Some("xdai"),
    },
    explorer_api_domain: Some("api.gnosisscan.io"),
    explorer_browser_domain: Some("gnosisscan.io"),
    usdc_address: Some("0xDDAfbb505ad214D7b80b1f830fcCc89B60fb7A83"),
    is_testnet: false,
    mailer_address: None,
    deployment_start_block: None,
};

static CELO_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::CeloMainnet,
    family: ChainFamily::Evm,
    numeric_id: 42_220,
    display_name: "Celo",
    providers: ProviderSlugs {
        alchemy: Some("celo-mainnet"),
        ankr: Some("celo"),
        metamask: Some("celo-mainnet"),
        quicknode: Some("celo-mainnet"),
    },
    explorer_api_domain: Some("api.celoscan.io"),
    explorer_browser_domain: Some("celoscan.io"),
    usdc_address: Some("0xcebA9300f2b948710d2653dD7B07f33A8B32118C"),
    is_testnet: false,
    mailer_address: None,
    deployment_start_block: None,
};

static BLAST_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::BlastMainnet,
    family: ChainFamily::Evm,
    numeric_id: 81_457,
    display_name: "Blast",
    providers: ProviderSlugs {
        alchemy: Some("blast-mainnet"),
        ankr: Some("blast"),
        metamask: Some("blast-mainnet"),
        quicknode: Some("blast-mainnet"),
    },
    explorer_api_domain: Some("api.blastscan.io"),
    explorer_browser_domain: Some("blastscan.io"),
    usdc_address: None,
    is_testnet: false,
    mailer_address: None,
    deployment_start_block: None,
};

static MANTLE_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::MantleMainnet,
    family: ChainFamily::Evm,
    numeric_id: 5000,
    display_name: "Mantle",
    providers: ProviderSlugs {
        alchemy: Some("mantle-mainnet"),
        ankr: Some("mantle"),
        metamask: Some("mantle-mainnet"),
        quicknode: Some("mantle-mainnet"),
    },
    explorer_api_domain: Some("api.mantlescan.xyz"),
    explorer_browser_domain: Some("mantlescan.xyz"),
    usdc_address: None,
    is_testnet: false,
    mailer_address: None,
    deployment_start_block: None,
};

static SOLANA_MAINNET: ChainInfo = ChainInfo {
    id: ChainId::SolanaMainnet,
    family: ChainFamily::Solana,
    numeric_id: -101,
    display_name: "Solana",
    providers: ProviderSlugs {
        alchemy: Some("solana-mainnet"),
        ankr: Some("solana"),
        metamask: None,
        quicknode: Some("solana-mainnet"),
    },
    explorer_api_domain: None,
    explorer_browser_domain: Some("solscan.io"),
    usdc_address: Some("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"),
    is_testnet: false,
    mailer_address: Some(SOLANA_MAILER),
    deployment_start_block: None,
};

static SOLANA_DEVNET: ChainInfo = ChainInfo {
    id: ChainId::SolanaDevnet,
    family: ChainFamily::Solana,
    numeric_id: -102,
    display_name: "Solana Devnet",
    providers: ProviderSlugs {
        alchemy: Some("solana-devnet"),
        ankr: Some("solana_devnet"),
        metamask: None,
        quicknode: Some("solana-devnet"),
    },
    explorer_api_domain: None,
    explorer_browser_domain: None,
    usdc_address: Some("4zMMC9srt5Ri5X14GAgXhaHii3GnPAEERYPJgZJDncDU"),
    is_testnet: true,
    mailer_address: Some(SOLANA_MAILER),
    deployment_start_block: None,
};

static SOLANA_TESTNET: ChainInfo = ChainInfo {
    id: ChainId::SolanaTestnet,
    family: ChainFamily::Solana,
    numeric_id: -103,
    display_name: "Solana Testnet",
    providers: ProviderSlugs {
        alchemy: None,
        ankr: None,
        metamask: None,
        quicknode: Some("solana-testnet"),
    },
    explorer_api_domain: None,
    explorer_browser_domain: None,
    usdc_address: None,
    is_testnet: true,
    mailer_address: None,
    deployment_start_block: None,
};

/// Every record, in registry order (the order of [`ChainId::ALL`]).
static CHAINS: [&ChainInfo; ChainId::ALL.len()] = [
    &ETHEREUM_MAINNET,
    &ETHEREUM_SEPOLIA,
    &POLYGON_MAINNET,
    &POLYGON_AMOY,
    &ARBITRUM_MAINNET,
    &ARBITRUM_SEPOLIA,
    &OPTIMISM_MAINNET,
    &OPTIMISM_SEPOLIA,
    &BASE_MAINNET,
    &BASE_SEPOLIA,
    &AVALANCHE_MAINNET,
    &AVALANCHE_FUJI,
    &BSC_MAINNET,
    &BSC_TESTNET,
    &LINEA_MAINNET,
    &LINEA_SEPOLIA,
    &SCROLL_MAINNET,
    &SCROLL_SEPOLIA,
    &ZKSYNC_MAINNET,
    &ZKSYNC_SEPOLIA,
    &GNOSIS_MAINNET,
    &CELO_MAINNET,
    &BLAST_MAINNET,
    &MANTLE_MAINNET,
    &SOLANA_MAINNET,
    &SOLANA_DEVNET,
    &SOLANA_TESTNET,
];

/// Returns the record for `id`.
#[must_use]
pub const fn chain_info(id: ChainId) -> &'static ChainInfo {
    match id {
        ChainId::EthereumMainnet => &ETHEREUM_MAINNET,
        ChainId::EthereumSepolia => &ETHEREUM_SEPOLIA,
        ChainId::PolygonMainnet => &POLYGON_MAINNET,
        ChainId::PolygonAmoy => &POLYGON_AMOY,
        ChainId::ArbitrumMainnet => &ARBITRUM_MAINNET,
        ChainId::ArbitrumSepolia => &ARBITRUM_SEPOLIA,
        ChainId::OptimismMainnet => &OPTIMISM_MAINNET,
        ChainId::OptimismSepolia => &OPTIMISM_SEPOLIA,
        ChainId::BaseMainnet => &BASE_MAINNET,
        ChainId::BaseSepolia => &BASE_SEPOLIA,
        ChainId::AvalancheMainnet => &AVALANCHE_MAINNET,
        ChainId::AvalancheFuji => &AVALANCHE_FUJI,
        ChainId::BscMainnet => &BSC_MAINNET,
        ChainId::BscTestnet => &BSC_TESTNET,
        ChainId::LineaMainnet => &LINEA_MAINNET,
        ChainId::LineaSepolia => &LINEA_SEPOLIA,
        ChainId::ScrollMainnet => &SCROLL_MAINNET,
        ChainId::ScrollSepolia => &SCROLL_SEPOLIA,
        ChainId::ZksyncMainnet => &ZKSYNC_MAINNET,
        ChainId::ZksyncSepolia => &ZKSYNC_SEPOLIA,
        ChainId::GnosisMainnet => &GNOSIS_MAINNET,
        ChainId::CeloMainnet => &CELO_MAINNET,
        ChainId::BlastMainnet => &BLAST_MAINNET,
        ChainId::MantleMainnet => &MANTLE_MAINNET,
        ChainId::SolanaMainnet => &SOLANA_MAINNET,
        ChainId::SolanaDevnet => &SOLANA_DEVNET,
        ChainId::SolanaTestnet => &SOLANA_TESTNET,
    }
}

/// Every record, in registry order.
#[must_use]
pub fn all_chains() -> &'static [&'static ChainInfo] {
    &CHAINS
}

/// Looks up a record by its textual identifier.
///
/// # Errors
///
/// Returns [`Error::UnknownChain`] if `name` is not a known identifier.
pub fn lookup(name: &str) -> Result<&'static ChainInfo, Error> {
    name.parse::<ChainId>().map(chain_info)
}

/// Finds the record whose numeric id is `numeric_id`.
#[must_use]
pub fn chain_info_by_numeric_id(numeric_id: i64) -> Option<&'static ChainInfo> {
    CHAINS
        .iter()
        .copied()
        .find(|info| info.numeric_id == numeric_id)
}

/// Returns `true` if `name` identifies an EVM chain. Unknown names are not EVM.
#[must_use]
pub fn is_evm_chain(name: &str) -> bool {
    lookup(name).is_ok_and(ChainInfo::is_evm)
}

/// Returns `true` if `name` identifies a Solana cluster. Unknown names are not Solana.
#[must_use]
pub fn is_solana_chain(name: &str) -> bool {
    lookup(name).is_ok_and(ChainInfo::is_solana)
}

/// Numeric chain id of `id`.
#[must_use]
pub const fn chain_id(id: ChainId) -> i64 {
    chain_info(id).numeric_id
}

/// Family of `id`.
#[must_use]
pub const fn chain_family(id: ChainId) -> ChainFamily {
    chain_info(id).family
}

/// Display name of `id`.
#[must_use]
pub const fn display_name(id: ChainId) -> &'static str {
    chain_info(id).display_name
}

/// USDC address on `id`, if deployed.
#[must_use]
pub const fn usdc_address(id: ChainId) -> Option<&'static str> {
    chain_info(id).usdc_address
}

/// Chains where the mailer is deployed, optionally restricted to one family
/// and to mainnets. Results keep registry order.
#[must_use]
pub fn visible_chains(
    family: Option<ChainFamily>,
    include_testnet: bool,
) -> Vec<&'static ChainInfo> {
    CHAINS
        .iter()
        .copied()
        .filter(|info| family.is_none_or(|f| info.family == f))
        .filter(|info| include_testnet || !info.is_testnet)
        .filter(|info| info.is_visible())
        .collect()
}

impl ChainId {
    /// Record for this chain.
    #[must_use]
    pub const fn info(self) -> &'static ChainInfo {
        chain_info(self)
    }

    /// Numeric chain id.
    #[must_use]
    pub const fn numeric_id(self) -> i64 {
        chain_id(self)
    }

    /// Chain family.
    #[must_use]
    pub const fn family(self) -> ChainFamily {
        chain_family(self)
    }

    /// Human readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        display_name(self)
    }

    /// Returns `true` for EVM chains.
    #[must_use]
    pub const fn is_evm(self) -> bool {
        chain_info(self).is_evm()
    }

    /// Returns `true` for Solana clusters.
    #[must_use]
    pub const fn is_solana(self) -> bool {
        chain_info(self).is_solana()
    }
}
