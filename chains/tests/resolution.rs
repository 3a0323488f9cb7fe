//! End-to-end checks of the public registry and resolver API.

use chains::config::Config;
use chains::{
    ApiKeys, ChainFamily, ChainId, PROVIDER_PRIORITY, Provider, all_chains, block_explorer_url,
    chain_info, chain_info_by_numeric_id, derive_chain_info, explorer_api_url, resolve_rpc,
    rpc_url, visible_chains,
};
use url::Url;

fn full_keys() -> ApiKeys {
    ApiKeys::default()
        .with(Provider::Alchemy, "alchemy-key")
        .with(Provider::Ankr, "ankr-key")
        .with(Provider::Metamask, "infura-key")
        .with(Provider::QuickNode, "my-node:qn-token")
        .with_explorer("scan-key")
}

#[test]
fn every_built_url_is_https_and_carries_the_credential() {
    let keys = full_keys();
    for chain in ChainId::ALL {
        for provider in Provider::ALL {
            let Some(raw) = keys.provider_url(provider, chain) else {
                assert!(!provider.supports(chain), "{provider} should serve {chain}");
                continue;
            };
            let url = Url::parse(&raw).unwrap();
            assert_eq!(url.scheme(), "https");
            let expected = match provider {
                Provider::QuickNode => "qn-token",
                _ => keys.credential(provider).unwrap(),
            };
            assert!(url.path().contains(expected), "{raw}");
        }
        if let Some(raw) = keys.explorer_api_url(chain) {
            let url = Url::parse(&raw).unwrap();
            assert_eq!(url.path(), "/api");
            assert_eq!(url.query(), Some("apikey=scan-key"));
        }
    }
}

#[test]
fn quicknode_host_embeds_subdomain_and_slug() {
    let raw = full_keys()
        .provider_url(Provider::QuickNode, ChainId::ArbitrumSepolia)
        .unwrap();
    let url = Url::parse(&raw).unwrap();
    assert_eq!(url.host_str(), Some("my-node.arbitrum-sepolia.quiknode.pro"));
    assert_eq!(url.path(), "/qn-token/");
}

#[test]
fn solana_never_has_an_explorer_api() {
    for info in all_chains().iter().filter(|info| info.family == ChainFamily::Solana) {
        assert_eq!(explorer_api_url(info.id, "test-api-key"), None);
    }
}

#[test]
fn priority_cascade_end_to_end() {
    let keys = full_keys();
    let first = resolve_rpc(&keys, ChainId::BaseMainnet, None).unwrap();
    assert_eq!(first.provider, PROVIDER_PRIORITY[0]);

    let only_alchemy = ApiKeys::default().with(Provider::Alchemy, "alchemy-key");
    assert_eq!(
        rpc_url(&only_alchemy, ChainId::BaseMainnet, Some(Provider::Ankr)).as_deref(),
        Some("https://base-mainnet.g.alchemy.com/v2/alchemy-key")
    );
}

#[test]
fn numeric_ids_round_trip_through_the_table() {
    for chain in ChainId::ALL {
        assert_eq!(
            chain_info_by_numeric_id(chain.numeric_id()),
            Some(chain_info(chain))
        );
    }
}

#[test]
fn visible_chains_are_exactly_those_with_a_mailer() {
    let visible = visible_chains(None, true);
    assert!(!visible.is_empty());
    let with_mailer: Vec<_> = all_chains()
        .iter()
        .copied()
        .filter(|info| info.mailer_address.is_some())
        .collect();
    assert_eq!(visible, with_mailer);
}

#[test]
fn derive_from_config_file_contents() {
    let config = Config::from_toml_str(
        r#"
        [api_keys]
        alchemy = "test-api-key"
        explorer = "test-api-key"
        "#,
    )
    .unwrap();
    let derived = derive_chain_info(&config.chain_config(ChainId::EthereumMainnet));
    assert_eq!(
        derived.rpc_url.as_deref(),
        Some("https://eth-mainnet.g.alchemy.com/v2/test-api-key")
    );
    assert_eq!(
        derived.explorer_api_url.as_deref(),
        Some("https://api.etherscan.io/api?apikey=test-api-key")
    );
    assert_eq!(derived.block_explorer_url, block_explorer_url(ChainId::EthereumMainnet));

    let json = serde_json::to_value(&derived).unwrap();
    assert_eq!(json["chain"], "ethereum-mainnet");
    assert_eq!(json["family"], "evm");
    assert_eq!(json["rpc_provider"], "alchemy");
}
