//! Networks the wallet can be asked to add or switch to through
//! `wallet_addEthereumChain` (EIP-3085).

use alloy_chains::NamedChain;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// `AddEthereumChainParameter` as wallets expect it. Field order and values are
/// sent as-is; some wallets compare them against their own chain registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainDescriptor {
    pub block_explorer_urls: &'static [&'static str],
    pub icon_urls: &'static [&'static str],
    pub native_currency: NativeCurrency,
    pub rpc_urls: &'static [&'static str],
    pub chain_id: &'static str,
    pub chain_name: &'static str,
}

pub const ETHEREUM: ChainDescriptor = ChainDescriptor {
    block_explorer_urls: &["https://etherscan.io"],
    icon_urls: &[],
    native_currency: NativeCurrency {
        name: "Ether",
        symbol: "ETH",
        decimals: 18,
    },
    rpc_urls: &["https://mainnet.infura.io/v3/", "https://eth.llamarpc.com"],
    chain_id: "0x1",
    chain_name: "Ethereum Mainnet",
};

// omniatech appears twice, kept verbatim
pub const SEPOLIA: ChainDescriptor = ChainDescriptor {
    block_explorer_urls: &["https://sepolia.etherscan.io"],
    icon_urls: &[],
    native_currency: NativeCurrency {
        name: "Sepolia Ether",
        symbol: "ETH",
        decimals: 18,
    },
    rpc_urls: &[
        "https://ethereum-sepolia-rpc.publicnode.com",
        "https://endpoints.omniatech.io/v1/eth/sepolia/public",
        "https://endpoints.omniatech.io/v1/eth/sepolia/public",
    ],
    chain_id: "0xAA36A7",
    chain_name: "Sepolia Testnet",
};

pub const GNOSIS: ChainDescriptor = ChainDescriptor {
    block_explorer_urls: &["https://blockscout.com/poa/xdai/"],
    icon_urls: &[
        "https://xdaichain.com/fake/example/url/xdai.svg",
        "https://xdaichain.com/fake/example/url/xdai.png",
    ],
    native_currency: NativeCurrency {
        name: "XDAI",
        symbol: "XDAI",
        decimals: 18,
    },
    rpc_urls: &["https://rpc.gnosischain.com"],
    chain_id: "0x64",
    chain_name: "Gnosis",
};

/// Every descriptor this crate ships.
pub const KNOWN_CHAINS: [(NamedChain, &ChainDescriptor); 3] = [
    (NamedChain::Mainnet, &ETHEREUM),
    (NamedChain::Sepolia, &SEPOLIA),
    (NamedChain::Gnosis, &GNOSIS),
];

impl ChainDescriptor {
    pub fn for_chain(chain: NamedChain) -> Option<&'static ChainDescriptor> {
        KNOWN_CHAINS
            .iter()
            .find(|(named, _)| *named == chain)
            .map(|(_, descriptor)| *descriptor)
    }

    /// Numeric chain id, `None` if the hex literal does not parse.
    pub fn id(&self) -> Option<u64> {
        let digits = self
            .chain_id
            .strip_prefix("0x")
            .or_else(|| self.chain_id.strip_prefix("0X"))?;
        u64::from_str_radix(digits, 16).ok()
    }

    pub fn named(&self) -> Option<NamedChain> {
        self.id().and_then(|id| NamedChain::try_from(id).ok())
    }
}
