use serde::Serialize;

/// Decimals sent by [`crate::WalletAdapter::watch_asset`] when the caller does not
/// give any.
pub const DEFAULT_DECIMALS: u8 = 18;

pub const DEFAULT_IMAGE: &str = "https://foo.io/token-image.svg";

/// Token class understood by `wallet_watchAsset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssetType {
    #[serde(rename = "ERC20")]
    Erc20,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetDescriptor {
    /// Token contract address, forwarded exactly as the caller wrote it
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
    pub image: String,
}

impl AssetDescriptor {
    pub fn erc20(address: &str, symbol: &str, decimals: u8, image: &str) -> Self {
        Self {
            address: address.to_string(),
            symbol: symbol.to_string(),
            decimals,
            image: image.to_string(),
        }
    }
}

/// Params object of `wallet_watchAsset` (EIP-747). Sent bare, not wrapped in an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchAssetParams {
    #[serde(rename = "type")]
    pub kind: AssetType,
    pub options: AssetDescriptor,
}

impl From<AssetDescriptor> for WatchAssetParams {
    fn from(options: AssetDescriptor) -> Self {
        Self {
            kind: AssetType::Erc20,
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn watch_params_shape() {
        let params = WatchAssetParams::from(AssetDescriptor::erc20(
            "0x6B175474E89094C44Da98b954EedeAC495271d0F",
            "DAI",
            DEFAULT_DECIMALS,
            DEFAULT_IMAGE,
        ));
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "type": "ERC20",
                "options": {
                    "address": "0x6B175474E89094C44Da98b954EedeAC495271d0F",
                    "symbol": "DAI",
                    "decimals": 18,
                    "image": "https://foo.io/token-image.svg"
                }
            })
        );
    }

    #[test]
    fn address_is_not_normalized() {
        for token in ["0x6b175474e89094c44da98b954eedeac495271d0f", "0xTokenAddr"] {
            let asset = AssetDescriptor::erc20(token, "TOK", DEFAULT_DECIMALS, DEFAULT_IMAGE);
            assert_eq!(asset.address, token);
        }
    }
}
