use serde::Deserialize;

use crate::asset::{DEFAULT_DECIMALS, DEFAULT_IMAGE};

pub const DEFAULT_NAMESPACE: &str = "metamask";

/// Host supplied settings for a [`crate::WalletAdapter`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdapterConfig {
    /// Name the host registers the adapter under
    pub namespace: String,
    /// Image sent with every `wallet_watchAsset`
    pub asset_image: String,
    /// Decimals `watch_asset` announces
    pub asset_decimals: u8,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        AdapterConfigBuilder::new().build()
    }
}

pub struct AdapterConfigBuilder {
    pub namespace: String,
    pub asset_image: String,
    pub asset_decimals: u8,
}

impl Default for AdapterConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterConfigBuilder {
    pub fn new() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            asset_image: DEFAULT_IMAGE.to_string(),
            asset_decimals: DEFAULT_DECIMALS,
        }
    }

    pub fn namespace(&mut self, namespace: &str) -> &mut Self {
        self.namespace = namespace.to_string();
        self
    }

    pub fn asset_image(&mut self, url: &str) -> &mut Self {
        self.asset_image = url.to_string();
        self
    }

    pub fn asset_decimals(&mut self, decimals: u8) -> &mut Self {
        self.asset_decimals = decimals;
        self
    }

    pub fn build(&self) -> AdapterConfig {
        AdapterConfig {
            namespace: self.namespace.clone(),
            asset_image: self.asset_image.clone(),
            asset_decimals: self.asset_decimals,
        }
    }
}
