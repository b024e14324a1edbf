//! Wallet intents (connect, chain switching, permissions, asset watching) for an
//! injected EIP-1193 provider, expressed as alloy JSON-RPC requests.
//!
//! ```ignore
//! let mut wallet = WalletAdapter::injected(AdapterConfig::default()).expect("no wallet");
//! let accounts = wallet.connect().await?;
//! wallet.switch_to_sepolia().await?;
//! ```

pub mod adapter;
pub mod asset;
pub mod builder;
pub mod chains;
#[cfg(target_arch = "wasm32")]
pub mod eip1193;
pub mod errors;
pub mod helpers;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod webclient;

pub use adapter::{WalletAdapter, WalletResult};
pub use asset::{AssetDescriptor, AssetType, WatchAssetParams};
pub use builder::{AdapterConfig, AdapterConfigBuilder};
pub use chains::{ChainDescriptor, NativeCurrency, ETHEREUM, GNOSIS, SEPOLIA};
#[cfg(target_arch = "wasm32")]
pub use eip1193::Eip1193;
pub use errors::WalletError;
pub use helpers::truncate_address;
pub use webclient::WebClient;
