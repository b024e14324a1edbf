use std::{
    borrow::Cow,
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::atomic::{AtomicU64, Ordering},
};

use alloy_chains::NamedChain;
use alloy_json_rpc::{Id, Request, ResponsePayload};
use alloy_primitives::Address;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::{
    asset::{AssetDescriptor, WatchAssetParams},
    builder::AdapterConfig,
    chains::{ChainDescriptor, ETHEREUM, GNOSIS, SEPOLIA},
    errors::WalletError,
    webclient::WebClient,
};

pub type WalletResult<T> = Result<T, WalletError>;

/// Wallet intents on top of an injected provider.
///
/// `connect`, `switch_to_*`, `watch_asset*` and `get_addresses` return the
/// wallet's error to the caller. `disconnect`, `get_permissions` and
/// `request_permissions` are best-effort: a failure is logged and yields `None`.
pub struct WalletAdapter<C: WebClient> {
    client: C,
    config: AdapterConfig,
    accounts: Vec<Address>,
    next_id: AtomicU64,
}

impl<C: WebClient> WalletAdapter<C> {
    pub fn new(client: C) -> Self {
        Self::with_config(client, AdapterConfig::default())
    }

    pub fn with_config(client: C, config: AdapterConfig) -> Self {
        Self {
            client,
            config,
            accounts: Vec::new(),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Accounts returned by the last successful [`Self::connect`].
    pub fn accounts(&self) -> &[Address] {
        &self.accounts
    }

    /// Whether the last successful [`Self::connect`] returned any account.
    ///
    /// This is not the wallet's live permission state: a later `disconnect`
    /// or a revocation from the wallet UI does not reset it.
    pub fn is_connected(&self) -> bool {
        !self.accounts.is_empty()
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Value,
    ) -> WalletResult<R> {
        let id = Id::Number(self.next_id.fetch_add(1, Ordering::Relaxed));
        let req = Request::new(Cow::Borrowed(method), id, params).serialize()?;
        tracing::debug!(method, "sending wallet request");
        let res = self.client.send(req).await?;
        match res.payload {
            ResponsePayload::Success(raw) => Ok(serde_json::from_str(raw.get())?),
            ResponsePayload::Failure(err) => Err(err.into()),
        }
    }

    /// Best-effort variant of [`Self::request`].
    async fn try_request(&self, method: &'static str, params: Value) -> Option<Value> {
        match self.request(method, params).await {
            Ok(v) => Some(v),
            Err(err) => {
                tracing::warn!(method, %err, "wallet request failed");
                None
            }
        }
    }

    /// Asks the wallet for access (`eth_requestAccounts`) and caches the answer.
    pub async fn connect(&mut self) -> WalletResult<Vec<Address>> {
        let accounts: Vec<Address> = self.request("eth_requestAccounts", json!([])).await?;
        tracing::info!(count = accounts.len(), "wallet connected");
        self.accounts.clone_from(&accounts);
        Ok(accounts)
    }

    /// Revokes the `eth_accounts` permission. The cached accounts are left as they are.
    pub async fn disconnect(&self) -> Option<Value> {
        self.try_request("wallet_revokePermissions", json!([{ "eth_accounts": {} }]))
            .await
    }

    pub async fn switch_to_chain(&self, chain: &ChainDescriptor) -> WalletResult<()> {
        let _: Value = self
            .request("wallet_addEthereumChain", json!([chain]))
            .await?;
        Ok(())
    }

    pub async fn switch_to_named(&self, chain: NamedChain) -> WalletResult<()> {
        let descriptor =
            ChainDescriptor::for_chain(chain).ok_or(WalletError::UnknownChain(chain))?;
        self.switch_to_chain(descriptor).await
    }

    pub async fn switch_to_ethereum(&self) -> WalletResult<()> {
        self.switch_to_chain(&ETHEREUM).await
    }

    pub async fn switch_to_sepolia(&self) -> WalletResult<()> {
        self.switch_to_chain(&SEPOLIA).await
    }

    pub async fn switch_to_gnosis(&self) -> WalletResult<()> {
        self.switch_to_chain(&GNOSIS).await
    }

    pub async fn get_permissions(&self) -> Option<Value> {
        self.try_request("wallet_getPermissions", json!([])).await
    }

    pub async fn request_permissions(&self) -> Option<Value> {
        self.try_request("wallet_requestPermissions", json!([{ "eth_accounts": {} }]))
            .await
    }

    /// Suggests an ERC-20 token to the wallet, announcing the configured decimals
    /// (18 unless overridden). `token` is sent verbatim, no checksum is applied.
    pub async fn watch_asset(&self, token: &str, symbol: &str) -> WalletResult<bool> {
        self.watch_asset_with_decimals(token, symbol, self.config.asset_decimals)
            .await
    }

    pub async fn watch_asset_with_decimals(
        &self,
        token: &str,
        symbol: &str,
        decimals: u8,
    ) -> WalletResult<bool> {
        let params = WatchAssetParams::from(AssetDescriptor::erc20(
            token,
            symbol,
            decimals,
            &self.config.asset_image,
        ));
        self.request("wallet_watchAsset", serde_json::to_value(params)?)
            .await
    }

    /// Accounts the wallet currently exposes (`eth_accounts`), without touching the cache.
    pub async fn get_addresses(&self) -> WalletResult<Vec<Address>> {
        self.request("eth_accounts", json!([])).await
    }
}

impl<C: WebClient> Debug for WalletAdapter<C> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(
            f,
            "Wallet adapter '{}' with accounts {:?}",
            self.config.namespace, self.accounts,
        )
    }
}
