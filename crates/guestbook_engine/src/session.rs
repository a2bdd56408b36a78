use std::str::FromStr;
use std::sync::{Arc, RwLock};

use alloy_primitives::{Address, U256};
use engine_logging::{engine_info, engine_warn};
use serde_json::json;

use crate::rpc::parse_quantity;
use crate::{ProviderError, ProviderErrorKind, RpcClient, SessionInfo};

const METHOD_NOT_FOUND: i64 = -32601;

/// Connected account the write and batch providers act for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    pub address: Address,
    pub chain_id: u64,
}

/// Shared handle to the currently connected account, if any.
#[derive(Debug, Clone, Default)]
pub struct AccountSlot(Arc<RwLock<Option<Account>>>);

impl AccountSlot {
    pub fn get(&self) -> Option<Account> {
        match self.0.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn set(&self, account: Option<Account>) {
        match self.0.write() {
            Ok(mut guard) => *guard = account,
            Err(poisoned) => *poisoned.into_inner() = account,
        }
    }

    pub(crate) fn require(&self) -> Result<Account, ProviderError> {
        self.get().ok_or_else(ProviderError::not_connected)
    }
}

#[async_trait::async_trait]
pub trait WalletSession: Send + Sync {
    async fn connect(&self) -> Result<SessionInfo, ProviderError>;
    fn disconnect(&self);
}

pub struct RpcWalletSession {
    client: Arc<RpcClient>,
    account: AccountSlot,
}

impl RpcWalletSession {
    pub fn new(client: Arc<RpcClient>, account: AccountSlot) -> Self {
        Self { client, account }
    }

    async fn accounts(&self) -> Result<Vec<Address>, ProviderError> {
        match self.client.request("eth_requestAccounts", json!([])).await {
            Err(err) if err.kind == (ProviderErrorKind::Rpc { code: METHOD_NOT_FOUND }) => {
                engine_warn!("eth_requestAccounts unsupported, falling back to eth_accounts");
                self.client.request("eth_accounts", json!([])).await
            }
            other => other,
        }
    }
}

#[async_trait::async_trait]
impl WalletSession for RpcWalletSession {
    async fn connect(&self) -> Result<SessionInfo, ProviderError> {
        let address = self
            .accounts()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ProviderError::new(ProviderErrorKind::NotConnected, "wallet exposed no accounts")
            })?;

        let chain_id: String = self.client.request("eth_chainId", json!([])).await?;
        let chain_id = parse_quantity(&chain_id)?;

        let balance: String = self
            .client
            .request("eth_getBalance", json!([address, "latest"]))
            .await?;
        let balance = U256::from_str(&balance)
            .map_err(|err| ProviderError::invalid_response(format!("bad balance {balance}: {err}")))?;

        self.account.set(Some(Account { address, chain_id }));
        engine_info!("wallet connected account={} chain_id={}", address, chain_id);
        Ok(SessionInfo {
            account: address,
            chain_id,
            balance,
        })
    }

    fn disconnect(&self) {
        self.account.set(None);
        engine_info!("wallet disconnected");
    }
}
