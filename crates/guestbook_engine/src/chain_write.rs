use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::{Address, Bytes, B256};
use alloy_sol_types::SolCall;
use engine_logging::{engine_debug, engine_info, engine_warn};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::contract::GuestBook;
use crate::rpc::parse_quantity;
use crate::{AccountSlot, ProviderError, RpcClient};

/// A structured contract write: target, typed call and optional trailing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteContractRequest {
    pub address: Address,
    pub call: GuestBook::signCall,
    /// Appended after the ABI-encoded call; ignored by the contract.
    pub data_suffix: Option<Bytes>,
}

impl WriteContractRequest {
    pub fn function_name(&self) -> &'static str {
        let signature = GuestBook::signCall::SIGNATURE;
        signature.split('(').next().unwrap_or(signature)
    }

    pub fn args(&self) -> Vec<String> {
        vec![self.call._message.clone()]
    }

    /// Final transaction input: encoded call followed by the suffix, if any.
    pub fn calldata(&self) -> Bytes {
        let mut data = self.call.abi_encode();
        if let Some(suffix) = &self.data_suffix {
            data.extend_from_slice(suffix);
        }
        data.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptStatus {
    Success,
    Reverted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub transaction_hash: B256,
    pub block_number: Option<u64>,
    pub status: ReceiptStatus,
}

#[async_trait::async_trait]
pub trait ChainWriter: Send + Sync {
    /// Has the wallet sign and broadcast the call; returns the transaction hash.
    async fn write_contract(&self, request: &WriteContractRequest) -> Result<B256, ProviderError>;

    /// Resolves once the transaction has a receipt. Never gives up on its own;
    /// transport failures while polling are retried.
    async fn wait_for_receipt(&self, hash: B256) -> Result<Receipt, ProviderError>;
}

#[derive(Serialize)]
struct TransactionRequest {
    from: Address,
    to: Address,
    data: Bytes,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReceipt {
    transaction_hash: B256,
    block_number: Option<String>,
    status: Option<String>,
}

pub struct RpcChainWriter {
    client: Arc<RpcClient>,
    account: AccountSlot,
    poll_interval: Duration,
}

impl RpcChainWriter {
    pub fn new(client: Arc<RpcClient>, account: AccountSlot, poll_interval: Duration) -> Self {
        Self {
            client,
            account,
            poll_interval,
        }
    }
}

#[async_trait::async_trait]
impl ChainWriter for RpcChainWriter {
    async fn write_contract(&self, request: &WriteContractRequest) -> Result<B256, ProviderError> {
        let account = self.account.require()?;
        let tx = TransactionRequest {
            from: account.address,
            to: request.address,
            data: request.calldata(),
        };
        let hash: B256 = self
            .client
            .request("eth_sendTransaction", json!([tx]))
            .await?;
        engine_info!(
            "{} sent to {} tx={}",
            request.function_name(),
            request.address,
            hash
        );
        Ok(hash)
    }

    async fn wait_for_receipt(&self, hash: B256) -> Result<Receipt, ProviderError> {
        loop {
            let receipt: Result<Option<RawReceipt>, ProviderError> = self
                .client
                .request("eth_getTransactionReceipt", json!([hash]))
                .await;
            match receipt {
                Ok(Some(raw)) => return raw.into_receipt(),
                Ok(None) => engine_debug!("no receipt yet for {}", hash),
                // Already broadcast; an unreachable node leaves it pending.
                Err(err) if err.kind.is_transient() => {
                    engine_warn!("receipt poll for {} failed, retrying: {}", hash, err);
                }
                Err(err) => return Err(err),
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

impl RawReceipt {
    fn into_receipt(self) -> Result<Receipt, ProviderError> {
        let block_number = self.block_number.as_deref().map(parse_quantity).transpose()?;
        let status = match self.status.as_deref() {
            Some("0x1") => ReceiptStatus::Success,
            Some("0x0") => ReceiptStatus::Reverted,
            other => {
                return Err(ProviderError::invalid_response(format!(
                    "receipt status {other:?}"
                )))
            }
        };
        Ok(Receipt {
            transaction_hash: self.transaction_hash,
            block_number,
            status,
        })
    }
}
