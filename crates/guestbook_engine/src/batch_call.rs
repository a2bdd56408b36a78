use std::sync::Arc;

use alloy_primitives::{Address, Bytes};
use engine_logging::engine_info;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{AccountSlot, ProviderError, RpcClient};

/// EIP-5792 request version sent with `wallet_sendCalls`.
const SEND_CALLS_VERSION: &str = "2.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Call {
    pub to: Address,
    pub data: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub data_suffix: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendCallsRequest {
    pub calls: Vec<Call>,
    pub capabilities: Option<Capabilities>,
}

#[async_trait::async_trait]
pub trait BatchCaller: Send + Sync {
    /// Submits the calls as one wallet request; returns the batch identifier.
    async fn send_calls(&self, request: &SendCallsRequest) -> Result<String, ProviderError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendCallsParams<'a> {
    version: &'static str,
    chain_id: String,
    from: Address,
    atomic_required: bool,
    calls: &'a [Call],
    #[serde(skip_serializing_if = "Option::is_none")]
    capabilities: Option<&'a Capabilities>,
}

/// Wallets on the 1.x draft answer with a bare id string.
#[derive(Deserialize)]
#[serde(untagged)]
enum SendCallsResult {
    Current { id: String },
    Legacy(String),
}

pub struct RpcBatchCaller {
    client: Arc<RpcClient>,
    account: AccountSlot,
}

impl RpcBatchCaller {
    pub fn new(client: Arc<RpcClient>, account: AccountSlot) -> Self {
        Self { client, account }
    }
}

#[async_trait::async_trait]
impl BatchCaller for RpcBatchCaller {
    async fn send_calls(&self, request: &SendCallsRequest) -> Result<String, ProviderError> {
        let account = self.account.require()?;
        let params = SendCallsParams {
            version: SEND_CALLS_VERSION,
            chain_id: format!("{:#x}", account.chain_id),
            from: account.address,
            atomic_required: false,
            calls: &request.calls,
            capabilities: request.capabilities.as_ref(),
        };
        let result: SendCallsResult = self
            .client
            .request("wallet_sendCalls", json!([params]))
            .await?;
        let id = match result {
            SendCallsResult::Current { id } | SendCallsResult::Legacy(id) => id,
        };
        engine_info!("wallet_sendCalls accepted id={} calls={}", id, request.calls.len());
        Ok(id)
    }
}
