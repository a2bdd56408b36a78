use alloy_primitives::{Address, B256, U256};
use thiserror::Error;

pub type SubmissionId = u64;

/// One user intent handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub submission_id: SubmissionId,
    pub message: String,
    pub with_attribution: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub account: Address,
    pub chain_id: u64,
    pub balance: U256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SessionConnected(SessionInfo),
    SessionFailed(ProviderError),
    TransactionSent {
        submission_id: SubmissionId,
        hash: B256,
    },
    TransactionConfirmed {
        submission_id: SubmissionId,
        hash: B256,
        block_number: Option<u64>,
    },
    TransactionFailed {
        submission_id: SubmissionId,
        error: ProviderError,
    },
    BatchAccepted {
        submission_id: SubmissionId,
        batch_id: String,
    },
    BatchFailed {
        submission_id: SubmissionId,
        error: ProviderError,
    },
}

/// Failure reported by a provider. `Display` is the provider's own message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn not_connected() -> Self {
        Self::new(ProviderErrorKind::NotConnected, "Connector not connected.")
    }

    pub(crate) fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidResponse, message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// No wallet session; connect first.
    NotConnected,
    /// The user declined the request in the wallet (EIP-1193 code 4001).
    Rejected,
    /// JSON-RPC error object with any other code.
    Rpc { code: i64 },
    /// The transaction was mined but execution failed.
    Reverted,
    Timeout,
    HttpStatus(u16),
    Network,
    InvalidResponse,
}

impl ProviderErrorKind {
    /// Transport trouble that says nothing about the request itself.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout | Self::HttpStatus(_) | Self::Network)
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}
