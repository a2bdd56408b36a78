#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use alloy_primitives::{Address, B256, U256};
use guestbook_engine::{
    BatchCaller, ChainWriter, EngineEvent, EventSink, ProviderError, Receipt, ReceiptStatus,
    SendCallsRequest, SessionInfo, WalletSession, WriteContractRequest,
};

pub fn tx_hash() -> B256 {
    B256::repeat_byte(0x11)
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<EngineEvent>>,
}

impl RecordingSink {
    pub fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub struct FakeWriter {
    pub writes: Mutex<Vec<WriteContractRequest>>,
    pub receipt_polls: Mutex<Vec<B256>>,
    write_result: Result<B256, ProviderError>,
    receipt_status: ReceiptStatus,
}

impl FakeWriter {
    pub fn confirming() -> Arc<Self> {
        Self::with(Ok(tx_hash()), ReceiptStatus::Success)
    }

    pub fn with(write_result: Result<B256, ProviderError>, receipt_status: ReceiptStatus) -> Arc<Self> {
        Arc::new(Self {
            writes: Mutex::new(Vec::new()),
            receipt_polls: Mutex::new(Vec::new()),
            write_result,
            receipt_status,
        })
    }

    pub fn writes(&self) -> Vec<WriteContractRequest> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ChainWriter for FakeWriter {
    async fn write_contract(&self, request: &WriteContractRequest) -> Result<B256, ProviderError> {
        self.writes.lock().unwrap().push(request.clone());
        self.write_result.clone()
    }

    async fn wait_for_receipt(&self, hash: B256) -> Result<Receipt, ProviderError> {
        self.receipt_polls.lock().unwrap().push(hash);
        Ok(Receipt {
            transaction_hash: hash,
            block_number: Some(7),
            status: self.receipt_status,
        })
    }
}

pub struct FakeBatcher {
    pub batches: Mutex<Vec<SendCallsRequest>>,
    result: Result<String, ProviderError>,
}

impl FakeBatcher {
    pub fn accepting(id: &str) -> Arc<Self> {
        Self::with(Ok(id.to_string()))
    }

    pub fn with(result: Result<String, ProviderError>) -> Arc<Self> {
        Arc::new(Self {
            batches: Mutex::new(Vec::new()),
            result,
        })
    }

    pub fn batches(&self) -> Vec<SendCallsRequest> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl BatchCaller for FakeBatcher {
    async fn send_calls(&self, request: &SendCallsRequest) -> Result<String, ProviderError> {
        self.batches.lock().unwrap().push(request.clone());
        self.result.clone()
    }
}

pub struct FakeSession {
    pub disconnects: Mutex<usize>,
}

impl FakeSession {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            disconnects: Mutex::new(0),
        })
    }

    pub fn info() -> SessionInfo {
        SessionInfo {
            account: Address::repeat_byte(0xaa),
            chain_id: 8453,
            balance: U256::from(1_000_000_000_000_000_000u128),
        }
    }
}

#[async_trait::async_trait]
impl WalletSession for FakeSession {
    async fn connect(&self) -> Result<SessionInfo, ProviderError> {
        Ok(Self::info())
    }

    fn disconnect(&self) {
        *self.disconnects.lock().unwrap() += 1;
    }
}
