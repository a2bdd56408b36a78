use std::sync::Arc;

use alloy_primitives::Address;
use engine_logging::{engine_info, engine_warn};

use crate::contract::{encode_sign, GuestBook};
use crate::{
    data_suffix, BatchCaller, Call, Capabilities, ChainWriter, EngineEvent, EventSink,
    ProviderError, ProviderErrorKind, ReceiptStatus, SendCallsRequest, SubmitRequest,
    WriteContractRequest,
};

/// Turns one submit request into exactly one provider call and reports the outcome.
///
/// Provider errors are forwarded as-is; nothing is retried.
pub struct Dispatcher {
    contract: Address,
    writer: Arc<dyn ChainWriter>,
    batcher: Arc<dyn BatchCaller>,
}

impl Dispatcher {
    pub fn new(
        contract: Address,
        writer: Arc<dyn ChainWriter>,
        batcher: Arc<dyn BatchCaller>,
    ) -> Self {
        Self {
            contract,
            writer,
            batcher,
        }
    }

    pub fn contract(&self) -> Address {
        self.contract
    }

    pub fn write_request(&self, message: &str, with_attribution: bool) -> WriteContractRequest {
        WriteContractRequest {
            address: self.contract,
            call: GuestBook::signCall {
                _message: message.to_owned(),
            },
            data_suffix: with_attribution.then(|| data_suffix().clone()),
        }
    }

    pub fn send_calls_request(&self, message: &str, with_attribution: bool) -> SendCallsRequest {
        SendCallsRequest {
            calls: vec![Call {
                to: self.contract,
                data: encode_sign(message),
            }],
            capabilities: with_attribution.then(|| Capabilities {
                data_suffix: data_suffix().clone(),
            }),
        }
    }

    /// Direct path: sign and broadcast, then follow the receipt.
    pub async fn submit_direct(&self, request: SubmitRequest, sink: &dyn EventSink) {
        let submission_id = request.submission_id;
        let write = self.write_request(&request.message, request.with_attribution);

        let hash = match self.writer.write_contract(&write).await {
            Ok(hash) => hash,
            Err(error) => {
                engine_warn!("submission {} write failed: {}", submission_id, error);
                sink.emit(EngineEvent::TransactionFailed {
                    submission_id,
                    error,
                });
                return;
            }
        };
        sink.emit(EngineEvent::TransactionSent {
            submission_id,
            hash,
        });

        let event = match self.writer.wait_for_receipt(hash).await {
            Ok(receipt) if receipt.status == ReceiptStatus::Success => {
                engine_info!(
                    "submission {} confirmed tx={} block={:?}",
                    submission_id,
                    hash,
                    receipt.block_number
                );
                EngineEvent::TransactionConfirmed {
                    submission_id,
                    hash,
                    block_number: receipt.block_number,
                }
            }
            Ok(_) => EngineEvent::TransactionFailed {
                submission_id,
                error: ProviderError::new(
                    ProviderErrorKind::Reverted,
                    format!("Transaction {hash} reverted."),
                ),
            },
            Err(error) => {
                engine_warn!("submission {} receipt failed: {}", submission_id, error);
                EngineEvent::TransactionFailed {
                    submission_id,
                    error,
                }
            }
        };
        sink.emit(event);
    }

    /// Batched path: done as soon as the wallet hands back a batch id.
    pub async fn submit_batched(&self, request: SubmitRequest, sink: &dyn EventSink) {
        let submission_id = request.submission_id;
        let batch = self.send_calls_request(&request.message, request.with_attribution);

        let event = match self.batcher.send_calls(&batch).await {
            Ok(batch_id) => EngineEvent::BatchAccepted {
                submission_id,
                batch_id,
            },
            Err(error) => {
                engine_warn!("submission {} sendCalls failed: {}", submission_id, error);
                EngineEvent::BatchFailed {
                    submission_id,
                    error,
                }
            }
        };
        sink.emit(event);
    }
}
