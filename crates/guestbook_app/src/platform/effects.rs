use std::time::Duration;

use alloy_primitives::utils::format_ether;
use engine_logging::{engine_info, engine_warn};
use guestbook_core::{Effect, Msg, WalletSession};
use guestbook_engine::{EngineEvent, EngineHandle, SubmitRequest};

/// Executes core effects against the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ConnectWallet => self.engine.connect(),
                Effect::DisconnectWallet => self.engine.disconnect(),
                Effect::WriteContract {
                    submission_id,
                    message,
                    with_attribution,
                } => {
                    engine_info!(
                        "WriteContract submission_id={} message_len={} attribution={}",
                        submission_id,
                        message.len(),
                        with_attribution
                    );
                    self.engine.write_contract(SubmitRequest {
                        submission_id,
                        message,
                        with_attribution,
                    });
                }
                Effect::SendCalls {
                    submission_id,
                    message,
                    with_attribution,
                } => {
                    engine_info!(
                        "SendCalls submission_id={} message_len={} attribution={}",
                        submission_id,
                        message.len(),
                        with_attribution
                    );
                    self.engine.send_calls(SubmitRequest {
                        submission_id,
                        message,
                        with_attribution,
                    });
                }
            }
        }
    }

    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }

    pub fn wait(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SessionConnected(info) => Msg::SessionConnected(WalletSession {
            account: info.account.to_string(),
            chain_id: info.chain_id,
            balance: format_ether(info.balance),
        }),
        EngineEvent::SessionFailed(error) => {
            engine_warn!("Wallet session failed: {}", error);
            Msg::SessionFailed {
                message: error.to_string(),
            }
        }
        EngineEvent::TransactionSent {
            submission_id,
            hash,
        } => Msg::TransactionSent {
            submission_id,
            hash: hash.to_string(),
        },
        EngineEvent::TransactionConfirmed {
            submission_id,
            hash,
            ..
        } => Msg::TransactionConfirmed {
            submission_id,
            hash: hash.to_string(),
        },
        EngineEvent::TransactionFailed {
            submission_id,
            error,
        } => Msg::TransactionFailed {
            submission_id,
            message: error.to_string(),
        },
        EngineEvent::BatchAccepted {
            submission_id,
            batch_id,
        } => Msg::BatchAccepted {
            submission_id,
            batch_id,
        },
        EngineEvent::BatchFailed {
            submission_id,
            error,
        } => Msg::BatchFailed {
            submission_id,
            message: error.to_string(),
        },
    }
}
