use crate::SubmissionId;

/// Side effects requested by `update`; executed by the app against the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ConnectWallet,
    DisconnectWallet,
    /// Single-transaction path: the engine encodes `sign(message)` itself.
    WriteContract {
        submission_id: SubmissionId,
        message: String,
        with_attribution: bool,
    },
    /// Batched-call path: one `sign(message)` call inside a `wallet_sendCalls` request.
    SendCalls {
        submission_id: SubmissionId,
        message: String,
        with_attribution: bool,
    },
}
