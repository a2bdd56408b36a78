use crate::{SubmissionId, SubmitPath, WalletSession};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the message box.
    MessageChanged(String),
    /// User clicked one of the four submit buttons.
    SubmitClicked {
        path: SubmitPath,
        with_attribution: bool,
    },
    /// User asked to connect the wallet session.
    ConnectClicked,
    /// User asked to drop the wallet session.
    DisconnectClicked,
    /// Wallet session established.
    SessionConnected(WalletSession),
    /// Wallet session could not be established.
    SessionFailed { message: String },
    /// Wallet signed and broadcast the transaction; confirmation pending.
    TransactionSent {
        submission_id: SubmissionId,
        hash: String,
    },
    /// Receipt observed with a success status.
    TransactionConfirmed {
        submission_id: SubmissionId,
        hash: String,
    },
    /// Signing, broadcast or execution failed.
    TransactionFailed {
        submission_id: SubmissionId,
        message: String,
    },
    /// Wallet acknowledged the batch and returned its identifier.
    BatchAccepted {
        submission_id: SubmissionId,
        batch_id: String,
    },
    /// Wallet rejected the batch or the request failed.
    BatchFailed {
        submission_id: SubmissionId,
        message: String,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
}
