use crate::{ActionRecord, BatchStatus, DirectStatus, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub message: String,
    pub session: SessionState,
    /// Logical OR of both paths' pending flags.
    pub is_pending: bool,
    pub input_enabled: bool,
    pub can_submit: bool,
    pub direct: DirectStatus,
    pub batch: BatchStatus,
    pub last_action: Option<ActionRecord>,
    pub transaction_success: Option<TransactionSuccessView>,
    pub batch_success: Option<BatchSuccessView>,
    /// Most recent provider error from either path, verbatim.
    pub error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSuccessView {
    pub hash: String,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSuccessView {
    pub batch_id: String,
    pub method: String,
}
