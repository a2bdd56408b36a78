use std::fmt;

use crate::view_model::{AppViewModel, BatchSuccessView, TransactionSuccessView};

pub type SubmissionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmitPath {
    /// `writeContract`: the wallet signs one transaction and we wait for its receipt.
    DirectTransaction,
    /// `sendCalls`: the wallet accepts a call batch and hands back an identifier.
    BatchedCall,
}

/// Which of the four submit variants was invoked last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRecord {
    pub path: SubmitPath,
    pub with_attribution: bool,
}

impl ActionRecord {
    pub fn label(&self) -> &'static str {
        match (self.path, self.with_attribution) {
            (SubmitPath::DirectTransaction, true) => "writeContract-with",
            (SubmitPath::DirectTransaction, false) => "writeContract-without",
            (SubmitPath::BatchedCall, true) => "sendCalls-with",
            (SubmitPath::BatchedCall, false) => "sendCalls-without",
        }
    }
}

impl fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DirectStatus {
    #[default]
    Idle,
    AwaitingSignature,
    Confirming {
        hash: String,
    },
    Confirmed {
        hash: String,
    },
    Failed {
        message: String,
    },
}

impl DirectStatus {
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            DirectStatus::AwaitingSignature | DirectStatus::Confirming { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BatchStatus {
    #[default]
    Idle,
    Submitting,
    Accepted {
        batch_id: String,
    },
    Failed {
        message: String,
    },
}

impl BatchStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, BatchStatus::Submitting)
    }
}

/// Connected account as reported by the wallet; display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSession {
    pub account: String,
    pub chain_id: u64,
    /// Balance already formatted in ether.
    pub balance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Disconnected,
    Connecting,
    Connected(WalletSession),
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Track<S> {
    submission: Option<SubmissionId>,
    status: S,
}

impl<S> Track<S> {
    fn is_current(&self, submission_id: SubmissionId) -> bool {
        self.submission == Some(submission_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    message: String,
    last_action: Option<ActionRecord>,
    direct: Track<DirectStatus>,
    batch: Track<BatchStatus>,
    last_failed: Option<SubmitPath>,
    session: SessionState,
    next_submission_id: SubmissionId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn direct_status(&self) -> &DirectStatus {
        &self.direct.status
    }

    pub fn batch_status(&self) -> &BatchStatus {
        &self.batch.status
    }

    pub fn last_action(&self) -> Option<ActionRecord> {
        self.last_action
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Whitespace and the byte-order mark alone do not make a message.
    pub(crate) fn message_is_blank(&self) -> bool {
        self.message
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
            .is_empty()
    }

    /// Either path waiting on a provider.
    pub fn is_pending(&self) -> bool {
        self.direct.status.is_pending() || self.batch.status.is_pending()
    }

    pub fn view(&self) -> AppViewModel {
        let method = self
            .last_action
            .map(|action| action.label().to_string())
            .unwrap_or_default();
        let is_pending = self.is_pending();

        let transaction_success = match &self.direct.status {
            DirectStatus::Confirmed { hash } => Some(TransactionSuccessView {
                hash: hash.clone(),
                method: method.clone(),
            }),
            _ => None,
        };
        let batch_success = match &self.batch.status {
            BatchStatus::Accepted { batch_id } => Some(BatchSuccessView {
                batch_id: batch_id.clone(),
                method,
            }),
            _ => None,
        };

        AppViewModel {
            message: self.message.clone(),
            session: self.session.clone(),
            is_pending,
            input_enabled: !is_pending,
            can_submit: !is_pending && !self.message_is_blank(),
            direct: self.direct.status.clone(),
            batch: self.batch.status.clone(),
            last_action: self.last_action,
            transaction_success,
            batch_success,
            error: self.current_error().map(ToOwned::to_owned),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_message(&mut self, message: String) {
        if self.message != message {
            self.message = message;
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_submission(&mut self, action: ActionRecord) -> SubmissionId {
        self.next_submission_id += 1;
        let submission_id = self.next_submission_id;
        self.last_action = Some(action);
        match action.path {
            SubmitPath::DirectTransaction => {
                self.direct = Track {
                    submission: Some(submission_id),
                    status: DirectStatus::AwaitingSignature,
                };
            }
            SubmitPath::BatchedCall => {
                self.batch = Track {
                    submission: Some(submission_id),
                    status: BatchStatus::Submitting,
                };
            }
        }
        self.mark_dirty();
        submission_id
    }

    pub(crate) fn apply_transaction_sent(&mut self, submission_id: SubmissionId, hash: String) {
        if self.direct.is_current(submission_id)
            && self.direct.status == DirectStatus::AwaitingSignature
        {
            self.direct.status = DirectStatus::Confirming { hash };
            self.mark_dirty();
        }
    }

    pub(crate) fn apply_transaction_confirmed(
        &mut self,
        submission_id: SubmissionId,
        hash: String,
    ) {
        if self.direct.is_current(submission_id) && self.direct.status.is_pending() {
            self.direct.status = DirectStatus::Confirmed { hash };
            self.message.clear();
            self.mark_dirty();
        }
    }

    pub(crate) fn apply_transaction_failed(&mut self, submission_id: SubmissionId, message: String) {
        if self.direct.is_current(submission_id) && self.direct.status.is_pending() {
            self.direct.status = DirectStatus::Failed { message };
            self.last_failed = Some(SubmitPath::DirectTransaction);
            self.mark_dirty();
        }
    }

    pub(crate) fn apply_batch_accepted(&mut self, submission_id: SubmissionId, batch_id: String) {
        if self.batch.is_current(submission_id) && self.batch.status.is_pending() {
            self.batch.status = BatchStatus::Accepted { batch_id };
            self.message.clear();
            self.mark_dirty();
        }
    }

    pub(crate) fn apply_batch_failed(&mut self, submission_id: SubmissionId, message: String) {
        if self.batch.is_current(submission_id) && self.batch.status.is_pending() {
            self.batch.status = BatchStatus::Failed { message };
            self.last_failed = Some(SubmitPath::BatchedCall);
            self.mark_dirty();
        }
    }

    pub(crate) fn set_session(&mut self, session: SessionState) {
        if self.session != session {
            self.session = session;
            self.mark_dirty();
        }
    }

    fn current_error(&self) -> Option<&str> {
        let direct = match &self.direct.status {
            DirectStatus::Failed { message } => Some(message.as_str()),
            _ => None,
        };
        let batch = match &self.batch.status {
            BatchStatus::Failed { message } => Some(message.as_str()),
            _ => None,
        };
        match self.last_failed {
            Some(SubmitPath::BatchedCall) => batch.or(direct),
            _ => direct.or(batch),
        }
    }
}
