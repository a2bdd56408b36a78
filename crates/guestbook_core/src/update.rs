use crate::{ActionRecord, AppState, Effect, Msg, SessionState, SubmitPath};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::MessageChanged(message) => {
            // The editor is disabled while either path is in flight.
            if !state.is_pending() {
                state.set_message(message);
            }
            Vec::new()
        }
        Msg::SubmitClicked {
            path,
            with_attribution,
        } => {
            if state.message_is_blank() {
                return (state, Vec::new());
            }
            let message = state.message().to_owned();
            let submission_id = state.begin_submission(ActionRecord {
                path,
                with_attribution,
            });
            let effect = match path {
                SubmitPath::DirectTransaction => Effect::WriteContract {
                    submission_id,
                    message,
                    with_attribution,
                },
                SubmitPath::BatchedCall => Effect::SendCalls {
                    submission_id,
                    message,
                    with_attribution,
                },
            };
            vec![effect]
        }
        Msg::ConnectClicked => {
            if matches!(state.session(), SessionState::Connecting) {
                Vec::new()
            } else {
                state.set_session(SessionState::Connecting);
                vec![Effect::ConnectWallet]
            }
        }
        Msg::DisconnectClicked => {
            let active = matches!(
                state.session(),
                SessionState::Connected(_) | SessionState::Failed { .. }
            );
            if active {
                state.set_session(SessionState::Disconnected);
                vec![Effect::DisconnectWallet]
            } else {
                Vec::new()
            }
        }
        Msg::SessionConnected(session) => {
            state.set_session(SessionState::Connected(session));
            Vec::new()
        }
        Msg::SessionFailed { message } => {
            state.set_session(SessionState::Failed { message });
            Vec::new()
        }
        Msg::TransactionSent {
            submission_id,
            hash,
        } => {
            state.apply_transaction_sent(submission_id, hash);
            Vec::new()
        }
        Msg::TransactionConfirmed {
            submission_id,
            hash,
        } => {
            state.apply_transaction_confirmed(submission_id, hash);
            Vec::new()
        }
        Msg::TransactionFailed {
            submission_id,
            message,
        } => {
            state.apply_transaction_failed(submission_id, message);
            Vec::new()
        }
        Msg::BatchAccepted {
            submission_id,
            batch_id,
        } => {
            state.apply_batch_accepted(submission_id, batch_id);
            Vec::new()
        }
        Msg::BatchFailed {
            submission_id,
            message,
        } => {
            state.apply_batch_failed(submission_id, message);
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}
