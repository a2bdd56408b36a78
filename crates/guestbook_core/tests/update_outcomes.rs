use guestbook_core::{
    update, AppState, BatchStatus, BatchSuccessView, DirectStatus, Effect, Msg, SubmitPath,
    TransactionSuccessView,
};
use pretty_assertions::assert_eq;

fn submitted(input: &str, path: SubmitPath, with_attribution: bool) -> (AppState, u64) {
    let (state, _) = update(AppState::new(), Msg::MessageChanged(input.to_string()));
    let (state, effects) = update(
        state,
        Msg::SubmitClicked {
            path,
            with_attribution,
        },
    );
    let submission_id = match effects.as_slice() {
        [Effect::WriteContract { submission_id, .. }] | [Effect::SendCalls { submission_id, .. }] => {
            *submission_id
        }
        other => panic!("unexpected effects {other:?}"),
    };
    (state, submission_id)
}

#[test]
fn direct_confirmation_clears_message_and_shows_link() {
    engine_logging::initialize_for_tests();
    let (state, id) = submitted("hello", SubmitPath::DirectTransaction, true);

    let (state, _) = update(
        state,
        Msg::TransactionSent {
            submission_id: id,
            hash: "0x01".to_string(),
        },
    );
    assert_eq!(
        state.direct_status(),
        &DirectStatus::Confirming {
            hash: "0x01".to_string()
        }
    );
    assert_eq!(state.message(), "hello", "broadcast alone is not success");
    assert!(state.view().transaction_success.is_none());
    assert!(state.view().is_pending);

    let (mut state, _) = update(
        state,
        Msg::TransactionConfirmed {
            submission_id: id,
            hash: "0x01".to_string(),
        },
    );
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.message, "");
    assert!(!view.is_pending);
    assert_eq!(
        view.transaction_success,
        Some(TransactionSuccessView {
            hash: "0x01".to_string(),
            method: "writeContract-with".to_string(),
        })
    );
    assert_eq!(view.error, None);
}

#[test]
fn batch_acknowledgment_clears_message_without_confirmation() {
    engine_logging::initialize_for_tests();
    let (state, id) = submitted("gm", SubmitPath::BatchedCall, false);

    let (state, _) = update(
        state,
        Msg::BatchAccepted {
            submission_id: id,
            batch_id: "0xbatch".to_string(),
        },
    );

    let view = state.view();
    assert_eq!(view.message, "");
    assert_eq!(
        view.batch_success,
        Some(BatchSuccessView {
            batch_id: "0xbatch".to_string(),
            method: "sendCalls-without".to_string(),
        })
    );
    assert_eq!(view.direct, DirectStatus::Idle);
}

#[test]
fn direct_error_is_shown_verbatim_and_message_kept() {
    engine_logging::initialize_for_tests();
    let (state, id) = submitted("hello", SubmitPath::DirectTransaction, false);
    let provider_message = "User rejected the request.";

    let (state, _) = update(
        state,
        Msg::TransactionFailed {
            submission_id: id,
            message: provider_message.to_string(),
        },
    );

    let view = state.view();
    assert_eq!(view.error.as_deref(), Some(provider_message));
    assert_eq!(view.message, "hello");
    assert!(!view.is_pending);
    assert!(view.can_submit);
    assert!(view.transaction_success.is_none());
}

#[test]
fn revert_after_broadcast_is_an_error() {
    engine_logging::initialize_for_tests();
    let (state, id) = submitted("hello", SubmitPath::DirectTransaction, false);
    let (state, _) = update(
        state,
        Msg::TransactionSent {
            submission_id: id,
            hash: "0x02".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::TransactionFailed {
            submission_id: id,
            message: "execution reverted".to_string(),
        },
    );

    assert_eq!(
        state.direct_status(),
        &DirectStatus::Failed {
            message: "execution reverted".to_string()
        }
    );
    assert_eq!(state.message(), "hello");
}

#[test]
fn most_recent_error_from_either_path_wins() {
    engine_logging::initialize_for_tests();
    let (state, direct_id) = submitted("hello", SubmitPath::DirectTransaction, false);
    let (state, _) = update(
        state,
        Msg::TransactionFailed {
            submission_id: direct_id,
            message: "direct failed".to_string(),
        },
    );
    let (state, effects) = update(
        state,
        Msg::SubmitClicked {
            path: SubmitPath::BatchedCall,
            with_attribution: true,
        },
    );
    let batch_id = match effects.as_slice() {
        [Effect::SendCalls { submission_id, .. }] => *submission_id,
        other => panic!("unexpected effects {other:?}"),
    };
    assert_eq!(state.view().error.as_deref(), Some("direct failed"));

    let (state, _) = update(
        state,
        Msg::BatchFailed {
            submission_id: batch_id,
            message: "batch failed".to_string(),
        },
    );
    assert_eq!(state.view().error.as_deref(), Some("batch failed"));

    // Restarting the batch path drops its error; the older direct one shows again.
    let (state, _) = update(
        state,
        Msg::SubmitClicked {
            path: SubmitPath::BatchedCall,
            with_attribution: true,
        },
    );
    assert_eq!(state.batch_status(), &BatchStatus::Submitting);
    assert_eq!(state.view().error.as_deref(), Some("direct failed"));
}

#[test]
fn stale_results_from_superseded_submission_are_ignored() {
    engine_logging::initialize_for_tests();
    let (state, first) = submitted("gm", SubmitPath::BatchedCall, false);
    let (state, effects) = update(
        state,
        Msg::SubmitClicked {
            path: SubmitPath::BatchedCall,
            with_attribution: true,
        },
    );
    let second = match effects.as_slice() {
        [Effect::SendCalls { submission_id, .. }] => *submission_id,
        other => panic!("unexpected effects {other:?}"),
    };

    let (mut state, _) = update(
        state,
        Msg::BatchAccepted {
            submission_id: first,
            batch_id: "0xold".to_string(),
        },
    );
    state.consume_dirty();
    assert_eq!(state.batch_status(), &BatchStatus::Submitting);
    assert_eq!(state.message(), "gm");

    let (mut state, _) = update(
        state,
        Msg::BatchFailed {
            submission_id: first,
            message: "late".to_string(),
        },
    );
    assert!(!state.consume_dirty());

    let (state, _) = update(
        state,
        Msg::BatchAccepted {
            submission_id: second,
            batch_id: "0xnew".to_string(),
        },
    );
    assert_eq!(
        state.batch_status(),
        &BatchStatus::Accepted {
            batch_id: "0xnew".to_string()
        }
    );
    assert_eq!(state.message(), "");
}

#[test]
fn results_for_the_other_path_do_not_cross_over() {
    engine_logging::initialize_for_tests();
    let (state, id) = submitted("gm", SubmitPath::BatchedCall, false);

    let (state, _) = update(
        state,
        Msg::TransactionConfirmed {
            submission_id: id,
            hash: "0x03".to_string(),
        },
    );

    assert_eq!(state.direct_status(), &DirectStatus::Idle);
    assert_eq!(state.batch_status(), &BatchStatus::Submitting);
    assert_eq!(state.message(), "gm");
}
