use guestbook_core::{update, AppState, Msg, SubmitPath};

#[test]
fn blank_submit_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::SubmitClicked {
            path: SubmitPath::BatchedCall,
            with_attribution: true,
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_leaves_state_untouched() {
    let (state, _) = update(AppState::new(), Msg::MessageChanged("gm".to_string()));
    let (next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
