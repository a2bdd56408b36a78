use std::time::Duration;

use guestbook_core::{update, AppState, AppViewModel, Msg};

use super::effects::EffectRunner;

/// Owns the UI state and is the only place it is mutated.
pub struct Controller {
    state: AppState,
    effects: EffectRunner,
}

impl Controller {
    pub fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            effects,
        }
    }

    /// Applies `msg`, hands resulting effects to the engine and reports how many there were.
    pub fn dispatch(&mut self, msg: Msg) -> usize {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        let count = effects.len();
        self.effects.enqueue(effects);
        count
    }

    /// Applies every engine result that has already arrived.
    pub fn drain_engine(&mut self) {
        while let Some(msg) = self.effects.poll() {
            self.dispatch(msg);
        }
    }

    /// Blocks up to `timeout` for the next engine result and applies it.
    pub fn wait_engine(&mut self, timeout: Duration) -> bool {
        match self.effects.wait(timeout) {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }
}
