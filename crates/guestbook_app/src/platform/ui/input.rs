use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use guestbook_core::{AppViewModel, Msg, SubmitPath};

use super::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Quit,
    Dispatch(Msg),
}

/// Maps a key press to an action. Disabled controls produce nothing.
pub fn map_key(key: KeyEvent, view: &AppViewModel) -> Option<UiAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        let KeyCode::Char(c) = key.code else {
            return None;
        };
        let submit = |path, with_attribution| {
            view.can_submit.then_some(UiAction::Dispatch(Msg::SubmitClicked {
                path,
                with_attribution,
            }))
        };
        return match c.to_ascii_lowercase() {
            KEY_QUIT => Some(UiAction::Quit),
            KEY_WRITE_WITH => submit(SubmitPath::DirectTransaction, true),
            KEY_WRITE_WITHOUT => submit(SubmitPath::DirectTransaction, false),
            KEY_SEND_WITH => submit(SubmitPath::BatchedCall, true),
            KEY_SEND_WITHOUT => submit(SubmitPath::BatchedCall, false),
            KEY_CONNECT => Some(UiAction::Dispatch(Msg::ConnectClicked)),
            KEY_DISCONNECT => Some(UiAction::Dispatch(Msg::DisconnectClicked)),
            _ => None,
        };
    }

    if key.code == KeyCode::Esc {
        return Some(UiAction::Quit);
    }
    if !view.input_enabled {
        return None;
    }

    let mut message = view.message.clone();
    match key.code {
        KeyCode::Char(c) => message.push(c),
        KeyCode::Enter => message.push('\n'),
        KeyCode::Backspace => {
            message.pop()?;
        }
        _ => return None,
    }
    Some(UiAction::Dispatch(Msg::MessageChanged(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn editable(message: &str) -> AppViewModel {
        AppViewModel {
            message: message.to_string(),
            input_enabled: true,
            can_submit: !message.trim().is_empty(),
            ..AppViewModel::default()
        }
    }

    #[test]
    fn typing_appends_to_message() {
        assert_eq!(
            map_key(plain(KeyCode::Char('m')), &editable("g")),
            Some(UiAction::Dispatch(Msg::MessageChanged("gm".to_string())))
        );
        assert_eq!(
            map_key(plain(KeyCode::Backspace), &editable("gm")),
            Some(UiAction::Dispatch(Msg::MessageChanged("g".to_string())))
        );
        assert_eq!(map_key(plain(KeyCode::Backspace), &editable("")), None);
    }

    #[test]
    fn submit_shortcuts_map_to_the_four_variants() {
        let view = editable("gm");
        let cases = [
            ('w', SubmitPath::DirectTransaction, true),
            ('e', SubmitPath::DirectTransaction, false),
            ('s', SubmitPath::BatchedCall, true),
            ('d', SubmitPath::BatchedCall, false),
        ];
        for (key, path, with_attribution) in cases {
            assert_eq!(
                map_key(ctrl(key), &view),
                Some(UiAction::Dispatch(Msg::SubmitClicked {
                    path,
                    with_attribution
                }))
            );
        }
    }

    #[test]
    fn disabled_buttons_and_editor_ignore_keys() {
        let pending = AppViewModel {
            message: "gm".to_string(),
            is_pending: true,
            ..AppViewModel::default()
        };
        assert_eq!(map_key(ctrl('w'), &pending), None);
        assert_eq!(map_key(plain(KeyCode::Char('x')), &pending), None);
        assert_eq!(map_key(ctrl('s'), &editable("   ")), None);
        assert_eq!(map_key(ctrl('q'), &pending), Some(UiAction::Quit));
    }
}
