use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    DragForward,
    DragBackward,
    Release,
    FlingForward,
    FlingBackward,
    SelectPage(usize),
    FirstPage,
    LastPage,
    ToggleAttach,
    ShowHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.mode == Mode::Help {
        // Any key exits help
        return Action::ExitMode;
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Dragging
        (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => Action::DragForward,
        (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => Action::DragBackward,
        (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => Action::Release,

        // Flicks
        (KeyCode::Char('L'), _) | (KeyCode::Tab, _) => Action::FlingForward,
        (KeyCode::Char('H'), _) | (KeyCode::BackTab, _) => Action::FlingBackward,

        // Programmatic page changes
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::SelectPage(c as usize - '1' as usize)
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::FirstPage,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::LastPage,

        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ToggleAttach,
        (KeyCode::Char('?'), _) => Action::ShowHelp,
        (KeyCode::Esc, _) => Action::ExitMode,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pillbar_core::AppConfig;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let app = App::new(AppConfig::default()).unwrap();
        assert_eq!(handle_key_event(key(KeyCode::Right), &app), Action::DragForward);
        assert_eq!(handle_key_event(key(KeyCode::Char('h')), &app), Action::DragBackward);
        assert_eq!(handle_key_event(key(KeyCode::Char(' ')), &app), Action::Release);
        assert_eq!(handle_key_event(key(KeyCode::Tab), &app), Action::FlingForward);
        assert_eq!(handle_key_event(key(KeyCode::Char('3')), &app), Action::SelectPage(2));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            Action::Quit
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('z')), &app), Action::None);
    }

    #[test]
    fn test_any_key_leaves_help() {
        let mut app = App::new(AppConfig::default()).unwrap();
        app.mode = Mode::Help;
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::ExitMode);
    }
}
