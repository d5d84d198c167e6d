//! Line-editor key bindings for the chat input

use localchat_domain::{Key, KeyAction, KeyPress};
use reedline::{EditCommand, KeyCode, KeyModifiers, Keybindings, ReedlineEvent, default_emacs_keybindings};

/// Emacs bindings with Enter and Shift+Enter mapped the way the widget
/// classifies them: Enter submits, Shift+Enter inserts a newline.
pub fn chat_keybindings() -> Keybindings {
    let mut keybindings = default_emacs_keybindings();
    for press in [KeyPress::enter(), KeyPress::shift_enter()] {
        let (modifiers, code) = key_combination(press);
        keybindings.add_binding(modifiers, code, reedline_event(press.action()));
    }
    keybindings
}

fn key_combination(press: KeyPress) -> (KeyModifiers, KeyCode) {
    let modifiers = if press.shift {
        KeyModifiers::SHIFT
    } else {
        KeyModifiers::NONE
    };
    let code = match press.key {
        Key::Enter => KeyCode::Enter,
        Key::Char(c) => KeyCode::Char(c),
    };
    (modifiers, code)
}

fn reedline_event(action: KeyAction) -> ReedlineEvent {
    match action {
        KeyAction::Submit => ReedlineEvent::Submit,
        KeyAction::InsertNewline => ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
        KeyAction::Insert(c) => ReedlineEvent::Edit(vec![EditCommand::InsertChar(c)]),
    }
}
