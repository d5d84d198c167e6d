//! Input events and keystroke classification

/// A key on the input field that the widget cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
}

/// A keystroke together with the shift modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

/// What a keystroke means to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Submit the current input
    Submit,
    /// Insert a line break into the input
    InsertNewline,
    /// Insert a character into the input
    Insert(char),
}

impl KeyPress {
    pub fn new(key: Key, shift: bool) -> Self {
        Self { key, shift }
    }

    pub fn enter() -> Self {
        Self::new(Key::Enter, false)
    }

    pub fn shift_enter() -> Self {
        Self::new(Key::Enter, true)
    }

    pub fn char(c: char) -> Self {
        Self::new(Key::Char(c), false)
    }

    /// Classify the keystroke.
    ///
    /// Enter submits only without shift; Shift+Enter inserts a newline.
    pub fn action(&self) -> KeyAction {
        match (self.key, self.shift) {
            (Key::Enter, false) => KeyAction::Submit,
            (Key::Enter, true) => KeyAction::InsertNewline,
            (Key::Char(c), _) => KeyAction::Insert(c),
        }
    }
}

/// Anything the user can do to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The send control was activated
    SendActivated,
    /// A key was pressed on the input field
    Key(KeyPress),
}

impl From<KeyPress> for InputEvent {
    fn from(press: KeyPress) -> Self {
        InputEvent::Key(press)
    }
}
