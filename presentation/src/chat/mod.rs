//! Interactive chat module
//!
//! Provides a line-editor based chat interface: the terminal implementation
//! of the render sink and the REPL that feeds the controller.

mod keybindings;
mod repl;
mod surface;

pub use keybindings::chat_keybindings;
pub use repl::ChatRepl;
pub use surface::TerminalSurface;
