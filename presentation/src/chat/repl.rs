//! REPL (Read-Eval-Print Loop) for interactive chat

use super::keybindings::chat_keybindings;
use colored::Colorize;
use localchat_application::ChatController;
use localchat_domain::{InputEvent, KeyPress};
use reedline::{
    DefaultPrompt, DefaultPromptSegment, Emacs, FileBackedHistory, Reedline, Signal,
};
use std::io;
use std::path::PathBuf;
use tracing::warn;

/// Maximum number of input lines kept in history
const HISTORY_CAPACITY: usize = 1000;

/// What a slash command asks the loop to do
enum CommandResult {
    Continue,
    Exit,
}

/// Interactive chat REPL
///
/// Reads one (possibly multi-line) input per iteration and hands it to the
/// controller. The next input is only read once the controller is idle again.
pub struct ChatRepl {
    controller: ChatController,
    service: String,
    history_path: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(controller: ChatController) -> Self {
        Self {
            controller,
            service: String::new(),
            history_path: None,
        }
    }

    /// Describe the chat service in the welcome banner
    pub fn with_service(mut self, description: impl Into<String>) -> Self {
        self.service = description.into();
        self
    }

    /// Persist input history to a file
    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(mut self) -> io::Result<()> {
        let mut editor = self.build_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("you".to_string()),
            DefaultPromptSegment::Basic(format!("[{} ⏎]", self.controller.behavior().send_label)),
        );

        self.print_welcome();
        self.controller.greet();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(buffer) => {
                    if let Some(command) = buffer.trim().strip_prefix('/')
                        && !command.is_empty()
                        && !command.contains(char::is_whitespace)
                    {
                        match self.handle_command(command) {
                            CommandResult::Exit => break,
                            CommandResult::Continue => continue,
                        }
                    }

                    self.controller.set_input(buffer);
                    self.controller
                        .handle_event(InputEvent::Key(KeyPress::enter()))
                        .await;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                _ => {
                    println!("^C");
                    continue;
                }
            }
        }

        Ok(())
    }

    fn build_editor(&self) -> Reedline {
        let mut editor = Reedline::create()
            .with_edit_mode(Box::new(Emacs::new(chat_keybindings())))
            .use_kitty_keyboard_enhancement(true);

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("Could not open history file {}: {}", path.display(), e),
            }
        }

        editor
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "╭─────────────────────────────────────────────╮".cyan());
        println!("{}", "│              localchat - Chat               │".cyan());
        println!("{}", "╰─────────────────────────────────────────────╯".cyan());
        println!();
        if !self.service.is_empty() {
            println!("{} {}", "Service:".bold(), self.service);
        }
        println!(
            "{} Enter to send, Shift+Enter for a new line",
            "Keys:".bold()
        );
        println!("{} /help, /quit", "Commands:".bold());
        println!();
    }

    /// Handle slash commands.
    fn handle_command(&self, cmd: &str) -> CommandResult {
        match cmd {
            "quit" | "exit" | "q" => {
                println!("Bye!");
                CommandResult::Exit
            }
            "help" | "h" | "?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                println!("Enter sends the message, Shift+Enter inserts a new line.");
                println!("Ctrl-D also exits.");
                println!();
                CommandResult::Continue
            }
            _ => {
                println!("Unknown command: /{}", cmd);
                println!("Type /help for available commands");
                CommandResult::Continue
            }
        }
    }
}
