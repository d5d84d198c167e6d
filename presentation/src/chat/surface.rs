//! Terminal implementation of the render sink

use crate::output::transcript::TranscriptFormatter;
use indicatif::{ProgressBar, ProgressStyle};
use localchat_application::RenderSink;
use localchat_domain::Message;
use std::sync::Mutex;
use std::time::Duration;
use tracing::trace;

/// Render sink that prints entries to stdout.
///
/// New entries go to the bottom of the scrollback, so the newest one is
/// always in view. While awaiting a reply, a spinner labelled with the busy
/// send label stands in for the disabled send control.
pub struct TerminalSurface {
    show_progress: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            show_progress: true,
            spinner: Mutex::new(None),
        }
    }

    /// Set whether to show the awaiting-reply spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Whether the send control is currently disabled
    pub fn is_awaiting(&self) -> bool {
        self.spinner.lock().map(|s| s.is_some()).unwrap_or(false)
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, label: &str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(label.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for TerminalSurface {
    fn append_message(&self, message: &Message) {
        let entry = TranscriptFormatter::entry(message);
        let Ok(spinner) = self.spinner.lock() else {
            println!("{}\n", entry);
            return;
        };
        match spinner.as_ref() {
            Some(pb) => pb.suspend(|| println!("{}\n", entry)),
            None => println!("{}\n", entry),
        }
    }

    fn clear_input(&self) {
        // The line editor empties its buffer when a line is submitted.
        trace!("Input cleared");
    }

    fn set_awaiting(&self, awaiting: bool, send_label: &str) {
        let Ok(mut spinner) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = spinner.take() {
            pb.finish_and_clear();
        }
        if awaiting {
            *spinner = Some(self.start_spinner(send_label));
        }
        trace!("Send control {} ({})", if awaiting { "disabled" } else { "enabled" }, send_label);
    }
}
