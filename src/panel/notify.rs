//! User-visible notifications raised while serving the panel.

use std::cell::RefCell;
use tracing::error;

/// Sink for messages the host shows to the user
pub trait Notifier {
    /// Show an error message
    fn show_error(&self, message: &str);
}

/// Prints notifications to stderr, keeping stdout free for command output
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn show_error(&self, message: &str) {
        error!(notification = message, "Showing error to user");
        eprintln!("error: {}", message);
    }
}

/// Keeps every notification in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    errors: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages shown so far, oldest first
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
