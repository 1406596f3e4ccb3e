//! Message update handlers - thin dispatcher delegating to submodules

mod page;
mod settings;
mod stage;
mod window;

use iced::Task;
use iced::time::Instant;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Frames carry their own timestamp; everything else renders at "now"
        if !matches!(message, Message::Frame(_)) {
            self.core.now = Instant::now();
        }

        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_stage(&message) {
            return task;
        }
        if let Some(task) = self.handle_page(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
