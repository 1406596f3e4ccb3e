//! Window message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::layout;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            // Focus moving to another window leaves the stage on screen;
            // only a minimized window counts as hidden
            Message::WindowActivity(id) => Some(
                iced::window::is_minimized(*id)
                    .map(|minimized| Message::WindowMinimized(minimized.unwrap_or(false))),
            ),

            &Message::WindowMinimized(hidden) => {
                if self.core.window_hidden == hidden {
                    return Some(Task::none());
                }
                tracing::debug!("Window hidden: {}", hidden);
                self.core.window_hidden = hidden;
                let now = Instant::now();
                for carousel in self.stage.carousels_mut() {
                    carousel.on_visibility_change(hidden, now);
                }
                Some(Task::none())
            }

            Message::WindowResized(size) => {
                // Some platforms report a zero size while minimized
                if size.height <= 0.0 {
                    return Some(Task::none());
                }
                self.ui.viewport_height = layout::viewport_height(size.height);
                self.measure_page(Instant::now());
                Some(Task::none())
            }

            Message::WindowClosed => {
                tracing::info!("Main window closed, exiting");
                Some(iced::exit())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }
}
