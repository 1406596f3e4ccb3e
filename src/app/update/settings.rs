//! Preference handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle preference changes from the page chrome
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleTheme => {
                let display_prefs = &mut self.core.settings.display;
                display_prefs.dark_mode = !display_prefs.dark_mode;
                tracing::info!("Dark mode: {}", display_prefs.dark_mode);
                self.save_settings();
                Some(Task::none())
            }
            _ => None,
        }
    }

    fn save_settings(&self) {
        let Some(path) = &self.core.settings_path else {
            return;
        };
        if let Err(e) = self.core.settings.save_to_file(path) {
            tracing::error!("Failed to save settings: {}", e);
        } else {
            tracing::debug!("Settings saved to {:?}", path);
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::time::Instant;

    use super::*;
    use crate::features::{Manifest, Settings};

    #[test]
    fn test_theme_toggle_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut app = App::with_manifest(Settings::default(), Manifest::builtin(), Instant::now());
        app.core.settings_path = Some(path.clone());
        assert!(matches!(app.theme(iced::window::Id::unique()), iced::Theme::Dark));

        let _ = app.update(Message::ToggleTheme);
        assert!(matches!(app.theme(iced::window::Id::unique()), iced::Theme::Light));
        assert!(!Settings::load_from_file(&path).unwrap().display.dark_mode);

        let _ = app.update(Message::ToggleTheme);
        assert!(Settings::load_from_file(&path).unwrap().display.dark_mode);
    }

    #[test]
    fn test_theme_toggle_without_path_stays_in_memory() {
        let mut app = App::with_manifest(Settings::default(), Manifest::builtin(), Instant::now());
        let _ = app.update(Message::ToggleTheme);
        assert!(!app.core.settings.display.dark_mode);
    }
}
