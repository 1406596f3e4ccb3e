//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::time::Instant;
use iced::{Task, Theme};

use crate::features::{Manifest, Settings};
use crate::ui::layout;
pub use message::Message;
pub use state::{App, CoreState, StageState, UiState};

impl App {
    /// Build the state for `manifest` without touching the window system
    pub fn with_manifest(settings: Settings, manifest: Manifest, now: Instant) -> Self {
        let environment = settings.environment();
        tracing::info!(
            "Showing {} hero slide(s) and {} showreel clip(s), reduced motion: {}",
            manifest.hero.len(),
            manifest.showreel.len(),
            environment.reduced_motion
        );

        let stage = StageState::new(&manifest, &settings, environment, &manifest.root, now);
        let ui = UiState::new(manifest.sections.clone(), environment);
        let core = CoreState {
            settings,
            settings_path: None,
            environment,
            brand: manifest.brand,
            window_hidden: false,
            started: now,
            now,
        };

        let mut app = Self { core, stage, ui };
        // Measure the first screen before any scroll event arrives
        app.measure_page(now);
        app
    }

    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Settings and manifest
        let settings = Settings::load();
        let manifest = Manifest::resolve(Manifest::requested_path());

        // 2. Initialize sub-states
        let mut app = Self::with_manifest(settings, manifest, Instant::now());
        app.core.settings_path = Settings::file_path();

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(layout::WINDOW_WIDTH, layout::WINDOW_HEIGHT),
            min_size: Some(iced::Size::new(900.0, 600.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "kassabi".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title follows the hero slide on stage
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        match &self.stage.hero {
            Some(hero) => format!("{} - {}", self.core.brand, hero.surface().hud().title),
            None => self.core.brand.clone(),
        }
    }

    /// Subscriptions for frames, keyboard and window events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        let now = Instant::now();

        // 1. Frames while a carousel is counting down or animating
        let needs_frames = subscription_logic::needs_frames(
            self.stage.needs_frames(now),
            self.ui.modal.is_closing() || self.ui.reveals.is_animating(now),
            subscription_logic::equalizer_live(
                self.core.environment.reduced_motion,
                self.core.window_hidden,
            ),
        );
        let frame_sub = if needs_frames {
            iced::window::frames().map(Message::Frame)
        } else {
            iced::Subscription::none()
        };

        // 2. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 3. Focus changes trigger a minimize check; minimized stands in
        // for a hidden tab
        let focus_sub = iced::event::listen_with(|event, _status, id| match event {
            iced::Event::Window(
                iced::window::Event::Focused | iced::window::Event::Unfocused,
            ) => Some(Message::WindowActivity(id)),
            _ => None,
        });

        // 4. Window resize
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        // 5. Quit once the window is gone
        let close_sub = iced::window::close_events().map(|_id| Message::WindowClosed);

        iced::Subscription::batch([frame_sub, keyboard_sub, focus_sub, resize_sub, close_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// The equalizer bounces unless motion is reduced or nobody is looking
    pub fn equalizer_live(reduced_motion: bool, window_hidden: bool) -> bool {
        !reduced_motion && !window_hidden
    }

    /// `page_animating` covers the modal close fade and section reveals
    pub fn needs_frames(stage_active: bool, page_animating: bool, equalizer_live: bool) -> bool {
        stage_active || page_animating || equalizer_live
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn idle_page_under_reduced_motion_needs_no_frames() {
        let live = equalizer_live(true, false);
        assert!(!live);
        assert!(!needs_frames(false, false, live));
    }

    #[test]
    fn hidden_window_stops_equalizer_only() {
        let live = equalizer_live(false, true);
        assert!(!live);
        assert!(needs_frames(true, false, live));
        assert!(needs_frames(false, true, live));
    }

    #[test]
    fn visible_equalizer_keeps_frames_running() {
        assert!(needs_frames(false, false, equalizer_live(false, false)));
    }
}
