//! Page scroll, section navigation and video modal handlers

use iced::Task;
use iced::keyboard::{Key, key::Named};
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::page::{InlineAction, Span, scroll, viewport};
use crate::ui::layout::{PAGE_SCROLL_ID, SECTION_GAP};
use crate::ui::stage::play_inline;

impl App {
    /// Re-evaluate everything that depends on the visible part of the page
    pub(crate) fn measure_page(&mut self, now: Instant) {
        let offset = self.ui.scroll_offset;
        let height = self.ui.viewport_height;
        let visible = Span::new(offset, height);

        self.ui.nav.update(offset, height);

        // Showreel autoplay only runs while enough of it is on screen
        if let (Some(reel), Some(span)) =
            (&mut self.stage.showreel, self.ui.nav.span_of("showreel"))
        {
            reel.on_viewport_change(
                viewport::intersects(span, visible),
                viewport::intersection_ratio(span, visible),
                now,
            );
        }

        for id in self.ui.reveals.update(self.ui.nav.sections(), offset, height, now) {
            tracing::debug!("Revealing section {}", id);
        }

        for (id, action) in self.ui.inline_videos.update(self.ui.nav.sections(), visible) {
            match action {
                InlineAction::Play { reload } => {
                    let Some(media) = self.ui.inline_videos.media(&id) else {
                        continue;
                    };
                    tracing::debug!("Playing inline video in {} (reload: {})", id, reload);
                    if let Err(e) = play_inline(media) {
                        tracing::debug!("Inline video in {} keeps its still: {}", id, e);
                    }
                }
                InlineAction::Pause => tracing::debug!("Pausing inline video in {}", id),
            }
        }
    }

    /// Handle scroll, nav and modal messages
    pub fn handle_page(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::PageScrolled {
                offset,
                viewport_height,
                content_height,
            } => {
                self.ui.scroll_progress = scroll::progress(*offset, *content_height, *viewport_height);
                self.ui.scroll_offset = *offset;
                self.ui.viewport_height = *viewport_height;
                self.measure_page(Instant::now());
                Some(Task::none())
            }

            Message::ScrollToSection(id) => {
                let Some(top) = self.ui.nav.offset_of(id) else {
                    tracing::debug!("No section {:?} on the page", id);
                    return Some(Task::none());
                };
                let target_y = (top - SECTION_GAP).max(0.0);
                Some(iced::widget::operation::scroll_to(
                    iced::widget::Id::new(PAGE_SCROLL_ID),
                    iced::widget::scrollable::AbsoluteOffset {
                        x: Some(0.0),
                        y: Some(target_y),
                    },
                ))
            }

            Message::OpenVideo(trigger) => {
                if self.ui.modal.open(trigger) {
                    tracing::info!("Opening video {}", trigger.media);
                }
                Some(Task::none())
            }

            Message::CloseVideo => {
                self.ui.modal.close(Instant::now());
                Some(Task::none())
            }

            Message::KeyPressed(key, modifiers) => {
                if !modifiers.is_empty() {
                    return Some(Task::none());
                }
                match key.as_ref() {
                    Key::Named(Named::Escape) => {
                        self.ui.modal.close(Instant::now());
                    }
                    // Arrows drive the hero unless the modal has focus
                    Key::Named(Named::ArrowLeft) if !self.ui.modal.is_open() => {
                        if let Some(hero) = &mut self.stage.hero {
                            hero.go_previous(Instant::now());
                        }
                    }
                    Key::Named(Named::ArrowRight) if !self.ui.modal.is_open() => {
                        if let Some(hero) = &mut self.stage.hero {
                            hero.go_next(Instant::now());
                        }
                    }
                    _ => {}
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::Modifiers;

    use super::*;
    use crate::features::carousel::{PlayTrigger, Slide, VISIBILITY_THRESHOLD};
    use crate::features::{Manifest, SectionEntry, Settings};
    use crate::ui::layout::{self, HERO_HEIGHT, SHOWREEL_HEIGHT, WINDOW_HEIGHT};

    fn app() -> App {
        let mut manifest = Manifest::builtin();
        manifest.hero = vec![Slide::new().with_tag("One"), Slide::new().with_tag("Two")];
        manifest.showreel = vec![Slide::new().with_tag("A"), Slide::new().with_tag("B")];
        manifest.sections = ["hero", "showreel", "venues"]
            .into_iter()
            .map(|id| SectionEntry::new(id, id))
            .collect();
        App::with_manifest(Settings::default(), manifest, Instant::now())
    }

    fn scrolled(offset: f32) -> Message {
        Message::PageScrolled {
            offset,
            viewport_height: 800.0,
            content_height: 2000.0,
        }
    }

    fn key(named: Named) -> Message {
        Message::KeyPressed(Key::Named(named), Modifiers::empty())
    }

    fn trigger() -> PlayTrigger {
        PlayTrigger {
            media: "clip.mp4".to_string(),
            poster: String::new(),
            title: "KASSABI | One".to_string(),
        }
    }

    #[test]
    fn test_scroll_updates_progress_and_nav() {
        let mut app = app();
        let _ = app.update(scrolled(600.0));
        assert!((app.ui.scroll_progress - 0.5).abs() < 1e-6);
        assert_eq!(app.ui.nav.current(), Some("showreel"));
    }

    #[test]
    fn test_showreel_stops_when_scrolled_away() {
        let mut app = app();
        // At the top an 800px viewport shows 192 of the showreel's 620px
        let _ = app.update(scrolled(0.0));
        assert!(!app.stage.showreel.as_ref().unwrap().is_visible());
        assert!(!app.stage.showreel.as_ref().unwrap().is_armed());

        let _ = app.update(scrolled(HERO_HEIGHT));
        assert!(app.stage.showreel.as_ref().unwrap().is_armed());

        let _ = app.update(scrolled(HERO_HEIGHT + SHOWREEL_HEIGHT + 400.0));
        assert!(!app.stage.showreel.as_ref().unwrap().is_armed());
    }

    #[test]
    fn test_showreel_measured_at_launch() {
        let app = App::with_manifest(Settings::default(), Manifest::builtin(), Instant::now());
        let span = app.ui.nav.span_of("showreel").unwrap();
        let visible = Span::new(0.0, layout::viewport_height(WINDOW_HEIGHT));
        assert!(viewport::intersection_ratio(span, visible) <= VISIBILITY_THRESHOLD);

        let reel = app.stage.showreel.as_ref().unwrap();
        assert!(!reel.is_visible());
        assert!(!reel.is_armed());
        assert_eq!(app.ui.nav.current(), Some("hero"));
    }

    #[test]
    fn test_section_reveal_and_inline_video_follow_scroll() {
        let mut app = App::with_manifest(Settings::default(), Manifest::builtin(), Instant::now());
        let viewport_height = layout::viewport_height(WINDOW_HEIGHT);
        assert!(app.ui.reveals.is_revealed("showreel"));
        assert!(!app.ui.reveals.is_revealed("venues"));
        assert!(!app.ui.inline_videos.is_playing("venues"));

        let _ = app.update(Message::PageScrolled {
            offset: 900.0,
            viewport_height,
            content_height: 1700.0,
        });
        assert!(app.ui.reveals.is_revealed("venues"));
        assert!(app.ui.inline_videos.is_playing("venues"));

        let _ = app.update(Message::PageScrolled {
            offset: 0.0,
            viewport_height,
            content_height: 1700.0,
        });
        assert!(app.ui.reveals.is_revealed("venues"));
        assert!(!app.ui.inline_videos.is_playing("venues"));
    }

    #[test]
    fn test_scroll_to_unknown_section_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::ScrollToSection("missing".to_string()));
        let _ = app.update(Message::ScrollToSection("showreel".to_string()));
    }

    #[test]
    fn test_modal_open_close_and_escape() {
        let mut app = app();
        let _ = app.update(Message::OpenVideo(trigger()));
        assert!(app.ui.modal.is_open());

        // Arrows are swallowed while the modal is open
        let _ = app.update(key(Named::ArrowRight));
        assert_eq!(app.stage.hero.as_ref().unwrap().current(), 0);

        let _ = app.update(key(Named::Escape));
        assert!(app.ui.modal.is_closing());

        let _ = app.update(Message::OpenVideo(trigger()));
        let _ = app.update(Message::CloseVideo);
        assert!(!app.ui.modal.is_open());
    }

    #[test]
    fn test_arrow_keys_drive_hero() {
        let mut app = app();
        let _ = app.update(key(Named::ArrowRight));
        assert_eq!(app.stage.hero.as_ref().unwrap().current(), 1);
        let _ = app.update(key(Named::ArrowLeft));
        assert_eq!(app.stage.hero.as_ref().unwrap().current(), 0);

        let _ = app.update(Message::KeyPressed(
            Key::Named(Named::ArrowRight),
            Modifiers::CTRL,
        ));
        assert_eq!(app.stage.hero.as_ref().unwrap().current(), 0);
    }
}
