//! Application view rendering

use std::time::Duration;

use iced::widget::{Space, column, container, scrollable, stack, text};
use iced::{Color, Element, Fill, Theme};

use super::App;
use super::message::Message;
use crate::features::SectionEntry;
use crate::ui::layout::{self, PAGE_SCROLL_ID, SECTION_GAP};
use crate::ui::{components, theme};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let now = self.core.now;

        let nav = components::nav_bar::view(
            &self.core.brand,
            &self.ui.sections,
            self.ui.nav.current(),
            self.ui.scroll_progress,
            self.core.settings.display.dark_mode,
        );

        let sections = column(self.ui.sections.iter().map(|entry| self.section(entry)))
            .spacing(SECTION_GAP)
            .padding(SECTION_GAP);

        let page = scrollable(sections)
            .id(iced::widget::Id::new(PAGE_SCROLL_ID))
            .on_scroll(|viewport| Message::PageScrolled {
                offset: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
                content_height: viewport.content_bounds().height,
            })
            .style(theme::dark_scrollable)
            .width(Fill)
            .height(Fill);

        let body = container(column![nav, page])
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        // Modal stays mounted through its close fade
        let modal: Element<'_, Message> = match self.ui.modal.media() {
            Some(trigger) => components::video_modal::view(
                trigger,
                &self.stage.posters,
                self.ui.modal.fade(now),
            ),
            None => Space::new().width(0).height(0).into(),
        };

        stack![body, modal].into()
    }

    fn section<'a>(&'a self, entry: &'a SectionEntry) -> Element<'a, Message> {
        let now = self.core.now;
        match entry.id.as_str() {
            "hero" => match &self.stage.hero {
                Some(hero) => {
                    // Bars rest at their floor under reduced motion
                    let elapsed = if self.core.environment.reduced_motion {
                        Duration::ZERO
                    } else {
                        now.saturating_duration_since(self.core.started)
                    };
                    let levels = self.ui.equalizer.levels(elapsed);
                    components::hero_stage::view(
                        hero,
                        &self.stage.posters,
                        levels,
                        self.ui.hero_pointer,
                        now,
                    )
                }
                None => components::hero_stage::view_placeholder(&self.core.brand),
            },
            "showreel" => match &self.stage.showreel {
                Some(reel) => components::showreel::view(reel, &self.stage.posters, now),
                None => components::showreel::view_placeholder(),
            },
            _ => self.generic_section(entry),
        }
    }

    /// Plain section card with its reveal fade and inline loop status
    fn generic_section<'a>(&'a self, entry: &'a SectionEntry) -> Element<'a, Message> {
        let reveal = self.ui.reveals.style(&entry.id, self.core.now);
        let opacity = reveal.opacity;

        let mut body = column![
            text(entry.label.as_str()).size(22).font(iced::Font {
                weight: theme::BOLD_WEIGHT,
                ..Default::default()
            }),
            text(format!("{} / {}", self.core.brand, entry.label))
                .size(14)
                .style(move |theme: &Theme| text::Style {
                    color: Some(Color {
                        a: opacity,
                        ..theme::text_secondary(theme)
                    }),
                }),
        ]
        .spacing(8);

        if let Some(media) = self.ui.inline_videos.media(&entry.id) {
            let state = if self.ui.inline_videos.is_playing(&entry.id) {
                "Loop in view"
            } else {
                "Loop paused"
            };
            body = body.push(
                text(format!("{state}: {media}"))
                    .size(12)
                    .style(move |theme: &Theme| text::Style {
                        color: Some(Color {
                            a: opacity,
                            ..theme::text_muted(theme)
                        }),
                    }),
            );
        }

        // The card keeps its height; the content slides up into place
        container(column![Space::new().height(reveal.offset), body])
            .width(Fill)
            .height(layout::height_of(&entry.id))
            .padding(24)
            .style(move |theme: &Theme| theme::section(theme, opacity))
            .into()
    }
}
