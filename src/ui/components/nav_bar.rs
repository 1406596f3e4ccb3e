//! Top navigation bar with section links and the page scroll progress

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill, Length};

use crate::app::Message;
use crate::features::SectionEntry;
use crate::ui::layout::NAV_HEIGHT;
use crate::ui::theme::{self, BOLD_WEIGHT};

const PROGRESS_HEIGHT: f32 = 2.0;

/// Build the nav bar; `current` is the id of the section in focus
pub fn view<'a>(
    brand: &'a str,
    sections: &'a [SectionEntry],
    current: Option<&str>,
    scroll_progress: f32,
    dark_mode: bool,
) -> Element<'a, Message> {
    let links = row(sections.iter().map(|section| {
        let active = current == Some(section.id.as_str());
        button(text(section.label.as_str()).size(14))
            .padding([6, 14])
            .style(theme::nav_link(active))
            .on_press(Message::ScrollToSection(section.id.clone()))
            .into()
    }))
    .spacing(8)
    .align_y(Alignment::Center);

    let theme_toggle = button(text(if dark_mode { "Light" } else { "Dark" }).size(13))
        .padding([6, 12])
        .style(theme::text_button)
        .on_press(Message::ToggleTheme);

    let bar = row![
        text(brand).size(20).color(theme::ACCENT_PINK).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
        Space::new().width(Fill),
        links,
        theme_toggle,
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .padding([0, 24])
    .height(NAV_HEIGHT - PROGRESS_HEIGHT);

    // Filled and remaining parts as fill portions of the bar width
    let filled = (scroll_progress.clamp(0.0, 1.0) * 1000.0).round() as u16;
    let progress = row![
        container(Space::new())
            .width(Length::FillPortion(filled))
            .height(PROGRESS_HEIGHT)
            .style(|_theme| container::Style {
                background: Some(theme::ACCENT_PINK.into()),
                ..Default::default()
            }),
        Space::new()
            .width(Length::FillPortion(1000 - filled))
            .height(PROGRESS_HEIGHT),
    ];

    container(column![bar, progress])
        .width(Fill)
        .height(NAV_HEIGHT)
        .style(theme::nav_bar)
        .into()
}
