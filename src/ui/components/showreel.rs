//! Showreel composer
//!
//! Featured poster with HUD and progress line on the left, the clip queue on
//! the right and numbered thumbs underneath. Hovering anywhere in the
//! section pauses autoplay.

use iced::time::Instant;
use iced::widget::{Space, button, canvas, column, container, mouse_area, row, stack, text};
use iced::{Alignment, Color, Element, Fill, Padding, Theme};

use crate::app::Message;
use crate::features::PosterIndex;
use crate::features::carousel::{Carousel, Hud};
use crate::ui::components::hero_stage::{StageDrawer, play_button, poster_at, thumbs};
use crate::ui::layout::SHOWREEL_HEIGHT;
use crate::ui::stage::StageSurface;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Vertical travel of the HUD while it fades in
pub const HUD_RISE: f32 = 10.0;
const FEATURE_HEIGHT: f32 = 440.0;
const QUEUE_WIDTH: f32 = 300.0;

fn queue_card<'a>(hud: Hud, index: usize, active: bool) -> Element<'a, Message> {
    button(
        column![
            text(hud.tag).size(11).color(theme::ACCENT_PINK),
            text(hud.title).size(14).font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        ]
        .spacing(4),
    )
    .width(Fill)
    .padding([10, 14])
    .style(theme::queue_card(active))
    .on_press(Message::ShowreelSelect(index))
    .into()
}

/// Build the showreel section
pub fn view<'a>(
    reel: &'a Carousel<StageSurface>,
    posters: &'a PosterIndex,
    now: Instant,
) -> Element<'a, Message> {
    let stage = reel.surface();
    let hud = stage.hud();
    let fade = stage.fade();
    let faded = |color: Color| Color {
        a: color.a * fade.opacity(),
        ..color
    };

    let feature_media = canvas(StageDrawer {
        current: poster_at(reel, posters, stage.active_index()),
        last: poster_at(reel, posters, stage.last_index()),
        wipe: stage.wipe(now),
        direction: stage.direction(),
        pointer: None,
        progress: stage.progress(now),
    })
    .width(Fill)
    .height(FEATURE_HEIGHT);

    let mut hud_text = column![
        text(hud.tag.clone()).size(12).color(faded(theme::ACCENT_PINK_HOVER)),
        text(hud.title.clone())
            .size(28)
            .color(faded(theme::ON_MEDIA))
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
    ]
    .spacing(4);
    if !hud.subtitle.is_empty() {
        hud_text = hud_text.push(text(hud.subtitle.clone()).size(14).color(faded(theme::ON_MEDIA)));
    }

    let overlay = container(
        column![
            Space::new().height(Fill),
            row![hud_text, Space::new().width(Fill), play_button(&hud.trigger)]
                .align_y(Alignment::End),
        ]
        .padding(Padding::new(24.0).bottom(28.0 - fade.offset())),
    )
    .width(Fill)
    .height(Fill)
    .style(|_theme| container::Style {
        background: Some(iced::Background::Gradient(iced::Gradient::Linear(
            iced::gradient::Linear::new(iced::Radians(std::f32::consts::PI))
                .add_stop(0.0, Color::TRANSPARENT)
                .add_stop(0.5, Color::TRANSPARENT)
                .add_stop(1.0, theme::banner_gradient_bottom()),
        ))),
        ..Default::default()
    });

    let feature = container(stack![feature_media, overlay])
        .width(Fill)
        .height(FEATURE_HEIGHT)
        .clip(true)
        .style(theme::hero_banner);

    let placeholders = &reel.config().placeholders;
    let brand = &reel.config().brand;
    let queue = column(reel.slides().iter().enumerate().map(|(i, slide)| {
        queue_card(
            Hud::resolve(slide, i, placeholders, brand),
            i,
            i == reel.current(),
        )
    }))
    .spacing(8)
    .width(QUEUE_WIDTH);

    let heading = text("Showreel").size(22).font(iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    });

    let body = column![
        heading,
        row![feature, queue].spacing(20),
        thumbs(reel.len(), reel.current(), Message::ShowreelSelect),
    ]
    .spacing(16)
    .padding(24);

    let region = mouse_area(body)
        .on_enter(Message::ShowreelPointerEntered)
        .on_exit(Message::ShowreelPointerExited);

    container(region)
        .width(Fill)
        .height(SHOWREEL_HEIGHT)
        .style(|theme: &Theme| theme::section(theme, 1.0))
        .into()
}

/// Section shown when the manifest has no showreel clips
pub fn view_placeholder<'a>() -> Element<'a, Message> {
    container(
        text("No clips in the showreel yet")
            .size(14)
            .style(|theme: &Theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    )
    .width(Fill)
    .height(SHOWREEL_HEIGHT)
    .center_x(Fill)
    .center_y(SHOWREEL_HEIGHT)
    .style(|theme: &Theme| theme::section(theme, 1.0))
    .into()
}
