//! Video modal over the page
//!
//! The desktop stage has no video decoder, so the dialog shows the poster
//! and the source path under the trigger title.

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, image, mouse_area, opaque, row, svg, text};
use iced::{Alignment, Color, ContentFit, Element, Fill};

use crate::app::Message;
use crate::features::PosterIndex;
use crate::features::carousel::PlayTrigger;
use crate::ui::theme::{self, BOLD_WEIGHT};

const DIALOG_WIDTH: f32 = 720.0;
const MEDIA_HEIGHT: f32 = 405.0;

/// Build the modal; `opacity` follows the open/close fade
pub fn view<'a>(
    trigger: &'a PlayTrigger,
    posters: &'a PosterIndex,
    opacity: f32,
) -> Element<'a, Message> {
    if opacity < 0.01 {
        return Space::new().height(0).into();
    }

    let faded = move |color: Color| Color {
        a: color.a * opacity,
        ..color
    };

    let title = text(trigger.title.as_str())
        .size(18)
        .style(move |theme| text::Style {
            color: Some(faded(theme::text_primary(theme))),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let close_btn = button(
        svg(svg::Handle::from_memory(crate::ui::icons::CLOSE.as_bytes()))
            .width(18)
            .height(18)
            .style(move |theme, _status| svg::Style {
                color: Some(faded(theme::text_primary(theme))),
            }),
    )
    .padding(8)
    .style(theme::dialog_button)
    .on_press(Message::CloseVideo);

    let media: Element<'a, Message> = match posters.get(&trigger.poster) {
        Some(poster) => image(image::Handle::from_path(&poster.path))
            .content_fit(ContentFit::Cover)
            .opacity(opacity)
            .width(Fill)
            .height(MEDIA_HEIGHT)
            .into(),
        None => container(Space::new())
            .width(Fill)
            .height(MEDIA_HEIGHT)
            .style(move |theme| container::Style {
                background: Some(faded(theme::banner_placeholder(theme)).into()),
                ..Default::default()
            })
            .into(),
    };

    let source = text(format!("Source: {}", trigger.media))
        .size(13)
        .style(move |theme| text::Style {
            color: Some(faded(theme::text_secondary(theme))),
        });

    let dialog_content = column![
        row![title, Space::new().width(Fill), close_btn].align_y(Alignment::Center),
        container(media).clip(true),
        source,
    ]
    .spacing(16)
    .width(DIALOG_WIDTH)
    .padding(24);

    let dialog_box = opaque(container(dialog_content).style(move |theme| theme::dialog(theme, opacity)));

    let backdrop = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |theme| container::Style {
            background: Some(theme::overlay_backdrop(theme, 0.7 * opacity).into()),
            ..Default::default()
        });

    // Backdrop click closes; the dialog itself swallows presses
    opaque(
        mouse_area(backdrop)
            .interaction(Interaction::Idle)
            .on_press(Message::CloseVideo),
    )
}
