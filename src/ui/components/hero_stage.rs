//! Hero slider stage
//!
//! Full-width poster with slide wipe and pointer parallax, HUD text, prev/next
//! arrows, play trigger, numbered thumbs and the autoplay progress line.

use iced::time::Instant;
use iced::widget::{Space, button, canvas, column, container, mouse_area, row, stack, svg, text};
use iced::{Alignment, Color, Element, Fill, Padding, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::app::Message;
use crate::features::carousel::{Carousel, PlayTrigger, Slide};
use crate::features::page::{Parallax, parallax};
use crate::features::{Poster, PosterIndex};
use crate::ui::components::equalizer;
use crate::ui::layout::HERO_HEIGHT;
use crate::ui::stage::StageSurface;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Vertical travel of the HUD while it fades in
pub const HUD_RISE: f32 = 14.0;
const PROGRESS_HEIGHT: f32 = 3.0;
const HUD_BOTTOM: f32 = 40.0;

/// Placeholder fill behind missing posters
const FALLBACK: Color = Color::from_rgb(0.15, 0.1, 0.2);

pub(crate) struct StageDrawer<'a> {
    pub current: Option<&'a Poster>,
    pub last: Option<&'a Poster>,
    /// Wipe progress, 1.0 when settled
    pub wipe: f32,
    pub direction: i32,
    /// Pointer relative to the stage, when parallax applies
    pub pointer: Option<Point>,
    /// Autoplay progress for the bottom line
    pub progress: f32,
}

/// Cover-fit `poster` into `bounds`, shifted by `offset_x` and `parallax`
fn draw_poster(
    frame: &mut canvas::Frame,
    bounds: Size,
    poster: Option<&Poster>,
    offset_x: f32,
    parallax: Parallax,
) {
    frame.fill_rectangle(Point::new(offset_x, 0.0), bounds, FALLBACK);

    let Some(poster) = poster else {
        return;
    };
    let img_w = poster.width as f32;
    let img_h = poster.height as f32;
    if img_w <= 0.0 || img_h <= 0.0 {
        return;
    }

    let scale = (bounds.width / img_w).max(bounds.height / img_h) * parallax.scale;
    let final_w = img_w * scale;
    let final_h = img_h * scale;
    let x = offset_x + (bounds.width - final_w) / 2.0 + parallax.dx;
    let y = (bounds.height - final_h) / 2.0 + parallax.dy;

    frame.draw_image(
        Rectangle::new(Point::new(x, y), Size::new(final_w, final_h)),
        canvas::Image::new(&poster.path),
    );
}

impl<'a, Message> canvas::Program<Message> for StageDrawer<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let size = bounds.size();

        if self.wipe >= 1.0 {
            let shift = self
                .pointer
                .map(|p| parallax::offset(p.x, p.y, size.width, size.height))
                .unwrap_or(Parallax::NONE);
            draw_poster(&mut frame, size, self.current, 0.0, shift);
        } else {
            // Ease out cubic
            let eased = 1.0 - (1.0 - self.wipe).powi(3);
            let width = size.width;
            let (last_offset, current_offset) = if self.direction > 0 {
                (-width * eased, width * (1.0 - eased))
            } else {
                (width * eased, -width * (1.0 - eased))
            };
            draw_poster(&mut frame, size, self.last, last_offset, Parallax::NONE);
            draw_poster(&mut frame, size, self.current, current_offset, Parallax::NONE);
        }

        if self.progress > 0.0 {
            frame.fill_rectangle(
                Point::new(0.0, size.height - PROGRESS_HEIGHT),
                Size::new(size.width * self.progress.clamp(0.0, 1.0), PROGRESS_HEIGHT),
                theme::ACCENT_PINK,
            );
        }

        vec![frame.into_geometry()]
    }
}

pub(crate) fn poster_at<'a>(
    carousel: &Carousel<StageSurface>,
    posters: &'a PosterIndex,
    index: usize,
) -> Option<&'a Poster> {
    carousel
        .slides()
        .get(index)
        .and_then(Slide::poster)
        .and_then(|path| posters.get(path))
}

fn icon(source: &'static str, size: f32, color: Color) -> svg::Svg<'static> {
    svg(svg::Handle::from_memory(source.as_bytes()))
        .width(size)
        .height(size)
        .style(move |_theme, _status| svg::Style { color: Some(color) })
}

/// Play trigger pill; disabled when the slide has no media
pub(crate) fn play_button<'a>(trigger: &PlayTrigger) -> Element<'a, Message> {
    let on_press = (!trigger.media.is_empty()).then(|| Message::OpenVideo(trigger.clone()));
    button(
        row![
            icon(crate::ui::icons::PLAY, 16.0, Color::BLACK),
            text("Play").size(14).color(Color::BLACK).font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(Padding::new(8.0).left(20).right(20))
    .height(40)
    .style(theme::banner_play_button)
    .on_press_maybe(on_press)
    .into()
}

/// Numbered thumbs, one per slide
pub(crate) fn thumbs<'a>(
    count: usize,
    current: usize,
    on_select: fn(usize) -> Message,
) -> Element<'a, Message> {
    iced::widget::row((0..count).map(|i| {
        button(text(format!("{:02}", i + 1)).size(12))
            .padding([4, 10])
            .style(theme::thumb(i == current))
            .on_press(on_select(i))
            .into()
    }))
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

/// Build the hero stage
pub fn view<'a>(
    hero: &'a Carousel<StageSurface>,
    posters: &'a PosterIndex,
    levels: Vec<f32>,
    pointer: Option<Point>,
    now: Instant,
) -> Element<'a, Message> {
    let stage = hero.surface();
    let parallax_on = parallax::enabled(hero.environment());

    let drawer = canvas(StageDrawer {
        current: poster_at(hero, posters, stage.active_index()),
        last: poster_at(hero, posters, stage.last_index()),
        wipe: stage.wipe(now),
        direction: stage.direction(),
        pointer: pointer.filter(|_| parallax_on),
        progress: stage.progress(now),
    })
    .width(Fill)
    .height(HERO_HEIGHT);

    let hud = stage.hud();
    let fade = stage.fade();
    let faded = |color: Color| Color {
        a: color.a * fade.opacity(),
        ..color
    };

    let mut hud_text = column![
        text(hud.tag.clone())
            .size(13)
            .color(faded(theme::ACCENT_PINK_HOVER)),
        text(hud.title.clone())
            .size(40)
            .color(faded(theme::ON_MEDIA))
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
    ]
    .spacing(6);
    if !hud.subtitle.is_empty() {
        hud_text = hud_text.push(text(hud.subtitle.clone()).size(15).color(faded(theme::ON_MEDIA)));
    }

    let bottom_row = row![
        hud_text,
        Space::new().width(Fill),
        column![
            play_button(&hud.trigger),
            thumbs(hero.len(), hero.current(), Message::HeroSelect),
        ]
        .spacing(16)
        .align_x(Alignment::End),
    ]
    .align_y(Alignment::End);

    let gradient_overlay = container(
        column![Space::new().height(Fill), bottom_row]
            .padding(Padding::new(32.0).bottom(HUD_BOTTOM - fade.offset())),
    )
    .width(Fill)
    .height(Fill)
    .style(|_theme| container::Style {
        background: Some(iced::Background::Gradient(iced::Gradient::Linear(
            iced::gradient::Linear::new(iced::Radians(std::f32::consts::PI))
                .add_stop(0.0, Color::TRANSPARENT)
                .add_stop(0.45, Color::TRANSPARENT)
                .add_stop(1.0, theme::banner_gradient_bottom()),
        ))),
        ..Default::default()
    });

    let arrow = |source: &'static str, message: Message| {
        container(
            button(icon(source, 24.0, Color::WHITE))
                .padding(12)
                .style(theme::carousel_nav_button)
                .on_press(message),
        )
        .height(HERO_HEIGHT)
        .align_y(Alignment::Center)
        .padding(Padding::new(8.0))
    };

    let nav_overlay = row![
        arrow(crate::ui::icons::CHEVRON_LEFT, Message::HeroPrevious),
        Space::new().width(Fill),
        arrow(crate::ui::icons::CHEVRON_RIGHT, Message::HeroNext),
    ]
    .width(Fill)
    .height(HERO_HEIGHT);

    let meter = container(equalizer::view(levels))
        .width(Fill)
        .align_x(Alignment::End)
        .padding(24);

    let stacked = stack![drawer, gradient_overlay, nav_overlay, meter]
        .width(Fill)
        .height(HERO_HEIGHT);

    let region = mouse_area(stacked)
        .on_enter(Message::HeroPointerEntered)
        .on_exit(Message::HeroPointerExited)
        .on_move(Message::HeroPointerMoved)
        .on_press(Message::HeroPressed)
        .on_release(Message::HeroReleased);

    container(region)
        .width(Fill)
        .height(HERO_HEIGHT)
        .clip(true)
        .style(theme::hero_banner)
        .into()
}

/// Stage shown when the manifest has no hero slides
pub fn view_placeholder<'a>(brand: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(brand).size(36).font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
            text("No highlights yet")
                .size(14)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        ]
        .spacing(8),
    )
    .width(Fill)
    .height(HERO_HEIGHT)
    .padding(32)
    .align_y(Alignment::End)
    .style(|theme| container::Style {
        background: Some(theme::banner_placeholder(theme).into()),
        border: iced::Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
