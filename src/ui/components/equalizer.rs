//! Decorative equalizer meter drawn on a canvas

use iced::widget::canvas;
use iced::{Element, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::app::Message;
use crate::ui::theme;

const BAR_WIDTH: f32 = 4.0;
const BAR_GAP: f32 = 3.0;
const METER_HEIGHT: f32 = 28.0;

struct Bars {
    levels: Vec<f32>,
}

impl<Message> canvas::Program<Message> for Bars {
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

        for (i, level) in self.levels.iter().enumerate() {
            let height = bounds.height * level.clamp(0.0, 1.0);
            frame.fill_rectangle(
                Point::new(i as f32 * (BAR_WIDTH + BAR_GAP), bounds.height - height),
                Size::new(BAR_WIDTH, height),
                theme::ACCENT_PINK,
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Meter sized to fit `levels.len()` bars
pub fn view<'a>(levels: Vec<f32>) -> Element<'a, Message> {
    let width = levels.len() as f32 * (BAR_WIDTH + BAR_GAP) - BAR_GAP;
    canvas(Bars { levels })
        .width(width.max(0.0))
        .height(METER_HEIGHT)
        .into()
}
