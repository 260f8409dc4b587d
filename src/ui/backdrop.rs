/// Hero backdrop
/// Gradient panel that fades and shrinks as the landing screen scrolls
use iced::widget::canvas::{self, gradient};
use iced::{Point, Rectangle, Size};

use super::palette::{fade, AMBER_500, FUCHSIA_500, VIOLET_600};
use crate::motion;
use crate::Message;

#[derive(Debug, Clone, Copy)]
pub struct Backdrop {
    /// Relative scroll offset of the landing screen
    pub scroll: f32,
}

impl canvas::Program<Message> for Backdrop {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let (opacity, scale) = motion::backdrop(self.scroll);
        if opacity <= 0.0 {
            return vec![frame.into_geometry()];
        }

        // Scale around the center of the panel
        let size = Size::new(bounds.width * scale, bounds.height * scale);
        let top_left = Point::new(
            (bounds.width - size.width) / 2.0,
            (bounds.height - size.height) / 2.0,
        );

        let fill = gradient::Linear::new(
            top_left,
            Point::new(top_left.x + size.width, top_left.y + size.height),
        )
        .add_stop(0.0, fade(VIOLET_600, opacity))
        .add_stop(0.5, fade(FUCHSIA_500, opacity))
        .add_stop(1.0, fade(AMBER_500, opacity));

        frame.fill_rectangle(top_left, size, canvas::Gradient::from(fill));

        vec![frame.into_geometry()]
    }
}
