use iced::widget::{container, text};
use iced::{Border, Color, Element, Font, Theme};

use super::palette::{fade, BUBBLE_COLORS};
use crate::Message;

/// Bubble color for a skill at `index`, cycling through the palette
pub fn bubble_color(index: usize) -> Color {
    BUBBLE_COLORS[index % BUBBLE_COLORS.len()]
}

/// A rounded skill label that grows into place as `progress` reaches 1.0
pub fn view<'a>(skill: &str, index: usize, progress: f32) -> Element<'a, Message> {
    // Grows from 80% to full size
    let scale = 0.8 + 0.2 * progress.clamp(0.0, 1.0);
    let background = fade(bubble_color(index), progress);

    container(
        text(skill.to_string())
            .size(16.0 * scale)
            .color(fade(Color::WHITE, progress))
            .font(Font {
                weight: iced::font::Weight::Medium,
                ..Font::DEFAULT
            }),
    )
    .padding([12.0 * scale, 24.0 * scale])
    .style(move |_theme: &Theme| container::Style {
        background: Some(background.into()),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_cycle_every_four() {
        assert_eq!(bubble_color(0), bubble_color(4));
        assert_eq!(bubble_color(3), bubble_color(11));
        assert_ne!(bubble_color(0), bubble_color(1));
    }
}
