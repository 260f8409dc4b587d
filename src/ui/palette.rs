/// Colors and the application theme
use iced::theme::Palette;
use iced::{Color, Theme};

use crate::config::ThemeChoice;

const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

pub const VIOLET_50: Color = rgb8(0xf5, 0xf3, 0xff);
pub const VIOLET_100: Color = rgb8(0xed, 0xe9, 0xfe);
pub const VIOLET_200: Color = rgb8(0xdd, 0xd6, 0xfe);
pub const VIOLET_500: Color = rgb8(0x8b, 0x5c, 0xf6);
pub const VIOLET_600: Color = rgb8(0x7c, 0x3a, 0xed);
pub const VIOLET_700: Color = rgb8(0x6d, 0x28, 0xd9);
pub const VIOLET_800: Color = rgb8(0x5b, 0x21, 0xb6);
pub const VIOLET_950: Color = rgb8(0x2e, 0x10, 0x65);
pub const FUCHSIA_500: Color = rgb8(0xd9, 0x46, 0xef);
pub const ROSE_50: Color = rgb8(0xff, 0xf1, 0xf2);
pub const ROSE_300: Color = rgb8(0xfd, 0xa4, 0xaf);
pub const ROSE_500: Color = rgb8(0xf4, 0x3f, 0x5e);
pub const AMBER_50: Color = rgb8(0xff, 0xfb, 0xeb);
pub const AMBER_500: Color = rgb8(0xf5, 0x9e, 0x0b);

/// Skill bubble colors, cycled by position
pub const BUBBLE_COLORS: [Color; 4] = [VIOLET_500, FUCHSIA_500, ROSE_500, AMBER_500];

/// Scale a color's alpha by an entrance progress
pub fn fade(color: Color, progress: f32) -> Color {
    Color {
        a: color.a * progress.clamp(0.0, 1.0),
        ..color
    }
}

pub fn theme(choice: ThemeChoice) -> Theme {
    match choice {
        ThemeChoice::Violet => Theme::custom(
            "Violet".to_string(),
            Palette {
                background: VIOLET_50,
                text: VIOLET_950,
                primary: VIOLET_700,
                success: rgb8(0x10, 0xb9, 0x81),
                danger: ROSE_500,
            },
        ),
        ThemeChoice::Dark => Theme::Dark,
    }
}
