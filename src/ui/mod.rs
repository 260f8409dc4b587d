/// Screens and widgets
///
/// - `landing` / `projects`: the two screens
/// - `card`: project tiles
/// - `skill`: skill bubbles
/// - `backdrop`: hero gradient canvas
/// - `palette`: colors and theme

pub mod backdrop;
pub mod card;
pub mod landing;
pub mod palette;
pub mod projects;
pub mod skill;

use std::time::Duration;

use chrono::Datelike;
use iced::time::Instant;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Border, Color, Element, Font, Length, Theme};

use crate::motion::Motion;
use crate::state::content::SiteContent;
use crate::Message;

/// Window width below which navigation collapses into the overlay menu
pub const COMPACT_WIDTH: f32 = 768.0;
/// Fixed card width; the grid wraps as many as fit
pub const CARD_WIDTH: f32 = 380.0;

/// What every screen needs to render
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub content: &'a SiteContent,
    pub motion: Motion,
    pub now: Instant,
    pub window_width: f32,
}

impl ViewContext<'_> {
    pub fn since(&self, start: Instant) -> Duration {
        self.now.saturating_duration_since(start)
    }

    pub fn is_compact(&self) -> bool {
        self.window_width < COMPACT_WIDTH
    }
}

pub fn bold() -> Font {
    Font {
        weight: iced::font::Weight::Bold,
        ..Font::DEFAULT
    }
}

/// Section title plus blurb, faded by `progress`
pub fn heading<'a>(title: &str, blurb: &str, color: Color, progress: f32) -> Element<'a, Message> {
    column![
        text(title.to_string()).size(44).font(bold()).color(palette::fade(color, progress)),
        text(blurb.to_string()).size(17).color(palette::fade(color, progress * 0.7)),
    ]
    .spacing(16)
    .align_x(iced::Alignment::Center)
    .into()
}

/// Borderless text button that follows `link`
pub fn link_button<'a>(label: &str, link: &str, color: Color) -> Element<'a, Message> {
    button(text(label.to_string()).color(color))
        .on_press(Message::FollowLink(link.to_string()))
        .padding([4, 8])
        .style(move |_theme: &Theme, status: button::Status| button::Style {
            background: None,
            text_color: match status {
                button::Status::Hovered | button::Status::Pressed => palette::ROSE_300,
                _ => color,
            },
            ..button::Style::default()
        })
        .into()
}

/// Rounded filled button that follows `link`
pub fn pill_button<'a>(label: &str, link: &str, fg: Color, bg: Color) -> Element<'a, Message> {
    button(text(label.to_string()).color(fg).font(Font {
        weight: iced::font::Weight::Medium,
        ..Font::DEFAULT
    }))
    .on_press(Message::FollowLink(link.to_string()))
    .padding([12, 24])
    .style(move |_theme: &Theme, status: button::Status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => palette::fade(bg, 0.9),
            _ => bg,
        };
        button::Style {
            background: Some(bg.into()),
            text_color: fg,
            border: Border {
                radius: 999.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    })
    .into()
}

/// Dark footer with the copyright line and one link
pub fn footer<'a>(owner: &str, label: &str, link: &str) -> Element<'a, Message> {
    let year = chrono::Local::now().year();
    let muted = palette::fade(Color::WHITE, 0.7);

    container(
        row![
            text(format!("© {year} {owner}. All rights reserved.")).color(muted),
            Space::with_width(Length::Fill),
            link_button(label, link, muted),
        ]
        .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding([32, 48])
    .style(|_theme: &Theme| container::Style {
        background: Some(palette::VIOLET_950.into()),
        ..container::Style::default()
    })
    .into()
}

/// Entrance progress of a scroll-revealed section; unrevealed ones stay hidden
pub fn section_progress(ctx: &ViewContext<'_>, revealed_at: Option<Instant>) -> f32 {
    match revealed_at {
        Some(at) => ctx.motion.section(ctx.since(at)),
        None if ctx.motion.is_enabled() => 0.0,
        None => 1.0,
    }
}
