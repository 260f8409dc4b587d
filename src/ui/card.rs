/// Project card tiles
///
/// `CardModel` is the display data for one record; `view` turns it into
/// widgets. The position index only feeds entrance stagger.
use iced::widget::{button, column, container, stack, text, Space};
use iced::{alignment, gradient, Background, Border, Degrees, Element, Font, Length, Padding, Theme};
use iced_aw::Wrap;

use super::palette::{self, fade};
use crate::state::data::ProjectRecord;
use crate::Message;

const TILE_HEIGHT: f32 = 200.0;
/// Vertical travel of the entrance slide
const SLIDE_DISTANCE: f32 = 20.0;

/// Everything a card shows, derived from one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub title: String,
    pub description: String,
    /// One badge per tag, in record order
    pub badges: Vec<String>,
    pub year_badge: Option<String>,
    pub link: String,
    /// Position in the visible sequence
    pub index: usize,
}

impl CardModel {
    pub fn new(record: &ProjectRecord, index: usize) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            badges: record.tags.clone(),
            year_badge: record.year.clone(),
            link: record.link.clone(),
            index,
        }
    }
}

/// Card models for a visible sequence, indexed by position
pub fn models(visible: &[&ProjectRecord]) -> Vec<CardModel> {
    visible
        .iter()
        .enumerate()
        .map(|(index, record)| CardModel::new(record, index))
        .collect()
}

fn pill<'a>(label: String, fg: iced::Color, bg: iced::Color) -> Element<'a, Message> {
    container(text(label).size(13).color(fg))
        .padding([4, 12])
        .style(move |_theme: &Theme| container::Style {
            background: Some(bg.into()),
            border: Border {
                radius: 999.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

/// Render a card at the given entrance progress
pub fn view<'a>(card: CardModel, progress: f32, width: f32) -> Element<'a, Message> {
    let tile = container(Space::new(Length::Fill, Length::Fixed(TILE_HEIGHT)))
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Gradient(
                gradient::Linear::new(Degrees(135.0))
                    .add_stop(0.0, fade(palette::VIOLET_200, progress))
                    .add_stop(0.5, fade(palette::ROSE_50, progress))
                    .add_stop(1.0, fade(palette::AMBER_50, progress))
                    .into(),
            )),
            border: Border {
                radius: 12.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    let tile: Element<'a, Message> = match card.year_badge {
        Some(year) => {
            let badge = pill(
                year,
                fade(iced::Color::WHITE, progress),
                fade(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5), progress),
            );
            stack![
                tile,
                container(badge)
                    .width(Length::Fill)
                    .padding(16)
                    .align_x(alignment::Horizontal::Right),
            ]
            .into()
        }
        None => tile.into(),
    };

    let badges: Vec<Element<'a, Message>> = card
        .badges
        .into_iter()
        .map(|tag| pill(tag, fade(palette::VIOLET_700, progress), fade(palette::VIOLET_100, progress)))
        .collect();

    let body = column![
        tile,
        text(card.title)
            .size(22)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            })
            .color(fade(palette::VIOLET_950, progress)),
        text(card.description).color(fade(palette::VIOLET_800, progress * 0.7)),
        Wrap::with_elements(badges).spacing(8.0).line_spacing(8.0),
    ]
    .spacing(12);

    let offset = (1.0 - progress.clamp(0.0, 1.0)) * SLIDE_DISTANCE;

    let card_button = button(body)
        .on_press(Message::FollowLink(card.link))
        .padding(0)
        .style(|_theme: &Theme, status: button::Status| {
            let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
            button::Style {
                background: None,
                border: Border {
                    color: if hovered { palette::VIOLET_200 } else { iced::Color::TRANSPARENT },
                    width: 1.0,
                    radius: 12.0.into(),
                },
                ..button::Style::default()
            }
        });

    container(card_button)
        .width(Length::Fixed(width))
        .padding(Padding {
            top: offset,
            right: 0.0,
            bottom: SLIDE_DISTANCE - offset,
            left: 0.0,
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::record;

    #[test]
    fn test_model_mirrors_record() {
        let mut project = record("Interactive Dashboard", &["D3.js", "SVG Animation", "React"]);
        project.year = Some("2022".to_string());

        let card = CardModel::new(&project, 2);
        assert_eq!(card.title, "Interactive Dashboard");
        assert_eq!(card.description, project.description);
        assert_eq!(card.badges, ["D3.js", "SVG Animation", "React"]);
        assert_eq!(card.year_badge.as_deref(), Some("2022"));
        assert_eq!(card.link, "#");
    }

    #[test]
    fn test_missing_year_omits_badge() {
        let card = CardModel::new(&record("No Year", &[]), 0);
        assert_eq!(card.year_badge, None);
        assert!(card.badges.is_empty());
    }

    #[test]
    fn test_index_changes_nothing_but_position() {
        let project = record("Same", &["GSAP"]);
        let first = CardModel::new(&project, 0);
        let later = CardModel::new(&project, 5);
        assert_eq!(CardModel { index: 5, ..first }, later);
    }

    #[test]
    fn test_models_indexed_by_visible_position() {
        let a = record("A", &["React"]);
        let b = record("B", &["React"]);
        let cards = models(&[&a, &b]);
        assert_eq!(cards.iter().map(|c| c.index).collect::<Vec<_>>(), [0, 1]);
        assert_eq!(cards[1].title, "B");
    }
}
