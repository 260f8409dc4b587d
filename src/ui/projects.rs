/// Project listing screen with the tag filter panel
use iced::widget::{button, column, container, mouse_area, opaque, row, scrollable, stack, text, Space};
use iced::{Alignment, Border, Color, Element, Length, Theme};
use iced_aw::Wrap;

use super::palette::{self, fade};
use super::{bold, card, footer, link_button, ViewContext, CARD_WIDTH};
use crate::state::view::ProjectsView;
use crate::Message;

const PANEL_WIDTH: f32 = 420.0;

pub fn view<'a>(ctx: ViewContext<'a>, projects: &'a ProjectsView, tags: &'a [String]) -> Element<'a, Message> {
    let page = column![
        intro(&ctx, projects),
        grid(&ctx, projects),
        footer(&ctx.content.owner, "Back to home", "/"),
    ];

    let body = column![
        header(projects),
        scrollable(page).width(Length::Fill).height(Length::Fill),
    ];

    let mut layers = stack![body];
    if projects.is_filter_menu_open() {
        layers = layers.push(
            mouse_area(
                container(Space::new(Length::Fill, Length::Fill)).style(|_theme: &Theme| container::Style {
                    background: Some(fade(palette::VIOLET_950, 0.5).into()),
                    ..container::Style::default()
                }),
            )
            .on_press(Message::CloseFilterMenu),
        );
        layers = layers.push(
            container(opaque(filter_panel(projects, tags)))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Alignment::End),
        );
    }
    layers.into()
}

fn chip<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(14).color(palette::VIOLET_800))
        .padding([2, 10])
        .style(|_theme: &Theme| container::Style {
            background: Some(palette::VIOLET_200.into()),
            border: Border {
                radius: 999.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn header<'a>(projects: &'a ProjectsView) -> Element<'a, Message> {
    let mut filter = row![text("⚲ Filter").font(bold()).color(palette::VIOLET_950)]
        .spacing(8)
        .align_y(Alignment::Center);
    if let Some(tag) = projects.selection().selected_tag() {
        filter = filter.push(chip(tag.to_string()));
    }

    let filter_button = button(filter)
        .on_press(Message::ToggleFilterMenu)
        .padding([8, 16])
        .style(|_theme: &Theme, status: button::Status| button::Style {
            background: Some(
                match status {
                    button::Status::Hovered | button::Status::Pressed => palette::VIOLET_200,
                    _ => palette::VIOLET_100,
                }
                .into(),
            ),
            border: Border {
                radius: 999.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        });

    container(
        row![
            link_button("← Back to Home", "/", palette::VIOLET_950),
            Space::with_width(Length::Fill),
            filter_button,
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([16, 48])
    .style(|_theme: &Theme| container::Style {
        background: Some(fade(Color::WHITE, 0.7).into()),
        border: Border {
            color: palette::VIOLET_100,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    })
    .into()
}

fn intro<'a>(ctx: &ViewContext<'a>, projects: &'a ProjectsView) -> Element<'a, Message> {
    let progress = ctx.motion.section(ctx.since(projects.grid_shown_at()));

    let mut intro = column![
        text("All Projects").size(56).font(bold()).color(fade(palette::VIOLET_700, progress)),
        text(
            "Explore my complete portfolio of creative web development projects, showcasing a range \
             of skills from interactive animations to immersive 3D experiences."
        )
        .size(19)
        .color(fade(palette::VIOLET_800, progress * 0.7)),
    ]
    .spacing(24)
    .max_width(760.0);

    if let Some(tag) = projects.selection().selected_tag() {
        let clear = button(text("✕").size(14).color(palette::VIOLET_500))
            .on_press(Message::ClearFilter)
            .style(|_theme: &Theme, _status| button::Style {
                background: None,
                ..button::Style::default()
            });

        intro = intro.push(
            row![
                text("Currently viewing:").color(palette::VIOLET_800),
                chip(tag.to_string()),
                clear,
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        );
    }

    container(intro).padding([80, 48]).into()
}

fn grid<'a>(ctx: &ViewContext<'a>, projects: &'a ProjectsView) -> Element<'a, Message> {
    let visible = projects.visible(&ctx.content.catalog);
    let elapsed = ctx.since(projects.grid_shown_at());

    if visible.is_empty() {
        return empty_state(ctx.motion.section(elapsed));
    }

    let cards: Vec<Element<'a, Message>> = card::models(&visible)
        .into_iter()
        .map(|model| {
            let progress = ctx.motion.card(elapsed, model.index);
            card::view(model, progress, CARD_WIDTH)
        })
        .collect();

    container(Wrap::with_elements(cards).spacing(40.0).line_spacing(16.0))
        .width(Length::Fill)
        .padding(iced::Padding {
            top: 0.0,
            right: 48.0,
            bottom: 80.0,
            left: 48.0,
        })
        .into()
}

/// Shown when the selected tag matches nothing
fn empty_state<'a>(progress: f32) -> Element<'a, Message> {
    let reset = button(text("View All Projects").color(palette::VIOLET_800))
        .on_press(Message::ClearFilter)
        .padding([12, 24])
        .style(|_theme: &Theme, _status| button::Style {
            background: Some(palette::VIOLET_100.into()),
            border: Border {
                radius: 999.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        });

    container(
        column![
            text("No projects found").size(28).font(bold()).color(fade(palette::VIOLET_950, progress)),
            text("No projects match the selected filter criteria.")
                .color(fade(palette::VIOLET_800, progress * 0.7)),
            reset,
        ]
        .spacing(24)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([80, 48])
    .center_x(Length::Fill)
    .into()
}

fn filter_panel<'a>(projects: &'a ProjectsView, tags: &'a [String]) -> Element<'a, Message> {
    let selected = projects.selection().selected_tag();

    let entry = |label: &str, choice: Option<String>, active: bool| -> Element<'a, Message> {
        button(text(label.to_string()).color(palette::VIOLET_950))
            .on_press(Message::ChooseFilter(choice))
            .width(Length::Fill)
            .padding([8, 16])
            .style(move |_theme: &Theme, status: button::Status| {
                let background = if active {
                    Some(palette::VIOLET_100.into())
                } else if matches!(status, button::Status::Hovered) {
                    Some(palette::VIOLET_50.into())
                } else {
                    None
                };
                button::Style {
                    background,
                    border: Border {
                        radius: 8.0.into(),
                        ..Border::default()
                    },
                    ..button::Style::default()
                }
            })
            .into()
    };

    let mut entries = column![entry("All Projects", None, selected.is_none())].spacing(16);
    for tag in tags {
        entries = entries.push(entry(tag.as_str(), Some(tag.clone()), selected == Some(tag.as_str())));
    }

    let close = button(text("✕").size(22).color(palette::VIOLET_500))
        .on_press(Message::CloseFilterMenu)
        .style(|_theme: &Theme, _status| button::Style {
            background: None,
            ..button::Style::default()
        });

    container(
        column![
            row![
                text("Filter Projects").size(22).font(bold()).color(palette::VIOLET_950),
                Space::with_width(Length::Fill),
                close,
            ]
            .align_y(Alignment::Center),
            scrollable(entries),
        ]
        .spacing(32),
    )
    .width(Length::Fixed(PANEL_WIDTH))
    .height(Length::Fill)
    .padding(32)
    .style(|_theme: &Theme| container::Style {
        background: Some(Color::WHITE.into()),
        ..container::Style::default()
    })
    .into()
}
