/// Landing screen: hero, featured projects, skills, about, contact
use iced::widget::{
    button, canvas, column, container, opaque, row, scrollable, stack, text, text_input, Space,
};
use iced::{Alignment, Border, Color, Element, Length, Theme};
use iced_aw::Wrap;

use super::backdrop::Backdrop;
use super::palette::{self, fade};
use super::{bold, card, footer, heading, link_button, pill_button, section_progress, skill, ViewContext};
use crate::state::link::Section;
use crate::state::view::LandingView;
use crate::Message;

const HERO_HEIGHT: f32 = 640.0;

pub fn scroll_id() -> scrollable::Id {
    scrollable::Id::new("landing")
}

pub fn view<'a>(ctx: ViewContext<'a>, landing: &'a LandingView) -> Element<'a, Message> {
    let page = column![
        hero(&ctx, landing),
        featured(&ctx, landing),
        skills(&ctx, landing),
        about(&ctx, landing),
        contact(&ctx, landing),
        footer(&ctx.content.owner, "Back to top", "#home"),
    ];

    let body = scrollable(page)
        .id(scroll_id())
        .on_scroll(Message::LandingScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = stack![body, header(&ctx)];
    if landing.is_menu_open() {
        layers = layers.push(opaque(menu()));
    }
    layers.into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(text(ctx.content.brand.clone()).size(24).font(bold()).color(Color::WHITE))
        .on_press(Message::FollowLink("/".to_string()))
        .style(|_theme: &Theme, _status| button::Style {
            background: None,
            ..button::Style::default()
        });

    let navigation: Element<'a, Message> = if ctx.is_compact() {
        button(text("Menu").color(Color::WHITE))
            .on_press(Message::OpenMenu)
            .style(|_theme: &Theme, _status| button::Style {
                background: None,
                ..button::Style::default()
            })
            .into()
    } else {
        row(Section::ALL
            .into_iter()
            .filter(|s| *s != Section::Home)
            .map(|s| link_button(s.label(), &format!("#{}", s.anchor()), Color::WHITE)))
        .spacing(24)
        .into()
    };

    container(
        row![brand, Space::with_width(Length::Fill), navigation].align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([16, 48])
    .into()
}

fn menu<'a>() -> Element<'a, Message> {
    let close = button(text("✕").size(28).color(Color::WHITE))
        .on_press(Message::CloseMenu)
        .style(|_theme: &Theme, _status| button::Style {
            background: None,
            ..button::Style::default()
        });

    let entries = column(Section::ALL.into_iter().map(|s| {
        button(text(s.label()).size(36).font(bold()).color(Color::WHITE))
            .on_press(Message::FollowLink(format!("#{}", s.anchor())))
            .style(|_theme: &Theme, status: button::Status| button::Style {
                background: None,
                text_color: match status {
                    button::Status::Hovered => palette::ROSE_300,
                    _ => Color::WHITE,
                },
                ..button::Style::default()
            })
            .into()
    }))
    .spacing(32)
    .align_x(Alignment::Center);

    container(column![
        container(close).width(Length::Fill).align_x(Alignment::End).padding(32),
        container(entries).center(Length::Fill),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .style(|_theme: &Theme| container::Style {
        background: Some(palette::VIOLET_950.into()),
        ..container::Style::default()
    })
    .into()
}

fn hero<'a>(ctx: &ViewContext<'a>, landing: &'a LandingView) -> Element<'a, Message> {
    let elapsed = ctx.since(landing.entered_at());
    let hero = &ctx.content.hero;
    let intro = ctx.motion.section(elapsed);

    let words = row(hero.headline.split_whitespace().enumerate().map(|(i, word)| {
        text(word.to_string())
            .size(72)
            .font(bold())
            .color(fade(Color::WHITE, ctx.motion.headline_word(elapsed, i)))
            .into()
    }))
    .spacing(14);

    let content = column![
        text(hero.greeting.clone()).size(24).color(fade(Color::WHITE, intro)),
        words,
        text(hero.tagline.clone()).size(20).color(fade(Color::WHITE, intro * 0.8)),
        Space::with_height(32.0),
        pill_button(&hero.call_to_action, "#projects", palette::VIOLET_950, fade(Color::WHITE, intro)),
        Space::with_height(48.0),
        text("Scroll down").size(14).color(fade(Color::WHITE, intro * 0.7)),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    stack![
        canvas(Backdrop { scroll: landing.scroll() })
            .width(Length::Fill)
            .height(Length::Fixed(HERO_HEIGHT)),
        container(content)
            .width(Length::Fill)
            .height(Length::Fixed(HERO_HEIGHT))
            .center(Length::Fill),
    ]
    .into()
}

fn section<'a>(
    body: impl Into<Element<'a, Message>>,
    background: Color,
) -> Element<'a, Message> {
    container(body)
        .width(Length::Fill)
        .padding([96, 48])
        .style(move |_theme: &Theme| container::Style {
            background: Some(background.into()),
            ..container::Style::default()
        })
        .into()
}

fn featured<'a>(ctx: &ViewContext<'a>, landing: &'a LandingView) -> Element<'a, Message> {
    let revealed = landing.revealed_at(Section::Projects);
    let progress = section_progress(ctx, revealed);

    let featured = ctx.content.catalog.featured();
    let cards: Vec<Element<'a, Message>> = card::models(&featured)
        .into_iter()
        .map(|model| {
            let card_progress = match revealed {
                Some(at) => ctx.motion.card(ctx.since(at), model.index),
                None => progress,
            };
            card::view(model, card_progress, super::CARD_WIDTH * 1.4)
        })
        .collect();

    section(
        column![
            heading(
                "Featured Projects",
                "A selection of my creative work showcasing animation and interactive experiences",
                palette::VIOLET_950,
                progress,
            ),
            Wrap::with_elements(cards).spacing(48.0).line_spacing(32.0),
            link_button("View all projects →", "/projects", palette::VIOLET_700),
        ]
        .spacing(48)
        .align_x(Alignment::Center),
        Color::TRANSPARENT,
    )
}

fn skills<'a>(ctx: &ViewContext<'a>, landing: &'a LandingView) -> Element<'a, Message> {
    let revealed = landing.revealed_at(Section::Skills);
    let progress = section_progress(ctx, revealed);

    let bubbles: Vec<Element<'a, Message>> = ctx
        .content
        .skills
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let bubble_progress = match revealed {
                Some(at) => ctx.motion.skill(ctx.since(at), i),
                None => progress,
            };
            skill::view(name, i, bubble_progress)
        })
        .collect();

    section(
        column![
            heading(
                "Skills & Expertise",
                "The tools and technologies I use to bring creative visions to life",
                Color::WHITE,
                progress,
            ),
            Wrap::with_elements(bubbles).spacing(20.0).line_spacing(20.0),
        ]
        .spacing(48)
        .align_x(Alignment::Center),
        palette::VIOLET_950,
    )
}

fn about<'a>(ctx: &ViewContext<'a>, landing: &'a LandingView) -> Element<'a, Message> {
    let progress = section_progress(ctx, landing.revealed_at(Section::About));
    let about = &ctx.content.about;

    let portrait = stack![
        container(Space::new(Length::Fill, Length::Fixed(420.0)))
            .width(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(fade(palette::VIOLET_200, progress).into()),
                border: Border {
                    radius: 16.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            }),
        container(
            container(text(about.badge.clone()).color(fade(Color::WHITE, progress)))
                .padding(16)
                .style(move |_theme: &Theme| container::Style {
                    background: Some(fade(palette::VIOLET_950, progress).into()),
                    border: Border {
                        radius: 12.0.into(),
                        ..Border::default()
                    },
                    ..container::Style::default()
                }),
        )
        .width(Length::Fill)
        .height(Length::Fixed(420.0))
        .align_x(Alignment::End)
        .align_y(Alignment::End)
        .padding(16),
    ];

    let paragraphs = column(
        about
            .paragraphs
            .iter()
            .map(|p| text(p.clone()).color(fade(palette::VIOLET_800, progress)).into()),
    )
    .spacing(16);

    let copy = column![
        text("About Me").size(44).font(bold()).color(fade(palette::VIOLET_950, progress)),
        paragraphs,
        row![
            pill_button("Get in touch ✉", "#contact", Color::WHITE, palette::VIOLET_950),
            pill_button("Resume ↗", &about.resume_link, palette::VIOLET_950, palette::VIOLET_100),
        ]
        .spacing(16),
    ]
    .spacing(24);

    section(
        row![
            container(portrait).width(Length::FillPortion(1)),
            container(copy).width(Length::FillPortion(1)),
        ]
        .spacing(48)
        .align_y(Alignment::Center),
        palette::ROSE_50,
    )
}

/// The contact form renders but never submits
fn contact_form<'a>() -> Element<'a, Message> {
    let field = |label: &'static str, placeholder: &'static str| {
        column![
            text(label).size(14).color(Color::WHITE),
            text_input(placeholder, "").padding(12),
        ]
        .spacing(8)
    };

    container(
        column![
            field("Name", "Your name"),
            field("Email", "your.email@example.com"),
            field("Message", "Tell me about your project..."),
            button(
                container(text("Send Message").color(Color::WHITE)).center_x(Length::Fill)
            )
            .width(Length::Fill)
            .padding(12),
        ]
        .spacing(24),
    )
    .padding(32)
    .style(|_theme: &Theme| container::Style {
        background: Some(fade(Color::WHITE, 0.1).into()),
        border: Border {
            radius: 16.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    })
    .into()
}

fn contact<'a>(ctx: &ViewContext<'a>, landing: &'a LandingView) -> Element<'a, Message> {
    let progress = section_progress(ctx, landing.revealed_at(Section::Contact));
    let contact = &ctx.content.contact;
    let muted = fade(Color::WHITE, 0.7 * progress);

    let detail = |title: &str, body: Element<'a, Message>| {
        column![
            text(title.to_string()).size(20).font(bold()).color(fade(Color::WHITE, progress)),
            body,
        ]
        .spacing(8)
    };

    let socials = row(contact
        .socials
        .iter()
        .map(|s| link_button(&s.label, &s.link, muted)))
    .spacing(16);

    let details = column![
        detail("Email", link_button(&contact.email, &format!("mailto:{}", contact.email), muted)),
        detail("Location", text(contact.location.clone()).color(muted).into()),
        detail("Social", socials.into()),
    ]
    .spacing(32);

    section(
        column![
            heading(&contact.heading, &contact.blurb, Color::WHITE, progress),
            row![
                container(contact_form()).width(Length::FillPortion(1)),
                container(details).width(Length::FillPortion(1)),
            ]
            .spacing(48)
            .align_y(Alignment::Center),
        ]
        .spacing(64)
        .align_x(Alignment::Center),
        palette::VIOLET_950,
    )
}
