use iced::time::{self, Instant};
use iced::widget::{container, scrollable, stack, text};
use iced::{window, Alignment, Border, Color, Element, Length, Size, Subscription, Task, Theme};
use std::time::Duration;
use tracing::{debug, error, info};

mod config;
mod error;
mod logging;
mod motion;
mod state;
mod ui;

use config::AppConfig;
use motion::Motion;
use state::content::SiteContent;
use state::filter::extract_tags;
use state::link::{Link, Section};
use state::view::{LandingView, ProjectsView, Screen};
use ui::palette;

/// How long a status notice stays on screen
const STATUS_TTL: Duration = Duration::from_secs(3);
/// Animation frame interval while something is moving
const FRAME: Duration = Duration::from_millis(16);
const INITIAL_WINDOW: Size = Size::new(1280.0, 860.0);

/// The screen being shown, with its own transient state
#[derive(Debug)]
enum ActiveScreen {
    Landing(LandingView),
    Projects(ProjectsView),
}

/// A short notice shown in the corner, e.g. after copying a link
#[derive(Debug, Clone)]
struct Status {
    message: String,
    shown_at: Instant,
}

/// Main application state
struct Portfolio {
    /// Site copy and the project catalog
    content: SiteContent,
    /// Distinct catalog tags, computed once
    tags: Vec<String>,
    config: AppConfig,
    motion: Motion,
    screen: ActiveScreen,
    /// Time of the latest event or animation frame
    now: Instant,
    window_width: f32,
    status: Option<Status>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Animation frame
    Tick(Instant),
    WindowResized(Size),
    /// User activated a link reference (card, nav entry, button)
    FollowLink(String),
    OpenMenu,
    CloseMenu,
    LandingScrolled(scrollable::Viewport),
    ToggleFilterMenu,
    CloseFilterMenu,
    /// A choice from the filter panel; `None` is "All Projects"
    ChooseFilter(Option<String>),
    ClearFilter,
}

impl Portfolio {
    /// Create a new instance of the application
    fn new(config: AppConfig, content: SiteContent) -> (Self, Task<Message>) {
        let now = Instant::now();
        let tags = extract_tags(content.catalog.projects());

        info!(
            projects = content.catalog.len(),
            tags = tags.len(),
            "🎨 Portfolio initialized"
        );

        (
            Portfolio {
                motion: Motion::from(config.motion),
                content,
                tags,
                config,
                screen: ActiveScreen::Landing(LandingView::new(now)),
                now,
                window_width: INITIAL_WINDOW.width,
                status: None,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        match self.screen {
            ActiveScreen::Landing(_) => self.content.brand.clone(),
            ActiveScreen::Projects(_) => format!("{} | All Projects", self.content.brand),
        }
    }

    /// Replace the current screen with a fresh one
    fn enter(&mut self, screen: Screen) {
        debug!(?screen, "entering screen");
        self.screen = match screen {
            Screen::Landing => ActiveScreen::Landing(LandingView::new(self.now)),
            Screen::Projects => ActiveScreen::Projects(ProjectsView::new(self.now)),
        };
    }

    fn scroll_to(&mut self, section: Section) -> Task<Message> {
        if !matches!(self.screen, ActiveScreen::Landing(_)) {
            self.enter(Screen::Landing);
        }

        let ActiveScreen::Landing(landing) = &mut self.screen else {
            return Task::none();
        };
        landing.close_menu();

        let y = landing.snap_offset(section);
        debug!(section = section.anchor(), offset = y, "scrolling to section");
        scrollable::snap_to(ui::landing::scroll_id(), scrollable::RelativeOffset { x: 0.0, y })
    }

    fn follow(&mut self, reference: String) -> Task<Message> {
        match Link::parse(&reference) {
            Link::Inert => {
                debug!(reference, "placeholder link");
                if let ActiveScreen::Landing(landing) = &mut self.screen {
                    landing.close_menu();
                }
                Task::none()
            }
            Link::Anchor(section) => self.scroll_to(section),
            Link::Route(screen) => {
                self.enter(screen);
                Task::none()
            }
            Link::External(target) => {
                info!(link = %target, "copying external link");
                self.status = Some(Status {
                    message: format!("Copied {} to the clipboard", target),
                    shown_at: self.now,
                });
                iced::clipboard::write(target)
            }
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match message {
            Message::Tick(at) => at,
            _ => Instant::now(),
        };

        if let Some(status) = &self.status {
            if self.now.saturating_duration_since(status.shown_at) >= STATUS_TTL {
                self.status = None;
            }
        }

        match message {
            Message::Tick(_) => Task::none(),
            Message::WindowResized(size) => {
                self.window_width = size.width;
                if self.window_width >= ui::COMPACT_WIDTH {
                    if let ActiveScreen::Landing(landing) = &mut self.screen {
                        landing.close_menu();
                    }
                }
                Task::none()
            }
            Message::FollowLink(reference) => self.follow(reference),
            Message::OpenMenu => {
                if let ActiveScreen::Landing(landing) = &mut self.screen {
                    landing.open_menu();
                }
                Task::none()
            }
            Message::CloseMenu => {
                if let ActiveScreen::Landing(landing) = &mut self.screen {
                    landing.close_menu();
                }
                Task::none()
            }
            Message::LandingScrolled(viewport) => {
                if let ActiveScreen::Landing(landing) = &mut self.screen {
                    let content_height = viewport.content_bounds().height;
                    let visible = if content_height > 0.0 {
                        viewport.bounds().height / content_height
                    } else {
                        1.0
                    };
                    landing.record_scroll(viewport.relative_offset().y, visible, self.now);
                }
                Task::none()
            }
            Message::ToggleFilterMenu => {
                if let ActiveScreen::Projects(projects) = &mut self.screen {
                    projects.toggle_filter_menu();
                }
                Task::none()
            }
            Message::CloseFilterMenu => {
                if let ActiveScreen::Projects(projects) = &mut self.screen {
                    projects.close_filter_menu();
                }
                Task::none()
            }
            Message::ChooseFilter(choice) => {
                if let ActiveScreen::Projects(projects) = &mut self.screen {
                    projects.choose_from_menu(choice, self.now);
                    info!(
                        tag = projects.selection().selected_tag(),
                        visible = projects.visible(&self.content.catalog).len(),
                        "filter applied"
                    );
                }
                Task::none()
            }
            Message::ClearFilter => {
                if let ActiveScreen::Projects(projects) = &mut self.screen {
                    projects.clear_filter(self.now);
                    info!("filter cleared");
                }
                Task::none()
            }
        }
    }

    /// Whether any entrance or notice still needs animation frames
    fn is_animating(&self) -> bool {
        let status_visible = self
            .status
            .as_ref()
            .is_some_and(|s| self.now.saturating_duration_since(s.shown_at) < STATUS_TTL);
        if status_visible {
            return true;
        }
        if !self.motion.is_enabled() {
            return false;
        }

        let since = |start: Instant| self.now.saturating_duration_since(start);

        match &self.screen {
            ActiveScreen::Landing(landing) => {
                let words = self.content.hero.headline.split_whitespace().count();
                let intro = self.motion.headline_settle_after(words).max(self.motion.section_settle_after());
                let reveal = self
                    .motion
                    .section_settle_after()
                    .max(self.motion.cards_settle_after(self.content.catalog.featured().len()))
                    .max(self.motion.skills_settle_after(self.content.skills.len()));

                since(landing.entered_at()) < intro || landing.revealed().any(|at| since(at) < reveal)
            }
            ActiveScreen::Projects(projects) => {
                let count = projects.visible(&self.content.catalog).len();
                let settle = self.motion.cards_settle_after(count).max(self.motion.section_settle_after());
                since(projects.grid_shown_at()) < settle
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        if self.is_animating() {
            Subscription::batch([resize, time::every(FRAME).map(Message::Tick)])
        } else {
            resize
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let ctx = ui::ViewContext {
            content: &self.content,
            motion: self.motion,
            now: self.now,
            window_width: self.window_width,
        };

        let screen = match &self.screen {
            ActiveScreen::Landing(landing) => ui::landing::view(ctx, landing),
            ActiveScreen::Projects(projects) => ui::projects::view(ctx, projects, &self.tags),
        };

        match &self.status {
            Some(status) => stack![
                screen,
                container(
                    container(text(status.message.clone()).color(Color::WHITE))
                        .padding([10, 16])
                        .style(|_theme: &Theme| container::Style {
                            background: Some(palette::VIOLET_950.into()),
                            border: Border {
                                radius: 8.0.into(),
                                ..Border::default()
                            },
                            ..container::Style::default()
                        }),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Alignment::End)
                .align_y(Alignment::End)
                .padding(24),
            ]
            .into(),
            None => screen,
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        palette::theme(self.config.theme)
    }
}

fn main() -> iced::Result {
    logging::init();

    let config = AppConfig::load();
    let content = match SiteContent::load(&config) {
        Ok(content) => content,
        Err(err) => {
            error!(error = %err, "❌ Embedded site content is invalid");
            std::process::exit(1);
        }
    };

    iced::application(Portfolio::title, Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .window_size(INITIAL_WINDOW)
        .centered()
        .run_with(move || Portfolio::new(config, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::view::ViewSelection;

    fn app() -> Portfolio {
        let content = SiteContent::embedded().unwrap();
        Portfolio::new(AppConfig::default(), content).0
    }

    fn projects(app: &Portfolio) -> &ProjectsView {
        match &app.screen {
            ActiveScreen::Projects(projects) => projects,
            ActiveScreen::Landing(_) => panic!("expected the projects screen"),
        }
    }

    #[test]
    fn test_starts_on_landing_with_all_tags() {
        let app = app();
        assert!(matches!(app.screen, ActiveScreen::Landing(_)));
        assert_eq!(app.tags.first().map(String::as_str), Some("Three.js"));
        assert!(app.tags.iter().any(|t| t == "Web Audio API"));
    }

    #[test]
    fn test_route_links_switch_screens() {
        let mut app = app();
        let _ = app.update(Message::FollowLink("/projects".to_string()));
        assert_eq!(projects(&app).visible(&app.content.catalog).len(), 9);

        let _ = app.update(Message::FollowLink("/".to_string()));
        assert!(matches!(app.screen, ActiveScreen::Landing(_)));
    }

    #[test]
    fn test_filter_flow() {
        let mut app = app();
        let _ = app.update(Message::FollowLink("/projects".to_string()));

        let _ = app.update(Message::ToggleFilterMenu);
        assert!(projects(&app).is_filter_menu_open());

        let _ = app.update(Message::ChooseFilter(Some("React".to_string())));
        let view = projects(&app);
        assert!(!view.is_filter_menu_open());
        let titles: Vec<_> = view.visible(&app.content.catalog).iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "E-commerce Animation",
                "Interactive Dashboard",
                "Music Streaming App",
                "Real Estate Visualization",
                "Fitness Tracking Dashboard",
            ]
        );

        let _ = app.update(Message::ClearFilter);
        assert_eq!(projects(&app).selection(), &ViewSelection::Unfiltered);
    }

    #[test]
    fn test_unmatched_tag_shows_nothing_until_cleared() {
        let mut app = app();
        let _ = app.update(Message::FollowLink("/projects".to_string()));

        let _ = app.update(Message::ChooseFilter(Some("Rust".to_string())));
        assert_eq!(projects(&app).selection().selected_tag(), Some("Rust"));
        assert!(projects(&app).visible(&app.content.catalog).is_empty());

        let _ = app.update(Message::ClearFilter);
        assert_eq!(projects(&app).selection(), &ViewSelection::Unfiltered);
        assert_eq!(projects(&app).visible(&app.content.catalog).len(), 9);
    }

    #[test]
    fn test_selection_resets_on_reentry() {
        let mut app = app();
        let _ = app.update(Message::FollowLink("/projects".to_string()));
        let _ = app.update(Message::ChooseFilter(Some("GSAP".to_string())));
        assert_eq!(projects(&app).selection().selected_tag(), Some("GSAP"));

        let _ = app.update(Message::FollowLink("/".to_string()));
        let _ = app.update(Message::FollowLink("/projects".to_string()));
        assert_eq!(projects(&app).selection(), &ViewSelection::Unfiltered);
    }

    #[test]
    fn test_menu_entry_closes_menu() {
        let mut app = app();
        let _ = app.update(Message::OpenMenu);
        assert!(matches!(&app.screen, ActiveScreen::Landing(l) if l.is_menu_open()));

        let _ = app.update(Message::FollowLink("#about".to_string()));
        assert!(matches!(&app.screen, ActiveScreen::Landing(l) if !l.is_menu_open()));
    }

    #[test]
    fn test_anchor_from_projects_returns_to_landing() {
        let mut app = app();
        let _ = app.update(Message::FollowLink("/projects".to_string()));
        let _ = app.update(Message::FollowLink("#contact".to_string()));
        assert!(matches!(app.screen, ActiveScreen::Landing(_)));
    }

    #[test]
    fn test_external_link_sets_status() {
        let mut app = app();
        let _ = app.update(Message::FollowLink("mailto:hello@creative.dev".to_string()));
        let status = app.status.as_ref().map(|s| s.message.as_str());
        assert_eq!(status, Some("Copied mailto:hello@creative.dev to the clipboard"));
        assert!(app.is_animating());
    }

    #[test]
    fn test_settles_when_motion_disabled() {
        let mut config = AppConfig::default();
        config.motion.enabled = false;
        let app = Portfolio::new(config, SiteContent::embedded().unwrap()).0;
        assert!(!app.is_animating());
    }

    #[test]
    fn test_landing_animates_after_entry() {
        let mut app = app();
        assert!(app.is_animating());

        app.now += Duration::from_secs(10);
        assert!(!app.is_animating());
    }
}
