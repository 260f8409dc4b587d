/// Classification of the opaque link references carried by content
///
/// References are never fetched or validated; they are only sorted into
/// what the application can do with them.
use super::view::Screen;

/// Landing screen sections that in-page anchors can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Projects,
    Skills,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::About,
        Section::Contact,
    ];

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    /// Approximate start of the section as a fraction of the landing scroll range
    pub fn scroll_fraction(self) -> f32 {
        match self {
            Section::Home => 0.0,
            Section::Projects => 0.18,
            Section::Skills => 0.52,
            Section::About => 0.66,
            Section::Contact => 0.84,
        }
    }
}

/// What activating a link does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// Placeholder reference such as "#"
    Inert,
    /// In-page anchor on the landing screen
    Anchor(Section),
    /// Another screen of the application
    Route(Screen),
    /// Anything else; handed to the user as-is
    External(String),
}

impl Link {
    pub fn parse(reference: &str) -> Self {
        let reference = reference.trim();

        match reference {
            "" | "#" => Link::Inert,
            "/" => Link::Route(Screen::Landing),
            "/projects" => Link::Route(Screen::Projects),
            _ => match reference.strip_prefix('#') {
                Some(anchor) => Section::from_anchor(anchor)
                    .map(Link::Anchor)
                    .unwrap_or(Link::Inert),
                None => Link::External(reference.to_string()),
            },
        }
    }
}
