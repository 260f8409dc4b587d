/// Site copy and the project catalog
///
/// The content document is JSON embedded at build time. A user-supplied file
/// with the same schema can replace it through `AppConfig::content_path`.
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use super::data::{Catalog, ProjectRecord};
use crate::config::AppConfig;
use crate::error::ContentError;

const EMBEDDED_CONTENT: &str = include_str!("../../content/site.json");

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub greeting: String,
    pub headline: String,
    pub tagline: String,
    pub call_to_action: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub badge: String,
    pub image: String,
    pub resume_link: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Social {
    pub label: String,
    pub link: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub socials: Vec<Social>,
}

/// The document as it appears on disk
#[derive(Deserialize, Debug)]
struct ContentDocument {
    owner: String,
    brand: String,
    hero: Hero,
    #[serde(default)]
    skills: Vec<String>,
    about: About,
    contact: Contact,
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

/// Everything the screens display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub owner: String,
    pub brand: String,
    pub hero: Hero,
    pub skills: Vec<String>,
    pub about: About,
    pub contact: Contact,
    pub catalog: Catalog,
}

impl SiteContent {
    /// Parse a content document and validate its catalog
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let doc: ContentDocument = serde_json::from_str(json)?;
        let catalog = Catalog::new(doc.projects)?;

        Ok(Self {
            owner: doc.owner,
            brand: doc.brand,
            hero: doc.hero,
            skills: doc.skills,
            about: doc.about,
            contact: doc.contact,
            catalog,
        })
    }

    /// The content compiled into the binary
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Content for this run: the configured override if it loads, else the embedded copy
    pub fn load(config: &AppConfig) -> Result<Self, ContentError> {
        if let Some(path) = &config.content_path {
            match Self::from_file(path) {
                Ok(content) => {
                    info!(path = %path.display(), projects = content.catalog.len(), "loaded content override");
                    return Ok(content);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "content override rejected, using embedded content");
                }
            }
        }

        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_embedded_content_is_valid() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.catalog.len(), 9);
        assert_eq!(content.catalog.featured().len(), 4);
        assert_eq!(content.skills.len(), 12);
        assert_eq!(content.about.paragraphs.len(), 3);
        assert_eq!(content.contact.email, "hello@creative.dev");
    }

    #[test]
    fn test_featured_projects_lead_the_catalog() {
        let content = SiteContent::embedded().unwrap();
        let featured: Vec<_> = content.catalog.featured().iter().map(|p| p.title.clone()).collect();
        let leading: Vec<_> = content.catalog.projects()[..4].iter().map(|p| p.title.clone()).collect();
        assert_eq!(featured, leading);
    }

    #[test]
    fn test_duplicate_titles_rejected() {
        let json = EMBEDDED_CONTENT.replace("Music Streaming App", "Travel Blog Platform");
        let err = SiteContent::from_json(&json).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateTitle(t) if t == "Travel Blog Platform"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = SiteContent::from_json("{ \"owner\": ").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_missing_override_falls_back() {
        let config = AppConfig {
            content_path: Some(PathBuf::from("/nonexistent/creative-portfolio/site.json")),
            ..AppConfig::default()
        };
        let content = SiteContent::load(&config).unwrap();
        assert_eq!(content, SiteContent::embedded().unwrap());
    }

    #[test]
    fn test_unreadable_file_reports_path() {
        let path = Path::new("/nonexistent/site.json");
        let err = SiteContent::from_file(path).unwrap_err();
        assert!(matches!(err, ContentError::Read { path: p, .. } if p == path));
    }
}
