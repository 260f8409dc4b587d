/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the content layer and the UI layer.
use serde::Deserialize;
use std::collections::HashSet;

use crate::error::ContentError;

/// Represents a single project in the catalog
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Display title, unique within the catalog
    pub title: String,
    /// One-line summary shown under the title
    pub description: String,
    /// Image reference (URL or path), never dereferenced
    pub image: String,
    /// Technology labels, in display order
    #[serde(default)]
    pub tags: Vec<String>,
    /// Where the card leads (see `state::link::Link`)
    pub link: String,
    /// Shown on the landing screen when true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    /// Free-form year label, e.g. "2023"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl ProjectRecord {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// Exact, case-sensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// The fixed, ordered list of projects
///
/// Built once at start-up and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate titles and empty descriptions
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, ContentError> {
        let mut titles = HashSet::with_capacity(projects.len());

        for (index, project) in projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(ContentError::EmptyTitle { index });
            }
            if project.description.trim().is_empty() {
                return Err(ContentError::EmptyDescription {
                    title: project.title.clone(),
                });
            }
            if !titles.insert(project.title.as_str()) {
                return Err(ContentError::DuplicateTitle(project.title.clone()));
            }
        }

        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Projects flagged `featured`, in catalog order
    pub fn featured(&self) -> Vec<&ProjectRecord> {
        self.projects.iter().filter(|p| p.is_featured()).collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }
}

#[cfg(test)]
pub(crate) fn record(title: &str, tags: &[&str]) -> ProjectRecord {
    ProjectRecord {
        title: title.to_string(),
        description: format!("{title} description"),
        image: "/placeholder.svg?height=600&width=800".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        link: "#".to_string(),
        featured: None,
        year: None,
    }
}
