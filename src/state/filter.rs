/// Tag extraction and filtering over the project catalog
///
/// Both functions are pure. Matching is exact and case-sensitive.
use std::collections::HashSet;

use super::data::ProjectRecord;

/// Distinct tags across all projects, in first-seen order
///
/// Order follows the catalog, then each record's own tag order.
pub fn extract_tags(projects: &[ProjectRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }

    tags
}

/// The visible subsequence for an optional selected tag
///
/// `None` returns every project. An empty result is a normal outcome.
pub fn filter_projects<'a>(
    projects: &'a [ProjectRecord],
    selected: Option<&str>,
) -> Vec<&'a ProjectRecord> {
    match selected {
        None => projects.iter().collect(),
        Some(tag) => projects.iter().filter(|p| p.has_tag(tag)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::record;
    use proptest::prelude::*;

    fn scenario() -> Vec<ProjectRecord> {
        vec![
            record("Immersive 3D Experience", &["Three.js", "WebGL", "GSAP"]),
            record("E-commerce Animation", &["Framer Motion", "React", "Tailwind"]),
            record("Interactive Dashboard", &["D3.js", "SVG Animation", "React"]),
            record("Digital Art Gallery", &["Canvas API", "GSAP", "JavaScript"]),
        ]
    }

    #[test]
    fn test_tags_in_first_seen_order() {
        assert_eq!(
            extract_tags(&scenario()),
            [
                "Three.js",
                "WebGL",
                "GSAP",
                "Framer Motion",
                "React",
                "Tailwind",
                "D3.js",
                "SVG Animation",
                "Canvas API",
                "JavaScript",
            ]
        );
    }

    #[test]
    fn test_filter_by_shared_tag() {
        let projects = scenario();
        let titles: Vec<_> = filter_projects(&projects, Some("React"))
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, ["E-commerce Animation", "Interactive Dashboard"]);
    }

    #[test]
    fn test_filter_unknown_tag_is_empty() {
        let projects = scenario();
        assert!(filter_projects(&projects, Some("Rust")).is_empty());
        assert!(filter_projects(&projects, Some("react")).is_empty());
        assert!(filter_projects(&projects, Some("Three")).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(extract_tags(&[]).is_empty());
        assert!(filter_projects(&[], Some("React")).is_empty());
        assert!(filter_projects(&[], None).is_empty());
    }

    #[test]
    fn test_duplicate_tags_within_record() {
        let projects = vec![record("Twice", &["GSAP", "GSAP"]), record("Once", &["GSAP"])];
        assert_eq!(extract_tags(&projects), ["GSAP"]);
        assert_eq!(filter_projects(&projects, Some("GSAP")).len(), 2);
    }

    const TAG_POOL: &[&str] = &["React", "react", "GSAP", "WebGL", "Three.js", "D3.js", "CMS"];

    fn arb_catalog() -> impl Strategy<Value = Vec<ProjectRecord>> {
        prop::collection::vec(
            prop::collection::vec(prop::sample::select(TAG_POOL), 0..5),
            0..10,
        )
        .prop_map(|tag_lists| {
            tag_lists
                .into_iter()
                .enumerate()
                .map(|(i, tags)| record(&format!("Project {i}"), &tags))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_no_selection_is_identity(projects in arb_catalog()) {
            let visible: Vec<ProjectRecord> =
                filter_projects(&projects, None).into_iter().cloned().collect();
            prop_assert_eq!(visible, projects);
        }

        #[test]
        fn prop_filter_partitions_catalog(
            projects in arb_catalog(),
            tag in prop::sample::select(TAG_POOL),
        ) {
            let visible = filter_projects(&projects, Some(tag));
            for project in &visible {
                prop_assert!(project.has_tag(tag));
            }
            let kept = projects.iter().filter(|p| visible.iter().any(|v| v.title == p.title));
            prop_assert_eq!(kept.count(), visible.len());
            for project in projects.iter().filter(|p| !visible.contains(p)) {
                prop_assert!(!project.has_tag(tag));
            }
        }

        #[test]
        fn prop_filter_preserves_catalog_order(
            projects in arb_catalog(),
            tag in prop::sample::select(TAG_POOL),
        ) {
            let positions: Vec<usize> = filter_projects(&projects, Some(tag))
                .iter()
                .filter_map(|v| projects.iter().position(|p| p.title == v.title))
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_absent_tag_matches_nothing(projects in arb_catalog()) {
            prop_assert!(filter_projects(&projects, Some("Rust")).is_empty());
        }

        #[test]
        fn prop_tags_distinct_and_complete(projects in arb_catalog()) {
            let tags = extract_tags(&projects);
            let distinct: HashSet<&String> = tags.iter().collect();
            prop_assert_eq!(distinct.len(), tags.len());
            for tag in projects.iter().flat_map(|p| p.tags.iter()) {
                prop_assert!(tags.contains(tag));
            }
            prop_assert_eq!(extract_tags(&projects), tags);
        }
    }
}
