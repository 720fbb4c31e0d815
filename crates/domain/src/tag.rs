//! Tag filters — the synthetic `all` filter plus one filter per distinct tag.

use std::collections::HashSet;
use std::fmt;

use crate::project::ProjectRecord;

/// Text of the synthetic filter that matches every record.
pub const ALL_TAG: &str = "all";

/// A filter selectable from the chip bar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagFilter {
    /// Matches every record.
    All,
    /// Matches records whose tags contain this exact text.
    Tag(String),
}

impl TagFilter {
    /// Build a filter from raw tag text. `all` maps to [`TagFilter::All`].
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        if tag == ALL_TAG {
            Self::All
        } else {
            Self::Tag(tag.to_string())
        }
    }

    /// The raw tag text (`all` for [`TagFilter::All`]).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_TAG,
            Self::Tag(tag) => tag,
        }
    }

    /// Whether `record` passes this filter.
    #[must_use]
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => record.has_tag(tag),
        }
    }

    /// Chip label: the tag with its first character uppercased.
    #[must_use]
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uppercase the first character, leave the rest untouched.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Distinct filters across `projects`: [`TagFilter::All`] first, then each
/// tag in the order it is first seen (record order, then tag order).
#[must_use]
pub fn derive_filter_tags(projects: &[ProjectRecord]) -> Vec<TagFilter> {
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(ALL_TAG);

    let mut filters = vec![TagFilter::All];
    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        if seen.insert(tag.as_str()) {
            filters.push(TagFilter::Tag(tag.clone()));
        }
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, tags: &[&str]) -> ProjectRecord {
        tags.iter()
            .fold(ProjectRecord::builder().name(name), |b, t| b.tag(*t))
            .build()
    }

    #[test]
    fn should_start_with_all_when_no_projects() {
        assert_eq!(derive_filter_tags(&[]), vec![TagFilter::All]);
    }

    #[test]
    fn should_keep_first_seen_order() {
        let projects = vec![
            project("A", &["web", "rust"]),
            project("B", &["cli", "web"]),
            project("C", &["rust", "wasm"]),
        ];
        let tags: Vec<_> = derive_filter_tags(&projects)
            .iter()
            .map(|t| t.as_str().to_string())
            .collect();
        assert_eq!(tags, ["all", "web", "rust", "cli", "wasm"]);
    }

    #[test]
    fn should_collapse_literal_all_tag_into_synthetic_filter() {
        let projects = vec![project("A", &["all", "web"])];
        assert_eq!(
            derive_filter_tags(&projects),
            vec![TagFilter::All, TagFilter::Tag("web".to_string())]
        );
    }

    #[test]
    fn should_treat_differently_cased_tags_as_distinct() {
        let projects = vec![project("A", &["web"]), project("B", &["Web"])];
        assert_eq!(derive_filter_tags(&projects).len(), 3);
    }

    #[test]
    fn should_skip_records_without_tags() {
        let projects = vec![project("A", &[]), project("B", &["cli"])];
        assert_eq!(
            derive_filter_tags(&projects),
            vec![TagFilter::All, TagFilter::Tag("cli".to_string())]
        );
    }

    #[test]
    fn should_capitalize_first_character_only() {
        assert_eq!(capitalize("web"), "Web");
        assert_eq!(capitalize("machine learning"), "Machine learning");
        assert_eq!(capitalize("iOS"), "IOS");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn should_label_all_filter() {
        assert_eq!(TagFilter::All.label(), "All");
        assert_eq!(TagFilter::parse("cli").label(), "Cli");
    }

    #[test]
    fn should_match_every_record_for_all() {
        assert!(TagFilter::All.matches(&project("A", &[])));
        assert!(TagFilter::parse("web").matches(&project("A", &["web"])));
        assert!(!TagFilter::parse("web").matches(&project("A", &["cli"])));
    }
}
