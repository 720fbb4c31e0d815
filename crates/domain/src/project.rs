//! Project record — one portfolio entry as served by the data resource.

use serde::{Deserialize, Serialize};

/// A single portfolio entry.
///
/// Records are taken verbatim from the data resource. Missing or `null`
/// fields deserialize to empty values and scalar values are read as their
/// text, so one odd record degrades to sparse content instead of failing
/// the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    /// URL or relative path of the card image.
    #[serde(deserialize_with = "lenient::text")]
    pub screenshot: String,
    /// Filter labels, in display order. May be empty.
    #[serde(deserialize_with = "lenient::tags")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient::links")]
    pub links: Vec<ProjectLink>,
}

/// An outbound link shown on a project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLink {
    #[serde(deserialize_with = "lenient::text")]
    pub url: String,
    #[serde(deserialize_with = "lenient::text")]
    pub label: String,
}

impl ProjectLink {
    #[must_use]
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }
}

impl ProjectRecord {
    /// Create a builder for constructing a [`ProjectRecord`].
    #[must_use]
    pub fn builder() -> ProjectRecordBuilder {
        ProjectRecordBuilder::default()
    }

    /// Whether `tag` appears in this record's tags (exact match).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Step-by-step builder for [`ProjectRecord`].
#[derive(Debug, Default)]
pub struct ProjectRecordBuilder {
    record: ProjectRecord,
}

impl ProjectRecordBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.name = name.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = description.into();
        self
    }

    #[must_use]
    pub fn screenshot(mut self, screenshot: impl Into<String>) -> Self {
        self.record.screenshot = screenshot.into();
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.record.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn link(mut self, url: impl Into<String>, label: impl Into<String>) -> Self {
        self.record.links.push(ProjectLink::new(url, label));
        self
    }

    /// Consume the builder and return the [`ProjectRecord`].
    #[must_use]
    pub fn build(self) -> ProjectRecord {
        self.record
    }
}

/// Field decoders for hand-edited data files.
///
/// Text fields accept `null` (empty) and numbers or booleans (their text).
/// List fields accept `null` or a non-list (empty) and skip entries of the
/// wrong shape.
mod lenient {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    use super::ProjectLink;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Bool(bool),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Other(IgnoredAny),
    }

    impl Scalar {
        fn into_text(self) -> Option<String> {
            match self {
                Self::Text(text) => Some(text),
                Self::Bool(value) => Some(value.to_string()),
                Self::Unsigned(value) => Some(value.to_string()),
                Self::Signed(value) => Some(value.to_string()),
                Self::Float(value) => Some(value.to_string()),
                Self::Other(_) => None,
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry<T> {
        Value(T),
        Other(IgnoredAny),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum List<T> {
        Many(Vec<Entry<T>>),
        Other(IgnoredAny),
    }

    impl<T> List<T> {
        fn into_values(self) -> impl Iterator<Item = T> {
            let entries = match self {
                Self::Many(entries) => entries,
                Self::Other(_) => Vec::new(),
            };
            entries.into_iter().filter_map(|entry| match entry {
                Entry::Value(value) => Some(value),
                Entry::Other(_) => None,
            })
        }
    }

    pub(super) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(Scalar::deserialize(deserializer)?
            .into_text()
            .unwrap_or_default())
    }

    pub(super) fn tags<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<String>, D::Error> {
        Ok(List::<Scalar>::deserialize(deserializer)?
            .into_values()
            .filter_map(Scalar::into_text)
            .collect())
    }

    pub(super) fn links<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<ProjectLink>, D::Error> {
        Ok(List::<ProjectLink>::deserialize(deserializer)?
            .into_values()
            .collect())
    }
}
