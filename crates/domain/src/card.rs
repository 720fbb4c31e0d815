//! Card views — the declarative output of rendering project records.
//!
//! Rendering is a pure, one-pass mapping from records to [`CardView`]s.
//! Applying the views to a display (and replacing whatever was there) is
//! the adapter's job.

use serde::{Deserialize, Serialize};

use crate::project::{ProjectLink, ProjectRecord};

/// Browsing context every card link opens in.
pub const LINK_TARGET: &str = "_blank";

/// Link relation that keeps the opened page from reaching back to the
/// opener or learning the referrer.
pub const LINK_REL: &str = "noopener noreferrer";

/// Presentation parameters for [`render_cards`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardStyle {
    /// Entrance-animation delay added per card position, in milliseconds.
    pub stagger_step_ms: u32,
    /// Placeholder image service; the project name is appended as `?text=`.
    pub placeholder_base: String,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            stagger_step_ms: 100,
            placeholder_base: "https://via.placeholder.com/400x200".to_string(),
        }
    }
}

impl CardStyle {
    /// Placeholder image URL carrying `name` as its text.
    #[must_use]
    pub fn fallback_src(&self, name: &str) -> String {
        format!(
            "{}?text={}",
            self.placeholder_base,
            urlencoding::encode(name)
        )
    }

    /// CSS time value for the card at `index`.
    #[must_use]
    pub fn animation_delay(&self, index: usize) -> String {
        let delay = u64::from(self.stagger_step_ms).saturating_mul(index as u64);
        format!("{delay}ms")
    }
}

/// Image shown at the top of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
    /// Substituted once if `src` fails to load.
    pub fallback_src: String,
}

impl ImageView {
    /// Source to switch to after the image at `current_src` failed to load.
    ///
    /// `current_src` may be the browser-resolved absolute form of the
    /// source. Returns `None` once the fallback itself is failing, so the
    /// swap happens at most once.
    #[must_use]
    pub fn fallback_for(&self, current_src: &str) -> Option<&str> {
        if current_src == self.fallback_src || current_src.ends_with(&self.fallback_src) {
            None
        } else {
            Some(&self.fallback_src)
        }
    }
}

/// One outbound link control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub href: String,
    pub label: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl From<&ProjectLink> for LinkView {
    fn from(link: &ProjectLink) -> Self {
        Self {
            href: link.url.clone(),
            label: link.label.clone(),
            target: LINK_TARGET,
            rel: LINK_REL,
        }
    }
}

/// Everything needed to display one project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Position in the rendered sequence.
    pub index: usize,
    pub animation_delay: String,
    pub image: ImageView,
    /// One badge per tag, in record order.
    pub tags: Vec<String>,
    pub title: String,
    pub description: String,
    pub links: Vec<LinkView>,
}

impl CardView {
    #[must_use]
    pub fn new(index: usize, record: &ProjectRecord, style: &CardStyle) -> Self {
        Self {
            index,
            animation_delay: style.animation_delay(index),
            image: ImageView {
                src: record.screenshot.clone(),
                alt: record.name.clone(),
                fallback_src: style.fallback_src(&record.name),
            },
            tags: record.tags.clone(),
            title: record.name.clone(),
            description: record.description.clone(),
            links: record.links.iter().map(LinkView::from).collect(),
        }
    }
}

/// Map `projects` to one card each, preserving order.
pub fn render_cards<'a, I>(projects: I, style: &CardStyle) -> Vec<CardView>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    projects
        .into_iter()
        .enumerate()
        .map(|(index, record)| CardView::new(index, record, style))
        .collect()
}
