//! Portfolio — the loaded project list and the current chip selection.

use crate::card::{CardStyle, CardView, render_cards};
use crate::chip::ChipBar;
use crate::project::ProjectRecord;
use crate::tag::TagFilter;

/// Records passing `filter`, in their original relative order.
pub fn filter_projects<'a>(
    projects: &'a [ProjectRecord],
    filter: &'a TagFilter,
) -> impl Iterator<Item = &'a ProjectRecord> {
    projects.iter().filter(move |p| filter.matches(p))
}

/// Application state after a successful load.
///
/// The project list is fixed at construction; only the chip selection
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    projects: Vec<ProjectRecord>,
    chips: ChipBar,
}

impl Portfolio {
    #[must_use]
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        let chips = ChipBar::new(&projects);
        Self { projects, chips }
    }

    /// Every loaded record, regardless of selection.
    #[must_use]
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    #[must_use]
    pub fn chips(&self) -> &ChipBar {
        &self.chips
    }

    /// Select the chip for `filter`. Unknown filters leave the selection as is.
    pub fn select(&mut self, filter: &TagFilter) -> bool {
        self.chips.select(filter)
    }

    /// Records matching the active chip.
    pub fn visible(&self) -> impl Iterator<Item = &ProjectRecord> {
        filter_projects(&self.projects, self.chips.active_filter())
    }

    /// Cards for the records matching the active chip.
    #[must_use]
    pub fn cards(&self, style: &CardStyle) -> Vec<CardView> {
        render_cards(self.visible(), style)
    }
}
