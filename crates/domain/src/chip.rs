//! Chip bar — single-select filter controls derived from the loaded projects.

use crate::project::ProjectRecord;
use crate::tag::{TagFilter, derive_filter_tags};

/// One selectable filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub filter: TagFilter,
    /// Capitalized display text.
    pub label: String,
}

/// The set of chips plus the index of the active one.
///
/// Exactly one chip is active at any time; the `All` chip is always present
/// at index 0 and active on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipBar {
    chips: Vec<Chip>,
    active: usize,
}

impl ChipBar {
    /// Build one chip per distinct tag in `projects`, `All` first and selected.
    #[must_use]
    pub fn new(projects: &[ProjectRecord]) -> Self {
        let chips = derive_filter_tags(projects)
            .into_iter()
            .map(|filter| Chip {
                label: filter.label(),
                filter,
            })
            .collect();
        Self { chips, active: 0 }
    }

    #[must_use]
    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    /// Iterate chips alongside their selected state.
    pub fn entries(&self) -> impl Iterator<Item = (&Chip, bool)> {
        self.chips
            .iter()
            .enumerate()
            .map(move |(idx, chip)| (chip, idx == self.active))
    }

    #[must_use]
    pub fn active(&self) -> &Chip {
        &self.chips[self.active]
    }

    #[must_use]
    pub fn active_filter(&self) -> &TagFilter {
        &self.active().filter
    }

    /// Make the chip for `filter` the only active one.
    ///
    /// Returns `false` and leaves the selection unchanged when no chip
    /// carries `filter`.
    pub fn select(&mut self, filter: &TagFilter) -> bool {
        match self.chips.iter().position(|c| &c.filter == filter) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ProjectRecord> {
        vec![
            ProjectRecord::builder().name("A").tag("web").build(),
            ProjectRecord::builder().name("B").tag("cli").build(),
        ]
    }

    fn active_count(bar: &ChipBar) -> usize {
        bar.entries().filter(|(_, active)| *active).count()
    }

    #[test]
    fn should_label_chips_in_first_seen_order() {
        let bar = ChipBar::new(&sample());
        let labels: Vec<_> = bar.chips().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["All", "Web", "Cli"]);
    }

    #[test]
    fn should_start_with_all_selected() {
        let bar = ChipBar::new(&sample());
        assert_eq!(bar.active_filter(), &TagFilter::All);
        assert_eq!(active_count(&bar), 1);
    }

    #[test]
    fn should_keep_single_selection_across_clicks() {
        let mut bar = ChipBar::new(&sample());
        for tag in ["web", "cli", "all", "cli", "web"] {
            assert!(bar.select(&TagFilter::parse(tag)));
            assert_eq!(active_count(&bar), 1);
            assert_eq!(bar.active_filter().as_str(), tag);
        }
    }

    #[test]
    fn should_ignore_unknown_filter() {
        let mut bar = ChipBar::new(&sample());
        bar.select(&TagFilter::parse("cli"));
        assert!(!bar.select(&TagFilter::parse("go")));
        assert_eq!(bar.active_filter().as_str(), "cli");
    }

    #[test]
    fn should_offer_only_all_chip_for_empty_list() {
        let bar = ChipBar::new(&[]);
        assert_eq!(bar.chips().len(), 1);
        assert_eq!(bar.active().label, "All");
    }
}
