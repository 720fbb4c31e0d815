mod filter_chips;
mod project_card;
mod project_grid;
mod theme_toggle;

pub use filter_chips::FilterChips;
pub use project_card::ProjectCard;
pub use project_grid::ProjectGrid;
pub use theme_toggle::ThemeToggle;
