//! Portfolio service — the bootstrap fetch of the project list.

use folio_domain::portfolio::Portfolio;

use crate::error::FetchError;
use crate::ports::ProjectSource;

/// Message shown in place of the cards when the project list cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load projects. Please try again later.";

/// Result of the initial project load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Projects loaded; render all of them and build the chips.
    Ready(Portfolio),
    /// Loading failed; show `message` and nothing else.
    Failed { message: String },
}

/// Application service fetching the portfolio once at startup.
#[derive(Debug, Clone)]
pub struct PortfolioService<P> {
    source: P,
}

impl<P: ProjectSource> PortfolioService<P> {
    /// Create a new service backed by the given source.
    pub fn new(source: P) -> Self {
        Self { source }
    }

    /// Fetch the project list and wrap it into a [`Portfolio`].
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] raised by the source.
    pub async fn fetch(&self) -> Result<Portfolio, FetchError> {
        let projects = self.source.fetch_projects().await?;
        tracing::info!(count = projects.len(), "projects loaded");
        Ok(Portfolio::new(projects))
    }

    /// Fetch the portfolio, turning any failure into a displayable outcome.
    ///
    /// Failures are logged; there is no retry.
    pub async fn load(&self) -> LoadOutcome {
        match self.fetch().await {
            Ok(portfolio) => LoadOutcome::Ready(portfolio),
            Err(err) => {
                tracing::error!(error = %err, "error fetching projects");
                LoadOutcome::Failed {
                    message: LOAD_FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }
}
