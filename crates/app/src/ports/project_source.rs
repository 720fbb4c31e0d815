//! Project source port — where the ordered project list comes from.

use std::future::Future;

use folio_domain::project::ProjectRecord;

use crate::error::FetchError;

/// Loads the full, ordered list of project records.
pub trait ProjectSource {
    /// Fetch every record, in the order the resource lists them.
    fn fetch_projects(&self) -> impl Future<Output = Result<Vec<ProjectRecord>, FetchError>>;
}
