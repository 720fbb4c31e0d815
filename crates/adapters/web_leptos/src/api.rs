//! Project source backed by `gloo-net`, fetching the static JSON resource.

use folio_app::error::FetchError;
use folio_app::ports::ProjectSource;
use folio_domain::project::ProjectRecord;
use gloo_net::http::{Request, Response};

/// Fetches the project list with a single `GET` on a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpProjectSource {
    url: String,
}

impl HttpProjectSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
fn check_response(resp: Response) -> Result<Response, FetchError> {
    if resp.ok() {
        return Ok(resp);
    }
    Err(FetchError::Status {
        status: resp.status(),
    })
}

impl ProjectSource for HttpProjectSource {
    async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>, FetchError> {
        let resp = Request::get(&self.url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        let body = check_response(resp)?
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()))
    }
}
