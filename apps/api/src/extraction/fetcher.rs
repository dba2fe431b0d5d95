//! Job description fetcher — one GET per request, then hostname-keyed extraction.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::extraction::rules::{ExtractionError, ExtractionRegistry};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Source of raw page HTML.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_html(&self, url: &Url) -> Result<String, FetchError>;
}

/// Plain GET with `reqwest` defaults: no custom headers, timeout or retry.
#[derive(Clone, Default)]
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_html(&self, url: &Url) -> Result<String, FetchError> {
        let start = std::time::Instant::now();
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            // The body is still extracted; error pages usually yield no text.
            warn!(%url, %status, "Job posting returned non-success status");
        }

        let body = response.text().await?;
        debug!(
            %url,
            bytes = body.len(),
            duration_ms = start.elapsed().as_millis(),
            "Fetched job posting"
        );
        Ok(body)
    }
}

/// Fetches `url` and extracts its job description with the rule for its host.
pub async fn fetch_job_description(
    pages: &dyn PageFetcher,
    registry: &ExtractionRegistry,
    url: &Url,
) -> Result<String, FetchError> {
    let html = pages.fetch_html(url).await?;
    let host = url.host_str().unwrap_or_default();
    Ok(registry.extract(host, &html)?)
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;

    /// Serves a fixed page for every URL.
    pub struct StaticPageFetcher(pub String);

    #[async_trait]
    impl PageFetcher for StaticPageFetcher {
        async fn fetch_html(&self, _url: &Url) -> Result<String, FetchError> {
            Ok(self.0.clone())
        }
    }

    /// Fails every fetch with a transport error.
    pub struct FailingPageFetcher;

    #[async_trait]
    impl PageFetcher for FailingPageFetcher {
        async fn fetch_html(&self, _url: &Url) -> Result<String, FetchError> {
            // A relative URL makes reqwest fail while building the request.
            let err = reqwest::Client::new()
                .get("not a url")
                .build()
                .unwrap_err();
            Err(FetchError::Http(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::{FailingPageFetcher, StaticPageFetcher};
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div class="job-description">Generic posting</div>
        <div class="ms-Stack"><div>Senior </div><div>Rust </div><div>Engineer</div></div>
    </body></html>"#;

    #[tokio::test]
    async fn test_microsoft_url_applies_structural_rule() {
        let pages = StaticPageFetcher(PAGE.to_string());
        let url = Url::parse("https://jobs.careers.microsoft.com/global/en/job/1234").unwrap();
        let text = fetch_job_description(&pages, &ExtractionRegistry::default(), &url)
            .await
            .unwrap();
        assert_eq!(text, "Senior Rust Engineer");
    }

    #[tokio::test]
    async fn test_other_url_applies_default_rule() {
        let pages = StaticPageFetcher(PAGE.to_string());
        let url = Url::parse("https://jobs.lever.co/acme/42").unwrap();
        let text = fetch_job_description(&pages, &ExtractionRegistry::default(), &url)
            .await
            .unwrap();
        assert_eq!(text, "Generic posting");
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let url = Url::parse("http://127.0.0.1:1/").unwrap();
        let err = fetch_job_description(&FailingPageFetcher, &ExtractionRegistry::default(), &url)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
    }

    #[tokio::test]
    async fn test_url_without_host_uses_default_rule() {
        let pages = StaticPageFetcher(PAGE.to_string());
        let url = Url::parse("file:///tmp/posting.html").unwrap();
        let text = fetch_job_description(&pages, &ExtractionRegistry::default(), &url)
            .await
            .unwrap();
        assert_eq!(text, "Generic posting");
    }
}
