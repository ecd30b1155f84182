//! Content providers
//!
//! A provider hands out short text fragments to fill placeholder files. It never
//! fails: anything that goes wrong degrades to an empty [`Fragment`].

use crate::artifacts::content::fragment::Fragment;
use crate::errors::HistoryError;
use serde::Deserialize;
use std::time::Duration;

/// Random-sentence endpoint queried when nothing else is configured
pub const DEFAULT_CONTENT_URL: &str = "https://api.vvhan.com/api/ian/rand?type=json";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[allow(async_fn_in_trait)]
pub trait ContentProvider {
    async fn fetch_fragment(&self) -> Fragment;
}

/// Response body of the sentence endpoint
#[derive(Debug, Deserialize)]
struct SentenceResponse {
    #[serde(default)]
    data: Option<Fragment>,
}

/// Fetches fragments from a JSON endpoint of the shape `{"data": {"content", "form", "creator"}}`
#[derive(Debug, Clone)]
pub struct HttpContentProvider {
    http_client: reqwest::Client,
    url: String,
}

impl HttpContentProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(HttpContentProvider {
            http_client,
            url: url.into(),
        })
    }

    async fn try_fetch(&self) -> Result<Fragment, HistoryError> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| HistoryError::ContentFetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(HistoryError::ContentFetch(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response
            .json::<SentenceResponse>()
            .await
            .map_err(|e| HistoryError::ContentFetch(e.to_string()))?;

        Ok(body.data.unwrap_or_default())
    }
}

impl ContentProvider for HttpContentProvider {
    async fn fetch_fragment(&self) -> Fragment {
        match self.try_fetch().await {
            Ok(fragment) => fragment,
            Err(e) => {
                tracing::debug!(url = %self.url, error = %e, "using empty content");
                Fragment::default()
            }
        }
    }
}

/// Offline provider producing lorem-ipsum sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct LoremContentProvider;

impl ContentProvider for LoremContentProvider {
    async fn fetch_fragment(&self) -> Fragment {
        use fake::Fake;
        use fake::faker::lorem::en::{Sentence, Word};
        use fake::faker::name::en::Name;

        let content = Sentence(3..8).fake::<String>();
        let form = Word().fake::<String>();
        let creator = Name().fake::<String>();

        Fragment::new(Some(content), Some(form), Some(creator))
    }
}

/// Provider selected at startup
#[derive(Debug, Clone)]
pub enum Provider {
    Http(HttpContentProvider),
    Lorem(LoremContentProvider),
}

impl ContentProvider for Provider {
    async fn fetch_fragment(&self) -> Fragment {
        match self {
            Provider::Http(provider) => provider.fetch_fragment().await,
            Provider::Lorem(provider) => provider.fetch_fragment().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn provider_for(server: &MockServer) -> HttpContentProvider {
        HttpContentProvider::new(format!("{}/api/ian/rand", server.uri()), DEFAULT_TIMEOUT)
            .unwrap()
    }

    #[tokio::test]
    async fn fetches_fragment_from_data_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/ian/rand"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": {
                    "id": 12,
                    "content": "Simplicity is prerequisite for reliability",
                    "form": "EWD498",
                    "creator": "Dijkstra"
                }
            })))
            .mount(&server)
            .await;

        let fragment = provider_for(&server).await.fetch_fragment().await;

        assert_eq!(
            fragment.text(),
            "Simplicity is prerequisite for reliability--EWD498--Dijkstra"
        );
    }

    #[tokio::test]
    async fn server_error_degrades_to_empty_fragment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let fragment = provider_for(&server).await.fetch_fragment().await;

        assert_eq!(fragment, Fragment::default());
    }

    #[tokio::test]
    async fn malformed_body_degrades_to_empty_fragment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let fragment = provider_for(&server).await.fetch_fragment().await;

        assert!(fragment.is_empty());
    }

    #[tokio::test]
    async fn unreachable_host_degrades_to_empty_fragment() {
        let provider =
            HttpContentProvider::new("http://127.0.0.1:9/unreachable", DEFAULT_TIMEOUT).unwrap();

        assert!(provider.fetch_fragment().await.is_empty());
    }

    #[tokio::test]
    async fn lorem_provider_fills_every_part() {
        let fragment = LoremContentProvider.fetch_fragment().await;

        assert!(fragment.content().is_some_and(|content| !content.is_empty()));
        assert!(!fragment.text().is_empty());
    }
}
