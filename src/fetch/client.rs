use super::types::FetchedPage;
use crate::config::FetchConfig;
use crate::error::FetchError;
use reqwest::Client;
use std::time::Duration;

pub fn build_http_client(config: &FetchConfig) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.timeout_secs))
        .pool_max_idle_per_host(config.max_idle_per_host)
        .pool_idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
        .user_agent(config.user_agent.clone())
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// `text/html`, optionally followed by parameters.
pub fn is_html(content_type: &str) -> bool {
    content_type == "text/html" || content_type.starts_with("text/html;")
}

/// Shared HTTP client for everything the bot reads from the web.
#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            client: build_http_client(config),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// GET `url` and read the whole body as text.
    pub async fn fetch_page(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let host = match (final_url.host_str(), final_url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        Ok(FetchedPage {
            final_url: final_url.to_string(),
            host,
            content_type,
            body,
        })
    }

    /// Like [`fetch_page`](Self::fetch_page), but `None` for anything that is not HTML.
    pub async fn fetch_html(&self, url: &str) -> Result<Option<FetchedPage>, FetchError> {
        let page = self.fetch_page(url).await?;
        if page.content_type.as_deref().is_some_and(is_html) {
            Ok(Some(page))
        } else {
            tracing::debug!(
                url = %url,
                content_type = ?page.content_type,
                "skipping non-HTML response"
            );
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> PageFetcher {
        PageFetcher::new(&FetchConfig::default())
    }

    #[test]
    fn html_content_types() {
        assert!(is_html("text/html"));
        assert!(is_html("text/html; charset=utf-8"));
        assert!(is_html("text/html;charset=UTF-8"));
    }

    #[test]
    fn non_html_content_types() {
        assert!(!is_html("text/htmlx"));
        assert!(!is_html("application/json"));
        assert!(!is_html("application/xhtml+xml"));
        assert!(!is_html(" text/html"));
        assert!(!is_html(""));
    }

    #[tokio::test]
    async fn fetch_html_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/article"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html; charset=utf-8")
                    .set_body_string("<title>Hi</title>"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/article", server.uri());
        let page = fetcher().fetch_html(&url).await.unwrap().unwrap();
        assert_eq!(page.body, "<title>Hi</title>");
        assert_eq!(
            page.content_type.as_deref(),
            Some("text/html; charset=utf-8")
        );
        assert!(page.host.starts_with("127.0.0.1:"));
        assert_eq!(page.final_url, url);
    }

    #[tokio::test]
    async fn fetch_html_skips_other_types() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "image/png")
                    .set_body_bytes(vec![0x89, b'P', b'N', b'G']),
            )
            .mount(&server)
            .await;

        let page = fetcher().fetch_html(&server.uri()).await.unwrap();
        assert!(page.is_none());
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = fetcher().fetch_page(&server.uri()).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn unreachable_host_is_request_error() {
        let err = fetcher()
            .fetch_page("http://127.0.0.1:1/")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
    }
}
