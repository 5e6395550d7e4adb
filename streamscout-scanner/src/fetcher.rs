use crate::error::{Result, ScoutError};
use crate::page::ChannelPage;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};
use url::Url;

/// Landing page origin for channels.
pub const CHANNEL_PAGE_BASE: &str = "https://www.twitch.tv";

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub(crate) fn http_client(timeout_secs: u64) -> Client {
    Client::builder()
        .user_agent("Streamscout/0.1 (https://github.com/streamscout/streamscout)")
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .expect("Failed to create HTTP client")
}

pub struct PageFetcher {
    client: Client,
    base_url: String,
}

impl PageFetcher {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            client: http_client(timeout_secs),
            base_url: CHANNEL_PAGE_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Retrieves the channel's public landing page. The body is read to
    /// completion before the page is built, so a returned `ChannelPage`
    /// always reflects one full fetch.
    ///
    /// A transport failure or a non-success status both mean the channel
    /// page cannot be retrieved and come back as
    /// [`ScoutError::ChannelNotFound`].
    pub async fn fetch(&self, channel: &str) -> Result<ChannelPage> {
        if channel.is_empty() {
            return Err(ScoutError::InvalidChannel(channel.to_string()));
        }

        let page_url = Url::parse(&self.base_url)
            .and_then(|base| base.join(channel))
            .map_err(|e| {
                ScoutError::InvalidUrl(format!("{}/{}: {}", self.base_url, channel, e))
            })?;

        debug!("Fetching {}", page_url);

        let start = Instant::now();
        let response = match self.client.get(page_url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("channel page for '{}' could not be retrieved: {}", channel, e);
                return Err(ScoutError::ChannelNotFound(channel.to_string()));
            }
        };
        let response_time = start.elapsed();

        let status = response.status();
        if !status.is_success() {
            error!("channel page for '{}' returned {}", channel, status);
            return Err(ScoutError::ChannelNotFound(channel.to_string()));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response.text().await?;
        info!("fetched channel page for '{}' ({} bytes)", channel, body.len());

        Ok(ChannelPage {
            channel: channel.to_string(),
            url: page_url.to_string(),
            status_code: status.as_u16(),
            content_type,
            response_time,
            body,
        })
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_complete_page() {
        let mock_server = MockServer::start().await;

        let html = r#"<html><body>
            <a href="https://discord.com/invite/abc">Join the chat</a>
        </body></html>"#;

        Mock::given(method("GET"))
            .and(path("/somechannel"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_bytes(html.as_bytes()),
            )
            .mount(&mock_server)
            .await;

        let fetcher = PageFetcher::new().with_base_url(mock_server.uri());
        let page = fetcher.fetch("somechannel").await.unwrap();

        assert_eq!(page.channel, "somechannel");
        assert_eq!(page.status_code, 200);
        assert_eq!(page.content_type.as_deref(), Some("text/html"));
        assert!(page.body.contains("discord.com/invite/abc"));
    }

    #[tokio::test]
    async fn test_missing_channel_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let fetcher = PageFetcher::new().with_base_url(mock_server.uri());
        let err = fetcher.fetch("ghost").await.unwrap_err();

        assert!(matches!(err, ScoutError::ChannelNotFound(channel) if channel == "ghost"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_not_found() {
        // Nothing is listening on the discard port.
        let fetcher =
            PageFetcher::with_timeout(1).with_base_url("http://127.0.0.1:9".to_string());
        let err = fetcher.fetch("somechannel").await.unwrap_err();

        assert!(matches!(err, ScoutError::ChannelNotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_channel_is_rejected() {
        let fetcher = PageFetcher::new();
        let err = fetcher.fetch("").await.unwrap_err();

        assert!(matches!(err, ScoutError::InvalidChannel(_)));
    }
}
