use async_trait::async_trait;
use shelfscope_core::LookupConfig;
use tracing::debug;

use crate::error::{CatalogError, FetchPhase, Result};

/// A single GET returning the response body. One attempt only; the caller
/// decides what a failure means.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str, phase: FetchPhase) -> Result<String>;
}

// ─── HttpFetcher ──────────────────────────────────────────────────────────────

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .gzip(true)
            .build()
            .map_err(CatalogError::ClientSetup)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, phase: FetchPhase) -> Result<String> {
        debug!(%url, %phase, "fetching catalog page");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::transport(phase, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Transport {
                phase,
                status: Some(status.as_u16()),
                message: format!("HTTP {} from {url}", status.as_u16()),
                source: None,
            });
        }

        resp.text()
            .await
            .map_err(|e| CatalogError::transport(phase, e))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use mockito::Server;
    use tokio::net::TcpListener;

    fn fetcher_for(server: &Server) -> HttpFetcher {
        HttpFetcher::new(&LookupConfig::with_base_url(server.url())).unwrap()
    }

    #[tokio::test]
    async fn returns_body_on_success() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>ok</body></html>")
            .create_async()
            .await;

        let body = fetcher_for(&server)
            .fetch(&format!("{}/page", server.url()), FetchPhase::Holdings)
            .await
            .unwrap();
        assert!(body.contains("ok"));
    }

    #[tokio::test]
    async fn non_success_status_is_transport_error() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/page")
            .with_status(503)
            .expect(1)
            .create_async()
            .await;

        let err = fetcher_for(&server)
            .fetch(&format!("{}/page", server.url()), FetchPhase::TitleRecord)
            .await
            .unwrap_err();
        match err {
            CatalogError::Transport { phase, status, .. } => {
                assert_eq!(phase, FetchPhase::TitleRecord);
                assert_eq!(status, Some(503));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // single attempt, no retry
        m.assert_async().await;
    }

    #[tokio::test]
    async fn silent_server_times_out_once() {
        // accepts connections and never answers
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        let config = LookupConfig {
            timeout_ms: 200,
            ..LookupConfig::with_base_url(format!("http://{addr}"))
        };
        let fetcher = HttpFetcher::new(&config).unwrap();

        let started = Instant::now();
        let err = fetcher
            .fetch(&format!("http://{addr}/ENQ/WPAC/BIBENQ"), FetchPhase::EntryPage)
            .await
            .unwrap_err();
        let elapsed = started.elapsed();

        match err {
            CatalogError::Transport {
                phase,
                status,
                message,
                ..
            } => {
                assert_eq!(phase, FetchPhase::EntryPage);
                assert_eq!(status, None);
                assert_eq!(message, "request timed out");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(elapsed >= Duration::from_millis(150), "returned after {elapsed:?}");
        assert!(elapsed < Duration::from_secs(2), "returned after {elapsed:?}");
    }

    #[tokio::test]
    async fn connection_refused_is_transport_error() {
        let config = LookupConfig::with_base_url("http://127.0.0.1:9");
        let fetcher = HttpFetcher::new(&config).unwrap();
        let err = fetcher
            .fetch("http://127.0.0.1:9/ENQ/WPAC/BIBENQ", FetchPhase::EntryPage)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Transport {
                phase: FetchPhase::EntryPage,
                status: None,
                ..
            }
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = LookupConfig {
            timeout_ms: 0,
            ..LookupConfig::default()
        };
        assert!(matches!(
            HttpFetcher::new(&config),
            Err(CatalogError::Config(_))
        ));
    }
}
