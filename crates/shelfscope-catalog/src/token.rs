use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use shelfscope_core::SessionToken;
use tracing::{debug, warn};

use crate::endpoints::CatalogEndpoints;
use crate::error::{CatalogError, FetchPhase, Result};
use crate::http::PageFetcher;

static MYLIBRARY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("nlb-mylibrary").expect("valid selector"));

const RETURN_URL_ATTR: &str = "data-returnurl";

/// Scrapes the current session token off the catalog's entry page.
pub struct SessionTokenResolver<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    endpoints: &'a CatalogEndpoints,
}

impl<'a, F: PageFetcher + ?Sized> SessionTokenResolver<'a, F> {
    pub fn new(fetcher: &'a F, endpoints: &'a CatalogEndpoints) -> Self {
        Self { fetcher, endpoints }
    }

    pub async fn resolve(&self) -> Result<SessionToken> {
        let html = self
            .fetcher
            .fetch(&self.endpoints.entry_url(), FetchPhase::EntryPage)
            .await
            .map_err(|e| CatalogError::TokenResolution {
                message: "entry page could not be fetched".to_string(),
                source: Some(Box::new(e)),
            })?;

        let token = extract_session_token(&html)?;
        debug!(token = %token, "resolved session token");
        Ok(token)
    }
}

/// Pulls the token out of the `data-returnurl` attribute, e.g.
/// `.../SET/WPAC/BIBENQ/45640926` yields `45640926`.
pub fn extract_session_token(html: &str) -> Result<SessionToken> {
    let document = Html::parse_document(html);
    let element = document
        .select(&MYLIBRARY_SELECTOR)
        .next()
        .ok_or_else(|| CatalogError::token("nlb-mylibrary element not found on entry page"))?;
    let return_url = element
        .value()
        .attr(RETURN_URL_ATTR)
        .ok_or_else(|| CatalogError::token(format!("{RETURN_URL_ATTR} attribute missing")))?;

    let last_segment = return_url.trim().split('/').next_back().unwrap_or_default();
    SessionToken::parse(last_segment).map_err(|e| {
        warn!(%return_url, "unusable session token in return URL");
        CatalogError::TokenResolution {
            message: format!("malformed {RETURN_URL_ATTR} {return_url:?}: {e}"),
            source: None,
        }
    })
}
