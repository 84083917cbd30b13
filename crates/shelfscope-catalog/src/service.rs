use std::path::Path;

use shelfscope_core::{AvailabilityRecord, Bid, LookupConfig, TitleDetails};
use tracing::{debug, info};

use crate::endpoints::CatalogEndpoints;
use crate::error::{FetchPhase, Result};
use crate::http::{HttpFetcher, PageFetcher};
use crate::parsers::{AvailabilityParser, TitleDetailsParser};
use crate::token::SessionTokenResolver;

/// Entry point for catalog lookups.
///
/// Every call resolves its own session token and then fetches the page that
/// token unlocks, strictly in that order. Nothing is cached between calls and
/// the service holds no mutable state, so one instance can serve concurrent
/// callers through `&self`.
pub struct CatalogLookupService<F: PageFetcher = HttpFetcher> {
    fetcher: F,
    endpoints: CatalogEndpoints,
}

impl CatalogLookupService<HttpFetcher> {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::with_fetcher(fetcher, CatalogEndpoints::from_config(config)))
    }

    pub fn from_config_file(path: &Path) -> Result<Self> {
        let config = LookupConfig::load_from(path)?;
        Self::new(&config)
    }
}

impl<F: PageFetcher> CatalogLookupService<F> {
    pub fn with_fetcher(fetcher: F, endpoints: CatalogEndpoints) -> Self {
        Self { fetcher, endpoints }
    }

    pub fn endpoints(&self) -> &CatalogEndpoints {
        &self.endpoints
    }

    /// All physical copies of `bid`, in the order the holdings table lists them.
    pub async fn get_availability_info(&self, bid: Bid) -> Result<Vec<AvailabilityRecord>> {
        let token = SessionTokenResolver::new(&self.fetcher, &self.endpoints)
            .resolve()
            .await?;
        let url = self.endpoints.holdings_url(&token, bid);
        debug!(%bid, %url, "fetching holdings");

        let html = self.fetcher.fetch(&url, FetchPhase::Holdings).await?;
        let records = AvailabilityParser::parse(&html)?;
        info!(%bid, count = records.len(), "availability lookup finished");
        Ok(records)
    }

    pub async fn get_title_details(&self, bid: Bid) -> Result<TitleDetails> {
        let token = SessionTokenResolver::new(&self.fetcher, &self.endpoints)
            .resolve()
            .await?;
        let url = self.endpoints.title_url(&token, bid);
        debug!(%bid, %url, "fetching title record");

        let html = self.fetcher.fetch(&url, FetchPhase::TitleRecord).await?;
        let details = TitleDetailsParser::parse(&html)?;
        info!(%bid, title = %details.title_name, "title lookup finished");
        Ok(details)
    }
}
