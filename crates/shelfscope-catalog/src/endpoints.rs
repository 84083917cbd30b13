use shelfscope_core::{Bid, LookupConfig, SessionToken};

const ENTRY_PATH: &str = "ENQ/WPAC/BIBENQ";
const HOLDINGS_PATH: &str = "XHLD/WPAC/BIBENQ";
const TITLE_PATH: &str = "XFULL/WPAC/BIBENQ";

/// URL templates under one Spydus CGI root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoints {
    base_url: String,
}

impl CatalogEndpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &LookupConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search page whose markup carries the current session token.
    pub fn entry_url(&self) -> String {
        format!("{}/{ENTRY_PATH}", self.base_url)
    }

    pub fn holdings_url(&self, token: &SessionToken, bid: Bid) -> String {
        format!("{}/{HOLDINGS_PATH}/{token}/{bid}?RECDISP=REC", self.base_url)
    }

    pub fn title_url(&self, token: &SessionToken, bid: Bid) -> String {
        format!("{}/{TITLE_PATH}/{token}/{bid}?FMT=REC", self.base_url)
    }
}

impl Default for CatalogEndpoints {
    fn default() -> Self {
        Self::from_config(&LookupConfig::default())
    }
}
