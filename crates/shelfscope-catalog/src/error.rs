use std::fmt;

use shelfscope_core::CoreError;
use thiserror::Error;

/// Which request of a lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    EntryPage,
    Holdings,
    TitleRecord,
}

impl fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EntryPage => "session token fetch",
            Self::Holdings => "holdings fetch",
            Self::TitleRecord => "title record fetch",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{phase} failed: {message}")]
    Transport {
        phase: FetchPhase,
        status: Option<u16>,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("could not resolve session token: {message}")]
    TokenResolution {
        message: String,
        #[source]
        source: Option<Box<CatalogError>>,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("failed to build HTTP client: {0}")]
    ClientSetup(#[source] reqwest::Error),

    #[error("config error: {0}")]
    Config(#[from] CoreError),
}

impl CatalogError {
    pub fn transport(phase: FetchPhase, source: reqwest::Error) -> Self {
        let message = if source.is_timeout() {
            "request timed out".to_string()
        } else {
            source.to_string()
        };
        Self::Transport {
            phase,
            status: source.status().map(|s| s.as_u16()),
            message,
            source: Some(source),
        }
    }

    pub fn token(message: impl Into<String>) -> Self {
        Self::TokenResolution {
            message: message.into(),
            source: None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
