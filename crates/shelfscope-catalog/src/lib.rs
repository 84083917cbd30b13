//! Shelfscope Catalog — availability and title lookups against a Spydus OPAC.

pub mod error;
pub mod http;
pub mod endpoints;
pub mod token;
pub mod parsers;
pub mod service;

pub use error::{CatalogError, FetchPhase, Result};
pub use endpoints::CatalogEndpoints;
pub use http::{HttpFetcher, PageFetcher};
pub use parsers::{AvailabilityParser, TitleDetailsParser};
pub use service::CatalogLookupService;
pub use token::SessionTokenResolver;

pub use shelfscope_core::{AvailabilityRecord, Bid, LookupConfig, SessionToken, TitleDetails};
