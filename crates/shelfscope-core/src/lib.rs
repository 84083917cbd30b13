//! Shelfscope Core — catalog record types, identifiers, lookup config.

pub mod config;
pub mod error;
pub mod models;

pub use config::LookupConfig;
pub use error::{CoreError, Result};
pub use models::*;
