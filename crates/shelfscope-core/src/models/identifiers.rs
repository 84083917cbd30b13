use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Bibliographic record id in the remote catalog. Never range-checked here:
/// an unknown bid only shows up as an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bid(pub u64);

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Bid {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Per-session numeric path segment the catalog embeds in its generated URLs.
/// Short-lived; derive a new one for every lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(CoreError::ValidationError(
                "session token is empty".to_string(),
            ));
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::ValidationError(format!(
                "session token is not numeric: {raw}"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_displays_as_integer() {
        assert_eq!(Bid(204_938_223).to_string(), "204938223");
        assert_eq!(Bid::from(0).to_string(), "0");
    }

    #[test]
    fn test_token_parse_accepts_digits() {
        let token = SessionToken::parse(" 45640926\n").unwrap();
        assert_eq!(token.as_str(), "45640926");
    }

    #[test]
    fn test_token_parse_rejects_empty_and_non_numeric() {
        assert!(SessionToken::parse("").is_err());
        assert!(SessionToken::parse("   ").is_err());
        assert!(SessionToken::parse("BIBENQ").is_err());
        assert!(SessionToken::parse("4564?0926").is_err());
    }
}
