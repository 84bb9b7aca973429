//! League identifier for API-NBA queries.

use crate::error::{Result, StandingsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// League selector sent as the `league` query parameter.
///
/// API-NBA knows a handful of leagues (`standard`, `africa`, `sacramento`,
/// `vegas`, ...); the value is passed through untouched.
///
/// # Examples
///
/// ```rust
/// use nba_standings::League;
///
/// let league: League = "standard".parse().unwrap();
/// assert_eq!(league.as_str(), "standard");
/// assert_eq!(League::default(), league);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct League(String);

impl League {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for League {
    fn default() -> Self {
        Self("standard".to_string())
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for League {
    type Err = StandingsError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StandingsError::InvalidLeague {
                league: s.to_string(),
            });
        }
        Ok(Self(trimmed.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_from_str_normalises() {
        let league: League = "  Standard ".parse().unwrap();
        assert_eq!(league.as_str(), "standard");
        assert_eq!(league.to_string(), "standard");
    }

    #[test]
    fn test_league_from_str_rejects_empty() {
        assert!("   ".parse::<League>().is_err());
    }
}
