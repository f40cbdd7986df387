//! Closed enumerations accepted by the query method: [`OrderBy`],
//! [`AlertLevel`] and [`ReviewStatus`].

use std::fmt;
use std::str::FromStr;

/// Returned when a string does not name a variant of a closed enumeration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value:?}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Result ordering. The service default is [`OrderBy::Time`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderBy {
    /// Newest first.
    Time,
    /// Oldest first.
    TimeAsc,
    /// Largest magnitude first.
    Magnitude,
    /// Smallest magnitude first.
    MagnitudeAsc,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Time => "time",
            OrderBy::TimeAsc => "time-asc",
            OrderBy::Magnitude => "magnitude",
            OrderBy::MagnitudeAsc => "magnitude-asc",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderBy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(OrderBy::Time),
            "time-asc" => Ok(OrderBy::TimeAsc),
            "magnitude" => Ok(OrderBy::Magnitude),
            "magnitude-asc" => Ok(OrderBy::MagnitudeAsc),
            _ => Err(ParseEnumError::new("order", s)),
        }
    }
}

/// PAGER alert level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Green,
    Yellow,
    Orange,
    Red,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Green => "green",
            AlertLevel::Yellow => "yellow",
            AlertLevel::Orange => "orange",
            AlertLevel::Red => "red",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(AlertLevel::Green),
            "yellow" => Ok(AlertLevel::Yellow),
            "orange" => Ok(AlertLevel::Orange),
            "red" => Ok(AlertLevel::Red),
            _ => Err(ParseEnumError::new("alert level", s)),
        }
    }
}

/// Review status of an event. The service default is [`ReviewStatus::All`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewStatus {
    All,
    Automatic,
    Reviewed,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::All => "all",
            ReviewStatus::Automatic => "automatic",
            ReviewStatus::Reviewed => "reviewed",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ReviewStatus::All),
            "automatic" => Ok(ReviewStatus::Automatic),
            "reviewed" => Ok(ReviewStatus::Reviewed),
            _ => Err(ParseEnumError::new("review status", s)),
        }
    }
}
