//! Gallery sort modes.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned for an unrecognised sort value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort mode: {0}")]
pub struct SortModeError(pub String);

/// Ordering applied to the filtered gallery.
///
/// Serialized with the values used by the sort control
/// (`none`, `price-asc`, `price-desc`, `newest`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Catalog order.
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "price-asc")]
    PriceAscending,
    #[serde(rename = "price-desc")]
    PriceDescending,
    /// Highest ID first.
    #[serde(rename = "newest")]
    Newest,
}

impl SortMode {
    /// All modes in the order the sort control lists them.
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::PriceAscending,
        Self::PriceDescending,
        Self::Newest,
    ];

    /// Control value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PriceAscending => "price-asc",
            Self::PriceDescending => "price-desc",
            Self::Newest => "newest",
        }
    }

    /// Human-readable option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Sort By Price",
            Self::PriceAscending => "Price: Low to High",
            Self::PriceDescending => "Price: High to Low",
            Self::Newest => "Newest First",
        }
    }

    /// Parse a control value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == s.trim())
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = SortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SortModeError(s.to_string()))
    }
}
