//! Photo categories.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a category name is not one of the fixed set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

/// The fixed set of photo categories.
///
/// Serialized by display name (`"Food"`, `"Landmarks"`), which is also how
/// persisted cart entries store them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    People,
    Premium,
    Pets,
    Food,
    Landmarks,
    Cities,
    Nature,
}

impl Category {
    /// All categories in sidebar display order.
    pub const ALL: [Self; 7] = [
        Self::People,
        Self::Premium,
        Self::Pets,
        Self::Food,
        Self::Landmarks,
        Self::Cities,
        Self::Nature,
    ];

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::People => "People",
            Self::Premium => "Premium",
            Self::Pets => "Pets",
            Self::Food => "Food",
            Self::Landmarks => "Landmarks",
            Self::Cities => "Cities",
            Self::Nature => "Nature",
        }
    }

    /// Parse a display name, ignoring ASCII case.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CategoryError(s.to_string()))
    }
}
