//! Price range buckets parsed from their display labels.
//!
//! The sidebar shows human-readable labels like `"Lower than $20"` or
//! `"$20 - $100"`, and the same label is parsed into the predicate used by the
//! filter. Labels that don't parse degrade instead of failing:
//!
//! - `lower than` / `more than` without a number match every price
//! - anything else that isn't `$A - $B` matches no price

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::price::Price;

/// Labels offered in the sidebar, in display order.
pub const STANDARD_LABELS: [&str; 4] = [
    "Lower than $20",
    "$20 - $100",
    "$100 - $200",
    "More than $200",
];

/// First run of digits in a label.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)").expect("Invalid regex"));

/// Matches `$A - $B` with optional whitespace around the dash.
static BETWEEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+)\s*-\s*\$(\d+)").expect("Invalid regex"));

/// The predicate a label parses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceBound {
    /// `price < n`
    Below(Decimal),
    /// `price > n`
    Above(Decimal),
    /// `min <= price <= max`
    Between { min: Decimal, max: Decimal },
    /// Open-ended label with no number; matches everything.
    Any,
    /// Unparseable label; matches nothing.
    Never,
}

impl PriceBound {
    /// Whether `price` satisfies this bound.
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        let amount = price.amount();
        match *self {
            Self::Below(n) => amount < n,
            Self::Above(n) => amount > n,
            Self::Between { min, max } => min <= amount && amount <= max,
            Self::Any => true,
            Self::Never => false,
        }
    }
}

/// A labelled price range.
///
/// Equality and ordering follow the label, so a set of selected ranges behaves
/// like a set of label strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PriceRange {
    label: String,
    bound: PriceBound,
}

impl PriceRange {
    /// Parse a display label into a range. Never fails.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        Self {
            label: label.to_string(),
            bound: parse_bound(label),
        }
    }

    /// The sidebar's standard ranges, in display order.
    #[must_use]
    pub fn standard() -> Vec<Self> {
        STANDARD_LABELS.iter().map(|label| Self::parse(label)).collect()
    }

    /// The display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The parsed predicate.
    #[must_use]
    pub const fn bound(&self) -> PriceBound {
        self.bound
    }

    /// Whether `price` falls inside this range.
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        self.bound.contains(price)
    }
}

fn parse_bound(label: &str) -> PriceBound {
    let lower = label.to_lowercase();
    if lower.contains("lower than") {
        first_number(label).map_or(PriceBound::Any, PriceBound::Below)
    } else if lower.contains("more than") {
        first_number(label).map_or(PriceBound::Any, PriceBound::Above)
    } else {
        BETWEEN_RE
            .captures(label)
            .and_then(|caps| {
                let min = caps.get(1)?.as_str().parse::<Decimal>().ok()?;
                let max = caps.get(2)?.as_str().parse::<Decimal>().ok()?;
                Some(PriceBound::Between { min, max })
            })
            .unwrap_or(PriceBound::Never)
    }
}

fn first_number(label: &str) -> Option<Decimal> {
    NUMBER_RE
        .find(label)
        .and_then(|m| m.as_str().parse::<Decimal>().ok())
}

impl PartialEq for PriceRange {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for PriceRange {}

impl PartialOrd for PriceRange {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriceRange {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.label.cmp(&other.label)
    }
}

impl core::hash::Hash for PriceRange {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl From<String> for PriceRange {
    fn from(label: String) -> Self {
        let bound = parse_bound(&label);
        Self { label, bound }
    }
}

impl From<&str> for PriceRange {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<PriceRange> for String {
    fn from(range: PriceRange) -> Self {
        range.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(n: u32) -> Price {
        Price::from_dollars(n)
    }

    #[test]
    fn test_standard_labels_parse() {
        let ranges = PriceRange::standard();
        assert_eq!(ranges[0].bound(), PriceBound::Below(Decimal::from(20)));
        assert_eq!(
            ranges[1].bound(),
            PriceBound::Between {
                min: Decimal::from(20),
                max: Decimal::from(100)
            }
        );
        assert_eq!(
            ranges[2].bound(),
            PriceBound::Between {
                min: Decimal::from(100),
                max: Decimal::from(200)
            }
        );
        assert_eq!(ranges[3].bound(), PriceBound::Above(Decimal::from(200)));
    }

    #[test]
    fn test_lower_than_is_strict() {
        let range = PriceRange::parse("Lower than $20");
        assert!(range.contains(Price::from_cents(1999)));
        assert!(!range.contains(dollars(20)));
    }

    #[test]
    fn test_more_than_is_strict() {
        let range = PriceRange::parse("More than $200");
        assert!(range.contains(Price::from_cents(20001)));
        assert!(!range.contains(dollars(200)));
    }

    #[test]
    fn test_between_is_inclusive() {
        let range = PriceRange::parse("$100 - $200");
        assert!(range.contains(dollars(100)));
        assert!(range.contains(dollars(200)));
        assert!(range.contains(dollars(101)));
        assert!(!range.contains(Price::from_cents(9999)));
        assert!(!range.contains(Price::from_cents(20001)));
    }

    #[test]
    fn test_between_tolerates_missing_whitespace() {
        let range = PriceRange::parse("$20-$100");
        assert!(range.contains(Price::from_cents(9389)));
    }

    #[test]
    fn test_case_insensitive_keywords() {
        assert_eq!(
            PriceRange::parse("LOWER THAN $5").bound(),
            PriceBound::Below(Decimal::from(5))
        );
    }

    #[test]
    fn test_open_ended_without_number_matches_everything() {
        let lower = PriceRange::parse("Lower than anything");
        let more = PriceRange::parse("More than you can afford");
        assert_eq!(lower.bound(), PriceBound::Any);
        assert_eq!(more.bound(), PriceBound::Any);
        assert!(lower.contains(dollars(1_000_000)));
        assert!(more.contains(Price::ZERO));
    }

    #[test]
    fn test_unparseable_between_matches_nothing() {
        let range = PriceRange::parse("Cheap-ish");
        assert_eq!(range.bound(), PriceBound::Never);
        assert!(!range.contains(Price::ZERO));
    }

    #[test]
    fn test_equality_follows_label() {
        assert_eq!(PriceRange::parse("$20 - $100"), PriceRange::from("$20 - $100"));
        assert_ne!(PriceRange::parse("$20 - $100"), PriceRange::parse("$20-$100"));
    }
}
