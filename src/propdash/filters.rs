//! # Filter Engine
//!
//! Pure filtering of the property catalog. [`filter_properties`] maps a
//! (catalog, criteria) pair to the visible subset without mutating its
//! input; every criterion left at its default imposes no constraint.
//!
//! The range criteria are tagged enums with explicit bounds instead of the
//! stringly-typed tokens the wire format uses (`"1-5"`, `"5000+"`, ...).
//! Those tokens are still accepted and produced at the edges via
//! `FromStr`/`Display`, which is what the CLI parses.

use crate::model::{Property, PropertyStatus, PropertyTag};
use std::fmt;
use std::str::FromStr;

/// Status criterion. `All` matches any status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PropertyStatus),
}

impl StatusFilter {
    fn matches(&self, p: &Property) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => p.status == *status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse::<PropertyStatus>().map(StatusFilter::Only)
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

/// Unit-count buckets: small `[1,5]`, medium `[6,20]`, large `[21,∞)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitCountFilter {
    #[default]
    Any,
    Small,
    Medium,
    Large,
}

impl UnitCountFilter {
    fn matches(&self, total: u32) -> bool {
        match self {
            UnitCountFilter::Any => true,
            UnitCountFilter::Small => (1..=5).contains(&total),
            UnitCountFilter::Medium => (6..=20).contains(&total),
            UnitCountFilter::Large => total >= 21,
        }
    }
}

impl FromStr for UnitCountFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(UnitCountFilter::Any),
            "1-5" => Ok(UnitCountFilter::Small),
            "6-20" => Ok(UnitCountFilter::Medium),
            "21+" => Ok(UnitCountFilter::Large),
            other => Err(format!("unknown unit-count bucket: {}", other)),
        }
    }
}

impl fmt::Display for UnitCountFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnitCountFilter::Any => "any",
            UnitCountFilter::Small => "1-5",
            UnitCountFilter::Medium => "6-20",
            UnitCountFilter::Large => "21+",
        })
    }
}

/// Vacancy-state buckets, defined on the derived vacant count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VacancyFilter {
    #[default]
    Any,
    /// At least one vacant unit.
    Available,
    /// No vacant units.
    FullyOccupied,
    /// Some vacant and some occupied units.
    PartiallyVacant,
}

impl VacancyFilter {
    fn matches(&self, p: &Property) -> bool {
        let vacant = p.units.vacant();
        let occupied = p.units.occupied();
        match self {
            VacancyFilter::Any => true,
            VacancyFilter::Available => vacant > 0,
            VacancyFilter::FullyOccupied => vacant == 0,
            VacancyFilter::PartiallyVacant => vacant > 0 && occupied > 0,
        }
    }
}

impl FromStr for VacancyFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(VacancyFilter::Any),
            "available" => Ok(VacancyFilter::Available),
            "fully_occupied" => Ok(VacancyFilter::FullyOccupied),
            "partially_vacant" => Ok(VacancyFilter::PartiallyVacant),
            other => Err(format!("unknown vacancy bucket: {}", other)),
        }
    }
}

impl fmt::Display for VacancyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VacancyFilter::Any => "any",
            VacancyFilter::Available => "available",
            VacancyFilter::FullyOccupied => "fully_occupied",
            VacancyFilter::PartiallyVacant => "partially_vacant",
        })
    }
}

/// Monthly-revenue buckets: `[0,1000]`, `(1000,2500]`, `(2500,5000]`,
/// `(5000,∞)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceFilter {
    #[default]
    Any,
    UpTo1000,
    From1000To2500,
    From2500To5000,
    Above5000,
}

impl PriceFilter {
    fn matches(&self, revenue: u64) -> bool {
        match self {
            PriceFilter::Any => true,
            PriceFilter::UpTo1000 => revenue <= 1_000,
            PriceFilter::From1000To2500 => revenue > 1_000 && revenue <= 2_500,
            PriceFilter::From2500To5000 => revenue > 2_500 && revenue <= 5_000,
            PriceFilter::Above5000 => revenue > 5_000,
        }
    }
}

impl FromStr for PriceFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(PriceFilter::Any),
            "0-1000" => Ok(PriceFilter::UpTo1000),
            "1000-2500" => Ok(PriceFilter::From1000To2500),
            "2500-5000" => Ok(PriceFilter::From2500To5000),
            "5000+" => Ok(PriceFilter::Above5000),
            other => Err(format!("unknown price bucket: {}", other)),
        }
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PriceFilter::Any => "any",
            PriceFilter::UpTo1000 => "0-1000",
            PriceFilter::From1000To2500 => "1000-2500",
            PriceFilter::From2500To5000 => "2500-5000",
            PriceFilter::Above5000 => "5000+",
        })
    }
}

/// The full criteria record. The default value imposes no constraint at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilters {
    /// Free-text search over name and address. Empty means unconstrained.
    pub search: String,
    pub status: StatusFilter,
    /// `None` means all cities.
    pub city: Option<String>,
    pub unit_count: UnitCountFilter,
    pub vacancy: VacancyFilter,
    pub price_range: PriceFilter,
    /// A property matches if it carries at least one of these tags.
    /// Empty means the criterion is not applied.
    pub tags: Vec<PropertyTag>,
}

impl PropertyFilters {
    pub fn matches(&self, p: &Property) -> bool {
        if !self.search.trim().is_empty() && !p.matches_search(self.search.trim()) {
            return false;
        }
        if !self.status.matches(p) {
            return false;
        }
        if let Some(city) = &self.city {
            if !p.city.eq_ignore_ascii_case(city) {
                return false;
            }
        }
        if !self.unit_count.matches(p.units.total()) {
            return false;
        }
        if !self.vacancy.matches(p) {
            return false;
        }
        if !self.price_range.matches(p.monthly_revenue) {
            return false;
        }
        if !self.tags.is_empty() && !p.has_any_tag(&self.tags) {
            return false;
        }
        true
    }
}

/// Applies `criteria` to `properties`, returning the matching subset in the
/// original order. Pure; the input is never mutated.
pub fn filter_properties(properties: &[Property], criteria: &PropertyFilters) -> Vec<Property> {
    properties
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}
