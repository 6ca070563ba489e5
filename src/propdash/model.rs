//! # Domain Model
//!
//! Core data types for propdash: [`Property`] and its satellites (unit
//! counts, contacts, tags, status), plus the dashboard-side records
//! ([`Payment`], [`Activity`], [`KpiData`], [`Notification`]).
//!
//! Unit counts carry an invariant the rest of the crate relies on:
//! `occupied <= total`, and the vacant count is always derived as
//! `total - occupied` rather than stored. Construction goes through
//! [`UnitCounts::new`] so a record with more occupied than total units
//! cannot exist.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type PropertyId = u64;
pub type PaymentId = u64;
pub type ContactId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Active,
    Vacant,
    Archived,
}

impl PropertyStatus {
    /// Human-facing label, also the casing used in CSV exports.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyStatus::Active => "Active",
            PropertyStatus::Vacant => "Vacant",
            PropertyStatus::Archived => "Archived",
        }
    }
}

impl FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(PropertyStatus::Active),
            "vacant" => Ok(PropertyStatus::Vacant),
            "archived" => Ok(PropertyStatus::Archived),
            other => Err(format!("unknown property status: {}", other)),
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PropertyStatus::Active => "active",
            PropertyStatus::Vacant => "vacant",
            PropertyStatus::Archived => "archived",
        })
    }
}

/// Amenity tags, a fixed enumeration. A property carries a de-duplicated,
/// order-insensitive set of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyTag {
    Luxury,
    Parking,
    Gym,
    Pool,
    PetFriendly,
    Furnished,
}

impl PropertyTag {
    pub const ALL: [PropertyTag; 6] = [
        PropertyTag::Luxury,
        PropertyTag::Parking,
        PropertyTag::Gym,
        PropertyTag::Pool,
        PropertyTag::PetFriendly,
        PropertyTag::Furnished,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyTag::Luxury => "Luxury",
            PropertyTag::Parking => "Parking",
            PropertyTag::Gym => "Gym",
            PropertyTag::Pool => "Pool",
            PropertyTag::PetFriendly => "Pet Friendly",
            PropertyTag::Furnished => "Furnished",
        }
    }

    /// The wire token, as used in filters and CSV output.
    pub fn token(&self) -> &'static str {
        match self {
            PropertyTag::Luxury => "luxury",
            PropertyTag::Parking => "parking",
            PropertyTag::Gym => "gym",
            PropertyTag::Pool => "pool",
            PropertyTag::PetFriendly => "pet_friendly",
            PropertyTag::Furnished => "furnished",
        }
    }
}

impl FromStr for PropertyTag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "luxury" => Ok(PropertyTag::Luxury),
            "parking" => Ok(PropertyTag::Parking),
            "gym" => Ok(PropertyTag::Gym),
            "pool" => Ok(PropertyTag::Pool),
            "pet_friendly" | "pet-friendly" => Ok(PropertyTag::PetFriendly),
            "furnished" => Ok(PropertyTag::Furnished),
            other => Err(format!("unknown property tag: {}", other)),
        }
    }
}

impl fmt::Display for PropertyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Occupancy counts. The vacant count is never stored; it is always
/// `total - occupied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCounts {
    total: u32,
    occupied: u32,
}

impl UnitCounts {
    /// Builds counts, clamping occupied into `[0, total]`.
    pub fn new(total: u32, occupied: u32) -> Self {
        Self {
            total,
            occupied: occupied.min(total),
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn occupied(&self) -> u32 {
        self.occupied
    }

    pub fn vacant(&self) -> u32 {
        self.total - self.occupied
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactRole {
    Manager,
    Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub avatar: String,
    pub initials: String,
    pub role: ContactRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub thumbnail: String,
    pub units: UnitCounts,
    /// Whole dollars per month.
    pub monthly_revenue: u64,
    pub last_payment_date: Option<NaiveDate>,
    pub manager: Contact,
    pub owner: Contact,
    pub status: PropertyStatus,
    pub tags: Vec<PropertyTag>,
}

impl Property {
    /// Case-insensitive substring match against name or address.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.address.to_lowercase().contains(&needle)
    }

    pub fn has_any_tag(&self, wanted: &[PropertyTag]) -> bool {
        wanted.iter().any(|t| self.tags.contains(t))
    }
}

// --- Payments ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Overdue,
    Pending,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Overdue => "Overdue",
            PaymentStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub name: String,
    pub avatar: String,
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub invoice_id: String,
    pub due_date: NaiveDate,
    pub tenant: Tenant,
    /// Whole dollars.
    pub amount: u64,
    pub status: PaymentStatus,
}

// --- Dashboard ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ChartPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            ChartPeriod::Daily => "Daily",
            ChartPeriod::Weekly => "Weekly",
            ChartPeriod::Monthly => "Monthly",
            ChartPeriod::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChartPeriod::Daily => "daily",
            ChartPeriod::Weekly => "weekly",
            ChartPeriod::Monthly => "monthly",
            ChartPeriod::Yearly => "yearly",
        })
    }
}

impl FromStr for ChartPeriod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(ChartPeriod::Daily),
            "weekly" => Ok(ChartPeriod::Weekly),
            "monthly" => Ok(ChartPeriod::Monthly),
            "yearly" => Ok(ChartPeriod::Yearly),
            other => Err(format!("unknown chart period: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub label: String,
    pub revenue: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiMetric {
    pub value: f64,
    /// Percentage change against the previous period.
    pub delta: f64,
    pub is_positive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiData {
    pub total_revenue: KpiMetric,
    pub total_invoices: KpiMetric,
    pub total_tenants: KpiMetric,
    pub on_time_payment_rate: KpiMetric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    PaymentReceived,
    TenantAdded,
    PropertyListed,
    InvoiceSent,
    MaintenanceScheduled,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::PaymentReceived => "Payment Received",
            ActivityKind::TenantAdded => "New Tenant Added",
            ActivityKind::PropertyListed => "Property Listed",
            ActivityKind::InvoiceSent => "Invoice Sent",
            ActivityKind::MaintenanceScheduled => "Maintenance Scheduled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub kind: ActivityKind,
    pub description: String,
    pub amount: Option<u64>,
    pub timestamp: DateTime<Utc>,
    pub actor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_counts_derive_vacant() {
        let units = UnitCounts::new(24, 22);
        assert_eq!(units.vacant(), 2);
        assert_eq!(units.total(), 24);
        assert_eq!(units.occupied(), 22);
    }

    #[test]
    fn unit_counts_clamp_occupied() {
        let units = UnitCounts::new(10, 15);
        assert_eq!(units.occupied(), 10);
        assert_eq!(units.vacant(), 0);
    }

    #[test]
    fn status_parse_roundtrip() {
        for status in [
            PropertyStatus::Active,
            PropertyStatus::Vacant,
            PropertyStatus::Archived,
        ] {
            assert_eq!(status.to_string().parse::<PropertyStatus>(), Ok(status));
        }
        assert!("condemned".parse::<PropertyStatus>().is_err());
    }

    #[test]
    fn tag_tokens_roundtrip() {
        for tag in PropertyTag::ALL {
            assert_eq!(tag.token().parse::<PropertyTag>(), Ok(tag));
        }
        // The hyphenated spelling is accepted on input.
        assert_eq!(
            "pet-friendly".parse::<PropertyTag>(),
            Ok(PropertyTag::PetFriendly)
        );
    }

    #[test]
    fn search_matches_name_or_address_case_insensitive() {
        let p = sample_property();
        assert!(p.matches_search("sunset"));
        assert!(p.matches_search("MAIN STREET"));
        assert!(!p.matches_search("riverside"));
    }

    #[test]
    fn tag_intersection_is_any_match() {
        let p = sample_property();
        assert!(p.has_any_tag(&[PropertyTag::Gym, PropertyTag::Pool]));
        assert!(!p.has_any_tag(&[PropertyTag::Pool, PropertyTag::Furnished]));
        assert!(!p.has_any_tag(&[]));
    }

    #[test]
    fn property_serde_roundtrip() {
        let p = sample_property();
        let json = serde_json::to_string(&p).unwrap();
        let loaded: Property = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, p);
    }

    fn sample_property() -> Property {
        Property {
            id: 1,
            name: "Sunset Apartments".into(),
            address: "123 Main Street, New York, NY 10001".into(),
            city: "New York".into(),
            thumbnail: String::new(),
            units: UnitCounts::new(24, 22),
            monthly_revenue: 28_800,
            last_payment_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            manager: Contact {
                id: 1,
                name: "Sarah Johnson".into(),
                avatar: String::new(),
                initials: "SJ".into(),
                role: ContactRole::Manager,
            },
            owner: Contact {
                id: 2,
                name: "Michael Chen".into(),
                avatar: String::new(),
                initials: "MC".into(),
                role: ContactRole::Owner,
            },
            status: PropertyStatus::Active,
            tags: vec![PropertyTag::Luxury, PropertyTag::Parking, PropertyTag::Gym],
        }
    }
}
