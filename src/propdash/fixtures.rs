//! # Seed Data
//!
//! The canned catalog behind [`MockStore`](crate::store::memory::MockStore):
//! six properties, the contact roster, recent payments, the activity feed,
//! the KPI block and the revenue series. There is no real backend; this is
//! the entire universe of data the dashboard operates on.

use crate::model::{
    Activity, ActivityKind, ChartPeriod, Contact, ContactId, ContactRole, KpiData, KpiMetric,
    Notification, Payment, PaymentStatus, Property, PropertyStatus, PropertyTag, RevenuePoint,
    Tenant, UnitCounts,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("static fixture date")
}

fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .expect("static fixture timestamp")
}

fn contact(id: ContactId, name: &str, img: u8, initials: &str, role: ContactRole) -> Contact {
    Contact {
        id,
        name: name.into(),
        avatar: format!("https://i.pravatar.cc/150?img={}", img),
        initials: initials.into(),
        role,
    }
}

/// Managers and owners available for assignment.
pub static CONTACTS: Lazy<Vec<Contact>> = Lazy::new(|| {
    use ContactRole::{Manager, Owner};
    vec![
        contact(1, "Sarah Johnson", 5, "SJ", Manager),
        contact(2, "Michael Chen", 8, "MC", Owner),
        contact(3, "David Wilson", 3, "DW", Manager),
        contact(4, "Lisa Anderson", 9, "LA", Owner),
        contact(5, "Emily Davis", 2, "ED", Manager),
        contact(6, "Robert Kim", 10, "RK", Owner),
        contact(7, "James Rodriguez", 11, "JR", Manager),
        contact(8, "Maria Garcia", 12, "MG", Owner),
        contact(9, "Anna Thompson", 13, "AT", Manager),
        contact(10, "Thomas Lee", 14, "TL", Owner),
        contact(11, "Carlos Martinez", 15, "CM", Manager),
        contact(12, "Jennifer White", 16, "JW", Owner),
    ]
});

pub static CITIES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "New York",
        "Los Angeles",
        "Chicago",
        "Houston",
        "Phoenix",
        "Miami",
        "San Francisco",
        "Boston",
        "Seattle",
        "Denver",
    ]
});

pub fn contact_by_id(id: ContactId) -> Option<Contact> {
    CONTACTS.iter().find(|c| c.id == id).cloned()
}

fn by_id(id: ContactId) -> Contact {
    contact_by_id(id).expect("static fixture contact")
}

/// The seeded property catalog.
pub fn properties() -> Vec<Property> {
    use PropertyTag::*;
    vec![
        Property {
            id: 1,
            name: "Sunset Apartments".into(),
            address: "123 Main Street, New York, NY 10001".into(),
            city: "New York".into(),
            thumbnail: "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=400&h=300&fit=crop".into(),
            units: UnitCounts::new(24, 22),
            monthly_revenue: 28_800,
            last_payment_date: Some(d(2024, 1, 15)),
            manager: by_id(1),
            owner: by_id(2),
            status: PropertyStatus::Active,
            tags: vec![Luxury, Parking, Gym],
        },
        Property {
            id: 2,
            name: "Downtown Lofts".into(),
            address: "456 Oak Avenue, Los Angeles, CA 90210".into(),
            city: "Los Angeles".into(),
            thumbnail: "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=400&h=300&fit=crop".into(),
            units: UnitCounts::new(12, 8),
            monthly_revenue: 18_000,
            last_payment_date: Some(d(2024, 1, 12)),
            manager: by_id(3),
            owner: by_id(4),
            status: PropertyStatus::Active,
            tags: vec![PetFriendly, Furnished],
        },
        Property {
            id: 3,
            name: "Garden View Complex".into(),
            address: "789 Pine Street, Chicago, IL 60601".into(),
            city: "Chicago".into(),
            thumbnail: "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=400&h=300&fit=crop".into(),
            units: UnitCounts::new(36, 30),
            monthly_revenue: 43_200,
            last_payment_date: Some(d(2024, 1, 10)),
            manager: by_id(5),
            owner: by_id(6),
            status: PropertyStatus::Active,
            tags: vec![Pool, Gym, Parking],
        },
        Property {
            id: 4,
            name: "Riverside Towers".into(),
            address: "321 River Road, Houston, TX 77001".into(),
            city: "Houston".into(),
            thumbnail: "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=400&h=300&fit=crop".into(),
            units: UnitCounts::new(48, 0),
            monthly_revenue: 0,
            last_payment_date: None,
            manager: by_id(7),
            owner: by_id(8),
            status: PropertyStatus::Vacant,
            tags: vec![Luxury, Pool],
        },
        Property {
            id: 5,
            name: "Heritage Manor".into(),
            address: "654 Heritage Lane, Phoenix, AZ 85001".into(),
            city: "Phoenix".into(),
            thumbnail: "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=400&h=300&fit=crop".into(),
            units: UnitCounts::new(18, 15),
            monthly_revenue: 22_500,
            last_payment_date: Some(d(2024, 1, 8)),
            manager: by_id(9),
            owner: by_id(10),
            status: PropertyStatus::Archived,
            tags: vec![PetFriendly, Parking],
        },
        Property {
            id: 6,
            name: "Oceanview Residences".into(),
            address: "987 Coastal Drive, Miami, FL 33101".into(),
            city: "Miami".into(),
            thumbnail: "https://images.unsplash.com/photo-1564013799919-ab600027ffc6?w=400&h=300&fit=crop".into(),
            units: UnitCounts::new(30, 28),
            monthly_revenue: 45_000,
            last_payment_date: Some(d(2024, 1, 14)),
            manager: by_id(11),
            owner: by_id(12),
            status: PropertyStatus::Active,
            tags: vec![Luxury, Pool, Gym],
        },
    ]
}

fn payment(
    id: u64,
    invoice: &str,
    due: NaiveDate,
    name: &str,
    img: u8,
    initials: &str,
    amount: u64,
    status: PaymentStatus,
) -> Payment {
    Payment {
        id,
        invoice_id: invoice.into(),
        due_date: due,
        tenant: Tenant {
            name: name.into(),
            avatar: format!("https://i.pravatar.cc/150?img={}", img),
            initials: initials.into(),
        },
        amount,
        status,
    }
}

pub fn payments() -> Vec<Payment> {
    use PaymentStatus::*;
    vec![
        payment(1, "INV-2024-001", d(2024, 1, 20), "John Smith", 1, "JS", 1_200, Paid),
        payment(2, "INV-2024-002", d(2024, 1, 18), "Emily Davis", 2, "ED", 950, Overdue),
        payment(3, "INV-2024-003", d(2024, 1, 25), "Michael Brown", 4, "MB", 1_350, Paid),
        payment(4, "INV-2024-004", d(2024, 1, 22), "Sarah Wilson", 6, "SW", 1_100, Pending),
        payment(5, "INV-2024-005", d(2024, 1, 15), "David Lee", 7, "DL", 1_450, Overdue),
    ]
}

pub fn activities() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            kind: ActivityKind::PaymentReceived,
            description: "Payment received from John Smith".into(),
            amount: Some(1_200),
            timestamp: ts(2024, 1, 15, 14, 30),
            actor: "John Smith".into(),
        },
        Activity {
            id: 2,
            kind: ActivityKind::TenantAdded,
            description: "New tenant added to Unit 3A".into(),
            amount: None,
            timestamp: ts(2024, 1, 15, 11, 45),
            actor: "Emily Davis".into(),
        },
        Activity {
            id: 3,
            kind: ActivityKind::InvoiceSent,
            description: "Monthly invoice sent to all tenants".into(),
            amount: None,
            timestamp: ts(2024, 1, 15, 9, 0),
            actor: "System".into(),
        },
        Activity {
            id: 4,
            kind: ActivityKind::MaintenanceScheduled,
            description: "HVAC maintenance scheduled for Building A".into(),
            amount: None,
            timestamp: ts(2024, 1, 14, 16, 20),
            actor: "Mike Wilson".into(),
        },
    ]
}

pub fn kpi_data() -> KpiData {
    KpiData {
        total_revenue: KpiMetric {
            value: 125_000.0,
            delta: 12.5,
            is_positive: true,
        },
        total_invoices: KpiMetric {
            value: 48.0,
            delta: -2.1,
            is_positive: false,
        },
        total_tenants: KpiMetric {
            value: 156.0,
            delta: 8.3,
            is_positive: true,
        },
        on_time_payment_rate: KpiMetric {
            value: 94.2,
            delta: 1.8,
            is_positive: true,
        },
    }
}

fn series(points: &[(&str, u64)]) -> Vec<RevenuePoint> {
    points
        .iter()
        .map(|(label, revenue)| RevenuePoint {
            label: (*label).into(),
            revenue: *revenue,
        })
        .collect()
}

pub fn revenue_series(period: ChartPeriod) -> Vec<RevenuePoint> {
    match period {
        ChartPeriod::Daily => series(&[
            ("Mon", 1_200),
            ("Tue", 1_800),
            ("Wed", 1_500),
            ("Thu", 2_100),
            ("Fri", 2_400),
            ("Sat", 1_900),
            ("Sun", 1_600),
        ]),
        ChartPeriod::Weekly => series(&[
            ("Week 1", 8_500),
            ("Week 2", 9_200),
            ("Week 3", 7_800),
            ("Week 4", 10_100),
            ("Week 5", 9_600),
            ("Week 6", 11_200),
        ]),
        ChartPeriod::Monthly => series(&[
            ("Jan", 18_500),
            ("Feb", 22_300),
            ("Mar", 19_800),
            ("Apr", 25_100),
            ("May", 23_400),
            ("Jun", 27_600),
            ("Jul", 29_200),
            ("Aug", 31_800),
            ("Sep", 28_900),
            ("Oct", 33_400),
            ("Nov", 35_700),
            ("Dec", 38_200),
        ]),
        ChartPeriod::Yearly => series(&[
            ("2019", 245_000),
            ("2020", 198_000),
            ("2021", 287_000),
            ("2022", 312_000),
            ("2023", 356_000),
            ("2024", 389_000),
        ]),
    }
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            title: "New payment received".into(),
            message: "Payment of $1,200 received from John Doe".into(),
            timestamp: ts(2024, 1, 15, 10, 30),
            read: false,
        },
        Notification {
            id: 2,
            title: "Maintenance request".into(),
            message: "Tenant reported plumbing issue in Unit 4B".into(),
            timestamp: ts(2024, 1, 15, 9, 15),
            read: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_unit_invariants() {
        for p in properties() {
            assert!(p.units.occupied() <= p.units.total(), "{}", p.name);
            assert_eq!(
                p.units.vacant(),
                p.units.total() - p.units.occupied(),
                "{}",
                p.name
            );
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let props = properties();
        let mut ids: Vec<_> = props.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), props.len());
    }

    #[test]
    fn every_property_contact_is_in_the_roster() {
        for p in properties() {
            assert!(contact_by_id(p.manager.id).is_some());
            assert!(contact_by_id(p.owner.id).is_some());
            assert_eq!(p.manager.role, ContactRole::Manager);
            assert_eq!(p.owner.role, ContactRole::Owner);
        }
    }

    #[test]
    fn seeded_cities_come_from_the_city_roster() {
        for p in properties() {
            assert!(CITIES.contains(&p.city.as_str()), "{}", p.city);
        }
    }

    #[test]
    fn revenue_series_cover_all_periods() {
        assert_eq!(revenue_series(ChartPeriod::Daily).len(), 7);
        assert_eq!(revenue_series(ChartPeriod::Weekly).len(), 6);
        assert_eq!(revenue_series(ChartPeriod::Monthly).len(), 12);
        assert_eq!(revenue_series(ChartPeriod::Yearly).len(), 6);
    }
}
