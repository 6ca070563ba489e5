//! # Data Store
//!
//! The persistence seam. Everything above this layer talks to a
//! [`PropertyStore`] trait object or generic; the only implementation
//! shipped is [`memory::MockStore`], which serves the seeded fixture data
//! and applies mutations in memory. A real backend would slot in behind the
//! same trait.
//!
//! Mutating methods return the affected record (or a count for bulk
//! operations) so callers can report what actually changed.

pub mod memory;

pub use memory::MockStore;

use crate::error::Result;
use crate::model::{
    Activity, ChartPeriod, Contact, ContactId, KpiData, Notification, Payment, PaymentId,
    Property, PropertyId, RevenuePoint,
};
use crate::validation::PropertyForm;

pub trait PropertyStore {
    // Properties
    fn list_properties(&self) -> Result<Vec<Property>>;
    fn get_property(&self, id: PropertyId) -> Result<Property>;
    fn create_property(&mut self, form: &PropertyForm) -> Result<Property>;
    fn update_property(&mut self, id: PropertyId, form: &PropertyForm) -> Result<Property>;
    /// Archives every listed property that exists. Unknown ids are ignored;
    /// the return value is the number of records actually archived.
    fn archive_properties(&mut self, ids: &[PropertyId]) -> Result<usize>;
    /// Sends a payment reminder for each listed property that exists,
    /// returning the number of reminders sent.
    fn send_reminders(&mut self, ids: &[PropertyId]) -> Result<usize>;

    // Contacts
    fn contacts(&self) -> Result<Vec<Contact>>;
    fn get_contact(&self, id: ContactId) -> Result<Contact>;

    // Payments
    fn list_payments(&self) -> Result<Vec<Payment>>;
    fn get_payment(&self, id: PaymentId) -> Result<Payment>;
    fn mark_payment_paid(&mut self, id: PaymentId) -> Result<Payment>;

    // Dashboard
    fn kpi_data(&self) -> Result<KpiData>;
    fn revenue_chart(&self, period: ChartPeriod) -> Result<Vec<RevenuePoint>>;
    fn activities(&self) -> Result<Vec<Activity>>;

    // Notifications
    fn notifications(&self) -> Result<Vec<Notification>>;
    fn mark_notification_read(&mut self, id: u64) -> Result<()>;
    fn mark_all_notifications_read(&mut self) -> Result<()>;
}
