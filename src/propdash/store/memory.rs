//! In-memory [`PropertyStore`] seeded from the fixture catalog. This is the
//! backing store for the whole application as well as for tests.

use crate::error::{PropdashError, Result};
use crate::fixtures;
use crate::model::{
    Activity, ChartPeriod, Contact, ContactId, KpiData, Notification, Payment, PaymentId,
    PaymentStatus, Property, PropertyId, RevenuePoint, UnitCounts,
};
use crate::store::PropertyStore;
use crate::validation::PropertyForm;
use chrono::Utc;

#[derive(Debug, Clone)]
pub struct MockStore {
    properties: Vec<Property>,
    contacts: Vec<Contact>,
    payments: Vec<Payment>,
    activities: Vec<Activity>,
    notifications: Vec<Notification>,
    kpi: KpiData,
    /// Property ids a reminder was sent for, in send order. Kept so callers
    /// (and tests) can observe reminder traffic.
    reminders_sent: Vec<PropertyId>,
}

impl MockStore {
    /// A store seeded with the full fixture data set.
    pub fn seeded() -> Self {
        Self {
            properties: fixtures::properties(),
            contacts: fixtures::CONTACTS.clone(),
            payments: fixtures::payments(),
            activities: fixtures::activities(),
            notifications: fixtures::notifications(),
            kpi: fixtures::kpi_data(),
            reminders_sent: Vec::new(),
        }
    }

    /// An empty store. Useful for tests that want full control of contents.
    pub fn empty() -> Self {
        Self {
            properties: Vec::new(),
            contacts: fixtures::CONTACTS.clone(),
            payments: Vec::new(),
            activities: Vec::new(),
            notifications: Vec::new(),
            kpi: fixtures::kpi_data(),
            reminders_sent: Vec::new(),
        }
    }

    pub fn reminders_sent(&self) -> &[PropertyId] {
        &self.reminders_sent
    }

    /// Millisecond timestamp, bumped past any existing id so two creations
    /// within the same millisecond still get distinct ids.
    fn next_property_id(&self) -> PropertyId {
        let mut id = Utc::now().timestamp_millis().max(1) as PropertyId;
        while self.properties.iter().any(|p| p.id == id) {
            id += 1;
        }
        id
    }

    fn property_from_form(&self, id: PropertyId, form: &PropertyForm) -> Result<Property> {
        let manager_id = form
            .manager_id
            .ok_or(PropdashError::ContactNotFound(0))?;
        let owner_id = form.owner_id.ok_or(PropdashError::ContactNotFound(0))?;
        let manager = self.get_contact(manager_id)?;
        let owner = self.get_contact(owner_id)?;
        Ok(Property {
            id,
            name: form.name.trim().to_string(),
            address: form.address.trim().to_string(),
            city: form.city.trim().to_string(),
            thumbnail: form.thumbnail.clone(),
            units: UnitCounts::new(form.total_units as u32, form.occupied_units as u32),
            monthly_revenue: form.monthly_revenue as u64,
            last_payment_date: None,
            manager,
            owner,
            status: form.status,
            tags: form.tags.clone(),
        })
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl PropertyStore for MockStore {
    fn list_properties(&self) -> Result<Vec<Property>> {
        Ok(self.properties.clone())
    }

    fn get_property(&self, id: PropertyId) -> Result<Property> {
        self.properties
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PropdashError::PropertyNotFound(id))
    }

    fn create_property(&mut self, form: &PropertyForm) -> Result<Property> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(PropdashError::InvalidForm(errors));
        }
        let property = self.property_from_form(self.next_property_id(), form)?;
        self.properties.push(property.clone());
        Ok(property)
    }

    fn update_property(&mut self, id: PropertyId, form: &PropertyForm) -> Result<Property> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(PropdashError::InvalidForm(errors));
        }
        let index = self
            .properties
            .iter()
            .position(|p| p.id == id)
            .ok_or(PropdashError::PropertyNotFound(id))?;
        let mut updated = self.property_from_form(id, form)?;
        // Payment history survives an edit.
        updated.last_payment_date = self.properties[index].last_payment_date;
        self.properties[index] = updated.clone();
        Ok(updated)
    }

    fn archive_properties(&mut self, ids: &[PropertyId]) -> Result<usize> {
        let mut archived = 0;
        for property in &mut self.properties {
            if ids.contains(&property.id)
                && property.status != crate::model::PropertyStatus::Archived
            {
                property.status = crate::model::PropertyStatus::Archived;
                archived += 1;
            }
        }
        Ok(archived)
    }

    fn send_reminders(&mut self, ids: &[PropertyId]) -> Result<usize> {
        let mut sent = 0;
        for id in ids {
            if self.properties.iter().any(|p| p.id == *id) {
                self.reminders_sent.push(*id);
                sent += 1;
            }
        }
        Ok(sent)
    }

    fn contacts(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn get_contact(&self, id: ContactId) -> Result<Contact> {
        self.contacts
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(PropdashError::ContactNotFound(id))
    }

    fn list_payments(&self) -> Result<Vec<Payment>> {
        Ok(self.payments.clone())
    }

    fn get_payment(&self, id: PaymentId) -> Result<Payment> {
        self.payments
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PropdashError::PaymentNotFound(id))
    }

    fn mark_payment_paid(&mut self, id: PaymentId) -> Result<Payment> {
        let payment = self
            .payments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PropdashError::PaymentNotFound(id))?;
        payment.status = PaymentStatus::Paid;
        Ok(payment.clone())
    }

    fn kpi_data(&self) -> Result<KpiData> {
        Ok(self.kpi)
    }

    fn revenue_chart(&self, period: ChartPeriod) -> Result<Vec<RevenuePoint>> {
        Ok(fixtures::revenue_series(period))
    }

    fn activities(&self) -> Result<Vec<Activity>> {
        Ok(self.activities.clone())
    }

    fn notifications(&self) -> Result<Vec<Notification>> {
        Ok(self.notifications.clone())
    }

    fn mark_notification_read(&mut self, id: u64) -> Result<()> {
        for n in &mut self.notifications {
            if n.id == id {
                n.read = true;
            }
        }
        Ok(())
    }

    fn mark_all_notifications_read(&mut self) -> Result<()> {
        for n in &mut self.notifications {
            n.read = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertyStatus, PropertyTag};

    fn valid_form() -> PropertyForm {
        PropertyForm {
            name: "Lakeside Commons".into(),
            address: "42 Shore Drive, Denver, CO 80014".into(),
            city: "Denver".into(),
            total_units: 16,
            occupied_units: 12,
            monthly_revenue: 19_000,
            manager_id: Some(1),
            owner_id: Some(2),
            tags: vec![PropertyTag::Parking],
            ..Default::default()
        }
    }

    #[test]
    fn seeded_store_serves_the_catalog() {
        let store = MockStore::seeded();
        let props = store.list_properties().unwrap();
        assert_eq!(props.len(), 6);
        assert_eq!(store.get_property(1).unwrap().name, "Sunset Apartments");
        assert!(matches!(
            store.get_property(999),
            Err(PropdashError::PropertyNotFound(999))
        ));
    }

    #[test]
    fn create_assigns_fresh_id_and_resolves_contacts() {
        let mut store = MockStore::seeded();
        let created = store.create_property(&valid_form()).unwrap();
        assert!(store.list_properties().unwrap().len() == 7);
        assert!(created.id > 6);
        assert_eq!(created.manager.name, "Sarah Johnson");
        assert_eq!(created.owner.name, "Michael Chen");
        assert_eq!(created.units.vacant(), 4);
        assert_eq!(created.last_payment_date, None);
    }

    #[test]
    fn create_rejects_invalid_forms() {
        let mut store = MockStore::seeded();
        let mut form = valid_form();
        form.name.clear();
        let err = store.create_property(&form).unwrap_err();
        assert!(matches!(err, PropdashError::InvalidForm(_)));
        assert_eq!(store.list_properties().unwrap().len(), 6);
    }

    #[test]
    fn create_rejects_unit_counts_beyond_u32() {
        let mut store = MockStore::seeded();
        let mut form = valid_form();
        form.total_units = i64::from(u32::MAX) + 2;
        form.occupied_units = 1;
        assert!(matches!(
            store.create_property(&form),
            Err(PropdashError::InvalidForm(_))
        ));
        assert_eq!(store.list_properties().unwrap().len(), 6);
    }

    #[test]
    fn create_rejects_unknown_contacts() {
        let mut store = MockStore::seeded();
        let mut form = valid_form();
        form.manager_id = Some(999);
        assert!(matches!(
            store.create_property(&form),
            Err(PropdashError::ContactNotFound(999))
        ));
    }

    #[test]
    fn update_replaces_fields_but_keeps_payment_history() {
        let mut store = MockStore::seeded();
        let mut form = valid_form();
        form.name = "Sunset Apartments II".into();
        let updated = store.update_property(1, &form).unwrap();
        assert_eq!(updated.name, "Sunset Apartments II");
        // id 1 had a last payment on record; it survives the edit.
        assert!(updated.last_payment_date.is_some());
        assert_eq!(store.get_property(1).unwrap().name, "Sunset Apartments II");
    }

    #[test]
    fn update_missing_property_fails() {
        let mut store = MockStore::seeded();
        assert!(matches!(
            store.update_property(404, &valid_form()),
            Err(PropdashError::PropertyNotFound(404))
        ));
    }

    #[test]
    fn archive_counts_only_real_matches() {
        let mut store = MockStore::seeded();
        // id 5 is already archived, id 999 does not exist.
        let archived = store.archive_properties(&[1, 5, 999]).unwrap();
        assert_eq!(archived, 1);
        assert_eq!(store.get_property(1).unwrap().status, PropertyStatus::Archived);
    }

    #[test]
    fn reminders_skip_unknown_ids() {
        let mut store = MockStore::seeded();
        let sent = store.send_reminders(&[2, 999, 4]).unwrap();
        assert_eq!(sent, 2);
        assert_eq!(store.reminders_sent(), &[2, 4]);
    }

    #[test]
    fn mark_payment_paid_transitions_status() {
        let mut store = MockStore::seeded();
        assert_eq!(store.get_payment(2).unwrap().status, PaymentStatus::Overdue);
        let paid = store.mark_payment_paid(2).unwrap();
        assert_eq!(paid.status, PaymentStatus::Paid);
        assert_eq!(store.get_payment(2).unwrap().status, PaymentStatus::Paid);
    }

    #[test]
    fn notifications_mark_read() {
        let mut store = MockStore::seeded();
        assert!(store.notifications().unwrap().iter().all(|n| !n.read));
        store.mark_notification_read(1).unwrap();
        let after: Vec<bool> = store
            .notifications()
            .unwrap()
            .iter()
            .map(|n| n.read)
            .collect();
        assert_eq!(after, vec![true, false]);
        store.mark_all_notifications_read().unwrap();
        assert!(store.notifications().unwrap().iter().all(|n| n.read));
    }
}
