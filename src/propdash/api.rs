//! # API Facade
//!
//! [`Dashboard`] is the single entry point clients talk to. It owns the
//! store, the page state (filters, selection, view mode) and a small query
//! cache, and delegates the actual work to the command layer.
//!
//! The cache mirrors the data-fetching layer it replaces: reads are served
//! from cache when a tagged result is still valid, and mutations invalidate
//! the tags they touch. Archiving invalidates [`CacheTag::Properties`];
//! settling a payment invalidates [`CacheTag::Payments`]. Reminders and
//! exports change nothing server-side and leave the cache alone.
//!
//! Bulk actions run through [`Dashboard::dispatch_bulk`], which enforces the
//! page rules: an empty selection is rejected without touching the store,
//! one action runs at a time, and the selection is cleared only when the
//! action succeeds.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::commands::dashboard::DashboardData;
use crate::error::{PropdashError, Result};
use crate::filters::{filter_properties, PropertyFilters};
use crate::model::{
    ChartPeriod, Contact, Notification, Payment, PaymentId, Property, PropertyId,
};
use crate::state::{PropertiesState, ViewMode};
use crate::store::PropertyStore;
use crate::validation::PropertyForm;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTag {
    Properties,
    Payments,
}

/// Tag-invalidated read cache for the two list endpoints.
#[derive(Debug, Default)]
struct QueryCache {
    properties: Option<Vec<Property>>,
    payments: Option<Vec<Payment>>,
}

impl QueryCache {
    fn invalidate(&mut self, tag: CacheTag) {
        match tag {
            CacheTag::Properties => self.properties = None,
            CacheTag::Payments => self.payments = None,
        }
    }
}

/// A bulk action over the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkAction {
    Archive,
    SendReminders,
    ExportCsv { path: PathBuf },
}

/// What a successful bulk dispatch produced.
#[derive(Debug)]
pub struct BulkOutcome {
    pub affected: usize,
    pub messages: Vec<CmdMessage>,
    pub export_path: Option<PathBuf>,
}

pub struct Dashboard<S: PropertyStore> {
    store: S,
    state: PropertiesState,
    cache: QueryCache,
    bulk_in_flight: bool,
}

impl<S: PropertyStore> Dashboard<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: PropertiesState::default(),
            cache: QueryCache::default(),
            bulk_in_flight: false,
        }
    }

    pub fn state(&self) -> &PropertiesState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- Page state ---

    pub fn set_filters(&mut self, filters: PropertyFilters) {
        self.state.set_filters(filters);
    }

    pub fn toggle_selection(&mut self, id: PropertyId) {
        self.state.selection.toggle(id);
    }

    /// Selects every property matching the current filters.
    pub fn select_all_visible(&mut self) -> Result<()> {
        let ids: Vec<PropertyId> = self.visible_properties()?.iter().map(|p| p.id).collect();
        self.state.selection.select_all(ids);
        Ok(())
    }

    /// Replaces the selection with the given ids.
    pub fn select_properties<I: IntoIterator<Item = PropertyId>>(&mut self, ids: I) {
        self.state.selection.select_all(ids);
    }

    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
    }

    pub fn toggle_view(&mut self) {
        self.state.toggle_view();
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    // --- Reads ---

    /// The properties matching the current filters, served through the
    /// tagged cache.
    pub fn visible_properties(&mut self) -> Result<Vec<Property>> {
        if self.cache.properties.is_none() {
            self.cache.properties = Some(self.store.list_properties()?);
        }
        let all = self
            .cache
            .properties
            .as_deref()
            .unwrap_or_default();
        Ok(filter_properties(all, &self.state.filters))
    }

    pub fn payments(&mut self) -> Result<Vec<Payment>> {
        if self.cache.payments.is_none() {
            self.cache.payments = Some(self.store.list_payments()?);
        }
        Ok(self.cache.payments.clone().unwrap_or_default())
    }

    pub fn overview(&self, period: ChartPeriod) -> Result<DashboardData> {
        commands::dashboard::run(&self.store, period)
    }

    pub fn contacts(&self) -> Result<Vec<Contact>> {
        self.store.contacts()
    }

    pub fn notifications(&self) -> Result<Vec<Notification>> {
        self.store.notifications()
    }

    pub fn mark_notification_read(&mut self, id: u64) -> Result<()> {
        self.store.mark_notification_read(id)
    }

    pub fn mark_all_notifications_read(&mut self) -> Result<()> {
        self.store.mark_all_notifications_read()
    }

    pub fn receipt(&self, id: PaymentId) -> Result<String> {
        commands::payments::receipt(&self.store, id)
    }

    // --- Single-record mutations ---

    pub fn add_property(&mut self, form: &PropertyForm) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.store, form)?;
        self.cache.invalidate(CacheTag::Properties);
        Ok(result)
    }

    pub fn edit_property(&mut self, id: PropertyId, form: &PropertyForm) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.store, id, form)?;
        self.cache.invalidate(CacheTag::Properties);
        Ok(result)
    }

    pub fn edit_form(&self, id: PropertyId) -> Result<PropertyForm> {
        commands::update::form_for(&self.store, id)
    }

    pub fn mark_payment_paid(&mut self, id: PaymentId) -> Result<CmdResult> {
        let result = commands::payments::pay(&mut self.store, id)?;
        self.cache.invalidate(CacheTag::Payments);
        Ok(result)
    }

    // --- Bulk actions ---

    /// Runs `action` over the current selection.
    ///
    /// An empty selection fails with [`PropdashError::EmptySelection`]
    /// before any store call. On success the selection is cleared and the
    /// tags the action touched are invalidated; on failure all page state
    /// is left exactly as it was.
    pub fn dispatch_bulk(&mut self, action: BulkAction) -> Result<BulkOutcome> {
        if self.bulk_in_flight {
            return Err(PropdashError::ActionInFlight);
        }
        let ids = self.state.selection.ids();
        if ids.is_empty() {
            return Err(PropdashError::EmptySelection);
        }

        self.bulk_in_flight = true;
        let dispatched = self.run_bulk(&action, &ids);
        self.bulk_in_flight = false;

        let result = dispatched?;
        self.state.selection.clear();
        if matches!(action, BulkAction::Archive) {
            self.cache.invalidate(CacheTag::Properties);
        }
        Ok(BulkOutcome {
            affected: result.affected_properties.len(),
            export_path: result.export_path,
            messages: result.messages,
        })
    }

    fn run_bulk(&mut self, action: &BulkAction, ids: &[PropertyId]) -> Result<CmdResult> {
        match action {
            BulkAction::Archive => commands::archive::run(&mut self.store, ids),
            BulkAction::SendReminders => commands::remind::run(&mut self.store, ids),
            BulkAction::ExportCsv { path } => commands::export::run(&self.store, ids, path),
        }
    }
}
