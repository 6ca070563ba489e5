//! End-to-end exercise of the selection / bulk-action lifecycle against the
//! library facade, covering the full flow a UI client would drive.

use propdash::api::{BulkAction, Dashboard};
use propdash::error::PropdashError;
use propdash::filters::{PropertyFilters, StatusFilter, VacancyFilter};
use propdash::model::PropertyStatus;
use propdash::store::MockStore;
use tempfile::tempdir;

#[test]
fn select_archive_and_observe_the_refreshed_list() {
    let mut dash = Dashboard::new(MockStore::seeded());

    // Pick two rows off the unfiltered list.
    dash.toggle_selection(1);
    dash.toggle_selection(4);
    assert_eq!(dash.state().selection.len(), 2);

    let outcome = dash.dispatch_bulk(BulkAction::Archive).unwrap();
    assert_eq!(outcome.affected, 2);
    assert!(dash.state().selection.is_empty());

    // The next read reflects the mutation.
    let visible = dash.visible_properties().unwrap();
    let archived: Vec<u64> = visible
        .iter()
        .filter(|p| p.status == PropertyStatus::Archived)
        .map(|p| p.id)
        .collect();
    assert_eq!(archived, vec![1, 4, 5]);
}

#[test]
fn filter_narrow_select_all_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vacant.csv");
    let mut dash = Dashboard::new(MockStore::seeded());

    dash.set_filters(PropertyFilters {
        status: StatusFilter::Only(PropertyStatus::Active),
        vacancy: VacancyFilter::PartiallyVacant,
        ..Default::default()
    });
    dash.select_all_visible().unwrap();
    assert_eq!(dash.state().selection.ids(), vec![1, 2, 3, 6]);

    let outcome = dash
        .dispatch_bulk(BulkAction::ExportCsv { path: path.clone() })
        .unwrap();
    assert_eq!(outcome.affected, 4);

    let csv = std::fs::read_to_string(&path).unwrap();
    assert_eq!(csv.lines().count(), 5);
    assert!(csv.contains("\"Downtown Lofts\""));
    assert!(!csv.contains("Riverside Towers"));
}

#[test]
fn a_filter_change_mid_flow_drops_the_selection() {
    let mut dash = Dashboard::new(MockStore::seeded());
    dash.toggle_selection(2);
    dash.toggle_selection(3);

    dash.set_filters(PropertyFilters {
        search: "oceanview".into(),
        ..Default::default()
    });

    // The stale selection is gone, so the bulk action is rejected locally.
    assert!(matches!(
        dash.dispatch_bulk(BulkAction::SendReminders),
        Err(PropdashError::EmptySelection)
    ));

    // Re-selecting from the narrowed list works.
    dash.select_all_visible().unwrap();
    let outcome = dash.dispatch_bulk(BulkAction::SendReminders).unwrap();
    assert_eq!(outcome.affected, 1);
    assert_eq!(dash.store().reminders_sent(), &[6]);
}
