use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PropdashError, Result};
use crate::model::{Property, PropertyId};
use crate::store::PropertyStore;
use std::fs;
use std::path::Path;

/// Column order is part of the export contract; consumers key on it.
pub const CSV_HEADER: &str = "ID,Name,Address,City,Status,TotalUnits,OccupiedUnits,VacantUnits,MonthlyRevenue,LastPaymentDate,Manager,Owner,Tags";

/// Free-text columns are always quoted, with embedded quotes doubled.
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn csv_row(property: &Property) -> String {
    let tags = property
        .tags
        .iter()
        .map(|t| t.token())
        .collect::<Vec<_>>()
        .join(",");
    let last_payment = property
        .last_payment_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    [
        property.id.to_string(),
        quoted(&property.name),
        quoted(&property.address),
        property.city.clone(),
        property.status.label().to_string(),
        property.units.total().to_string(),
        property.units.occupied().to_string(),
        property.units.vacant().to_string(),
        property.monthly_revenue.to_string(),
        last_payment,
        quoted(&property.manager.name),
        quoted(&property.owner.name),
        quoted(&tags),
    ]
    .join(",")
}

/// Renders the CSV document for a set of properties, header included.
pub fn render_csv(properties: &[Property]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for property in properties {
        out.push_str(&csv_row(property));
        out.push('\n');
    }
    out
}

/// Exports the selected properties to a CSV file at `path`.
pub fn run<S: PropertyStore>(
    store: &S,
    ids: &[PropertyId],
    path: &Path,
) -> Result<CmdResult> {
    if ids.is_empty() {
        return Err(PropdashError::EmptySelection);
    }

    let mut exported = Vec::new();
    let mut missing = 0;
    for id in ids {
        match store.get_property(*id) {
            Ok(property) => exported.push(property),
            Err(PropdashError::PropertyNotFound(_)) => missing += 1,
            Err(e) => return Err(e),
        }
    }

    fs::write(path, render_csv(&exported))?;

    let mut result = CmdResult::default().with_affected_properties(exported);
    result.export_path = Some(path.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "Exported {} propert{} to {}",
        result.affected_properties.len(),
        if result.affected_properties.len() == 1 {
            "y"
        } else {
            "ies"
        },
        path.display()
    )));
    if missing > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} selected id{} not found",
            missing,
            if missing == 1 { " was" } else { "s were" }
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;
    use tempfile::tempdir;

    #[test]
    fn renders_the_contract_row_for_the_first_property() {
        let store = MockStore::seeded();
        let props = vec![store.get_property(1).unwrap()];
        let csv = render_csv(&props);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some(
                "1,\"Sunset Apartments\",\"123 Main Street, New York, NY 10001\",New York,Active,24,22,2,28800,2024-01-15,\"Sarah Johnson\",\"Michael Chen\",\"luxury,parking,gym\""
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn missing_payment_date_renders_empty() {
        let store = MockStore::seeded();
        let props = vec![store.get_property(4).unwrap()];
        let row = render_csv(&props).lines().nth(1).unwrap().to_string();
        assert!(row.contains(",0,,\"James Rodriguez\""));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let store = MockStore::seeded();
        let mut property = store.get_property(1).unwrap();
        property.name = "The \"Grand\" Tower".into();
        let row = render_csv(&[property]).lines().nth(1).unwrap().to_string();
        assert!(row.contains("\"The \"\"Grand\"\" Tower\""));
    }

    #[test]
    fn writes_selected_rows_to_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("properties.csv");
        let store = MockStore::seeded();

        let result = run(&store, &[1, 3], &path).unwrap();
        assert_eq!(result.export_path.as_deref(), Some(path.as_path()));
        assert_eq!(result.affected_properties.len(), 2);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 3);
        assert!(written.starts_with(CSV_HEADER));
        assert!(written.contains("Garden View Complex"));
    }

    #[test]
    fn empty_selection_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("properties.csv");
        let store = MockStore::seeded();
        assert!(matches!(
            run(&store, &[], &path),
            Err(PropdashError::EmptySelection)
        ));
        assert!(!path.exists());
    }

    #[test]
    fn unknown_ids_are_skipped_with_a_warning() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("properties.csv");
        let store = MockStore::seeded();
        let result = run(&store, &[1, 999], &path).unwrap();
        assert_eq!(result.affected_properties.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("1 selected id was not found")));
    }
}
