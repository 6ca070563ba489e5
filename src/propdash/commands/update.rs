use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PropdashError, Result};
use crate::model::PropertyId;
use crate::store::PropertyStore;
use crate::validation::PropertyForm;

/// Applies an edited form to an existing property.
pub fn run<S: PropertyStore>(
    store: &mut S,
    id: PropertyId,
    form: &PropertyForm,
) -> Result<CmdResult> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(PropdashError::InvalidForm(errors));
    }

    let updated = store.update_property(id, form)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Property \"{}\" updated",
        updated.name
    )));
    Ok(result.with_affected_properties(vec![updated]))
}

/// Pre-fills a form from an existing property, for edit flows.
pub fn form_for<S: PropertyStore>(store: &S, id: PropertyId) -> Result<PropertyForm> {
    let property = store.get_property(id)?;
    Ok(PropertyForm {
        name: property.name,
        address: property.address,
        city: property.city,
        thumbnail: property.thumbnail,
        total_units: i64::from(property.units.total()),
        occupied_units: i64::from(property.units.occupied()),
        monthly_revenue: property.monthly_revenue as i64,
        status: property.status,
        manager_id: Some(property.manager.id),
        owner_id: Some(property.owner.id),
        tags: property.tags,
        ..Default::default()
    })
}
