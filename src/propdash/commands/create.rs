use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PropdashError, Result};
use crate::store::PropertyStore;
use crate::validation::PropertyForm;

/// Creates a property from a form. Validation is fail-closed: an invalid
/// form is rejected here and never reaches the store.
pub fn run<S: PropertyStore>(store: &mut S, form: &PropertyForm) -> Result<CmdResult> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(PropdashError::InvalidForm(errors));
    }

    let created = store.create_property(form)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Property \"{}\" added",
        created.name
    )));
    Ok(result.with_affected_properties(vec![created]))
}
